use tracing::Level;

pub fn parse_level(s: &str) -> Level {
    match s.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(level: &str) {
    if let Err(e) = dioxus::logger::init(parse_level(level)) {
        eprintln!("[Logging] init skipped: {e}");
    }
}
