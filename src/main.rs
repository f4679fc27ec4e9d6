use aero_blog::{config::load_config, logging, App};
use tracing::{debug, info, warn};

fn main() {
    let loaded = load_config();
    let config = match &loaded {
        Ok(Some((_, cfg))) => cfg.clone(),
        _ => Default::default(),
    };
    logging::init(&config.log_level);
    match loaded {
        Ok(Some((path, _))) => info!(target: "config", "loaded {}", path.display()),
        Ok(None) => debug!(target: "config", "no config file, using defaults"),
        Err(e) => warn!(target: "config", "{e}; using defaults"),
    }

    info!(target: "app", "launching {}", config.site_title);
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
