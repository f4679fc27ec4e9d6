//! Newsletter subscription stub. Nothing is sent or stored; submitting only
//! produces a confirmation for the user.

use tracing::info;

/// Confirmation produced by a subscription submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgement {
    email: String,
}

impl Acknowledgement {
    pub fn new(email: String) -> Self {
        Self { email }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> String {
        format!("Спасибо за подписку! Письма будут приходить на {}", self.email)
    }
}

/// Shows the acknowledgement in a native dialog and blocks until dismissed.
#[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
pub fn show_blocking(ack: &Acknowledgement) {
    info!(target: "subscription", "showing confirmation dialog");
    rfd::MessageDialog::new()
        .set_title("Подписка")
        .set_description(ack.message())
        .set_level(rfd::MessageLevel::Info)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Where a confirmation is shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Blocking native dialog (desktop builds).
    Dialog,
    /// In-page flash banner.
    Banner,
}

impl Delivery {
    pub const fn for_build() -> Self {
        if cfg!(all(feature = "desktop", not(target_arch = "wasm32"))) {
            Delivery::Dialog
        } else {
            Delivery::Banner
        }
    }
}

/// Presents `ack` through `delivery`. Returns the banner text when the
/// confirmation has to be rendered by the page.
pub fn deliver(ack: &Acknowledgement, delivery: Delivery) -> Option<String> {
    log_submission(ack);
    match delivery {
        Delivery::Dialog => {
            #[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
            show_blocking(ack);
            None
        }
        Delivery::Banner => Some(ack.message()),
    }
}

/// Logs a submission without recording the address itself.
fn log_submission(ack: &Acknowledgement) {
    info!(target: "subscription", email_len = ack.email().chars().count(), "subscription submitted");
}
