use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Window/tab title, viewport and stylesheet.
#[component]
pub fn Head(title: String) -> Element {
    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
    }
}
