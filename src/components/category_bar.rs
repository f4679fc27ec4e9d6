use dioxus::prelude::*;

use crate::models::CATEGORIES;

#[component]
pub fn CategoryBar(active: String, on_select: EventHandler<String>) -> Element {
    rsx! {
        div { class: "tabs fade-in",
            for cat in CATEGORIES {
                button {
                    key: "{cat}",
                    class: if active == cat { "tab active" } else { "tab" },
                    onclick: move |_| on_select.call(cat.to_string()),
                    "{cat}"
                }
            }
        }
    }
}
