use dioxus::prelude::*;

#[component]
pub fn Footer(title: String) -> Element {
    rsx! {
        footer { class: "footer glass",
            div { class: "row between",
                span { class: "footer-title", "✦ {title} © 2025" }
                div { class: "row",
                    for (label, icon) in [("Twitter", "𝕏"), ("Facebook", "f"), ("Instagram", "◎"), ("LinkedIn", "in")] {
                        button { key: "{label}", class: "btn btn-ghost btn-icon", title: "{label}", "{icon}" }
                    }
                }
            }
        }
    }
}
