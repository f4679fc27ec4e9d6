use dioxus::prelude::*;

#[component]
pub fn Header(title: String, query: String, on_search: EventHandler<FormEvent>) -> Element {
    rsx! {
        header { class: "header glass",
            div { class: "header-top",
                h1 { class: "title", span { class: "logo float", "✦" } "{title}" }
                nav { class: "nav",
                    a { href: "#", "Главная" }
                    a { href: "#", "Об авторе" }
                    a { href: "#", "Контакты" }
                }
            }
            div { class: "search",
                span { class: "search-icon", "🔍" }
                input {
                    class: "text search-input",
                    r#type: "search",
                    placeholder: "Поиск по статьям...",
                    value: "{query}",
                    oninput: move |e| on_search.call(e),
                }
            }
        }
    }
}
