use dioxus::prelude::*;

#[component]
pub fn SubscribeForm(
    value: String,
    on_input: EventHandler<FormEvent>,
    on_submit: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "subscribe glass fade-in",
            div { class: "subscribe-head",
                div { class: "bell float", "🔔" }
                h2 { "Подпишитесь на рассылку" }
                p { class: "meta", "Получайте новые статьи прямо на почту" }
            }
            form {
                class: "add",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    on_submit.call(e);
                },
                input {
                    class: "text",
                    r#type: "email",
                    placeholder: "Ваш email",
                    required: true,
                    value: "{value}",
                    oninput: move |e| on_input.call(e),
                }
                button { class: "btn btn-primary", r#type: "submit", "Подписаться" }
            }
        }
    }
}
