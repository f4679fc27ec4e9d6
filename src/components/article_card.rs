use dioxus::prelude::*;

use crate::format::{animation_delay, format_date, format_rating, star_kinds};
use crate::models::{Article, Star};

#[component]
pub fn ArticleCard(article: Article, index: usize) -> Element {
    let date = format_date(article.date);
    let rating = format_rating(article.rating);
    let delay = animation_delay(index);
    rsx! {
        div { class: "card glass scale-in", style: "{delay}",
            // image placeholder
            div { class: "card-image", span { class: "image-icon", "🖼" } }
            div { class: "card-body",
                div { class: "row",
                    span { class: "badge", "{article.category}" }
                    span { class: "meta", "📅 {date}" }
                }
                h2 { class: "card-title", "{article.title}" }
                p { class: "meta excerpt", "{article.excerpt}" }
                div { class: "tags",
                    for tag in article.tags.iter() {
                        span { key: "{tag}", class: "badge badge-outline", "#{tag}" }
                    }
                }
                div { class: "stars",
                    for (i, star) in star_kinds(article.rating).into_iter().enumerate() {
                        span { key: "{i}", class: "star", if star == Star::Full { "★" } else { "⯨" } }
                    }
                    span { class: "rating", "{rating}" }
                }
            }
            div { class: "card-footer",
                button { class: "btn btn-primary grow", "Читать" }
                button { class: "btn btn-ghost btn-icon", "⤴" }
                button { class: "btn btn-ghost btn-icon", "🔖" }
            }
        }
    }
}
