use std::sync::LazyLock;

use chrono::NaiveDate;
use tracing::error;

use crate::models::Article;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

static ARTICLES: LazyLock<Vec<Article>> = LazyLock::new(|| {
    [
        article(
            1,
            "Будущее веб-дизайна в стиле Frutiger Aero",
            "Исследуем возвращение эстетики прозрачных интерфейсов и жидкого стекла в современном дизайне",
            "Дизайн",
            &["UI/UX", "Тренды", "Frutiger"],
            "2025-11-20",
            4.8,
        ),
        article(
            2,
            "Создание glassmorphism эффектов с помощью CSS",
            "Пошаговое руководство по созданию эффекта матового стекла используя backdrop-filter",
            "Разработка",
            &["CSS", "Tutorial", "Glassmorphism"],
            "2025-11-18",
            4.5,
        ),
        article(
            3,
            "История интерфейсов: от Windows Vista до сегодняшнего дня",
            "Как эволюционировали прозрачные интерфейсы и почему они снова в тренде",
            "История",
            &["Интерфейсы", "Windows", "Ретро"],
            "2025-11-15",
            4.9,
        ),
        article(
            4,
            "Анимации и микроинтеракции в современных SPA",
            "Разбираем лучшие практики создания плавных переходов и интерактивных элементов",
            "Разработка",
            &["JavaScript", "Animation", "UX"],
            "2025-11-12",
            4.6,
        ),
    ]
    .into_iter()
    .filter_map(|parsed| {
        parsed
            .map_err(|e| error!(target: "catalog", "skipping article: {e}"))
            .ok()
    })
    .collect()
});

fn article(
    id: u64,
    title: &str,
    excerpt: &str,
    category: &str,
    tags: &[&str],
    date: &str,
    rating: f32,
) -> Result<Article, chrono::ParseError> {
    Ok(Article {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d")?,
        rating,
        image: PLACEHOLDER_IMAGE.to_string(),
    })
}

/// The fixed article store, built on first access and never mutated.
pub fn articles() -> &'static [Article] {
    &ARTICLES
}
