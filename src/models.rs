use chrono::NaiveDate;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "Все";

/// Categories offered by the selector, in display order.
pub const CATEGORIES: [&str; 5] = [ALL_CATEGORIES, "Дизайн", "Разработка", "История", "Тренды"];

#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub rating: f32,
    pub image: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
}
