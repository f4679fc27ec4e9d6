//! Search and category filtering over the article store.

use crate::models::{Article, ALL_CATEGORIES};

/// Whether `article` passes both the category and the text test.
///
/// Category comparison is exact and case-sensitive, with [`ALL_CATEGORIES`]
/// as a wildcard. The query is matched as a lowercase substring of the title
/// or excerpt; it is not trimmed.
pub fn matches(article: &Article, query: &str, category: &str) -> bool {
    let category_ok = category == ALL_CATEGORIES || article.category == category;
    if !category_ok {
        return false;
    }
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    article.title.to_lowercase().contains(&needle)
        || article.excerpt.to_lowercase().contains(&needle)
}

/// Articles matching `query` and `category`, in their original order.
pub fn filter_articles(query: &str, category: &str, articles: &[Article]) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| matches(a, query, category))
        .cloned()
        .collect()
}
