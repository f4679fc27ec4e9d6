//! Behaviour of the search/category filter and the view state over the
//! bundled article store.

use aero_blog::catalog::articles;
use aero_blog::filter::{filter_articles, matches};
use aero_blog::models::{Article, ALL_CATEGORIES};
use aero_blog::state::ViewState;

fn ids(list: &[Article]) -> Vec<u64> {
    list.iter().map(|a| a.id).collect()
}

/// Indices of `sub` within `full`, which must be increasing for an
/// order-preserving subsequence.
fn positions(sub: &[Article], full: &[Article]) -> Vec<usize> {
    sub.iter()
        .map(|a| full.iter().position(|b| b.id == a.id).unwrap())
        .collect()
}

const QUERIES: [&str; 8] = ["", "css", "ИНТЕРФЕЙС", "glass", " ", "в", "Frutiger Aero", "zzz"];

#[test]
fn wildcard_with_empty_query_is_identity() {
    assert_eq!(filter_articles("", ALL_CATEGORIES, articles()), articles().to_vec());
}

#[test]
fn category_filter_is_exact() {
    for cat in ["Дизайн", "Разработка", "История"] {
        let got = filter_articles("", cat, articles());
        let expected: Vec<Article> = articles()
            .iter()
            .filter(|a| a.category == cat)
            .cloned()
            .collect();
        assert_eq!(got, expected, "category {cat}");
        assert!(!got.is_empty());
    }
}

#[test]
fn any_title_substring_in_any_case_matches() {
    for a in articles() {
        let chars: Vec<char> = a.title.chars().collect();
        for (start, len) in [(0, 3), (2, 5), (chars.len() - 4, 4)] {
            let piece: String = chars[start..start + len].iter().collect();
            for q in [piece.clone(), piece.to_uppercase(), piece.to_lowercase()] {
                assert!(
                    matches(a, &q, ALL_CATEGORIES),
                    "{q:?} should match article {}",
                    a.id
                );
                assert_eq!(filter_articles(&q, ALL_CATEGORIES, std::slice::from_ref(a)).len(), 1);
            }
        }
    }
}

#[test]
fn absent_text_or_category_yields_nothing() {
    assert!(filter_articles("квантовая гравитация", ALL_CATEGORIES, articles()).is_empty());
    assert!(filter_articles("", "Кулинария", articles()).is_empty());
}

#[test]
fn results_keep_store_order() {
    for q in QUERIES {
        for cat in aero_blog::models::CATEGORIES {
            let got = filter_articles(q, cat, articles());
            let pos = positions(&got, articles());
            assert!(pos.windows(2).all(|w| w[0] < w[1]), "{q:?}/{cat}");
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    for q in QUERIES {
        for cat in aero_blog::models::CATEGORIES {
            let once = filter_articles(q, cat, articles());
            let twice = filter_articles(q, cat, &once);
            assert_eq!(once, twice, "{q:?}/{cat}");
        }
    }
}

#[test]
fn scenario_all_articles() {
    assert_eq!(ids(&filter_articles("", "Все", articles())), vec![1, 2, 3, 4]);
}

#[test]
fn scenario_css_query() {
    assert_eq!(ids(&filter_articles("css", "Все", articles())), vec![2]);
}

#[test]
fn scenario_history_category() {
    assert_eq!(ids(&filter_articles("", "История", articles())), vec![3]);
}

#[test]
fn scenario_text_and_category_disagree() {
    assert!(filter_articles("glass", "Дизайн", articles()).is_empty());
}

#[test]
fn scenario_subscription_resets_email() {
    let mut state = ViewState::default();
    state.set_subscription_email("a@b.com".to_string());
    let ack = state.submit_subscription();
    assert!(ack.message().contains("a@b.com"));
    assert_eq!(state.subscription_email(), "");
}

#[test]
fn store_is_untouched_by_filtering() {
    let before = articles().to_vec();
    let _ = filter_articles("css", "Разработка", articles());
    let mut state = ViewState::default();
    state.set_search_query("glass".into());
    let _ = state.visible_articles(articles());
    assert_eq!(articles(), before.as_slice());
}
