use dioxus::prelude::*;

use crate::filter::filter_articles;
use crate::models::{Article, ALL_CATEGORIES};
use crate::subscription::Acknowledgement;

/// Transient page state: search text, chosen category and the email typed
/// into the subscription form. Lives for one session only.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    search_query: String,
    selected_category: String,
    subscription_email: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            subscription_email: String::new(),
        }
    }
}

impl ViewState {
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn subscription_email(&self) -> &str {
        &self.subscription_email
    }

    pub fn set_search_query(&mut self, value: String) {
        self.search_query = value;
    }

    /// Unknown categories are accepted and simply filter everything out.
    pub fn set_selected_category(&mut self, value: String) {
        self.selected_category = value;
    }

    pub fn set_subscription_email(&mut self, value: String) {
        self.subscription_email = value;
    }

    /// Articles to display for the current query and category.
    pub fn visible_articles(&self, articles: &[Article]) -> Vec<Article> {
        filter_articles(&self.search_query, &self.selected_category, articles)
    }

    /// Takes the typed email for acknowledgement and clears the field.
    pub fn submit_subscription(&mut self) -> Acknowledgement {
        Acknowledgement::new(std::mem::take(&mut self.subscription_email))
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub view: Signal<ViewState>,
}

#[derive(Clone, Copy)]
pub struct FlashState {
    pub msg: Signal<Option<String>>,
}
