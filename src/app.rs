use dioxus::prelude::*;
use tracing::debug;

use crate::app_assets::Head;
use crate::catalog::articles;
use crate::components::{
    article_card::ArticleCard, category_bar::CategoryBar, footer::Footer, header::Header,
    subscribe_form::SubscribeForm,
};
use crate::config::BlogConfig;
use crate::state::{AppState, FlashState, ViewState};
use crate::subscription::{self, Delivery};

#[component]
pub fn App() -> Element {
    let view = use_signal(ViewState::default);
    let msg = use_signal(|| Option::<String>::None);
    use_context_provider(|| AppState { view });
    use_context_provider(|| FlashState { msg });
    let title = site_title(try_use_context::<BlogConfig>());

    rsx! {
        Head { title: title }
        Landing {}
    }
}

/// Configured site title, or the built-in one when no config is in context.
pub fn site_title(config: Option<BlogConfig>) -> String {
    config.unwrap_or_default().site_title
}

#[component]
fn Landing() -> Element {
    let mut view = use_context::<AppState>().view;
    let mut flash = use_context::<FlashState>();
    let title = site_title(try_use_context::<BlogConfig>());

    // Recomputed whenever the view state changes.
    let visible = use_memo(move || view.read().visible_articles(articles()));

    let on_search = move |e: FormEvent| {
        view.write().set_search_query(e.value());
    };
    let on_select = move |cat: String| {
        debug!(target: "filter", "category -> {cat}");
        view.write().set_selected_category(cat);
    };
    let on_email = move |e: FormEvent| {
        view.write().set_subscription_email(e.value());
    };
    let on_subscribe = move |_| {
        let ack = view.write().submit_subscription();
        if let Some(text) = subscription::deliver(&ack, Delivery::for_build()) {
            flash.msg.set(Some(text));
        }
    };

    let (query, active, email) = {
        let s = view.read();
        (
            s.search_query().to_string(),
            s.selected_category().to_string(),
            s.subscription_email().to_string(),
        )
    };

    rsx! {
        div { class: "app",
            Header { title: title.clone(), query: query, on_search: on_search }
            main { class: "container",
                CategoryBar { active: active, on_select: on_select }
                if let Some(m) = flash.msg.read().clone() {
                    div { class: "flash glass",
                        span { "{m}" }
                        button { class: "btn btn-ghost btn-icon", onclick: move |_| flash.msg.set(None), "✖" }
                    }
                }
                { if visible.read().is_empty() {
                    rsx!{ div { class: "empty meta", "Статьи не найдены" } }
                } else {
                    rsx!{ div { class: "grid",
                        for (index, article) in visible.read().iter().cloned().enumerate() {
                            ArticleCard { key: "article-{article.id}", article: article, index: index }
                        }
                    } }
                } }
                SubscribeForm { value: email, on_input: on_email, on_submit: on_subscribe }
            }
            Footer { title: title }
        }
    }
}
