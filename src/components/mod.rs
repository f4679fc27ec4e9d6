pub mod article_card;
pub mod category_bar;
pub mod footer;
pub mod header;
pub mod subscribe_form;
