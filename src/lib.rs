pub mod app;
pub mod app_assets;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod logging;
pub mod models;
pub mod state;
pub mod subscription;

pub use app::App;
