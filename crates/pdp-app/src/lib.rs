//! Product detail page application.
//!
//! Client-side rendered Leptos app. All state lives in `pdp-core`; the
//! components here are thin projections of that state, and `pdp-client`
//! performs the single outbound fetch.

mod app;
mod components;
mod config;
mod pages;
mod share;

pub use app::App;
pub use config::AppConfig;
