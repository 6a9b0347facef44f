pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::SiteConfig;

pub use crate::adapters::{HtmlRegion, JsonFileMenu, LocalStorage, TextRegion};
pub use crate::core::menu::{compute_visible_items, render, MenuControls, MenuRenderer};
pub use crate::core::site::Site;
pub use crate::utils::error::{Result, SiteError};
