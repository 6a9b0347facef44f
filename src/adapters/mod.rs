// Adapters layer: concrete implementations for external systems (files, display, http).

pub mod display;
pub mod http;
pub mod menu_source;
pub mod storage;

pub use display::{HtmlRegion, TextRegion};
pub use http::{build_submitter, HttpSubmitter};
pub use menu_source::JsonFileMenu;
pub use storage::LocalStorage;
