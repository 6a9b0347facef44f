pub mod bootstrap;
pub mod session;

pub use bootstrap::{build_site, start_site};
pub use session::run_session;
