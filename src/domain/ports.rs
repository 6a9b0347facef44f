use crate::domain::model::{MenuItem, MenuView, ReservationForm};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Static source of the menu, read once at startup.
pub trait MenuSource {
    fn load(&self) -> Result<Vec<MenuItem>>;
}

/// Queryable state of the category tabs and filter chips.
pub trait SelectionControls {
    fn active_category(&self) -> &str;
    fn active_filters(&self) -> BTreeSet<String>;
}

/// Container whose whole content is replaced on every menu render.
pub trait DisplayRegion {
    fn repopulate(&mut self, view: &MenuView<'_>);
}

#[async_trait]
pub trait ReservationSubmitter: Send + Sync {
    async fn submit(&self, form: &ReservationForm) -> Result<()>;
}
