use crate::core::{MenuItem, MenuSource};
use crate::utils::error::{Result, SiteError};
use std::path::PathBuf;

/// Menu data file: a JSON array of items.
#[derive(Debug, Clone)]
pub struct JsonFileMenu {
    path: PathBuf,
}

impl JsonFileMenu {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MenuSource for JsonFileMenu {
    fn load(&self) -> Result<Vec<MenuItem>> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| SiteError::DataUnavailable {
                reason: format!("cannot read {}: {}", self.path.display(), e),
            })?;

        let items: Vec<MenuItem> =
            serde_json::from_str(&content).map_err(|e| SiteError::DataUnavailable {
                reason: format!("cannot parse {}: {}", self.path.display(), e),
            })?;

        if items.is_empty() {
            return Err(SiteError::DataUnavailable {
                reason: format!("{} contains no items", self.path.display()),
            });
        }

        tracing::debug!("Loaded {} menu items from {}", items.len(), self.path.display());
        Ok(items)
    }
}

/// Items already in memory.
impl MenuSource for Vec<MenuItem> {
    fn load(&self) -> Result<Vec<MenuItem>> {
        Ok(self.clone())
    }
}
