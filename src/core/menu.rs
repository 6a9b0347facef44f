//! Menu filtering and rendering.
//!
//! An item is visible when its category equals the active tab and it carries
//! every checked filter tag. Output keeps data-file order.

use crate::domain::model::{MenuItem, MenuView};
use crate::domain::ports::{DisplayRegion, MenuSource, SelectionControls};
use crate::utils::error::{Result, SiteError};
use std::collections::BTreeSet;

pub fn matches(item: &MenuItem, category: &str, filters: &BTreeSet<String>) -> bool {
    item.category == category && filters.iter().all(|f| item.has_tag(f))
}

/// Pure selection step, independent of any display surface.
pub fn compute_visible_items<'a>(
    items: &'a [MenuItem],
    category: &str,
    filters: &BTreeSet<String>,
) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| matches(item, category, filters))
        .collect()
}

pub fn render<'a>(
    items: &'a [MenuItem],
    category: &str,
    filters: &BTreeSet<String>,
) -> MenuView<'a> {
    if items.is_empty() {
        return MenuView::DataUnavailable;
    }

    let visible = compute_visible_items(items, category, filters);
    if visible.is_empty() {
        MenuView::NoMatches
    } else {
        MenuView::Items(visible)
    }
}

/// Category tabs (exactly one active) and filter chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuControls {
    categories: Vec<String>,
    active: usize,
    filters: Vec<String>,
    checked: BTreeSet<String>,
}

impl MenuControls {
    pub fn new(categories: Vec<String>, filters: Vec<String>) -> Result<Self> {
        if categories.is_empty() {
            return Err(SiteError::MissingConfigError {
                field: "menu.categories".to_string(),
            });
        }
        Ok(Self {
            categories,
            active: 0,
            filters,
            checked: BTreeSet::new(),
        })
    }

    /// Tabs in first-appearance order, chips as the sorted union of tags.
    pub fn derive_from(items: &[MenuItem]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for item in items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        let filters: BTreeSet<String> = items.iter().flat_map(|i| i.tags.iter().cloned()).collect();

        Self {
            categories,
            active: 0,
            filters: filters.into_iter().collect(),
            checked: BTreeSet::new(),
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn select_category(&mut self, category: &str) -> Result<()> {
        let index = self
            .categories
            .iter()
            .position(|c| c == category)
            .ok_or_else(|| SiteError::UnknownCategory {
                category: category.to_string(),
            })?;
        self.active = index;
        Ok(())
    }

    /// Flips a chip; returns whether it is now checked.
    pub fn toggle_filter(&mut self, filter: &str) -> Result<bool> {
        if !self.filters.iter().any(|f| f == filter) {
            return Err(SiteError::UnknownFilter {
                filter: filter.to_string(),
            });
        }
        if self.checked.remove(filter) {
            Ok(false)
        } else {
            self.checked.insert(filter.to_string());
            Ok(true)
        }
    }
}

impl SelectionControls for MenuControls {
    fn active_category(&self) -> &str {
        // with no tabs nothing can match, which renders the same as an empty menu
        self.categories.get(self.active).map(String::as_str).unwrap_or("")
    }

    fn active_filters(&self) -> BTreeSet<String> {
        self.checked.clone()
    }
}

/// Holds the item list loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct MenuRenderer {
    items: Vec<MenuItem>,
}

impl MenuRenderer {
    pub fn new(items: Vec<MenuItem>) -> Self {
        if items.is_empty() {
            tracing::error!("Menu data not loaded: item list is empty");
        }
        Self { items }
    }

    /// Loads from `source`; any failure leaves the renderer empty so it shows
    /// the fixed "failed to load" message.
    pub fn load<S: MenuSource>(source: &S) -> Self {
        match source.load() {
            Ok(items) => Self::new(items),
            Err(e) => {
                tracing::error!("Menu data not loaded: {}", e);
                Self::default()
            }
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_available(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn view<C: SelectionControls + ?Sized>(&self, controls: &C) -> MenuView<'_> {
        render(
            &self.items,
            controls.active_category(),
            &controls.active_filters(),
        )
    }

    /// Full recompute from the complete list, then a full region replace.
    pub fn render_into<C, R>(&self, controls: &C, region: &mut R) -> usize
    where
        C: SelectionControls + ?Sized,
        R: DisplayRegion + ?Sized,
    {
        let view = self.view(controls);
        tracing::debug!(
            category = controls.active_category(),
            items = view.item_count(),
            "Rendering menu"
        );
        region.repopulate(&view);
        view.item_count()
    }
}
