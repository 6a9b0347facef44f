use crate::adapters::{build_submitter, JsonFileMenu, LocalStorage};
use crate::config::SiteConfig;
use crate::core::carousel::Carousel;
use crate::core::menu::{MenuControls, MenuRenderer};
use crate::core::reservation::BookingButton;
use crate::core::site::Site;
use crate::core::state::AppState;
use crate::core::theme::ThemeStore;
use crate::core::{DisplayRegion, MenuItem};
use crate::utils::error::Result;

/// Tabs and chips from config, falling back to what the data contains.
pub fn menu_controls(config: &SiteConfig, items: &[MenuItem]) -> Result<MenuControls> {
    let derived = MenuControls::derive_from(items);
    let categories = config
        .menu
        .categories
        .clone()
        .unwrap_or_else(|| derived.categories().to_vec());
    let filters = config
        .menu
        .filters
        .clone()
        .unwrap_or_else(|| derived.filters().to_vec());

    if categories.is_empty() {
        // no data and no configured tabs: the region shows the load failure
        return Ok(derived);
    }
    MenuControls::new(categories, filters)
}

/// Applies a requested tab and chips. Without menu data the request is
/// skipped so the region keeps showing the load failure.
pub fn apply_menu_selection(
    renderer: &MenuRenderer,
    controls: &mut MenuControls,
    category: Option<&str>,
    filters: &[String],
) -> Result<()> {
    if !renderer.is_available() {
        if category.is_some() || !filters.is_empty() {
            tracing::warn!("Menu data unavailable, ignoring menu selection");
        }
        return Ok(());
    }
    if let Some(category) = category {
        controls.select_category(category)?;
    }
    for filter in filters {
        controls.toggle_filter(filter)?;
    }
    Ok(())
}

pub fn build_site<R: DisplayRegion>(
    config: &SiteConfig,
    region: R,
) -> Result<Site<LocalStorage, R>> {
    let renderer = MenuRenderer::load(&JsonFileMenu::new(&config.menu.data_path));
    let controls = menu_controls(config, renderer.items())?;

    let state = AppState::new(
        controls,
        Carousel::new(config.testimonials()),
        BookingButton::new(config.reservation.button_label.clone()),
    );

    let submitter = build_submitter(
        config.reservation_endpoint(),
        config.request_timeout(),
        config.simulated_delay(),
    )?;

    Ok(Site::new(
        state,
        renderer,
        region,
        ThemeStore::new(LocalStorage::new(&config.theme.state_dir)),
        submitter,
    ))
}

/// Builds and starts a session in one step.
pub async fn start_site<R: DisplayRegion>(
    config: &SiteConfig,
    region: R,
) -> Result<Site<LocalStorage, R>> {
    let mut site = build_site(config, region)?;
    site.start(config.theme.system_prefers_dark).await;
    Ok(site)
}
