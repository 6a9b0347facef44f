use restaurant_site::app::bootstrap::{apply_menu_selection, menu_controls};
use restaurant_site::core::MenuSource;
use restaurant_site::{HtmlRegion, JsonFileMenu, MenuRenderer, SiteConfig, TextRegion};
use std::io::Write;
use tempfile::NamedTempFile;

fn menu_file(json: serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.to_string().as_bytes()).unwrap();
    file
}

fn sample_menu() -> NamedTempFile {
    menu_file(serde_json::json!([
        {"name": "Naan", "description": "Tandoor flatbread", "price": "$3", "category": "sides", "tags": ["vegan"]},
        {"name": "Butter Chicken", "description": "Tomato butter sauce", "price": "$18", "category": "mains", "tags": ["spicy"]},
        {"name": "Chana Masala", "description": "Chickpea curry", "price": "$14", "category": "mains", "tags": ["vegan", "spicy"]},
        {"name": "Gulab Jamun", "description": "Syrup dumplings", "price": "$6", "category": "desserts", "tags": []}
    ]))
}

fn config_for(file: &NamedTempFile) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.menu.data_path = file.path().to_str().unwrap().to_string();
    config
}

#[test]
fn test_mains_without_filters_from_file() {
    let file = sample_menu();
    let config = config_for(&file);
    let renderer = MenuRenderer::load(&JsonFileMenu::new(&config.menu.data_path));
    let mut controls = menu_controls(&config, renderer.items()).unwrap();
    controls.select_category("mains").unwrap();

    let mut region = TextRegion::new();
    let count = renderer.render_into(&controls, &mut region);

    assert_eq!(count, 2);
    assert_eq!(region.lines()[0], "Butter Chicken  $18");
    assert!(region.lines().iter().any(|l| l.starts_with("Chana Masala")));
    assert!(!region.lines().iter().any(|l| l.starts_with("Naan")));
}

#[test]
fn test_filter_toggle_round_trip_in_html() {
    let file = sample_menu();
    let config = config_for(&file);
    let renderer = MenuRenderer::load(&JsonFileMenu::new(&config.menu.data_path));
    let mut controls = menu_controls(&config, renderer.items()).unwrap();
    controls.select_category("mains").unwrap();

    let mut region = HtmlRegion::new();
    renderer.render_into(&controls, &mut region);
    let unfiltered = region.markup().to_string();

    controls.toggle_filter("vegan").unwrap();
    assert_eq!(renderer.render_into(&controls, &mut region), 1);
    assert!(!region.markup().contains("Butter Chicken"));

    controls.toggle_filter("vegan").unwrap();
    renderer.render_into(&controls, &mut region);
    assert_eq!(region.markup(), unfiltered);
}

#[test]
fn test_no_match_placeholder_is_not_load_failure() {
    let file = sample_menu();
    let config = config_for(&file);
    let renderer = MenuRenderer::load(&JsonFileMenu::new(&config.menu.data_path));
    let mut controls = menu_controls(&config, renderer.items()).unwrap();
    controls.select_category("desserts").unwrap();
    controls.toggle_filter("spicy").unwrap();

    let mut region = HtmlRegion::new();
    assert_eq!(renderer.render_into(&controls, &mut region), 0);
    assert!(region.markup().contains("No items match your filters."));
    assert!(!region.markup().contains("Failed to load menu data."));
}

#[test]
fn test_missing_file_renders_load_failure() {
    let mut config = SiteConfig::default();
    config.menu.data_path = "/nonexistent/menu_data.json".to_string();

    let renderer = MenuRenderer::load(&JsonFileMenu::new(&config.menu.data_path));
    assert!(!renderer.is_available());

    let controls = menu_controls(&config, renderer.items()).unwrap();
    let mut region = TextRegion::new();
    assert_eq!(renderer.render_into(&controls, &mut region), 0);
    assert_eq!(region.lines(), &["Failed to load menu data.".to_string()]);
}

#[test]
fn test_empty_file_with_configured_tabs_renders_load_failure() {
    let file = menu_file(serde_json::json!([]));
    let mut config = config_for(&file);
    config.menu.categories = Some(vec!["mains".to_string()]);

    assert!(JsonFileMenu::new(file.path()).load().is_err());

    let renderer = MenuRenderer::load(&JsonFileMenu::new(&config.menu.data_path));
    let controls = menu_controls(&config, renderer.items()).unwrap();
    let mut region = HtmlRegion::new();
    renderer.render_into(&controls, &mut region);
    assert!(region.markup().contains("Failed to load menu data."));
}

#[test]
fn test_missing_file_ignores_requested_tab_and_chip() {
    let mut config = SiteConfig::default();
    config.menu.data_path = "/nonexistent/menu_data.json".to_string();

    let renderer = MenuRenderer::load(&JsonFileMenu::new(&config.menu.data_path));
    let mut controls = menu_controls(&config, renderer.items()).unwrap();
    apply_menu_selection(
        &renderer,
        &mut controls,
        Some("mains"),
        &["vegan".to_string()],
    )
    .unwrap();

    let mut region = TextRegion::new();
    assert_eq!(renderer.render_into(&controls, &mut region), 0);
    assert_eq!(region.lines(), &["Failed to load menu data.".to_string()]);
}

#[test]
fn test_selection_with_data_still_rejects_unknown_tab() {
    let file = sample_menu();
    let config = config_for(&file);
    let renderer = MenuRenderer::load(&JsonFileMenu::new(&config.menu.data_path));
    let mut controls = menu_controls(&config, renderer.items()).unwrap();

    apply_menu_selection(&renderer, &mut controls, Some("mains"), &["vegan".to_string()])
        .unwrap();
    let mut region = TextRegion::new();
    assert_eq!(renderer.render_into(&controls, &mut region), 1);
    assert_eq!(region.lines()[0], "Chana Masala  $14");

    assert!(apply_menu_selection(&renderer, &mut controls, Some("brunch"), &[]).is_err());
}
