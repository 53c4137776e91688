use super::*;

#[test]
fn default_config_points_at_backend_routes() {
    let config = GalleryConfig::default();
    assert_eq!(config.categories_endpoint, "/api/categories");
    assert_eq!(config.images_endpoint, "/api/images");
    assert_eq!(config.images_root, "/images");
    assert_eq!(config.placeholder, "/static/placeholder.png");
    assert_eq!(config.search_debounce_ms, 300);
}

#[test]
fn default_dom_ids_match_page_markup() {
    let ids = DomIds::default();
    assert_eq!(ids.search_input, "searchInput");
    assert_eq!(ids.categories, "categories");
    assert_eq!(ids.image_grid, "imageGrid");
}

#[test]
fn with_api_base_prefixes_endpoints_and_trims_slash() {
    let config = GalleryConfig::default().with_api_base("http://localhost:5000/");
    assert_eq!(config.categories_endpoint, "http://localhost:5000/api/categories");
    assert_eq!(config.images_endpoint, "http://localhost:5000/api/images");
    assert_eq!(config.images_root, "/images");
}
