//! CSS selectors locating each field in upstream markup.
//!
//! Extraction depends on the store's class names and nesting. When the store
//! changes its markup only these tables need to follow; control flow in the
//! parsers stays the same.

/// Markers on an app detail page (`/app/{app_id}`).
#[derive(Debug, Clone)]
pub struct AppPageMarkers {
    /// Candidates are tried in order and the first element found wins.
    pub title: Vec<String>,
    pub price: Vec<String>,
    pub description: Vec<String>,
    /// Every match is a tag, in document order.
    pub tags: String,
    pub rating: Vec<String>,
    /// Outer release date container. Only the first one is inspected.
    pub release_date: String,
    /// Date element searched for inside the release date container.
    pub release_date_value: String,
}

impl Default for AppPageMarkers {
    fn default() -> Self {
        Self {
            title: vec!["div.apphub_AppName".to_string()],
            price: vec![
                "div.game_purchase_price.price".to_string(),
                "div.discount_final_price".to_string(),
            ],
            description: vec!["div.game_description_snippet".to_string()],
            tags: "a.app_tag".to_string(),
            rating: vec!["div.game_review_summary".to_string()],
            release_date: "div.release_date".to_string(),
            release_date_value: "div.date".to_string(),
        }
    }
}

/// Markers on the search suggestion fragment (`/search/suggest`).
#[derive(Debug, Clone)]
pub struct SuggestMarkers {
    /// One result row per matching element.
    pub entry: String,
    /// Attribute on the entry carrying the app id.
    pub app_id_attr: String,
    pub title: String,
    pub price: String,
}

impl Default for SuggestMarkers {
    fn default() -> Self {
        Self {
            entry: "a".to_string(),
            app_id_attr: "data-ds-appid".to_string(),
            title: "div.match_name".to_string(),
            price: "div.match_price".to_string(),
        }
    }
}
