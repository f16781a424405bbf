use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Substituted for any field whose marker is absent from the page.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GameDetails {
    #[schema(example = "Portal 2")]
    pub title: String,
    #[schema(example = "$9.99")]
    pub price: String,
    pub description: String,
    pub tags: Vec<String>,
    #[schema(example = "Overwhelmingly Positive")]
    pub rating: String,
    #[schema(example = "18 Apr, 2011")]
    pub release_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchResult {
    /// Empty when the upstream entry carries no app id.
    #[schema(example = "620")]
    pub app_id: String,
    pub title: String,
    pub price: String,
}

pub(crate) fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// All descendant text of `element`, trimmed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
