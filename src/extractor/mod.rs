pub mod app_page;
pub mod error;
pub mod markers;
pub mod model;
pub mod suggest;

#[cfg(test)]
mod tests;

pub use app_page::AppPageParser;
pub use error::ExtractError;
pub use markers::{AppPageMarkers, SuggestMarkers};
pub use model::{GameDetails, NOT_AVAILABLE, SearchResult};
pub use suggest::SuggestParser;

use scraper::Selector;

pub(crate) fn compile_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

pub(crate) fn compile_selectors(selectors: &[String]) -> Result<Vec<Selector>, ExtractError> {
    selectors.iter().map(|s| compile_selector(s)).collect()
}
