use scraper::{Html, Selector};

use crate::extractor::{
    compile_selector, compile_selectors,
    error::ExtractError,
    markers::AppPageMarkers,
    model::{GameDetails, element_text, not_available},
};

/// Extracts [`GameDetails`] from an app detail page.
#[derive(Debug)]
pub struct AppPageParser {
    title: Vec<Selector>,
    price: Vec<Selector>,
    description: Vec<Selector>,
    tags: Selector,
    rating: Vec<Selector>,
    release_date: Selector,
    release_date_value: Selector,
}

impl AppPageParser {
    pub fn new() -> Result<Self, ExtractError> {
        Self::with_markers(&AppPageMarkers::default())
    }

    pub fn with_markers(markers: &AppPageMarkers) -> Result<Self, ExtractError> {
        Ok(Self {
            title: compile_selectors(&markers.title)?,
            price: compile_selectors(&markers.price)?,
            description: compile_selectors(&markers.description)?,
            tags: compile_selector(&markers.tags)?,
            rating: compile_selectors(&markers.rating)?,
            release_date: compile_selector(&markers.release_date)?,
            release_date_value: compile_selector(&markers.release_date_value)?,
        })
    }

    /// Each field is looked up on its own; a missing marker only affects
    /// that field.
    pub fn parse(&self, html: &str) -> GameDetails {
        let document = Html::parse_document(html);

        GameDetails {
            title: first_text(&document, &self.title),
            price: first_text(&document, &self.price),
            description: first_text(&document, &self.description),
            tags: document.select(&self.tags).map(element_text).collect(),
            rating: first_text(&document, &self.rating),
            release_date: self.release_date(&document),
        }
    }

    fn release_date(&self, document: &Html) -> String {
        document
            .select(&self.release_date)
            .next()
            .and_then(|container| container.select(&self.release_date_value).next())
            .map(element_text)
            .unwrap_or_else(not_available)
    }
}

fn first_text(document: &Html, candidates: &[Selector]) -> String {
    candidates
        .iter()
        .find_map(|selector| document.select(selector).next())
        .map(element_text)
        .unwrap_or_else(not_available)
}
