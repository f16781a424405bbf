use scraper::{ElementRef, Html, Selector};

use crate::extractor::{
    compile_selector,
    error::ExtractError,
    markers::SuggestMarkers,
    model::{SearchResult, element_text, not_available},
};

/// Extracts [`SearchResult`] rows from the search suggestion fragment.
#[derive(Debug)]
pub struct SuggestParser {
    entry: Selector,
    app_id_attr: String,
    title: Selector,
    price: Selector,
}

impl SuggestParser {
    pub fn new() -> Result<Self, ExtractError> {
        Self::with_markers(&SuggestMarkers::default())
    }

    pub fn with_markers(markers: &SuggestMarkers) -> Result<Self, ExtractError> {
        Ok(Self {
            entry: compile_selector(&markers.entry)?,
            app_id_attr: markers.app_id_attr.clone(),
            title: compile_selector(&markers.title)?,
            price: compile_selector(&markers.price)?,
        })
    }

    /// `limit` bounds the number of entries inspected. Every inspected entry
    /// yields a row, even one missing all of its sub-elements.
    pub fn parse(&self, html: &str, limit: usize) -> Vec<SearchResult> {
        let document = Html::parse_document(html);

        document
            .select(&self.entry)
            .take(limit)
            .map(|entry| SearchResult {
                app_id: entry
                    .value()
                    .attr(&self.app_id_attr)
                    .unwrap_or_default()
                    .to_string(),
                title: text_within(entry, &self.title),
                price: text_within(entry, &self.price),
            })
            .collect()
    }
}

fn text_within(entry: ElementRef<'_>, selector: &Selector) -> String {
    entry
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_else(not_available)
}
