use std::fs;

use crate::extractor::{
    AppPageMarkers, AppPageParser, ExtractError, NOT_AVAILABLE, SuggestParser,
};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

fn without(html: &str, marker_class: &str) -> String {
    html.replace(marker_class, "renamed_by_test")
}

#[test]
fn test_extract_full_app_page() {
    let parser = AppPageParser::new().unwrap();
    let details = parser.parse(&fixture("app_page.html"));

    assert_eq!(details.title, "Portal 2");
    assert_eq!(details.price, "$9.99");
    assert_eq!(
        details.description,
        "The \"Perpetual Testing Initiative\" has been expanded to allow you to design co-op puzzles for you and your friends!"
    );
    assert_eq!(details.tags, vec!["Puzzle", "Co-op", "First-Person"]);
    // the span carrying the same class is not a div and must be skipped
    assert_eq!(details.rating, "Overwhelmingly Positive");
    assert_eq!(details.release_date, "18 Apr, 2011");
}

#[test]
fn test_each_missing_marker_falls_back_independently() {
    let parser = AppPageParser::new().unwrap();
    let html = fixture("app_page.html");

    let details = parser.parse(&without(&html, "apphub_AppName"));
    assert_eq!(details.title, NOT_AVAILABLE);
    assert_eq!(details.price, "$9.99");

    let details = parser.parse(&without(&html, "game_purchase_price"));
    assert_eq!(details.price, NOT_AVAILABLE);
    assert_eq!(details.title, "Portal 2");

    let details = parser.parse(&without(&html, "game_description_snippet"));
    assert_eq!(details.description, NOT_AVAILABLE);
    assert_eq!(details.rating, "Overwhelmingly Positive");

    let details = parser.parse(&without(&html, "game_review_summary"));
    assert_eq!(details.rating, NOT_AVAILABLE);
    assert_eq!(details.release_date, "18 Apr, 2011");

    let details = parser.parse(&without(&html, "class=\"release_date\""));
    assert_eq!(details.release_date, NOT_AVAILABLE);
    assert_eq!(details.tags.len(), 3);

    let details = parser.parse(&without(&html, "app_tag"));
    assert!(details.tags.is_empty());
    assert_ne!(details.description, NOT_AVAILABLE);
}

#[test]
fn test_release_date_container_without_date() {
    let parser = AppPageParser::new().unwrap();
    let html = r#"<html><body>
        <div class="release_date"><div class="subtitle">Release Date:</div></div>
        <div class="date">not inside the container</div>
    </body></html>"#;

    assert_eq!(parser.parse(html).release_date, NOT_AVAILABLE);
}

#[test]
fn test_discounted_price_is_used_as_fallback() {
    let parser = AppPageParser::new().unwrap();
    let html = r#"<html><body>
        <div class="discount_block">
            <div class="discount_original_price">$59.99</div>
            <div class="discount_final_price"> $29.99 </div>
        </div>
    </body></html>"#;

    assert_eq!(parser.parse(html).price, "$29.99");
}

#[test]
fn test_primary_price_wins_over_fallback() {
    let parser = AppPageParser::new().unwrap();
    let html = r#"<html><body>
        <div class="discount_final_price">$29.99</div>
        <div class="game_purchase_price price">$59.99</div>
    </body></html>"#;

    assert_eq!(parser.parse(html).price, "$59.99");
}

#[test]
fn test_empty_page_yields_complete_record_of_sentinels() {
    let parser = AppPageParser::new().unwrap();
    let details = parser.parse("");

    assert_eq!(details.title, NOT_AVAILABLE);
    assert_eq!(details.price, NOT_AVAILABLE);
    assert_eq!(details.description, NOT_AVAILABLE);
    assert!(details.tags.is_empty());
    assert_eq!(details.rating, NOT_AVAILABLE);
    assert_eq!(details.release_date, NOT_AVAILABLE);

    let json = serde_json::to_value(&details).unwrap();
    for key in ["title", "price", "description", "tags", "rating", "release_date"] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn test_custom_markers() {
    let markers = AppPageMarkers {
        title: vec!["h1.new_title".to_string(), "div.apphub_AppName".to_string()],
        ..AppPageMarkers::default()
    };
    let parser = AppPageParser::with_markers(&markers).unwrap();
    let html = r#"<h1 class="new_title">Redesigned</h1><div class="apphub_AppName">Old</div>"#;

    assert_eq!(parser.parse(html).title, "Redesigned");
}

#[test]
fn test_invalid_marker_is_rejected() {
    let markers = AppPageMarkers {
        tags: "a..app_tag".to_string(),
        ..AppPageMarkers::default()
    };

    match AppPageParser::with_markers(&markers) {
        Err(ExtractError::InvalidSelector { selector, .. }) => assert_eq!(selector, "a..app_tag"),
        other => panic!("Expected InvalidSelector, got {other:?}"),
    }
}

#[test]
fn test_suggest_rows_in_document_order() {
    let parser = SuggestParser::new().unwrap();
    let results = parser.parse(&fixture("suggest.html"), 10);

    let ids: Vec<&str> = results.iter().map(|r| r.app_id.as_str()).collect();
    assert_eq!(ids, vec!["620", "400", "659", "317400", "2012840"]);
    assert_eq!(results[0].title, "Portal 2");
    assert_eq!(results[0].price, "$9.99");
    assert_eq!(results[4].price, "$19.99");
}

#[test]
fn test_suggest_limit_bounds_rows() {
    let parser = SuggestParser::new().unwrap();
    let html = fixture("suggest.html");

    let results = parser.parse(&html, 3);
    assert_eq!(results.len(), 3);
    assert_eq!(results[2].title, "Portal 2 Sixense Perceptual Pack");

    assert!(parser.parse(&html, 0).is_empty());
}

#[test]
fn test_suggest_entry_fields_default_independently() {
    let parser = SuggestParser::new().unwrap();
    let html = r#"
        <a href="/app/1"><div class="match_name">No Id</div></a>
        <a data-ds-appid="42"><div class="match_price">$1.99</div></a>
        <a href="/bare"></a>
    "#;

    let results = parser.parse(html, 10);
    assert_eq!(results.len(), 3);

    assert_eq!(results[0].app_id, "");
    assert_eq!(results[0].title, "No Id");
    assert_eq!(results[0].price, NOT_AVAILABLE);

    assert_eq!(results[1].app_id, "42");
    assert_eq!(results[1].title, NOT_AVAILABLE);
    assert_eq!(results[1].price, "$1.99");

    assert_eq!(results[2].app_id, "");
    assert_eq!(results[2].title, NOT_AVAILABLE);
    assert_eq!(results[2].price, NOT_AVAILABLE);
}

#[test]
fn test_malformed_html() {
    let parser = AppPageParser::new().unwrap();
    let html = "<html><body><div class=\"apphub_AppName\">Broken<div class=\"release_date\"><div class=\"date\">1 Jan, 2000";

    let details = parser.parse(html);
    assert!(details.title.starts_with("Broken"));
    assert_eq!(details.release_date, "1 Jan, 2000");
}

#[cfg(feature = "fuzz")]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn app_page_parser_never_panics(html in ".*") {
            let details = AppPageParser::new().unwrap().parse(&html);
            let json = serde_json::to_value(&details).unwrap();
            prop_assert_eq!(json.as_object().map(|o| o.len()), Some(6));
        }

        #[test]
        fn suggest_rows_never_exceed_limit(html in ".*", limit in 0usize..20) {
            let results = SuggestParser::new().unwrap().parse(&html, limit);
            prop_assert!(results.len() <= limit);
        }
    }
}
