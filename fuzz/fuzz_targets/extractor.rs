#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::LazyLock;

use steam_scraper::extractor::{AppPageParser, SuggestParser};

static APP_PAGE: LazyLock<AppPageParser> = LazyLock::new(|| AppPageParser::new().unwrap());
static SUGGEST: LazyLock<SuggestParser> = LazyLock::new(|| SuggestParser::new().unwrap());

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);

    // Parsers must never panic regardless of input
    let _ = APP_PAGE.parse(&html);

    let limit = data.first().copied().unwrap_or(10) as usize % 32;
    let results = SUGGEST.parse(&html, limit);
    assert!(results.len() <= limit);
});
