use crate::fetcher::types::{Charset, PageResponse};
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;
use tracing::warn;
use url::Url;

/// How much of the body is scanned for `<meta>` charset declarations.
const SNIFF_WINDOW: usize = 4096;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    body_bytes: &[u8],
    content_type: &str,
) -> PageResponse {
    let charset = detect_charset(content_type, body_bytes);
    let body_utf8 = decode_to_utf8(body_bytes, &charset);

    PageResponse {
        url_final,
        status,
        body_utf8,
        charset,
    }
}

fn labelled_encoding(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

fn detect_charset(content_type: &str, body_bytes: &[u8]) -> Charset {
    if let Some(encoding) = labelled_encoding(&CHARSET_REGEX, content_type) {
        return Charset::from_encoding(encoding);
    }

    let head = &body_bytes[..body_bytes.len().min(SNIFF_WINDOW)];
    let head_str = String::from_utf8_lossy(head);

    for regex in [&*META_CHARSET_REGEX, &*META_HTTP_EQUIV_REGEX] {
        if let Some(encoding) = labelled_encoding(regex, &head_str) {
            return Charset::from_encoding(encoding);
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, body_bytes.len() <= SNIFF_WINDOW);
    Charset::from_encoding(detector.guess(None, true))
}

/// Malformed sequences become U+FFFD so the rest of the page stays usable.
fn decode_to_utf8(body_bytes: &[u8], charset: &Charset) -> String {
    let encoding = charset.encoding();
    let (decoded, used, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        warn!(
            encoding = used.name(),
            "upstream body contained malformed sequences, replaced"
        );
    }

    decoded.into_owned()
}
