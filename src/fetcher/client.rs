use crate::fetcher::{errors::FetchError, pipeline::process_response, types::PageResponse};
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// The store rejects clients that do not look like a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Pooled HTTP client for the upstream store. Cheap to clone.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
}

impl UpstreamClient {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static("en-US,en;q=0.9"),
        );

        let http = ClientBuilder::new()
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { http })
    }

    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: Url) -> Result<PageResponse, FetchError> {
        let mut response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Http {
                status,
                url: final_url.to_string(),
            });
        }

        // only used to pick the charset; the body is parsed as HTML regardless
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or_default()
            .to_string();

        // Content-Length may be absent or describe the compressed payload
        let mut body_bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::Io(e.to_string()))?
        {
            let total = (body_bytes.len() + chunk.len()) as u64;
            if total > MAX_BODY_SIZE {
                return Err(FetchError::BodyTooLarge(total));
            }
            body_bytes.extend_from_slice(&chunk);
        }

        debug!(%status, bytes = body_bytes.len(), "fetched upstream page");
        Ok(process_response(final_url, status, &body_bytes, &content_type))
    }
}
