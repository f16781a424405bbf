pub mod errors;

pub use errors::StoreError;

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    config::Config,
    extractor::{AppPageParser, GameDetails, SearchResult, SuggestParser},
    fetcher::{FetchError, PageResponse, UpstreamClient},
};

/// Read access to the store catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreCatalog: Send + Sync {
    async fn game_details(&self, app_id: &str) -> Result<GameDetails, StoreError>;

    /// At most `limit` rows, in upstream order.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, StoreError>;
}

/// [`StoreCatalog`] backed by the live Steam storefront.
#[derive(Debug)]
pub struct SteamStore {
    client: UpstreamClient,
    base_url: Url,
    app_page: AppPageParser,
    suggest: SuggestParser,
}

impl SteamStore {
    pub fn new(base_url: Url, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            client: UpstreamClient::new(timeout)?,
            base_url,
            app_page: AppPageParser::new()?,
            suggest: SuggestParser::new()?,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(config.upstream_base_url().clone(), config.upstream_timeout())
    }

    /// `{base}/app/{app_id}`. The id is percent-encoded as a single segment,
    /// except that `.` and `..` are dropped: URLs cannot carry them as data.
    pub fn app_url(&self, app_id: &str) -> Result<Url, FetchError> {
        self.url_with_segments(&["app", app_id])
    }

    pub fn suggest_url(&self, query: &str) -> Result<Url, FetchError> {
        let mut url = self.url_with_segments(&["search", "suggest"])?;
        url.query_pairs_mut()
            .append_pair("term", query)
            .append_pair("f", "games")
            .append_pair("cc", "US")
            .append_pair("lang", "english");
        Ok(url)
    }

    fn url_with_segments(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_app_page(&self, app_id: &str) -> Result<PageResponse, FetchError> {
        let url = self.app_url(app_id)?;
        self.client.fetch(url).await
    }

    async fn fetch_suggestions(&self, query: &str) -> Result<PageResponse, FetchError> {
        let url = self.suggest_url(query)?;
        self.client.fetch(url).await
    }
}

#[async_trait]
impl StoreCatalog for SteamStore {
    #[instrument(skip(self))]
    async fn game_details(&self, app_id: &str) -> Result<GameDetails, StoreError> {
        let page = self.fetch_app_page(app_id).await.map_err(|e| {
            warn!(error = %e, "game lookup failed");
            StoreError::GameLookup(e.to_string())
        })?;

        let details = self.app_page.parse(&page.body_utf8);
        debug!(title = %details.title, tags = details.tags.len(), "extracted game details");
        Ok(details)
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, StoreError> {
        let page = self.fetch_suggestions(query).await.map_err(|e| {
            warn!(error = %e, "search failed");
            StoreError::Search(e.to_string())
        })?;

        let results = self.suggest.parse(&page.body_utf8, limit);
        debug!(results = results.len(), "extracted search results");
        Ok(results)
    }
}
