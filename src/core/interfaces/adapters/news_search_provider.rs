use async_trait::async_trait;

use crate::core::models::{NewsSearchResponse, SearchError, SearchQuery};

/// One synchronous-from-the-user's-view call against the external news search
/// API. `start` is the 1-based offset of the first result to return.
#[async_trait]
pub trait NewsSearchProvider: Send + Sync {
    async fn search_news(
        &self,
        query: &SearchQuery,
        start: u32,
    ) -> Result<NewsSearchResponse, SearchError>;
}
