use async_trait::async_trait;

use crate::adapters::api_credentials::CredentialSource;
use crate::core::interfaces::adapters::NewsSearchProvider;
use crate::core::models::{NewsSearchResponse, SearchError, SearchQuery};
use crate::global_constants;

/// Adapter for the Naver news search endpoint. One GET per call, no retries,
/// no caching; timeouts are whatever the HTTP client defaults to.
pub struct NaverNewsSearchProvider {
    client: reqwest::Client,
    api_url: String,
    credential_source: CredentialSource,
}

impl NaverNewsSearchProvider {
    pub fn build(credential_source: CredentialSource) -> Self {
        Self::build_with_api_url(
            global_constants::NEWS_SEARCH_API_URL.to_string(),
            credential_source,
        )
    }

    pub fn build_with_api_url(api_url: String, credential_source: CredentialSource) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            credential_source,
        }
    }
}

#[async_trait]
impl NewsSearchProvider for NaverNewsSearchProvider {
    async fn search_news(
        &self,
        query: &SearchQuery,
        start: u32,
    ) -> Result<NewsSearchResponse, SearchError> {
        // Credentials are re-resolved on every call so an env var exported
        // after startup is picked up without restarting the app.
        let credentials = self.credential_source.resolve()?;

        log::info!(
            "[NAVER] Searching news: keyword='{}', display={}, start={}, sort={}",
            query.keyword,
            query.result_count.as_u32(),
            start,
            query.sort_mode.api_token()
        );

        let response = self
            .client
            .get(&self.api_url)
            .header(global_constants::CLIENT_ID_HEADER, &credentials.client_id)
            .header(
                global_constants::CLIENT_SECRET_HEADER,
                &credentials.client_secret,
            )
            .query(&[("query", query.keyword.as_str())])
            .query(&[("display", query.result_count.as_u32()), ("start", start)])
            .query(&[("sort", query.sort_mode.api_token())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!(
                "[NAVER] API request failed with status {}: {}",
                status,
                body
            );
            return Err(SearchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: NewsSearchResponse = serde_json::from_str(&body)?;

        log::info!(
            "[NAVER] Search succeeded: {} of {} total articles returned",
            parsed.items.len(),
            parsed.total
        );

        Ok(parsed)
    }
}
