mod api_credentials;
mod naver_news_search_provider;

pub use api_credentials::{ApiCredentials, CredentialSource};
pub use naver_news_search_provider::NaverNewsSearchProvider;
