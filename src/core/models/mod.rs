mod news_item;
mod search_error;
mod search_query;
mod search_session;

pub use news_item::{NewsItem, NewsSearchResponse};
pub use search_error::SearchError;
pub use search_query::{ResultCount, SearchQuery, SortMode};
pub use search_session::SearchSession;
