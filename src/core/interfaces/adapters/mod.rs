mod news_search_provider;

pub use news_search_provider::NewsSearchProvider;
