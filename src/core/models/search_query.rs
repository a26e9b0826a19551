use std::fmt;

/// API-level ordering of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    ByDate,
    ByRelevance,
}

impl SortMode {
    /// The token the search API expects in its `sort` query parameter.
    pub fn api_token(&self) -> &'static str {
        match self {
            SortMode::ByDate => "date",
            SortMode::ByRelevance => "sim",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::ByDate => write!(f, "최신순"),
            SortMode::ByRelevance => write!(f, "정확도순"),
        }
    }
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::ByDate
    }
}

/// How many articles one search returns. The API only honors these sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCount {
    Twenty,
    Fifty,
    Hundred,
}

impl ResultCount {
    pub const ALL: [ResultCount; 3] = [
        ResultCount::Twenty,
        ResultCount::Fifty,
        ResultCount::Hundred,
    ];

    pub fn as_u32(&self) -> u32 {
        match self {
            ResultCount::Twenty => 20,
            ResultCount::Fifty => 50,
            ResultCount::Hundred => 100,
        }
    }
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl Default for ResultCount {
    fn default() -> Self {
        ResultCount::Twenty
    }
}

/// One user submission of the search form. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub result_count: ResultCount,
    pub sort_mode: SortMode,
}

impl SearchQuery {
    pub fn build(keyword: &str, result_count: ResultCount, sort_mode: SortMode) -> Self {
        Self {
            keyword: keyword.trim().to_string(),
            result_count,
            sort_mode,
        }
    }

    pub fn has_keyword(&self) -> bool {
        !self.keyword.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_maps_to_api_tokens() {
        assert_eq!(SortMode::ByDate.api_token(), "date");
        assert_eq!(SortMode::ByRelevance.api_token(), "sim");
    }

    #[test]
    fn test_sort_mode_default_is_by_date() {
        assert_eq!(SortMode::default(), SortMode::ByDate);
    }

    #[test]
    fn test_result_count_values() {
        assert_eq!(ResultCount::Twenty.as_u32(), 20);
        assert_eq!(ResultCount::Fifty.as_u32(), 50);
        assert_eq!(ResultCount::Hundred.as_u32(), 100);
    }

    #[test]
    fn test_result_count_display_shows_number() {
        assert_eq!(ResultCount::Fifty.to_string(), "50");
    }

    #[test]
    fn test_build_trims_keyword_whitespace() {
        let query = SearchQuery::build("  포스코  ", ResultCount::Twenty, SortMode::ByDate);

        assert_eq!(query.keyword, "포스코");
        assert!(query.has_keyword());
    }

    #[test]
    fn test_whitespace_only_keyword_is_empty() {
        let query = SearchQuery::build("   ", ResultCount::Twenty, SortMode::ByDate);

        assert!(!query.has_keyword());
    }
}
