use crate::core::models::{ResultCount, SortMode};
use crate::global_constants;

/// Per-session form state. Owned by the orchestrator and passed into rendering
/// explicitly instead of living in ambient globals.
#[derive(Debug, Clone)]
pub struct SearchSession {
    pub keyword: String,
    pub sort_mode: SortMode,
    pub result_count: ResultCount,
    /// One-shot flag: the first render triggers a single automatic search with
    /// the seed keyword, then the flag stays cleared for the session.
    pub initial_search: bool,
    /// Monotonic counter identifying the in-flight search. A completion
    /// carrying an older generation is stale and must be dropped.
    pub request_generation: u64,
}

impl SearchSession {
    pub fn build(seed_keyword: &str) -> Self {
        Self {
            keyword: seed_keyword.to_string(),
            sort_mode: SortMode::default(),
            result_count: ResultCount::default(),
            initial_search: true,
            request_generation: 0,
        }
    }

    /// Consumes the one-shot flag, returning whether it was still set.
    pub fn take_initial_search(&mut self) -> bool {
        std::mem::take(&mut self.initial_search)
    }

    /// Advances to the next search generation and returns it.
    pub fn next_generation(&mut self) -> u64 {
        self.request_generation += 1;
        self.request_generation
    }

    pub fn is_current_generation(&self, generation: u64) -> bool {
        self.request_generation == generation
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::build(global_constants::DEFAULT_SEARCH_KEYWORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_uses_seed_keyword() {
        let session = SearchSession::default();

        assert_eq!(session.keyword, global_constants::DEFAULT_SEARCH_KEYWORD);
        assert_eq!(session.sort_mode, SortMode::ByDate);
        assert_eq!(session.result_count, ResultCount::Twenty);
        assert!(session.initial_search);
    }

    #[test]
    fn test_take_initial_search_fires_exactly_once() {
        let mut session = SearchSession::build("포스코");

        assert!(session.take_initial_search());
        assert!(!session.take_initial_search());
        assert!(!session.initial_search);
    }

    #[test]
    fn test_generations_advance_and_invalidate_older_ones() {
        let mut session = SearchSession::build("포스코");

        assert!(session.is_current_generation(0));

        let first = session.next_generation();
        let second = session.next_generation();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert!(session.is_current_generation(second));
        assert!(!session.is_current_generation(first));
    }
}
