mod search_orchestrator;

pub use search_orchestrator::{SearchBodyState, SearchMessage, SearchOrchestrator};
