use std::sync::Arc;

use iced::{Element, Task};

use crate::adapters::{CredentialSource, NaverNewsSearchProvider};
use crate::core::orchestrators::{SearchMessage, SearchOrchestrator};
use crate::user_settings::UserSettings;

pub struct NewsSearchApp {
    orchestrator: SearchOrchestrator,
}

impl NewsSearchApp {
    pub fn build() -> (Self, Task<SearchMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|error| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", error);
            UserSettings::default()
        });

        let credential_source = CredentialSource::from_settings(&settings);
        let provider = Arc::new(NaverNewsSearchProvider::build(credential_source));

        let mut orchestrator = SearchOrchestrator::build(provider, &settings);
        let initial_task = orchestrator.start_initial_search();

        (Self { orchestrator }, initial_task)
    }

    pub fn handle_update(&mut self, message: SearchMessage) -> Task<SearchMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, SearchMessage> {
        self.orchestrator.render_view()
    }

    pub fn theme(&self) -> iced::Theme {
        self.orchestrator.theme()
    }
}
