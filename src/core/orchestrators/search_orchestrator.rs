use std::sync::Arc;

use iced::widget::{
    button, column, container, horizontal_rule, pick_list, radio, row, text, text_input,
};
use iced::{Alignment, Element, Length, Task};

use crate::core::interfaces::adapters::NewsSearchProvider;
use crate::core::models::{
    NewsSearchResponse, ResultCount, SearchQuery, SearchSession, SortMode,
};
use crate::global_constants;
use crate::presentation::{app_theme, ResultsView, ResultsViewMessage};
use crate::user_settings::{ThemeMode, UserSettings};

/// What the body of the window currently shows. Exactly one of these renders
/// per completed user action.
pub enum SearchBodyState {
    Idle,
    Searching,
    Results(ResultsView),
    Empty { keyword: String },
    Failed { message: String },
}

pub struct SearchOrchestrator {
    provider: Arc<dyn NewsSearchProvider>,
    session: SearchSession,
    body: SearchBodyState,
    theme_mode: ThemeMode,
}

#[derive(Clone)]
pub enum SearchMessage {
    KeywordChanged(String),
    SortModeSelected(SortMode),
    ResultCountSelected(ResultCount),
    SearchRequested,
    SearchCompleted(u64, String, Result<NewsSearchResponse, String>),
    ResultsView(ResultsViewMessage),
}

impl std::fmt::Debug for SearchMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMessage::KeywordChanged(keyword) => write!(f, "KeywordChanged({})", keyword),
            SearchMessage::SortModeSelected(mode) => write!(f, "SortModeSelected({:?})", mode),
            SearchMessage::ResultCountSelected(count) => {
                write!(f, "ResultCountSelected({:?})", count)
            }
            SearchMessage::SearchRequested => write!(f, "SearchRequested"),
            SearchMessage::SearchCompleted(generation, keyword, result) => {
                write!(
                    f,
                    "SearchCompleted(gen={}, {}, ok={})",
                    generation,
                    keyword,
                    result.is_ok()
                )
            }
            SearchMessage::ResultsView(msg) => write!(f, "ResultsView({:?})", msg),
        }
    }
}

impl SearchOrchestrator {
    pub fn build(provider: Arc<dyn NewsSearchProvider>, settings: &UserSettings) -> Self {
        Self {
            provider,
            session: SearchSession::build(&settings.default_keyword),
            body: SearchBodyState::Idle,
            theme_mode: settings.theme_mode.clone(),
        }
    }

    /// Fires the one automatic search on first load. A no-op on every call
    /// after the first, and when the seed keyword is empty.
    pub fn start_initial_search(&mut self) -> Task<SearchMessage> {
        if self.session.take_initial_search() && !self.session.keyword.trim().is_empty() {
            log::info!("[ORCHESTRATOR] Running initial search with seed keyword");
            return self.handle_search_requested();
        }
        Task::none()
    }

    pub fn theme(&self) -> iced::Theme {
        app_theme::get_theme(&self.theme_mode)
    }

    pub fn update(&mut self, message: SearchMessage) -> Task<SearchMessage> {
        log::debug!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            SearchMessage::KeywordChanged(keyword) => {
                self.session.keyword = keyword;
            }
            SearchMessage::SortModeSelected(sort_mode) => {
                self.session.sort_mode = sort_mode;
            }
            SearchMessage::ResultCountSelected(result_count) => {
                self.session.result_count = result_count;
            }
            SearchMessage::SearchRequested => {
                return self.handle_search_requested();
            }
            SearchMessage::SearchCompleted(generation, keyword, result) => {
                return self.handle_search_completed(generation, keyword, result);
            }
            SearchMessage::ResultsView(view_msg) => {
                return self.handle_results_view_message(view_msg);
            }
        }

        Task::none()
    }

    fn handle_search_requested(&mut self) -> Task<SearchMessage> {
        if matches!(self.body, SearchBodyState::Searching) {
            log::warn!("[ORCHESTRATOR] Ignoring search request, another search is in flight");
            return Task::none();
        }

        let query = SearchQuery::build(
            &self.session.keyword,
            self.session.result_count,
            self.session.sort_mode,
        );

        if !query.has_keyword() {
            log::warn!("[ORCHESTRATOR] Ignoring search request with empty keyword");
            return Task::none();
        }

        log::info!("[ORCHESTRATOR] Starting search for '{}'", query.keyword);
        self.body = SearchBodyState::Searching;
        let generation = self.session.next_generation();

        let provider = Arc::clone(&self.provider);
        Task::future(async move {
            let result = provider
                .search_news(&query, global_constants::FIRST_PAGE_START)
                .await
                .map_err(|error| error.to_string());
            SearchMessage::SearchCompleted(generation, query.keyword, result)
        })
    }

    fn handle_search_completed(
        &mut self,
        generation: u64,
        keyword: String,
        result: Result<NewsSearchResponse, String>,
    ) -> Task<SearchMessage> {
        if !self.session.is_current_generation(generation) {
            log::warn!(
                "[ORCHESTRATOR] Dropping stale completion for '{}' (gen {}, current {})",
                keyword,
                generation,
                self.session.request_generation
            );
            return Task::none();
        }

        match result {
            Ok(response) if response.items.is_empty() => {
                log::info!("[ORCHESTRATOR] Search for '{}' returned no articles", keyword);
                self.body = SearchBodyState::Empty { keyword };
            }
            Ok(response) => {
                log::info!(
                    "[ORCHESTRATOR] Search for '{}' returned {} articles",
                    keyword,
                    response.items.len()
                );
                self.body = SearchBodyState::Results(ResultsView::build_from_items(
                    &keyword,
                    &response.items,
                ));
            }
            Err(message) => {
                log::error!("[ORCHESTRATOR] Search for '{}' failed: {}", keyword, message);
                self.body = SearchBodyState::Failed { message };
            }
        }
        Task::none()
    }

    fn handle_results_view_message(&mut self, message: ResultsViewMessage) -> Task<SearchMessage> {
        match message {
            ResultsViewMessage::OpenArticle(link) => {
                log::info!("[ORCHESTRATOR] Opening article in browser: {}", link);
                if let Err(error) = open::that(&link) {
                    log::error!("[ORCHESTRATOR] Failed to open article link: {}", error);
                }
            }
        }
        Task::none()
    }

    pub fn render_view(&self) -> Element<'_, SearchMessage> {
        let header = text("📰 뉴스 검색").size(32);

        let keyword_input = text_input("검색 키워드 입력", &self.session.keyword)
            .on_input(SearchMessage::KeywordChanged)
            .on_submit(SearchMessage::SearchRequested)
            .padding(10)
            .width(Length::Fixed(320.0));

        let sort_toggle = row![
            radio(
                SortMode::ByDate.to_string(),
                SortMode::ByDate,
                Some(self.session.sort_mode),
                SearchMessage::SortModeSelected,
            ),
            radio(
                SortMode::ByRelevance.to_string(),
                SortMode::ByRelevance,
                Some(self.session.sort_mode),
                SearchMessage::SortModeSelected,
            ),
        ]
        .spacing(12);

        let count_select = pick_list(
            ResultCount::ALL,
            Some(self.session.result_count),
            SearchMessage::ResultCountSelected,
        )
        .padding(10);

        let searching = matches!(self.body, SearchBodyState::Searching);
        let can_search = !self.session.keyword.trim().is_empty() && !searching;
        let search_btn = button(text("🔍 검색").size(15))
            .padding([10, 24])
            .style(app_theme::primary_button_style)
            .on_press_maybe(can_search.then_some(SearchMessage::SearchRequested));

        let form = row![keyword_input, sort_toggle, count_select, search_btn]
            .spacing(16)
            .align_y(Alignment::Center);

        let body = container(self.render_body())
            .width(Length::Fill)
            .height(Length::Fill);

        let footer = text("뉴스 검색 | Powered by Naver Search API")
            .size(12)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::META_GRAY),
            });

        let content = column![header, form, horizontal_rule(1), body, horizontal_rule(1), footer]
            .spacing(16)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn render_body(&self) -> Element<'_, SearchMessage> {
        match &self.body {
            SearchBodyState::Idle => {
                text("🔎 검색창에 키워드를 입력하고 '검색' 버튼을 클릭하세요.")
                    .size(16)
                    .style(|_theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(app_theme::META_GRAY),
                    })
                    .into()
            }
            SearchBodyState::Searching => text("검색 중...").size(16).into(),
            SearchBodyState::Results(view) => view.render_ui().map(SearchMessage::ResultsView),
            SearchBodyState::Empty { keyword } => {
                text(format!("'{}'에 대한 검색 결과가 없습니다.", keyword))
                    .size(16)
                    .style(|theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(theme.palette().primary),
                    })
                    .into()
            }
            SearchBodyState::Failed { message } => text(format!("❌ {}", message))
                .size(16)
                .style(|theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(theme.palette().danger),
                })
                .into(),
        }
    }
}
