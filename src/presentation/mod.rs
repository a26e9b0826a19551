pub mod app_theme;
pub mod result_presenter;
mod results_view;

pub use results_view::{ResultsView, ResultsViewMessage};
