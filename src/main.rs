#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;
mod user_settings;

use iced::Size;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting news search application");

    iced::application(
        global_constants::APPLICATION_TITLE,
        app::NewsSearchApp::handle_update,
        app::NewsSearchApp::render_view,
    )
    .theme(app::NewsSearchApp::theme)
    .window_size(Size::new(
        global_constants::WINDOW_WIDTH,
        global_constants::WINDOW_HEIGHT,
    ))
    .run_with(app::NewsSearchApp::build)
}
