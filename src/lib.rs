//! StudyMate - Tauri backend library.
//!
//! In-memory study assistant: lessons, quizzes, flashcards, chat tutor,
//! focus timer and profile stats, plus one Gemini call for lesson
//! summaries. All state is volatile and reseeded on start.

pub mod commands;
pub mod models;
pub mod services;
pub mod utils;

use commands::{AttemptState, FocusState, StoreState, SummaryState};
use log::warn;

#[tauri::command]
fn get_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[tauri::command]
fn render_markdown(content: String) -> String {
    utils::render_markdown(&content)
}

fn init_logging() -> anyhow::Result<()> {
    let level = std::env::var("STUDYMATE_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(log::LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // .env is optional; in production the key comes from the environment.
    let _ = dotenvy::dotenv();

    if let Err(e) = init_logging() {
        eprintln!("logger init failed: {}", e);
    }
    if std::env::var(services::summary::API_KEY_ENV).is_err() {
        warn!("{} is not set; lesson summaries will be unavailable", services::summary::API_KEY_ENV);
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(StoreState::default())
        .manage(AttemptState::default())
        .manage(FocusState::default())
        .manage(SummaryState::default())
        .invoke_handler(tauri::generate_handler![
            get_app_version,
            render_markdown,
            // Store reads
            commands::get_subjects,
            commands::get_upcoming_revisions,
            commands::get_stats,
            commands::get_lessons,
            commands::get_lesson,
            commands::get_quizzes,
            commands::get_quiz,
            commands::get_flashcard_sets,
            commands::get_flashcard_set,
            commands::get_chat_messages,
            commands::get_store_version,
            // Store writes
            commands::add_lesson,
            commands::add_chat_message,
            commands::send_chat_message,
            commands::finish_quiz,
            commands::reset_state,
            // Quiz attempts
            commands::start_attempt,
            commands::get_attempt,
            commands::select_answer,
            commands::advance_attempt,
            commands::discard_attempt,
            // Lesson import
            commands::generate_summary,
            commands::import_lesson,
            // Focus timer
            commands::focus_status,
            commands::focus_toggle,
            commands::focus_tick,
            commands::focus_reset,
            commands::focus_set_mode,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
