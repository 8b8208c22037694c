// Store commands
// Read and write access to the shared in-memory state for the frontend.

use std::sync::Mutex;

use serde::Deserialize;
use tauri::State;

use crate::models::{
    ChatMessage, FlashcardSet, Lesson, LessonKind, Quiz, Revision, Stats, Subject,
};
use crate::services::store::{AppStore, FinishQuizOutcome};
use crate::utils;

/// Shared store, managed by the Tauri runtime. The mutex serializes
/// transitions so each one applies atomically.
pub struct StoreState(pub Mutex<AppStore>);

impl Default for StoreState {
    fn default() -> Self {
        Self(Mutex::new(AppStore::new()))
    }
}

/// Canned tutor reply; the chat assistant is scripted, the Gemini key is
/// only used for lesson summaries.
const TUTOR_REPLY: &str =
    "Je comprends votre question. Laissez-moi vous expliquer en détail...";

/// Manually entered lesson, id and date filled in server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLessonInput {
    pub title: String,
    pub subject: String,
    pub color: String,
    pub summary: String,
    pub content: Option<String>,
}

// ==================== Read commands ====================

#[tauri::command]
pub fn get_subjects(state: State<'_, StoreState>) -> Result<Vec<Subject>, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    Ok(store.subjects().to_vec())
}

#[tauri::command]
pub fn get_upcoming_revisions(state: State<'_, StoreState>) -> Result<Vec<Revision>, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    Ok(store.upcoming_revisions().to_vec())
}

#[tauri::command]
pub fn get_stats(state: State<'_, StoreState>) -> Result<Stats, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    Ok(store.stats().clone())
}

#[tauri::command]
pub fn get_lessons(state: State<'_, StoreState>) -> Result<Vec<Lesson>, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    Ok(store.lessons().to_vec())
}

#[tauri::command]
pub fn get_lesson(id: String, state: State<'_, StoreState>) -> Result<Lesson, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    store
        .lesson(&id)
        .cloned()
        .ok_or_else(|| format!("Leçon introuvable: {}", id))
}

#[tauri::command]
pub fn get_quizzes(state: State<'_, StoreState>) -> Result<Vec<Quiz>, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    Ok(store.quizzes().to_vec())
}

#[tauri::command]
pub fn get_quiz(id: String, state: State<'_, StoreState>) -> Result<Quiz, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    store
        .quiz(&id)
        .cloned()
        .ok_or_else(|| format!("Quiz introuvable: {}", id))
}

#[tauri::command]
pub fn get_flashcard_sets(state: State<'_, StoreState>) -> Result<Vec<FlashcardSet>, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    Ok(store.flashcard_sets().to_vec())
}

#[tauri::command]
pub fn get_flashcard_set(id: String, state: State<'_, StoreState>) -> Result<FlashcardSet, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    store
        .flashcard_set(&id)
        .cloned()
        .ok_or_else(|| format!("Jeu de cartes introuvable: {}", id))
}

#[tauri::command]
pub fn get_chat_messages(state: State<'_, StoreState>) -> Result<Vec<ChatMessage>, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    Ok(store.chat_messages().to_vec())
}

/// Cheap change marker so screens can skip refetching unchanged state.
#[tauri::command]
pub fn get_store_version(state: State<'_, StoreState>) -> Result<u64, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    Ok(store.version())
}

// ==================== Write commands ====================

#[tauri::command]
pub fn add_lesson(input: NewLessonInput, state: State<'_, StoreState>) -> Result<Lesson, String> {
    let lesson = Lesson {
        id: utils::new_id(),
        title: input.title,
        subject: input.subject,
        color: input.color,
        date: utils::now_iso(),
        summary: input.summary,
        kind: LessonKind::Text,
        content: input.content,
    };

    let mut store = state.0.lock().map_err(|e| e.to_string())?;
    store.add_lesson(lesson.clone());
    Ok(lesson)
}

#[tauri::command]
pub fn add_chat_message(
    text: String,
    is_ai: bool,
    state: State<'_, StoreState>,
) -> Result<ChatMessage, String> {
    let message = ChatMessage {
        id: utils::new_id(),
        text,
        is_ai,
        timestamp: utils::now_iso(),
    };

    let mut store = state.0.lock().map_err(|e| e.to_string())?;
    store.add_chat_message(message.clone());
    Ok(message)
}

/// Append the user's message followed by the tutor's reply; returns both
/// in chronological order.
#[tauri::command]
pub fn send_chat_message(
    text: String,
    state: State<'_, StoreState>,
) -> Result<Vec<ChatMessage>, String> {
    let user_message = ChatMessage {
        id: utils::new_id(),
        text,
        is_ai: false,
        timestamp: utils::now_iso(),
    };
    let reply = ChatMessage {
        id: utils::new_id(),
        text: TUTOR_REPLY.to_string(),
        is_ai: true,
        timestamp: utils::now_iso(),
    };

    let mut store = state.0.lock().map_err(|e| e.to_string())?;
    store.add_chat_message(user_message.clone());
    store.add_chat_message(reply.clone());
    Ok(vec![user_message, reply])
}

#[tauri::command]
pub fn finish_quiz(
    quiz_id: String,
    score: u8,
    state: State<'_, StoreState>,
) -> Result<Stats, String> {
    let mut store = state.0.lock().map_err(|e| e.to_string())?;
    match store.finish_quiz(&quiz_id, score) {
        FinishQuizOutcome::Completed { .. } => Ok(store.stats().clone()),
        FinishQuizOutcome::UnknownQuiz => Err(format!("Quiz introuvable: {}", quiz_id)),
    }
}

#[tauri::command]
pub fn reset_state(state: State<'_, StoreState>) -> Result<(), String> {
    let mut store = state.0.lock().map_err(|e| e.to_string())?;
    store.reset();
    Ok(())
}
