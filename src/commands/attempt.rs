// Quiz attempt commands
// At most one live attempt, held outside the shared store; only the final
// score is dispatched back to it.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use tauri::State;

use crate::commands::store::StoreState;
use crate::models::QuizQuestion;
use crate::services::attempt::{AdvanceOutcome, AttemptPhase, QuizAttempt};

/// The live attempt, if any. Starting a new attempt discards the previous
/// one; so does navigating away.
#[derive(Default)]
pub struct AttemptState(pub Mutex<Option<QuizAttempt>>);

/// Frontend view of the attempt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptView {
    pub quiz_id: String,
    pub total_questions: usize,
    pub completed: bool,
    /// Present while in progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuizQuestion>,
    /// Present once completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    pub selected_answers: HashMap<String, String>,
}

impl AttemptView {
    fn of(attempt: &QuizAttempt) -> Self {
        let (completed, question_index, score) = match attempt.phase() {
            AttemptPhase::InProgress { question_index } => (false, Some(question_index), None),
            AttemptPhase::Completed { score } => (true, None, Some(score)),
        };
        Self {
            quiz_id: attempt.quiz_id().to_string(),
            total_questions: attempt.total_questions(),
            completed,
            question_index,
            current_question: attempt.current_question().cloned(),
            score,
            selected_answers: attempt.selected_answers().clone(),
        }
    }
}

#[tauri::command]
pub fn start_attempt(
    quiz_id: String,
    attempt_state: State<'_, AttemptState>,
    store_state: State<'_, StoreState>,
) -> Result<AttemptView, String> {
    let store = store_state.0.lock().map_err(|e| e.to_string())?;
    let quiz = store
        .quiz(&quiz_id)
        .ok_or_else(|| format!("Quiz introuvable: {}", quiz_id))?;

    let attempt = QuizAttempt::new(quiz);
    let view = AttemptView::of(&attempt);

    let mut slot = attempt_state.0.lock().map_err(|e| e.to_string())?;
    *slot = Some(attempt);
    Ok(view)
}

#[tauri::command]
pub fn get_attempt(attempt_state: State<'_, AttemptState>) -> Result<Option<AttemptView>, String> {
    let slot = attempt_state.0.lock().map_err(|e| e.to_string())?;
    Ok(slot.as_ref().map(AttemptView::of))
}

#[tauri::command]
pub fn select_answer(
    question_id: String,
    option: String,
    attempt_state: State<'_, AttemptState>,
) -> Result<AttemptView, String> {
    let mut slot = attempt_state.0.lock().map_err(|e| e.to_string())?;
    let attempt = slot.as_mut().ok_or("Aucun quiz en cours.")?;

    if matches!(attempt.phase(), AttemptPhase::Completed { .. }) {
        return Err("Le quiz est déjà terminé.".to_string());
    }
    if !attempt.select_answer(&question_id, &option) {
        return Err(format!("Question introuvable: {}", question_id));
    }
    Ok(AttemptView::of(attempt))
}

/// Advance past the current question. Completing the last question
/// records the score in the store exactly once.
#[tauri::command]
pub fn advance_attempt(
    attempt_state: State<'_, AttemptState>,
    store_state: State<'_, StoreState>,
) -> Result<AttemptView, String> {
    let mut slot = attempt_state.0.lock().map_err(|e| e.to_string())?;
    let attempt = slot.as_mut().ok_or("Aucun quiz en cours.")?;

    let was_in_progress = matches!(attempt.phase(), AttemptPhase::InProgress { .. });
    let outcome = attempt.advance();

    // Dispatch only on the transition itself; re-advancing a completed
    // attempt must not award points twice.
    if was_in_progress {
        if let AdvanceOutcome::Finished { score } = outcome {
            let mut store = store_state.0.lock().map_err(|e| e.to_string())?;
            store.finish_quiz(attempt.quiz_id(), score);
        }
    }
    Ok(AttemptView::of(attempt))
}

#[tauri::command]
pub fn discard_attempt(attempt_state: State<'_, AttemptState>) -> Result<(), String> {
    let mut slot = attempt_state.0.lock().map_err(|e| e.to_string())?;
    *slot = None;
    Ok(())
}
