//! In-memory state store.
//!
//! Holds one shared snapshot of every domain collection plus the profile
//! stats. Transitions are synchronous, applied atomically under the caller's
//! lock, and never fail on valid input; lookup misses are reported
//! explicitly rather than swallowed.

use log::{debug, warn};
use serde::Serialize;

use crate::models::{
    ChatMessage, FlashcardSet, Lesson, Quiz, Revision, Stats, Subject,
};
use crate::services::seed;

/// The complete current value of all store collections and stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub subjects: Vec<Subject>,
    pub upcoming_revisions: Vec<Revision>,
    /// Newest-first.
    pub lessons: Vec<Lesson>,
    pub quizzes: Vec<Quiz>,
    pub flashcard_sets: Vec<FlashcardSet>,
    /// Chronological, append-only.
    pub chat_messages: Vec<ChatMessage>,
    pub stats: Stats,
}

/// Result of a [`AppStore::finish_quiz`] transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishQuizOutcome {
    /// The quiz was found and its score recorded.
    Completed {
        /// Success rate after recomputation over all scored quizzes.
        success_rate: u8,
    },
    /// No quiz with that id exists; the snapshot was left untouched.
    UnknownQuiz,
}

/// Owns the live snapshot and the seed it was built from.
pub struct AppStore {
    seed: AppSnapshot,
    state: AppSnapshot,
    /// Bumped on every applied transition, for cheap change detection.
    version: u64,
}

impl AppStore {
    pub fn new() -> Self {
        let seed = seed::snapshot();
        Self {
            state: seed.clone(),
            seed,
            version: 0,
        }
    }

    // ==================== Transitions ====================

    /// Prepend a lesson (newest-first) and count it as studied.
    ///
    /// Duplicate ids are accepted and not merged; the UI keys lessons by
    /// position, and nothing ever deletes by id.
    pub fn add_lesson(&mut self, lesson: Lesson) {
        debug!("store: add_lesson {} ({})", lesson.id, lesson.title);
        self.state.lessons.insert(0, lesson);
        self.state.stats.lessons_studied += 1;
        self.version += 1;
    }

    /// Append a chat message in chronological order. No cap on the log.
    pub fn add_chat_message(&mut self, message: ChatMessage) {
        debug!("store: add_chat_message {} (ai={})", message.id, message.is_ai);
        self.state.chat_messages.push(message);
        self.version += 1;
    }

    /// Record a quiz completion: set the score, award points, and
    /// recompute the success rate over every scored quiz.
    pub fn finish_quiz(&mut self, quiz_id: &str, score: u8) -> FinishQuizOutcome {
        let Some(quiz) = self.state.quizzes.iter_mut().find(|q| q.id == quiz_id) else {
            warn!("store: finish_quiz on unknown quiz {:?}", quiz_id);
            return FinishQuizOutcome::UnknownQuiz;
        };

        quiz.score = Some(score);
        self.state.stats.points += (f64::from(score) * 0.5).round() as u32;

        // Cannot be empty here since this quiz was just scored, but the
        // guard keeps the division total.
        if let Some(rate) = average_score(&self.state.quizzes) {
            self.state.stats.success_rate = rate;
        }
        self.version += 1;

        debug!(
            "store: finish_quiz {} score={} success_rate={}",
            quiz_id, score, self.state.stats.success_rate
        );
        FinishQuizOutcome::Completed {
            success_rate: self.state.stats.success_rate,
        }
    }

    /// Replace the whole snapshot with the original seed. Pure overwrite;
    /// no partial reset exists.
    pub fn reset(&mut self) {
        debug!("store: reset to seed snapshot");
        self.state = self.seed.clone();
        self.version += 1;
    }

    // ==================== Selectors ====================

    pub fn snapshot(&self) -> &AppSnapshot {
        &self.state
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.state.subjects
    }

    pub fn upcoming_revisions(&self) -> &[Revision] {
        &self.state.upcoming_revisions
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.state.lessons
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.state.lessons.iter().find(|l| l.id == id)
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.state.quizzes
    }

    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.state.quizzes.iter().find(|q| q.id == id)
    }

    pub fn flashcard_sets(&self) -> &[FlashcardSet] {
        &self.state.flashcard_sets
    }

    pub fn flashcard_set(&self, id: &str) -> Option<&FlashcardSet> {
        self.state.flashcard_sets.iter().find(|s| s.id == id)
    }

    pub fn chat_messages(&self) -> &[ChatMessage] {
        &self.state.chat_messages
    }

    pub fn stats(&self) -> &Stats {
        &self.state.stats
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounded mean of the scores of every quiz that has one. `None` when no
/// quiz has been scored yet.
fn average_score(quizzes: &[Quiz]) -> Option<u8> {
    let scores: Vec<u32> = quizzes
        .iter()
        .filter_map(|q| q.score.map(u32::from))
        .collect();
    if scores.is_empty() {
        return None;
    }
    let total: u32 = scores.iter().sum();
    Some((f64::from(total) / scores.len() as f64).round() as u8)
}
