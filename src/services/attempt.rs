//! One in-progress traversal of a quiz's questions.
//!
//! Attempt state lives outside the shared store: only the final score is
//! ever dispatched back, by the command layer once `advance` reports the
//! attempt finished.

use std::collections::HashMap;

use log::debug;

use crate::models::{Quiz, QuizQuestion};

/// Where the attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    InProgress { question_index: usize },
    Completed { score: u8 },
}

/// Result of advancing past the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on to the question at this index.
    Next { question_index: usize },
    /// The last question was passed; the attempt is now completed with
    /// this score and the caller should record it in the store.
    Finished { score: u8 },
}

pub struct QuizAttempt {
    quiz_id: String,
    questions: Vec<QuizQuestion>,
    /// Question id -> chosen option. Overwritten on re-selection.
    selected_answers: HashMap<String, String>,
    phase: AttemptPhase,
}

impl QuizAttempt {
    /// Start an attempt at the first question, with nothing answered.
    pub fn new(quiz: &Quiz) -> Self {
        debug!("attempt: start on quiz {}", quiz.id);
        Self {
            quiz_id: quiz.id.clone(),
            questions: quiz.questions.clone(),
            selected_answers: HashMap::new(),
            phase: AttemptPhase::InProgress { question_index: 0 },
        }
    }

    pub fn quiz_id(&self) -> &str {
        &self.quiz_id
    }

    pub fn phase(&self) -> AttemptPhase {
        self.phase
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question currently shown, or `None` once completed.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            AttemptPhase::InProgress { question_index } => self.questions.get(question_index),
            AttemptPhase::Completed { .. } => None,
        }
    }

    pub fn selected_answer(&self, question_id: &str) -> Option<&str> {
        self.selected_answers.get(question_id).map(String::as_str)
    }

    pub fn selected_answers(&self) -> &HashMap<String, String> {
        &self.selected_answers
    }

    /// Record (or overwrite) the chosen option for a question.
    ///
    /// Returns `false` without recording anything when the attempt is
    /// already completed or the question id does not belong to this quiz.
    pub fn select_answer(&mut self, question_id: &str, option: &str) -> bool {
        if matches!(self.phase, AttemptPhase::Completed { .. }) {
            return false;
        }
        if !self.questions.iter().any(|q| q.id == question_id) {
            return false;
        }
        self.selected_answers
            .insert(question_id.to_string(), option.to_string());
        true
    }

    /// Move past the current question. On the last question this computes
    /// the final score and transitions the attempt to `Completed`; a
    /// completed attempt re-reports the same score without recomputing.
    pub fn advance(&mut self) -> AdvanceOutcome {
        match self.phase {
            AttemptPhase::Completed { score } => AdvanceOutcome::Finished { score },
            AttemptPhase::InProgress { question_index } => {
                if question_index + 1 < self.questions.len() {
                    let next = question_index + 1;
                    self.phase = AttemptPhase::InProgress {
                        question_index: next,
                    };
                    AdvanceOutcome::Next {
                        question_index: next,
                    }
                } else {
                    let score = self.score();
                    self.phase = AttemptPhase::Completed { score };
                    debug!("attempt: quiz {} finished, score {}", self.quiz_id, score);
                    AdvanceOutcome::Finished { score }
                }
            }
        }
    }

    /// round(100 x correct / total); unanswered questions count as
    /// incorrect. Quizzes are non-empty by invariant, but an empty one
    /// still scores 0 rather than dividing by zero.
    fn score(&self) -> u8 {
        if self.questions.is_empty() {
            return 0;
        }
        let correct = self
            .questions
            .iter()
            .filter(|q| self.selected_answers.get(&q.id) == Some(&q.correct_answer))
            .count();
        (correct as f64 / self.questions.len() as f64 * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn quiz() -> Quiz {
        Quiz {
            id: "t".to_string(),
            title: "Test".to_string(),
            subject: "Physique".to_string(),
            color: "#8B5CF6".to_string(),
            duration: "5 min".to_string(),
            difficulty: Difficulty::Facile,
            score: None,
            questions: vec![
                QuizQuestion {
                    id: "q1".to_string(),
                    question: "1 + 1 ?".to_string(),
                    options: vec!["1".to_string(), "2".to_string()],
                    correct_answer: "2".to_string(),
                },
                QuizQuestion {
                    id: "q2".to_string(),
                    question: "2 + 2 ?".to_string(),
                    options: vec!["4".to_string(), "5".to_string()],
                    correct_answer: "4".to_string(),
                },
            ],
        }
    }

    #[test]
    fn one_correct_out_of_two_scores_fifty() {
        let mut attempt = QuizAttempt::new(&quiz());
        attempt.select_answer("q1", "2");
        attempt.select_answer("q2", "5");

        assert_eq!(attempt.advance(), AdvanceOutcome::Next { question_index: 1 });
        assert_eq!(attempt.advance(), AdvanceOutcome::Finished { score: 50 });
        assert_eq!(attempt.phase(), AttemptPhase::Completed { score: 50 });
    }

    #[test]
    fn unanswered_questions_count_as_incorrect() {
        let mut attempt = QuizAttempt::new(&quiz());

        attempt.advance();
        assert_eq!(attempt.advance(), AdvanceOutcome::Finished { score: 0 });
    }

    #[test]
    fn all_correct_scores_one_hundred() {
        let mut attempt = QuizAttempt::new(&quiz());
        attempt.select_answer("q1", "2");
        attempt.select_answer("q2", "4");

        attempt.advance();
        assert_eq!(attempt.advance(), AdvanceOutcome::Finished { score: 100 });
    }

    #[test]
    fn reselecting_overwrites_the_previous_answer() {
        let mut attempt = QuizAttempt::new(&quiz());
        attempt.select_answer("q1", "1");
        attempt.select_answer("q1", "2");

        assert_eq!(attempt.selected_answer("q1"), Some("2"));
    }

    #[test]
    fn selecting_after_completion_has_no_effect() {
        let mut attempt = QuizAttempt::new(&quiz());
        attempt.advance();
        attempt.advance();

        assert!(!attempt.select_answer("q1", "2"));
        assert_eq!(attempt.selected_answer("q1"), None);
    }

    #[test]
    fn selecting_an_unknown_question_is_an_explicit_miss() {
        let mut attempt = QuizAttempt::new(&quiz());
        assert!(!attempt.select_answer("zz", "2"));
    }

    #[test]
    fn advancing_a_completed_attempt_repeats_the_same_score() {
        let mut attempt = QuizAttempt::new(&quiz());
        attempt.select_answer("q1", "2");
        attempt.advance();
        attempt.advance();

        assert_eq!(attempt.advance(), AdvanceOutcome::Finished { score: 50 });
        // Late answers do not change a completed attempt either.
        attempt.select_answer("q2", "4");
        assert_eq!(attempt.advance(), AdvanceOutcome::Finished { score: 50 });
    }

    #[test]
    fn current_question_follows_the_index_then_disappears() {
        let mut attempt = QuizAttempt::new(&quiz());
        assert_eq!(attempt.current_question().unwrap().id, "q1");

        attempt.advance();
        assert_eq!(attempt.current_question().unwrap().id, "q2");

        attempt.advance();
        assert!(attempt.current_question().is_none());
    }
}
