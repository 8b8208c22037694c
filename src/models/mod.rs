use serde::{Deserialize, Serialize};

/// A school subject with its standalone progress counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub color: String,
    /// 0-100, maintained independently of lessons and quizzes.
    pub progress: u8,
    pub next_revision: String,
}

/// A scheduled revision slot. Flat record, no recurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    pub id: String,
    pub subject: String,
    pub topic: String,
    pub date: String,
    pub time: String,
    pub color: String,
}

/// Source a lesson was imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Pdf,
    Text,
    Image,
    Audio,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub color: String,
    pub date: String,
    /// Condensed version of `content`, AI-generated for imported lessons.
    pub summary: String,
    #[serde(rename = "type")]
    pub kind: LessonKind,
    /// Raw source text, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Single-choice question. `correct_answer` must equal one of `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Quiz difficulty, displayed as-is in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Facile,
    Moyen,
    Difficile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub color: String,
    pub questions: Vec<QuizQuestion>,
    pub duration: String,
    pub difficulty: Difficulty,
    /// `None` until the quiz has been completed at least once, then
    /// overwritten on each completion.
    pub score: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardSet {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub color: String,
    pub cards: Vec<Flashcard>,
}

/// One entry of the append-only tutor chat log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    #[serde(rename = "isAI")]
    pub is_ai: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGoal {
    pub current: u32,
    pub total: u32,
}

/// Accumulated profile statistics, mutated only by store transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub daily_goal: DailyGoal,
    pub points: u32,
    pub lessons_studied: u32,
    /// Rounded average over quizzes with a recorded score, 0-100.
    pub success_rate: u8,
    pub streak: u32,
}
