//! Fixed illustrative data loaded at startup.
//!
//! The application has no persistence layer: every run starts from this
//! snapshot, and a full reset restores it.

use chrono::Utc;

use crate::models::{
    ChatMessage, DailyGoal, Difficulty, Flashcard, FlashcardSet, Lesson, LessonKind, Quiz,
    QuizQuestion, Revision, Stats, Subject,
};
use crate::services::store::AppSnapshot;

fn subject(id: &str, name: &str, color: &str, progress: u8, next_revision: &str) -> Subject {
    Subject {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        progress,
        next_revision: next_revision.to_string(),
    }
}

fn question(id: &str, question: &str, options: &[&str], correct_answer: &str) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct_answer.to_string(),
    }
}

fn card(id: &str, question: &str, answer: &str) -> Flashcard {
    Flashcard {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// Build the seed snapshot. Called exactly once, when the store is
/// constructed; the greeting timestamp is frozen there so a later reset
/// restores an identical snapshot.
pub fn snapshot() -> AppSnapshot {
    AppSnapshot {
        subjects: vec![
            subject("1", "Mathématiques", "#3B82F6", 75, "2025-01-15"),
            subject("2", "Physique", "#8B5CF6", 60, "2025-01-16"),
            subject("3", "Chimie", "#EC4899", 85, "2025-01-17"),
            subject("4", "Histoire", "#F59E0B", 50, "2025-01-18"),
        ],
        upcoming_revisions: vec![
            Revision {
                id: "1".to_string(),
                subject: "Mathématiques".to_string(),
                topic: "Dérivées et intégrales".to_string(),
                date: "2025-01-15".to_string(),
                time: "14:00".to_string(),
                color: "#3B82F6".to_string(),
            },
            Revision {
                id: "2".to_string(),
                subject: "Physique".to_string(),
                topic: "Électromagnétisme".to_string(),
                date: "2025-01-16".to_string(),
                time: "10:00".to_string(),
                color: "#8B5CF6".to_string(),
            },
        ],
        lessons: vec![
            Lesson {
                id: "1".to_string(),
                title: "Les dérivées et leurs applications".to_string(),
                subject: "Mathématiques".to_string(),
                color: "#3B82F6".to_string(),
                date: "2025-01-10".to_string(),
                summary: "Concepts clés des dérivées, règles de dérivation et applications pratiques.".to_string(),
                kind: LessonKind::Pdf,
                content: Some("Contenu détaillé sur les dérivées...".to_string()),
            },
            Lesson {
                id: "2".to_string(),
                title: "Électromagnétisme - Loi de Faraday".to_string(),
                subject: "Physique".to_string(),
                color: "#8B5CF6".to_string(),
                date: "2025-01-12".to_string(),
                summary: "Induction électromagnétique et applications de la loi de Faraday.".to_string(),
                kind: LessonKind::Text,
                content: Some("Contenu détaillé sur la loi de Faraday...".to_string()),
            },
            Lesson {
                id: "3".to_string(),
                title: "Réactions d'oxydoréduction".to_string(),
                subject: "Chimie".to_string(),
                color: "#EC4899".to_string(),
                date: "2025-01-13".to_string(),
                summary: "Principes des réactions redox et équilibrage des équations.".to_string(),
                kind: LessonKind::Image,
                content: Some("Contenu détaillé sur les réactions d'oxydoréduction...".to_string()),
            },
        ],
        quizzes: vec![
            Quiz {
                id: "1".to_string(),
                title: "Dérivées - Test rapide".to_string(),
                subject: "Mathématiques".to_string(),
                color: "#3B82F6".to_string(),
                duration: "10 min".to_string(),
                difficulty: Difficulty::Moyen,
                score: Some(85),
                questions: vec![
                    question(
                        "q1",
                        "Quelle est la dérivée de x² ?",
                        &["2x", "x", "2", "x/2"],
                        "2x",
                    ),
                    question(
                        "q2",
                        "Quelle est la dérivée de sin(x) ?",
                        &["-cos(x)", "cos(x)", "tan(x)", "-sin(x)"],
                        "cos(x)",
                    ),
                ],
            },
            Quiz {
                id: "2".to_string(),
                title: "Électromagnétisme".to_string(),
                subject: "Physique".to_string(),
                color: "#8B5CF6".to_string(),
                duration: "15 min".to_string(),
                difficulty: Difficulty::Difficile,
                score: None,
                questions: vec![question(
                    "q1",
                    "Qui a formulé les lois de l'électromagnétisme ?",
                    &["Newton", "Einstein", "Maxwell", "Faraday"],
                    "Maxwell",
                )],
            },
        ],
        flashcard_sets: vec![
            FlashcardSet {
                id: "1".to_string(),
                title: "Formules mathématiques".to_string(),
                subject: "Mathématiques".to_string(),
                color: "#3B82F6".to_string(),
                cards: vec![
                    card("f1-1", "Dérivée de x^n", "n * x^(n-1)"),
                    card("f1-2", "Intégrale de 1/x", "ln|x| + C"),
                    card("f1-3", "Formule quadratique", "x = [-b ± sqrt(b²-4ac)] / 2a"),
                ],
            },
            FlashcardSet {
                id: "2".to_string(),
                title: "Lois physiques".to_string(),
                subject: "Physique".to_string(),
                color: "#8B5CF6".to_string(),
                cards: vec![
                    card("f2-1", "Deuxième loi de Newton", "F = ma"),
                    card("f2-2", "Loi d'Ohm", "V = IR"),
                ],
            },
        ],
        chat_messages: vec![ChatMessage {
            id: "1".to_string(),
            text: "Bonjour! Je suis votre tuteur IA personnel. Comment puis-je vous aider aujourd'hui?".to_string(),
            is_ai: true,
            timestamp: Utc::now().to_rfc3339(),
        }],
        stats: Stats {
            daily_goal: DailyGoal { current: 4, total: 5 },
            points: 1247,
            lessons_studied: 23,
            success_rate: 87,
            streak: 7,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn quiz_answers_are_among_options() {
        for quiz in snapshot().quizzes {
            assert!(!quiz.questions.is_empty(), "quiz {} has no questions", quiz.id);
            for q in &quiz.questions {
                assert!(
                    q.options.contains(&q.correct_answer),
                    "quiz {} question {}: answer {:?} not in options",
                    quiz.id,
                    q.id,
                    q.correct_answer
                );
            }
        }
    }

    #[test]
    fn flashcard_sets_are_non_empty() {
        for set in snapshot().flashcard_sets {
            assert!(!set.cards.is_empty(), "set {} has no cards", set.id);
        }
    }

    #[test]
    fn ids_are_unique_within_each_collection() {
        let state = snapshot();

        fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>, what: &str) {
            let mut seen = HashSet::new();
            for id in ids {
                assert!(seen.insert(id), "duplicate {} id {:?}", what, id);
            }
        }

        assert_unique(state.subjects.iter().map(|s| s.id.as_str()), "subject");
        assert_unique(state.upcoming_revisions.iter().map(|r| r.id.as_str()), "revision");
        assert_unique(state.lessons.iter().map(|l| l.id.as_str()), "lesson");
        assert_unique(state.quizzes.iter().map(|q| q.id.as_str()), "quiz");
        assert_unique(state.flashcard_sets.iter().map(|s| s.id.as_str()), "flashcard set");
        assert_unique(state.chat_messages.iter().map(|m| m.id.as_str()), "chat message");
    }

    #[test]
    fn seed_stats_match_the_profile_screen() {
        let stats = snapshot().stats;
        assert_eq!(stats.points, 1247);
        assert_eq!(stats.lessons_studied, 23);
        assert_eq!(stats.success_rate, 87);
        assert_eq!(stats.streak, 7);
    }
}
