// Service modules
// Core business logic behind the command layer.

pub mod attempt;
pub mod focus;
pub mod seed;
pub mod store;
pub mod summary;

pub use attempt::{AdvanceOutcome, AttemptPhase, QuizAttempt};
pub use focus::{FocusMode, FocusTimer};
pub use store::{AppSnapshot, AppStore, FinishQuizOutcome};
pub use summary::{SummaryError, SummaryService};
