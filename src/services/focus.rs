//! Pomodoro-style focus countdown.
//!
//! Purely local state driven by a 1-second tick from the UI; it never
//! touches the shared store.

use serde::{Deserialize, Serialize};

const FOCUS_SECS: u32 = 25 * 60;
const BREAK_SECS: u32 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusMode {
    Focus,
    Break,
}

impl FocusMode {
    fn duration_secs(self) -> u32 {
        match self {
            FocusMode::Focus => FOCUS_SECS,
            FocusMode::Break => BREAK_SECS,
        }
    }
}

pub struct FocusTimer {
    mode: FocusMode,
    seconds_left: u32,
    running: bool,
    sessions_completed: u32,
}

impl FocusTimer {
    pub fn new() -> Self {
        Self {
            mode: FocusMode::Focus,
            seconds_left: FOCUS_SECS,
            running: false,
            sessions_completed: 0,
        }
    }

    pub fn mode(&self) -> FocusMode {
        self.mode
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    /// Start or pause the countdown.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop and restore the full duration of the current mode.
    pub fn reset(&mut self) {
        self.running = false;
        self.seconds_left = self.mode.duration_secs();
    }

    /// Switch mode explicitly (stops the countdown).
    pub fn set_mode(&mut self, mode: FocusMode) {
        self.mode = mode;
        self.reset();
    }

    /// Advance one second. When the countdown hits zero, a focus session
    /// is counted and the timer flips to the other mode, stopped.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.seconds_left = self.seconds_left.saturating_sub(1);
        if self.seconds_left == 0 {
            self.complete_session();
        }
    }

    fn complete_session(&mut self) {
        if self.mode == FocusMode::Focus {
            self.sessions_completed += 1;
            self.mode = FocusMode::Break;
        } else {
            self.mode = FocusMode::Focus;
        }
        self.seconds_left = self.mode.duration_secs();
        self.running = false;
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_on_a_full_focus_session() {
        let timer = FocusTimer::new();
        assert_eq!(timer.mode(), FocusMode::Focus);
        assert_eq!(timer.seconds_left(), 25 * 60);
        assert!(!timer.is_running());
        assert_eq!(timer.sessions_completed(), 0);
    }

    #[test]
    fn tick_is_inert_while_paused() {
        let mut timer = FocusTimer::new();
        timer.tick();
        assert_eq!(timer.seconds_left(), 25 * 60);
    }

    #[test]
    fn completing_a_focus_session_counts_it_and_flips_to_break() {
        let mut timer = FocusTimer::new();
        timer.toggle();
        for _ in 0..(25 * 60) {
            timer.tick();
        }

        assert_eq!(timer.sessions_completed(), 1);
        assert_eq!(timer.mode(), FocusMode::Break);
        assert_eq!(timer.seconds_left(), 5 * 60);
        assert!(!timer.is_running());
    }

    #[test]
    fn completing_a_break_flips_back_without_counting() {
        let mut timer = FocusTimer::new();
        timer.set_mode(FocusMode::Break);
        timer.toggle();
        for _ in 0..(5 * 60) {
            timer.tick();
        }

        assert_eq!(timer.sessions_completed(), 0);
        assert_eq!(timer.mode(), FocusMode::Focus);
        assert_eq!(timer.seconds_left(), 25 * 60);
    }

    #[test]
    fn reset_restores_the_current_mode_duration() {
        let mut timer = FocusTimer::new();
        timer.toggle();
        timer.tick();
        timer.tick();
        timer.reset();

        assert_eq!(timer.seconds_left(), 25 * 60);
        assert!(!timer.is_running());
    }
}
