// Focus timer commands
// The frontend drives the countdown with a 1-second tick; the timer never
// touches the shared store.

use std::sync::Mutex;

use serde::Serialize;
use tauri::State;

use crate::services::focus::{FocusMode, FocusTimer};

#[derive(Default)]
pub struct FocusState(pub Mutex<FocusTimer>);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusView {
    pub mode: FocusMode,
    pub seconds_left: u32,
    pub running: bool,
    pub sessions_completed: u32,
}

impl FocusView {
    fn of(timer: &FocusTimer) -> Self {
        Self {
            mode: timer.mode(),
            seconds_left: timer.seconds_left(),
            running: timer.is_running(),
            sessions_completed: timer.sessions_completed(),
        }
    }
}

#[tauri::command]
pub fn focus_status(state: State<'_, FocusState>) -> Result<FocusView, String> {
    let timer = state.0.lock().map_err(|e| e.to_string())?;
    Ok(FocusView::of(&timer))
}

#[tauri::command]
pub fn focus_toggle(state: State<'_, FocusState>) -> Result<FocusView, String> {
    let mut timer = state.0.lock().map_err(|e| e.to_string())?;
    timer.toggle();
    Ok(FocusView::of(&timer))
}

#[tauri::command]
pub fn focus_tick(state: State<'_, FocusState>) -> Result<FocusView, String> {
    let mut timer = state.0.lock().map_err(|e| e.to_string())?;
    timer.tick();
    Ok(FocusView::of(&timer))
}

#[tauri::command]
pub fn focus_reset(state: State<'_, FocusState>) -> Result<FocusView, String> {
    let mut timer = state.0.lock().map_err(|e| e.to_string())?;
    timer.reset();
    Ok(FocusView::of(&timer))
}

#[tauri::command]
pub fn focus_set_mode(mode: FocusMode, state: State<'_, FocusState>) -> Result<FocusView, String> {
    let mut timer = state.0.lock().map_err(|e| e.to_string())?;
    timer.set_mode(mode);
    Ok(FocusView::of(&timer))
}
