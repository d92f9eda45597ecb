//! Dashboard screen state
//!
//! Data owned by the screen itself. Everything fetched from the backend
//! stays in the controller's `AppState`.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug)]
pub struct DashboardState {
    /// When the screen was opened, for the session timer.
    pub start_time: Instant,
    /// Alerts and notices, oldest first.
    pub activity_logs: VecDeque<Event>,
    /// Highlighted row of the primary table.
    pub selected: usize,
    /// A backend request is still running.
    pub busy: bool,
    pub with_background_color: bool,
}

impl DashboardState {
    pub fn new(start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            start_time,
            activity_logs: VecDeque::new(),
            selected: 0,
            busy: false,
            with_background_color: ui_config.with_background_color,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keeps the selection inside a table that may have shrunk after a reload.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DashboardState {
        DashboardState::new(Instant::now(), UIConfig::new(false))
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = state();
        for i in 0..MAX_ACTIVITY_LOGS + 5 {
            state.add_to_activity_log(Event::success(format!("event {}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = state();
        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.selected, 1);
        state.clamp_selection(0);
        assert_eq!(state.selected, 0);
    }
}
