//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::UI_POLL_INTERVAL_MS;
use crate::controller::{AppState, DashboardController, View};
use crate::events::Event as DashboardEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::worker::{ControllerWorker, Intent};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

pub struct App {
    /// Runs backend calls off the UI loop.
    worker: ControllerWorker,

    /// Controller state as of the last finished intent.
    state: AppState,

    /// Receives alerts and notices raised by the controller.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    dashboard: DashboardState,
}

impl App {
    /// Hands `controller` to a background worker. Must be called inside a tokio runtime.
    pub fn new(
        controller: DashboardController,
        event_sender: mpsc::Sender<DashboardEvent>,
        event_receiver: mpsc::Receiver<DashboardEvent>,
        ui_config: UIConfig,
    ) -> Self {
        let state = controller.state().clone();
        Self {
            worker: ControllerWorker::spawn(controller, event_sender),
            state,
            event_receiver,
            dashboard: DashboardState::new(Instant::now(), ui_config),
        }
    }

    /// Pulls in the worker's latest state and queued controller messages.
    fn sync(&mut self) {
        // Read first: a finished intent publishes its state before it stops counting as busy
        let busy = self.worker.is_busy();
        if let Some(state) = self.worker.latest_state() {
            self.state = state;
        }
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_to_activity_log(event);
        }
        self.dashboard.busy = busy;
        let len = self.primary_len();
        self.dashboard.clamp_selection(len);
    }

    /// Rows of the selectable table in the current view.
    fn primary_len(&self) -> usize {
        match self.state.view() {
            View::Admin => self.state.parking_lots.len(),
            View::User => self.state.available_lots.len(),
            View::Unauthenticated(_) => 0,
        }
    }

    /// Handles one key press without waiting on the backend.
    /// Returns `true` when the dashboard should close.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        let view = self.state.view();
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                if self.state.modal.is_none() {
                    return true;
                }
                self.worker.send(Intent::CloseModal);
            }
            KeyCode::Char('r') => {
                self.worker.send(Intent::Refresh);
            }
            KeyCode::Up => self.dashboard.select_previous(),
            KeyCode::Down => {
                let len = self.primary_len();
                self.dashboard.select_next(len);
            }
            KeyCode::Char('s') if view == View::Admin => {
                if let Some(lot) = self.state.parking_lots.get(self.dashboard.selected) {
                    self.worker.send(Intent::ViewSpots(lot.clone()));
                }
            }
            KeyCode::Char('b') if view == View::User => {
                if let Some(lot) = self.state.available_lots.get(self.dashboard.selected) {
                    self.worker.send(Intent::Book(lot.clone()));
                }
            }
            KeyCode::Char('x') if view == View::User => {
                self.worker.send(Intent::ExportCsv);
            }
            _ => {}
        }
        false
    }
}

/// Runs the dashboard until the user quits.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.sync();
        terminal.draw(|f| render_dashboard(f, &app.dashboard, &app.state))?;

        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
        // Let the worker task run between frames
        tokio::task::yield_now().await;
    }
}
