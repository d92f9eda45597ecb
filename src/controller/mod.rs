//! Dashboard controller
//!
//! Owns the [`AppState`] and turns user intents (log in, submit a lot, book a
//! spot, ...) into backend calls. Every mutation is followed by a full reload
//! of the affected dashboard; nothing is patched in place.

mod loader;
mod lots;
mod reservations;
mod session;
pub mod state;

pub use state::{AppState, AuthView, Modal, View};

use crate::api::ParkingApi;
use crate::api::error::ApiError;
use crate::error_classifier::ErrorClassifier;
use crate::models::{LoginForm, LotForm, RegisterForm};
use crate::presenter::Presenter;
use crate::storage::KeyValueStore;

/// A destructive action waiting for the user's confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteLot(u64),
    ReleaseSpot(u64),
}

impl PendingAction {
    pub fn prompt(&self) -> String {
        match self {
            PendingAction::DeleteLot(id) => {
                format!("Are you sure you want to delete parking lot #{}?", id)
            }
            PendingAction::ReleaseSpot(id) => {
                format!("Are you sure you want to release reservation #{}?", id)
            }
        }
    }
}

/// Result of a confirmation-gated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The user declined; no request was sent.
    Cancelled,
}

pub struct DashboardController {
    api: Box<dyn ParkingApi>,
    presenter: Box<dyn Presenter>,
    store: Box<dyn KeyValueStore>,
    classifier: ErrorClassifier,
    state: AppState,
}

impl DashboardController {
    pub fn new(
        api: Box<dyn ParkingApi>,
        presenter: Box<dyn Presenter>,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        Self {
            api,
            presenter,
            store,
            classifier: ErrorClassifier::new(),
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.state.login_form
    }

    pub fn register_form_mut(&mut self) -> &mut RegisterForm {
        &mut self.state.register_form
    }

    pub fn lot_form_mut(&mut self) -> &mut LotForm {
        &mut self.state.lot_form
    }

    /// Surfaces a failed call: the server's message is shown to the user,
    /// every failure is logged. The error is handed back so the caller can
    /// skip whatever depended on the call.
    fn surface<T>(&self, action: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        result.map_err(|err| {
            let level: log::Level = self.classifier.classify_api_error(&err).into();
            log::log!(level, "{} failed: {}", action, err);
            if let Some(message) = err.server_message() {
                self.presenter.alert(message);
            }
            err
        })
    }

    /// Asks the presenter before any request for `action` is built.
    fn confirm(&self, action: PendingAction) -> bool {
        let confirmed = self.presenter.confirm(&action.prompt());
        if !confirmed {
            log::info!("{:?} cancelled by user", action);
        }
        confirmed
    }
}
