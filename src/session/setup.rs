//! Session setup and initialization

use crate::api::ApiClient;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::controller::DashboardController;
use crate::events::Event;
use crate::presenter::{ChannelPresenter, ConsolePresenter, Presenter};
use crate::storage::{FileStore, StorageError, get_session_path};
use std::error::Error;
use tokio::sync::mpsc;

/// Everything the full-screen dashboard needs to run.
pub struct SessionData {
    /// Controller with the stored session already restored and loaded.
    pub controller: DashboardController,
    /// Feeds the activity log from the dashboard's background worker.
    pub event_sender: mpsc::Sender<Event>,
    /// Alerts and notices raised by the controller.
    pub event_receiver: mpsc::Receiver<Event>,
}

/// Wires the HTTP client and the file-backed session store around `presenter`.
fn build_controller(presenter: Box<dyn Presenter>) -> Result<DashboardController, StorageError> {
    let store = FileStore::new(get_session_path()?);
    log::debug!("Using session store at {}", store.path().display());
    Ok(DashboardController::new(
        Box::new(ApiClient::new()),
        presenter,
        Box::new(store),
    ))
}

/// Controller for one-shot commands, printing to the console.
///
/// The stored session, if any, is restored but no dashboard data is loaded.
pub fn console_controller(assume_yes: bool) -> Result<DashboardController, Box<dyn Error>> {
    let mut controller = build_controller(Box::new(ConsolePresenter::new(assume_yes)))?;
    controller.restore_session();
    Ok(controller)
}

/// Sets up a dashboard session whose messages go to the activity log.
///
/// # Returns
/// * `Ok(SessionData)` - A logged-in controller with its dashboard loaded
/// * `Err` - No stored session, or the session store is unreadable
pub async fn setup_session() -> Result<SessionData, Box<dyn Error>> {
    let (sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let mut controller = build_controller(Box::new(ChannelPresenter::new(sender.clone())))?;

    if !controller.check_auth().await {
        return Err("Not logged in. Run `parkctl login` first.".into());
    }

    Ok(SessionData {
        controller,
        event_sender: sender,
        event_receiver,
    })
}
