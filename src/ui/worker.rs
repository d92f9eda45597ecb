//! Background task that owns the dashboard controller.
//!
//! The UI loop never awaits the backend. Key presses become [`Intent`]s that
//! this task runs one at a time; after each one it publishes a copy of the
//! controller's state for the next frame. A request that never returns only
//! stalls the intents queued behind it.

use crate::consts::cli_consts::INTENT_QUEUE_SIZE;
use crate::controller::{AppState, DashboardController, Modal};
use crate::events::Event;
use crate::models::ParkingLot;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Something the user asked the dashboard to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Refresh,
    CloseModal,
    ViewSpots(ParkingLot),
    Book(ParkingLot),
    ExportCsv,
}

pub struct ControllerWorker {
    intents: mpsc::Sender<Intent>,
    state: watch::Receiver<AppState>,
    /// Intents sent but not yet finished.
    pending: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl ControllerWorker {
    /// Moves `controller` onto its own task. `events` feeds the activity log.
    pub fn spawn(controller: DashboardController, events: mpsc::Sender<Event>) -> Self {
        let (intent_sender, intent_receiver) = mpsc::channel(INTENT_QUEUE_SIZE);
        let (state_sender, state_receiver) = watch::channel(controller.state().clone());
        let pending = Arc::new(AtomicUsize::new(0));

        let handle = tokio::spawn(run_worker(
            controller,
            intent_receiver,
            state_sender,
            events,
            pending.clone(),
        ));

        Self {
            intents: intent_sender,
            state: state_receiver,
            pending,
            handle,
        }
    }

    /// Queues an intent without waiting. Returns `false` when the queue is full.
    pub fn send(&self, intent: Intent) -> bool {
        self.pending.fetch_add(1, Ordering::SeqCst);
        match self.intents.try_send(intent) {
            Ok(()) => true,
            Err(e) => {
                self.pending.fetch_sub(1, Ordering::SeqCst);
                log::debug!("Dropping dashboard intent: {}", e);
                false
            }
        }
    }

    /// The latest published state, if it changed since the last call.
    pub fn latest_state(&mut self) -> Option<AppState> {
        match self.state.has_changed() {
            Ok(true) => Some(self.state.borrow_and_update().clone()),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }
}

impl Drop for ControllerWorker {
    fn drop(&mut self) {
        // A request still in flight is abandoned with the dashboard.
        self.handle.abort();
    }
}

async fn run_worker(
    mut controller: DashboardController,
    mut intents: mpsc::Receiver<Intent>,
    state: watch::Sender<AppState>,
    events: mpsc::Sender<Event>,
    pending: Arc<AtomicUsize>,
) {
    while let Some(intent) = intents.recv().await {
        log::debug!("Running dashboard intent {:?}", intent);
        let mut notice = None;
        match intent {
            Intent::Refresh => {
                controller.load_dashboard().await;
                notice = Some(Event::refresh("Dashboard refreshed"));
            }
            Intent::CloseModal => controller.close_modal(),
            Intent::ViewSpots(lot) => {
                // Failures are already in the activity log
                let _ = controller.view_spots(&lot).await;
            }
            Intent::Book(lot) => {
                controller.open_booking(&lot);
                state.send_replace(controller.state().clone());
                let _ = controller.book_spot(lot.id).await;
                if controller.state().modal == Some(Modal::Booking) {
                    controller.close_modal();
                }
            }
            Intent::ExportCsv => {
                controller.export_csv();
            }
        }
        state.send_replace(controller.state().clone());
        pending.fetch_sub(1, Ordering::SeqCst);
        if let Some(event) = notice {
            let _ = events.try_send(event);
        }
    }
}
