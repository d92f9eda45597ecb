//! Booking, release and export for regular users.

use super::{ActionOutcome, DashboardController, Modal, PendingAction};
use crate::api::error::ApiError;
use crate::models::ParkingLot;

impl DashboardController {
    /// Opens the booking confirmation for `lot`.
    pub fn open_booking(&mut self, lot: &ParkingLot) {
        self.state.selected_lot = Some(lot.clone());
        self.state.modal = Some(Modal::Booking);
    }

    /// Books a spot in `lot_id`. The backend picks the spot.
    ///
    /// Repeated calls are not deduplicated; each one is a separate request.
    pub async fn book_spot(&mut self, lot_id: u64) -> Result<(), ApiError> {
        let result = self.api.book_spot(lot_id).await;
        let response = self.surface("Booking spot", result)?;

        self.presenter
            .notify(response.message_or("Spot booked successfully"));
        self.close_modal();
        self.load_user_dashboard().await;
        Ok(())
    }

    /// Ends a reservation after the user confirms.
    pub async fn release_spot(&mut self, reservation_id: u64) -> Result<ActionOutcome, ApiError> {
        if !self.confirm(PendingAction::ReleaseSpot(reservation_id)) {
            return Ok(ActionOutcome::Cancelled);
        }
        let result = self.api.release_spot(reservation_id).await;
        let response = self.surface("Releasing spot", result)?;

        self.presenter
            .notify(response.message_or("Spot released successfully"));
        self.load_user_dashboard().await;
        Ok(ActionOutcome::Completed)
    }

    /// Hands the CSV download locator of the current user to the presenter.
    ///
    /// Returns `false` when nobody is logged in.
    pub fn export_csv(&self) -> bool {
        let Some(user) = self.state.current_user() else {
            log::warn!("CSV export requested without a session");
            return false;
        };
        let url = self.api.export_csv_url(user.id);
        log::info!("Exporting reservations of {} from {}", user.display_name(), url);
        self.presenter.open_url(&url);
        true
    }
}
