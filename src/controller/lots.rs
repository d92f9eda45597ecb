//! Admin lot management: create, edit, delete, spot listing.

use super::{ActionOutcome, DashboardController, Modal, PendingAction};
use crate::api::error::ApiError;
use crate::models::{LotForm, ParkingLot};

impl DashboardController {
    /// Opens an empty lot form for creation.
    pub fn open_create_lot(&mut self) {
        self.state.editing_lot = None;
        self.state.lot_form = LotForm::default();
        self.state.modal = Some(Modal::LotForm);
    }

    /// Opens the lot form prefilled from `lot`; submitting it updates that lot.
    pub fn edit_lot(&mut self, lot: &ParkingLot) {
        self.state.lot_form = LotForm::from(lot);
        self.state.editing_lot = Some(lot.clone());
        self.state.modal = Some(Modal::LotForm);
    }

    /// Closes any modal and discards the lot form and spot selection.
    pub fn close_modal(&mut self) {
        self.state.modal = None;
        self.state.lot_form = LotForm::default();
        self.state.editing_lot = None;
        self.state.selected_lot = None;
        self.state.spots.clear();
    }

    /// Sends the lot form, as an update when a lot is being edited and a
    /// creation otherwise. On failure the form stays open.
    pub async fn submit_lot(&mut self) -> Result<(), ApiError> {
        let (action, fallback, result) = match self.state.editing_lot.as_ref() {
            Some(lot) => (
                "Updating lot",
                "Parking lot updated successfully",
                self.api.update_lot(lot.id, &self.state.lot_form).await,
            ),
            None => (
                "Creating lot",
                "Parking lot created successfully",
                self.api.create_lot(&self.state.lot_form).await,
            ),
        };
        let response = self.surface(action, result)?;

        self.presenter.notify(response.message_or(fallback));
        self.close_modal();
        self.load_admin_dashboard().await;
        Ok(())
    }

    /// Deletes a lot after the user confirms.
    pub async fn delete_lot(&mut self, lot_id: u64) -> Result<ActionOutcome, ApiError> {
        if !self.confirm(PendingAction::DeleteLot(lot_id)) {
            return Ok(ActionOutcome::Cancelled);
        }
        let result = self.api.delete_lot(lot_id).await;
        let response = self.surface("Deleting lot", result)?;

        self.presenter
            .notify(response.message_or("Parking lot deleted successfully"));
        self.load_admin_dashboard().await;
        Ok(ActionOutcome::Completed)
    }

    /// Fetches the spots of `lot` and opens the spot list.
    pub async fn view_spots(&mut self, lot: &ParkingLot) -> Result<(), ApiError> {
        let result = self.api.get_parking_spots(lot.id).await;
        let spots = self.surface("Loading parking spots", result)?;

        log::debug!("Lot {} has {} spots", lot.id, spots.len());
        self.state.selected_lot = Some(lot.clone());
        self.state.spots = spots;
        self.state.modal = Some(Modal::Spots);
        Ok(())
    }
}
