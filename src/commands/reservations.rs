//! Booking, release, active reservation and export commands.

use super::require_session;
use crate::controller::ActionOutcome;
use crate::pretty::print_cmd_info;
use crate::report;
use crate::session::console_controller;
use std::error::Error;

/// Books a spot in `lot_id`. The request is sent even without a session so
/// the backend's answer is what the user sees.
pub async fn book(lot_id: u64) -> Result<(), Box<dyn Error>> {
    let mut controller = console_controller(false)?;
    if !controller.state().is_logged_in() {
        log::warn!("Booking without a session; the backend will reject it");
    }
    controller.book_spot(lot_id).await?;

    if let Some(active) = controller
        .state()
        .user_stats
        .as_ref()
        .and_then(|stats| stats.active_booking.as_ref())
    {
        print_cmd_info!(
            "Your spot",
            "{} at {} ({})",
            active.spot_number,
            active.lot_name,
            active.lot_address
        );
    }
    Ok(())
}

pub async fn release(reservation_id: u64, assume_yes: bool) -> Result<(), Box<dyn Error>> {
    let mut controller = console_controller(assume_yes)?;
    require_session(&controller)?;
    if controller.release_spot(reservation_id).await? == ActionOutcome::Cancelled {
        println!("Cancelled. Reservation #{} is still active.", reservation_id);
    }
    Ok(())
}

pub async fn active() -> Result<(), Box<dyn Error>> {
    let mut controller = console_controller(false)?;
    require_session(&controller)?;
    controller.load_active_reservation().await?;

    match &controller.state().active_reservation {
        Some(reservation) => {
            print_cmd_info!(
                "Active reservation",
                "{}",
                report::format_reservation(reservation)
            );
        }
        None => println!("No active reservation."),
    }
    Ok(())
}

pub fn export() -> Result<(), Box<dyn Error>> {
    let controller = console_controller(false)?;
    if !controller.export_csv() {
        return Err("Not logged in. Run `parkctl login` first.".into());
    }
    Ok(())
}
