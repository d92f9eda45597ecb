//! Wire and form types shared by the API client and the dashboard controller.
//!
//! Field names follow the backend's JSON exactly, so most types derive
//! `Serialize`/`Deserialize` without renames.

mod auth;
mod lot;
mod reservation;
mod stats;

pub use auth::{LoginForm, LoginResponse, RegisterForm, Role, Session, User};
pub use lot::{LotForm, ParkingLot, ParkingSpot, SpotOccupant, SpotStatus};
pub use reservation::{ActiveReservation, BookingRequest, Reservation, ReservationStatus};
pub use stats::{AdminCharts, AdminStats, DailyBookings, LotOccupancy, LotRevenue, UserStats};

use serde::Deserialize;

/// Generic `{ "message": ... }` acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    #[cfg(test)]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// The server message, or `fallback` when the body carried none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}
