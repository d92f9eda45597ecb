use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum::Display)]
pub enum ReservationStatus {
    #[default]
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reservation {
    pub id: u64,
    pub spot_id: u64,
    #[serde(default)]
    pub spot_number: String,
    #[serde(default)]
    pub lot_name: String,
    #[serde(default)]
    pub lot_address: String,
    pub user_id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub parking_timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub leaving_timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub parking_cost: Option<f64>,
    #[serde(default)]
    pub duration_hours: Option<f64>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

/// Body of `POST /user/book-spot`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookingRequest {
    pub lot_id: u64,
}

/// `GET /user/active-reservation` answers with either a reservation or a bare message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ActiveReservation {
    Active(Box<Reservation>),
    None { message: String },
}

impl ActiveReservation {
    pub fn into_option(self) -> Option<Reservation> {
        match self {
            ActiveReservation::Active(reservation) => Some(*reservation),
            ActiveReservation::None { .. } => None,
        }
    }
}
