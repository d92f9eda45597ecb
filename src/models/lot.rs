use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParkingLot {
    pub id: u64,
    pub prime_location_name: String,
    pub price_per_hour: f64,
    pub address: String,
    pub pin_code: String,
    pub number_of_spots: u32,
    #[serde(default)]
    pub available_spots: Option<u32>,
    #[serde(default)]
    pub occupied_spots: Option<u32>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Editable lot fields, sent as the body of create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LotForm {
    pub prime_location_name: String,
    pub price_per_hour: f64,
    pub address: String,
    pub pin_code: String,
    pub number_of_spots: u32,
}

impl From<&ParkingLot> for LotForm {
    fn from(lot: &ParkingLot) -> Self {
        Self {
            prime_location_name: lot.prime_location_name.clone(),
            price_per_hour: lot.price_per_hour,
            address: lot.address.clone(),
            pin_code: lot.pin_code.clone(),
            number_of_spots: lot.number_of_spots,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpotStatus {
    #[default]
    #[serde(rename = "A")]
    Available,
    #[serde(rename = "O")]
    Occupied,
}

impl SpotStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SpotStatus::Available => "Available",
            SpotStatus::Occupied => "Occupied",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpotOccupant {
    pub user_id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub parking_timestamp: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParkingSpot {
    pub id: u64,
    pub lot_id: u64,
    pub spot_number: String,
    #[serde(default)]
    pub status: SpotStatus,
    #[serde(default)]
    pub current_reservation: Option<SpotOccupant>,
}
