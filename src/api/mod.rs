use crate::api::error::ApiError;
use crate::models::{
    ActiveReservation, AdminCharts, AdminStats, LoginForm, LoginResponse, LotForm,
    MessageResponse, ParkingLot, ParkingSpot, RegisterForm, Reservation, User, UserStats,
};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// The parking backend's REST surface.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ParkingApi: Send + Sync {
    /// Installs (or clears) the bearer token attached to subsequent requests.
    fn set_token(&self, token: Option<String>);

    /// Resource locator of the CSV download for a user.
    fn export_csv_url(&self, user_id: u64) -> String;

    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError>;

    async fn register(&self, form: &RegisterForm) -> Result<MessageResponse, ApiError>;

    async fn get_profile(&self) -> Result<User, ApiError>;

    async fn get_parking_lots(&self) -> Result<Vec<ParkingLot>, ApiError>;

    async fn get_admin_stats(&self) -> Result<AdminStats, ApiError>;

    async fn get_admin_charts(&self) -> Result<AdminCharts, ApiError>;

    async fn get_users(&self) -> Result<Vec<User>, ApiError>;

    async fn get_reservations(&self) -> Result<Vec<Reservation>, ApiError>;

    async fn create_lot(&self, form: &LotForm) -> Result<MessageResponse, ApiError>;

    async fn update_lot(&self, lot_id: u64, form: &LotForm) -> Result<MessageResponse, ApiError>;

    async fn delete_lot(&self, lot_id: u64) -> Result<MessageResponse, ApiError>;

    async fn get_parking_spots(&self, lot_id: u64) -> Result<Vec<ParkingSpot>, ApiError>;

    async fn get_user_stats(&self) -> Result<UserStats, ApiError>;

    async fn get_my_reservations(&self) -> Result<Vec<Reservation>, ApiError>;

    async fn get_active_reservation(&self) -> Result<ActiveReservation, ApiError>;

    async fn get_available_lots(&self) -> Result<Vec<ParkingLot>, ApiError>;

    async fn book_spot(&self, lot_id: u64) -> Result<MessageResponse, ApiError>;

    async fn release_spot(&self, reservation_id: u64) -> Result<MessageResponse, ApiError>;
}
