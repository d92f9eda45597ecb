//! Parking API Client
//!
//! A JSON-over-HTTP client for the parking backend. Every call is fire-once:
//! no retries, no timeouts.

use crate::api::ParkingApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::API_BASE_URL;
use crate::models::{
    ActiveReservation, AdminCharts, AdminStats, BookingRequest, LoginForm, LoginResponse, LotForm,
    MessageResponse, ParkingLot, ParkingSpot, RegisterForm, Reservation, User, UserStats,
};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::RwLock;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("parkctl/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub(crate) fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    fn encode_body<T: Serialize>(body: &T) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(ApiError::Encode)
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    /// Prepares a request against `base_url + endpoint`. The bearer header is
    /// only present while a token is held.
    pub(crate) fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, self.build_url(endpoint))
            .header("User-Agent", USER_AGENT);
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
    }

    /// Sends one request and decodes the JSON payload of a 2xx response.
    pub async fn api_call<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        log::debug!("{} {}", method, endpoint);
        let response = self.build_request(method, endpoint, body).send().await?;
        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.api_call(Method::GET, endpoint, None).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = Self::encode_body(body)?;
        self.api_call(method, endpoint, Some(&body)).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ParkingApi for ApiClient {
    fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    fn export_csv_url(&self, user_id: u64) -> String {
        self.build_url(&format!("user/export-csv/download/{}", user_id))
    }

    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError> {
        self.send_json(Method::POST, "auth/login", form).await
    }

    async fn register(&self, form: &RegisterForm) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::POST, "auth/register", form).await
    }

    async fn get_profile(&self) -> Result<User, ApiError> {
        self.get_request("auth/profile").await
    }

    async fn get_parking_lots(&self) -> Result<Vec<ParkingLot>, ApiError> {
        self.get_request("admin/parking-lots").await
    }

    async fn get_admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get_request("admin/dashboard/stats").await
    }

    async fn get_admin_charts(&self) -> Result<AdminCharts, ApiError> {
        self.get_request("admin/dashboard/charts").await
    }

    async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_request("admin/users").await
    }

    async fn get_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get_request("admin/reservations").await
    }

    async fn create_lot(&self, form: &LotForm) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::POST, "admin/parking-lots", form)
            .await
    }

    async fn update_lot(&self, lot_id: u64, form: &LotForm) -> Result<MessageResponse, ApiError> {
        let endpoint = format!("admin/parking-lots/{}", lot_id);
        self.send_json(Method::PUT, &endpoint, form).await
    }

    async fn delete_lot(&self, lot_id: u64) -> Result<MessageResponse, ApiError> {
        let endpoint = format!("admin/parking-lots/{}", lot_id);
        self.api_call(Method::DELETE, &endpoint, None).await
    }

    async fn get_parking_spots(&self, lot_id: u64) -> Result<Vec<ParkingSpot>, ApiError> {
        self.get_request(&format!("admin/parking-spots/{}", lot_id))
            .await
    }

    async fn get_user_stats(&self) -> Result<UserStats, ApiError> {
        self.get_request("user/dashboard/stats").await
    }

    async fn get_my_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get_request("user/my-reservations").await
    }

    async fn get_active_reservation(&self) -> Result<ActiveReservation, ApiError> {
        self.get_request("user/active-reservation").await
    }

    async fn get_available_lots(&self) -> Result<Vec<ParkingLot>, ApiError> {
        self.get_request("user/parking-lots/available").await
    }

    async fn book_spot(&self, lot_id: u64) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::POST, "user/book-spot", &BookingRequest { lot_id })
            .await
    }

    async fn release_spot(&self, reservation_id: u64) -> Result<MessageResponse, ApiError> {
        let endpoint = format!("user/release-spot/{}", reservation_id);
        self.api_call(Method::POST, &endpoint, None).await
    }
}
