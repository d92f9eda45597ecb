//! Application state owned by the dashboard controller.

use crate::models::{
    AdminCharts, AdminStats, LoginForm, LotForm, ParkingLot, ParkingSpot, RegisterForm,
    Reservation, Session, User, UserStats,
};

/// Which form the unauthenticated screen shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Create or edit a lot, depending on `editing_lot`.
    LotForm,
    /// Read-only spot list of `selected_lot`.
    Spots,
    /// Booking confirmation for `selected_lot`.
    Booking,
}

/// Top-level view mode derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Unauthenticated(AuthView),
    Admin,
    User,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Present iff the user is logged in.
    pub session: Option<Session>,
    pub auth_view: AuthView,

    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    pub lot_form: LotForm,
    pub editing_lot: Option<ParkingLot>,

    pub modal: Option<Modal>,
    pub selected_lot: Option<ParkingLot>,
    pub spots: Vec<ParkingSpot>,

    // Admin dashboard
    pub parking_lots: Vec<ParkingLot>,
    pub admin_stats: Option<AdminStats>,
    pub admin_charts: Option<AdminCharts>,
    pub users: Vec<User>,
    pub reservations: Vec<Reservation>,

    // User dashboard
    pub user_stats: Option<UserStats>,
    pub my_reservations: Vec<Reservation>,
    pub available_lots: Vec<ParkingLot>,
    pub active_reservation: Option<Reservation>,
}

impl AppState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.current_user)
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(User::is_admin)
    }

    pub fn view(&self) -> View {
        match self.current_user() {
            None => View::Unauthenticated(self.auth_view),
            Some(user) if user.is_admin() => View::Admin,
            Some(_) => View::User,
        }
    }
}
