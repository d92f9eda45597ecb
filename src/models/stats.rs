use serde::Deserialize;

use super::Reservation;

/// Fleet-wide counters from `GET /admin/dashboard/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminStats {
    pub total_parking_lots: u64,
    pub total_parking_spots: u64,
    pub available_spots: u64,
    pub occupied_spots: u64,
    pub occupancy_rate: f64,
    pub total_users: u64,
    pub active_reservations: u64,
    pub completed_reservations: u64,
    pub total_revenue: f64,
    pub today_bookings: u64,
}

/// Personal counters from `GET /user/dashboard/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub total_bookings: u64,
    pub has_active_booking: bool,
    pub active_booking: Option<Reservation>,
    pub total_spent: f64,
    pub most_used_lot: String,
    pub month_bookings: u64,
    pub month_spent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LotOccupancy {
    pub name: String,
    pub total: u64,
    pub occupied: u64,
    pub available: u64,
    pub occupancy_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DailyBookings {
    pub date: String,
    pub bookings: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LotRevenue {
    pub name: String,
    pub revenue: f64,
}

/// Chart series from `GET /admin/dashboard/charts`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminCharts {
    pub lot_occupancy: Vec<LotOccupancy>,
    pub daily_bookings: Vec<DailyBookings>,
    pub revenue_by_lot: Vec<LotRevenue>,
}
