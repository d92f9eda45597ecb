//! Plain-text rendering of dashboard data for console commands.

use crate::models::{
    AdminCharts, AdminStats, ParkingLot, ParkingSpot, Reservation, User, UserStats,
};
use chrono::NaiveDateTime;

pub fn format_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    timestamp
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_money(amount: Option<f64>) -> String {
    amount
        .map(|a| format!("₹{:.2}", a))
        .unwrap_or_else(|| "-".to_string())
}

/// "available/total" when the backend reported availability, "total" otherwise.
pub fn lot_availability(lot: &ParkingLot) -> String {
    match lot.available_spots {
        Some(available) => format!("{}/{}", available, lot.number_of_spots),
        None => lot.number_of_spots.to_string(),
    }
}

pub fn format_lot(lot: &ParkingLot) -> String {
    format!(
        "#{:<4} {:<24} {:>8}/h  spots {:<9} {} ({})",
        lot.id,
        lot.prime_location_name,
        format_money(Some(lot.price_per_hour)),
        lot_availability(lot),
        lot.address,
        lot.pin_code
    )
}

pub fn format_spot(spot: &ParkingSpot) -> String {
    let occupant = spot
        .current_reservation
        .as_ref()
        .map(|r| {
            format!(
                " by {} since {}",
                r.username,
                format_timestamp(r.parking_timestamp)
            )
        })
        .unwrap_or_default();
    format!("{:<14} {}{}", spot.spot_number, spot.status.label(), occupant)
}

pub fn format_reservation(reservation: &Reservation) -> String {
    format!(
        "#{:<4} {:<9} {:<20} {:<14} in {}  out {}  cost {}",
        reservation.id,
        reservation.status,
        reservation.lot_name,
        reservation.spot_number,
        format_timestamp(reservation.parking_timestamp),
        format_timestamp(reservation.leaving_timestamp),
        format_money(reservation.parking_cost)
    )
}

pub fn format_user(user: &User) -> String {
    format!(
        "#{:<4} {:<16} {:<28} {:<6} last login {}",
        user.id,
        user.username,
        user.email,
        user.role,
        format_timestamp(user.last_login)
    )
}

pub fn admin_stats_lines(stats: &AdminStats) -> Vec<String> {
    vec![
        format!("Parking lots:      {}", stats.total_parking_lots),
        format!(
            "Spots:             {} ({} available, {} occupied)",
            stats.total_parking_spots, stats.available_spots, stats.occupied_spots
        ),
        format!("Occupancy:         {:.1}%", stats.occupancy_rate),
        format!("Users:             {}", stats.total_users),
        format!(
            "Reservations:      {} active, {} completed",
            stats.active_reservations, stats.completed_reservations
        ),
        format!("Bookings today:    {}", stats.today_bookings),
        format!("Revenue:           {}", format_money(Some(stats.total_revenue))),
    ]
}

pub fn user_stats_lines(stats: &UserStats) -> Vec<String> {
    let mut lines = vec![
        format!("Total bookings:    {}", stats.total_bookings),
        format!("Total spent:       {}", format_money(Some(stats.total_spent))),
        format!(
            "This month:        {} bookings, {}",
            stats.month_bookings,
            format_money(Some(stats.month_spent))
        ),
    ];
    if !stats.most_used_lot.is_empty() {
        lines.push(format!("Most used lot:     {}", stats.most_used_lot));
    }
    match &stats.active_booking {
        Some(active) => lines.push(format!(
            "Active booking:    {} at {} since {}",
            active.spot_number,
            active.lot_name,
            format_timestamp(active.parking_timestamp)
        )),
        None => lines.push("Active booking:    none".to_string()),
    }
    lines
}

pub fn chart_lines(charts: &AdminCharts) -> Vec<String> {
    let mut lines = vec!["Occupancy by lot:".to_string()];
    lines.extend(charts.lot_occupancy.iter().map(|o| {
        format!(
            "  {:<24} {:>3}/{:<3} {:>5.1}%",
            o.name, o.occupied, o.total, o.occupancy_rate
        )
    }));
    lines.push("Daily bookings:".to_string());
    lines.extend(
        charts
            .daily_bookings
            .iter()
            .map(|d| format!("  {}  {}", d.date, d.bookings)),
    );
    lines.push("Revenue by lot:".to_string());
    lines.extend(
        charts
            .revenue_by_lot
            .iter()
            .map(|r| format!("  {:<24} {}", r.name, format_money(Some(r.revenue)))),
    );
    lines
}
