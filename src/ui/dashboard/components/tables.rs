//! Dashboard tables component
//!
//! Renders the role-specific tables. The first table of each view is the
//! selectable one.

use super::super::state::DashboardState;
use crate::controller::{AppState, View};
use crate::models::{ParkingLot, Reservation, User};
use crate::report::{format_money, format_timestamp, lot_availability};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Row, Table};

pub fn render_tables(f: &mut Frame, area: Rect, state: &DashboardState, app_state: &AppState) {
    match app_state.view() {
        View::Admin => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(40),
                    Constraint::Percentage(35),
                    Constraint::Percentage(25),
                ])
                .split(area);
            let lots = &app_state.parking_lots;
            render_lots(f, chunks[0], "PARKING LOTS", lots, state.selected);
            render_reservations(f, chunks[1], "RESERVATIONS", &app_state.reservations);
            render_users(f, chunks[2], &app_state.users);
        }
        View::User => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            let lots = &app_state.available_lots;
            render_lots(f, chunks[0], "AVAILABLE LOTS", lots, state.selected);
            render_reservations(f, chunks[1], "MY RESERVATIONS", &app_state.my_reservations);
        }
        View::Unauthenticated(_) => {}
    }
}

fn table_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

fn header_row(cells: Vec<&'static str>) -> Row<'static> {
    Row::new(cells).style(
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_lots(f: &mut Frame, area: Rect, title: &str, lots: &[ParkingLot], selected: usize) {
    let rows = lots.iter().enumerate().map(|(i, lot)| {
        let style = if selected == i {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        Row::new(vec![
            lot.id.to_string(),
            lot.prime_location_name.clone(),
            format_money(Some(lot.price_per_hour)),
            lot_availability(lot),
            lot.address.clone(),
        ])
        .style(style)
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Fill(3),
        ],
    )
    .header(header_row(vec!["ID", "Location", "Price/h", "Spots", "Address"]))
    .block(table_block(title));
    f.render_widget(table, area);
}

fn render_reservations(f: &mut Frame, area: Rect, title: &str, reservations: &[Reservation]) {
    let rows = reservations.iter().map(|r| {
        let color = if r.is_active() { Color::LightGreen } else { Color::Gray };
        Row::new(vec![
            r.id.to_string(),
            r.username.clone(),
            r.lot_name.clone(),
            r.spot_number.clone(),
            format_timestamp(r.parking_timestamp),
            format_money(r.parking_cost),
            r.status.to_string(),
        ])
        .style(Style::default().fg(color))
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Fill(2),
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(9),
        ],
    )
    .header(header_row(vec!["ID", "User", "Lot", "Spot", "Parked", "Cost", "Status"]))
    .block(table_block(title));
    f.render_widget(table, area);
}

fn render_users(f: &mut Frame, area: Rect, users: &[User]) {
    let rows = users.iter().map(|user| {
        Row::new(vec![
            user.id.to_string(),
            user.username.clone(),
            user.email.clone(),
            user.role.to_string(),
            format_timestamp(user.last_login),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Fill(2),
            Constraint::Length(6),
            Constraint::Length(16),
        ],
    )
    .header(header_row(vec!["ID", "Username", "Email", "Role", "Last login"]))
    .block(table_block("USERS"));
    f.render_widget(table, area);
}
