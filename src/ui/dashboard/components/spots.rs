//! Spot list popup for the selected lot

use super::super::utils::centered_rect;
use crate::controller::AppState;
use crate::models::SpotStatus;
use crate::report::format_timestamp;

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Row, Table};

pub fn render_spots_popup(f: &mut Frame, app_state: &AppState) {
    let area = centered_rect(60, 60, f.area());
    let title = app_state
        .selected_lot
        .as_ref()
        .map(|lot| format!("SPOTS: {}", lot.prime_location_name))
        .unwrap_or_else(|| "SPOTS".to_string());

    let rows = app_state.spots.iter().map(|spot| {
        let color = match spot.status {
            SpotStatus::Available => Color::LightGreen,
            SpotStatus::Occupied => Color::LightRed,
        };
        let (occupant, since) = spot
            .current_reservation
            .as_ref()
            .map(|r| (r.username.clone(), format_timestamp(r.parking_timestamp)))
            .unwrap_or_default();
        Row::new(vec![
            spot.spot_number.clone(),
            spot.status.label().to_string(),
            occupant,
            since,
        ])
        .style(Style::default().fg(color))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Fill(1),
            Constraint::Length(16),
        ],
    )
    .header(Row::new(vec!["Spot", "Status", "Occupant", "Since"]))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::LightYellow)),
    );

    f.render_widget(Clear, area);
    f.render_widget(table, area);
}
