//! Dashboard header component
//!
//! Renders the title and the occupancy gauge

use crate::controller::AppState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, app_state: &AppState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = match app_state.current_user() {
        Some(user) => format!(
            "PARKCTL v{} | {} ({})",
            version,
            user.display_name(),
            user.role
        ),
        None => format!("PARKCTL v{}", version),
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (label, color, percent) = gauge_values(app_state);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, header_chunks[1]);
}

/// Fleet occupancy for admins, the active booking for users.
fn gauge_values(app_state: &AppState) -> (String, Color, u16) {
    if let Some(stats) = &app_state.admin_stats {
        let percent = stats.occupancy_rate.clamp(0.0, 100.0) as u16;
        let color = match percent {
            0..=59 => Color::LightGreen,
            60..=84 => Color::LightYellow,
            _ => Color::LightRed,
        };
        return (
            format!(
                "OCCUPANCY {:.1}% ({} of {} spots)",
                stats.occupancy_rate, stats.occupied_spots, stats.total_parking_spots
            ),
            color,
            percent,
        );
    }
    match app_state.user_stats.as_ref().and_then(|s| s.active_booking.as_ref()) {
        Some(active) => (
            format!("PARKED at {} ({})", active.lot_name, active.spot_number),
            Color::LightGreen,
            100,
        ),
        None => ("NO ACTIVE BOOKING".to_string(), Color::LightBlue, 0),
    }
}
