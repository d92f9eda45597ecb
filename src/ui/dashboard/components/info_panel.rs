//! Dashboard info panel component
//!
//! Renders the role's summary counters

use super::super::state::DashboardState;
use crate::controller::AppState;
use crate::report;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_info_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
    app_state: &AppState,
) {
    let stats_lines = if let Some(stats) = &app_state.admin_stats {
        report::admin_stats_lines(stats)
    } else if let Some(stats) = &app_state.user_stats {
        report::user_stats_lines(stats)
    } else {
        vec!["Loading...".to_string()]
    };

    let mut info_lines: Vec<Line> = stats_lines
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::White))))
        .collect();

    let elapsed = state.start_time.elapsed().as_secs();
    info_lines.push(Line::from(""));
    info_lines.push(Line::from(Span::styled(
        format!("Session: {}m {}s", elapsed / 60, elapsed % 60),
        Style::default().fg(Color::LightGreen),
    )));

    let info_block = Block::default()
        .title("OVERVIEW")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
