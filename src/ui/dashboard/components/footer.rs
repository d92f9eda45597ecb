//! Dashboard footer component
//!
//! Renders the key bindings of the current view

use crate::controller::{AppState, Modal, View};
use crate::ui::dashboard::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
    app_state: &AppState,
) {
    let keys = match (app_state.view(), app_state.modal) {
        (_, Some(Modal::Spots)) => "[Esc] Close",
        (View::Admin, _) => "[↑↓] Select | [S] Spots | [R] Refresh | [Q] Quit",
        (View::User, _) => "[↑↓] Select | [B] Book | [X] Export CSV | [R] Refresh | [Q] Quit",
        (View::Unauthenticated(_), _) => "[Q] Quit",
    };
    let footer_text = if state.busy {
        format!("Loading... | {}", keys)
    } else {
        keys.to_string()
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
