use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use crate::ui::users::UserListState;

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &UserListState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let badge_color = match state {
            UserListState::Loaded { .. } => STATUS_OK,
            UserListState::Failed { .. } => STATUS_ERROR,
            UserListState::Loading | UserListState::Empty => STATUS_WARN,
        };
        let count = state.users().len();

        let line = Line::from(vec![
            Span::styled("  Userdeck", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(state.badge(), Style::default().fg(badge_color)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} users", count), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
