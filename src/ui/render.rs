use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::data::User;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, ROW_SECONDARY, STATUS_ERROR, STATUS_WARN,
};
use crate::ui::users::UserListState;

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// One frame: header with a state badge, a body that is a fixed function of
/// the current state variant, and a footer with key hints.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let state = app.user_list();
    frame.render_widget(Header::new().widget(state), header);

    match state {
        UserListState::Loading => draw_loading(frame, body, app.tick()),
        UserListState::Empty => draw_empty(frame, body),
        UserListState::Failed { message } => draw_error(frame, body, message),
        UserListState::Loaded { users, selected } => {
            draw_list(frame, body, users, *selected);
        }
    }

    frame.render_widget(
        Footer::new().widget(footer, app.last_dispatch_error()),
        footer,
    );
}

fn draw_loading(frame: &mut Frame<'_>, body: Rect, tick: u64) {
    let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Fetching users...", spinner),
            Style::default().fg(ACCENT),
        )),
    ];
    let panel = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(panel, centered_rect(60, 30, body));
}

fn draw_empty(frame: &mut Frame<'_>, body: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No users yet",
            Style::default().fg(STATUS_WARN),
        )),
        Line::from(Span::styled(
            "Press r to refresh",
            Style::default().fg(ROW_SECONDARY),
        )),
    ];
    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(panel, centered_rect(50, 40, body));
}

fn draw_error(frame: &mut Frame<'_>, body: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(ROW_SECONDARY),
        )),
    ];
    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(Span::styled("Error", Style::default().fg(STATUS_ERROR)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR)),
    );
    frame.render_widget(panel, centered_rect(60, 40, body));
}

fn draw_list(frame: &mut Frame<'_>, body: Rect, users: &[User], selected: usize) {
    let id_width = users
        .iter()
        .map(|user| user.id.to_string().len())
        .max()
        .unwrap_or(1);
    let name_width = users
        .iter()
        .map(|user| user.name.chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem<'_>> = users
        .iter()
        .map(|user| {
            let line = Line::from(vec![
                Span::styled(
                    format!(" {:>width$}  ", user.id, width = id_width),
                    Style::default().fg(ROW_SECONDARY),
                ),
                Span::styled(
                    format!("{:<width$}  ", user.name, width = name_width),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(user.email.clone(), Style::default().fg(ROW_SECONDARY)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, body, &mut list_state);
}
