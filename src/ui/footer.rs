use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " r: Refresh │ ↑/↓: Move │ q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, dispatch_error: Option<&str>) -> Paragraph<'static> {
        let content_width = area.width.saturating_sub(2) as usize;
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        Paragraph::new(footer_line(content_width, dispatch_error))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Hints on the left, version pinned to the right edge, an optional error
/// in between. Widths are counted in chars, not bytes (the hints contain
/// box-drawing characters), and the padding shrinks to fit the error so
/// the version marker stays on screen.
fn footer_line(content_width: usize, dispatch_error: Option<&str>) -> Line<'static> {
    let version = format!("v{} ", VERSION);
    let error = dispatch_error.map(|error| format!("  {}", error));

    let hints_width = HINTS.chars().count();
    let version_width = version.chars().count();
    let error_width = error.as_deref().map_or(0, |e| e.chars().count());
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(error_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

    let mut spans = vec![Span::styled(HINTS, text_style)];
    if let Some(error) = error {
        spans.push(Span::styled(error, Style::default().fg(STATUS_ERROR)));
    }
    spans.push(Span::styled(" ".repeat(padding), text_style));
    spans.push(Span::styled(version, text_style));
    Line::from(spans)
}
