use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::{NOTICE, TEXT_DIM};

const VERSION: &str = env!("CARGO_PKG_VERSION");

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

    /// Key hints, or the rejection notice while one is active.
    pub fn widget(&self, area_width: u16, notice: Option<&str>) -> Paragraph<'static> {
        let line = if let Some(notice) = notice {
            Line::from(Span::styled(
                format!(" {notice}"),
                Style::default().fg(NOTICE).add_modifier(Modifier::BOLD),
            ))
        } else {
            let hint_style = Style::default().fg(TEXT_DIM).add_modifier(Modifier::DIM);
            let hints =
                " Enter: Add/Toggle │ Tab: Pane │ ↑/↓: Select │ Del: Remove │ Esc: Clear/Quit";
            let version = format!("v{VERSION} ");

            // Pad by char count, not byte count (hints contain non-ASCII).
            let padding = (area_width as usize)
                .saturating_sub(hints.chars().count())
                .saturating_sub(version.chars().count());

            Line::from(vec![
                Span::styled(hints, hint_style),
                Span::styled(" ".repeat(padding), hint_style),
                Span::styled(version, hint_style),
            ])
        };

        Paragraph::new(line).alignment(Alignment::Left)
    }
}
