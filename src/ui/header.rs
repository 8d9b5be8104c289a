use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::roster::RosterState;
use crate::ui::theme::{ACCENT, PANE_TITLE, TEXT_DIM};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &RosterState) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT);
        let text_style = Style::default().fg(PANE_TITLE);
        let separator_style = Style::default().fg(TEXT_DIM);

        let line = Line::from(vec![
            Span::styled(" corsair", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} pirates", state.pirates.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} weapons", state.weapons.len()), text_style),
        ]);

        Paragraph::new(line)
    }
}
