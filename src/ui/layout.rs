use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom: header bar, list body, entry line,
/// footer bar.
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    pub entry: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(1);
    let footer_height = 1.min(area.height.saturating_sub(header_height));
    let entry_height = 3.min(area.height.saturating_sub(header_height + footer_height));
    let body_height = area
        .height
        .saturating_sub(header_height + footer_height + entry_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: body_height,
    };
    let entry = Rect {
        x: area.x,
        y: area.y + header_height + body_height,
        width: area.width,
        height: entry_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };

    Regions {
        header,
        body,
        entry,
        footer,
    }
}

/// Splits the body into the two list panes.
pub fn pane_columns(body: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);
    (columns[0], columns[1])
}
