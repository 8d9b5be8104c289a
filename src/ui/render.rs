use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::roster::RosterState;
use crate::ui::app::{App, Pane};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, pane_columns};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, PANE_TITLE, SELECTION_BG, TEXT, TEXT_DIM};

/// Full redraw: every frame rebuilds every region from the current state.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(&state), regions.header);

    frame.render_widget(Clear, regions.body);
    let (left, right) = pane_columns(regions.body);
    draw_pirates(frame, app, &state, left);
    draw_weapons(frame, app, &state, right);

    draw_entry(frame, app, regions.entry);

    frame.render_widget(
        Footer::new().widget(regions.footer.width, app.notice()),
        regions.footer,
    );
}

fn draw_pirates(frame: &mut Frame<'_>, app: &App, state: &RosterState, area: Rect) {
    let items: Vec<ListItem<'_>> = state
        .pirates
        .iter()
        .map(|pirate| {
            let mut style = Style::default().fg(TEXT);
            if pirate.complete {
                style = style.fg(TEXT_DIM).add_modifier(Modifier::CROSSED_OUT);
            }
            ListItem::new(Line::from(Span::styled(pirate.name.clone(), style)))
        })
        .collect();

    render_pane(
        frame,
        area,
        items,
        " Pirates ",
        app.focus() == Pane::Pirates,
        app.cursor(Pane::Pirates),
    );
}

fn draw_weapons(frame: &mut Frame<'_>, app: &App, state: &RosterState, area: Rect) {
    let items: Vec<ListItem<'_>> = state
        .weapons
        .iter()
        .map(|weapon| {
            ListItem::new(Line::from(Span::styled(
                weapon.name.clone(),
                Style::default().fg(TEXT),
            )))
        })
        .collect();

    render_pane(
        frame,
        area,
        items,
        " Weapons ",
        app.focus() == Pane::Weapons,
        app.cursor(Pane::Weapons),
    );
}

fn render_pane(
    frame: &mut Frame<'_>,
    area: Rect,
    items: Vec<ListItem<'_>>,
    title: &'static str,
    focused: bool,
    cursor: Option<usize>,
) {
    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(title, Style::default().fg(PANE_TITLE))),
        )
        .highlight_style(Style::default().bg(SELECTION_BG))
        .highlight_symbol("» ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(cursor);
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_entry(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let prompt = match app.focus() {
        Pane::Pirates => " Add pirate ",
        Pane::Weapons => " Add weapon ",
    };

    let entry = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::styled(app.entry().to_string(), Style::default().fg(TEXT)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(Span::styled(prompt, Style::default().fg(TEXT_DIM))),
    );
    frame.render_widget(entry, area);

    if area.width > 4 && area.height > 2 {
        let column = 3 + app.entry().chars().count() as u16;
        let x = (area.x + column).min(area.x + area.width.saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}
