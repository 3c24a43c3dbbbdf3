//! Single-page layout — header, metrics, filter rows, signal banner,
//! credit sidebar, status line.

pub mod credit_sidebar;
pub mod filter_rows;
pub mod metrics;
pub mod overlays;
pub mod signal_banner;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + caption
            Constraint::Min(12),   // dashboard body
            Constraint::Length(1), // status line
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    draw_body(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, chunks[1]),
        Overlay::ErrorHistory => overlays::render_error_history(f, chunks[1], app),
        Overlay::None => {}
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let config = &app.config;
    let caption = format!(
        "Entry window {:02}:00 {} | refresh on demand",
        config.entry_hour, config.timezone
    );
    let lines = vec![
        Line::from(Span::styled(
            format!("{} Put Spread Auto-Filter", config.index_symbol),
            theme::title(),
        )),
        Line::from(Span::styled(caption, theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_body(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(34)])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // metric blocks
            Constraint::Min(7),    // filter rows
            Constraint::Length(3), // signal banner
        ])
        .split(columns[0]);

    metrics::render(f, main[0], app);
    filter_rows::render(f, main[1], app);
    signal_banner::render(f, main[2], app);
    credit_sidebar::render(f, columns[1], app);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
