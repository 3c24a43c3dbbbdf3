//! Modal overlays: help and the error history.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

use super::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(theme::accent());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled("Keys", theme::emphasis())),
        Line::from(""),
        Line::from("  r          refresh quotes and re-evaluate"),
        Line::from("  Up/Down    adjust credit by one cent"),
        Line::from("  PgUp/PgDn  adjust credit by five cents"),
        Line::from("  e          error history"),
        Line::from("  ?          this help"),
        Line::from("  q / Esc    quit"),
        Line::from(""),
        Line::from(Span::styled(
            "The four filters and the signal are recomputed from",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "scratch on every refresh; only the credit input persists.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Errors ({}) ", app.error_history.len()))
        .border_style(theme::negative());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("no errors", theme::muted()))),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = app
        .error_history
        .iter()
        .skip(app.error_scroll)
        .take(inner.height as usize)
        .map(|record| {
            Line::from(vec![
                Span::styled(
                    record.timestamp.format("%H:%M:%S ").to_string(),
                    theme::muted(),
                ),
                Span::styled(format!("[{}] ", record.category), theme::warning()),
                Span::raw(record.message.clone()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
