//! The aggregate signal, rendered as one of three visually distinct
//! banners. A failed refresh takes the banner over with a retry hint
//! instead of surfacing a raw error to the page.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use spreadgate_core::signal::SignalState;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let (text, style) = match (&app.last_refresh_error, &app.snapshot) {
        (Some(_), _) => (
            "DATA UNAVAILABLE - press r to retry".to_string(),
            theme::negative(),
        ),
        (None, Some(snapshot)) => match snapshot.signal {
            SignalState::Green => (
                "TRADE SIGNAL: GREEN - EXECUTE NOW".to_string(),
                theme::signal_banner(SignalState::Green),
            ),
            SignalState::Waiting => (
                format!(
                    "Waiting for the {:02}:00 {} window...",
                    app.config.entry_hour, app.config.timezone
                ),
                theme::signal_banner(SignalState::Waiting),
            ),
            SignalState::Red => (
                "RED - SKIP TODAY".to_string(),
                theme::signal_banner(SignalState::Red),
            ),
        },
        (None, None) => ("--".to_string(), theme::muted()),
    };

    let block = Block::default().borders(Borders::ALL).border_style(style);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center),
        inner,
    );
}
