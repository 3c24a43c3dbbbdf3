//! Bottom status line — key hints, last status message, last-refresh
//! time.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(
        " r:refresh  Up/Down:credit  e:errors  ?:help  q:quit",
        theme::muted(),
    )];

    if let Some((message, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(message.as_str(), style));
    }

    if let Some(snapshot) = &app.snapshot {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!(
                "last updated {:02}:{:02} {}",
                snapshot.clock.hour, snapshot.clock.minute, app.config.timezone
            ),
            theme::muted(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
