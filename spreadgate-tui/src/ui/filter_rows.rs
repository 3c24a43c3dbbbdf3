//! Filter status block: the pass-count line plus one colored row per
//! filter.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use spreadgate_core::filters::{FilterDisplay, FILTER_COUNT};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(" Filters ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(snapshot) = &app.snapshot else {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "waiting for first refresh",
                theme::muted(),
            ))),
            inner,
        );
        return;
    };

    let mut lines = Vec::with_capacity(FILTER_COUNT + 2);
    lines.push(Line::from(Span::styled(
        format!("{}/{FILTER_COUNT} FILTERS PASS", snapshot.pass_count()),
        theme::emphasis(),
    )));
    lines.push(Line::from(""));

    for filter in snapshot.filters.iter() {
        let tag = match filter.display {
            FilterDisplay::Pass => "PASS  ",
            FilterDisplay::Fail => "FAIL  ",
            FilterDisplay::Manual => "MANUAL",
        };
        lines.push(Line::from(vec![
            Span::styled(tag, theme::filter_row(filter.display)),
            Span::raw("  "),
            Span::styled(filter.label.clone(), theme::filter_row(filter.display)),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
