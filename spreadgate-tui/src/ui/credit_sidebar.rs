//! Manual credit check sidebar: the numeric input and its three-tier
//! advisory.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use spreadgate_core::advisory::CreditAdvisory;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Manual Credit Check ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled("$5-wide credit", theme::muted())),
        Line::from(vec![
            Span::styled(format!("  {:.2}  ", app.credit), theme::title()),
            Span::styled("Up/Down to adjust", theme::muted()),
        ]),
        Line::from(""),
    ];

    match app.advisory() {
        CreditAdvisory::Ok { target_profit } => {
            lines.push(Line::from(Span::styled(
                format!("Credit OK, target profit ${target_profit:.0}"),
                theme::positive(),
            )));
        }
        CreditAdvisory::LowCredit => {
            lines.push(Line::from(Span::styled(
                "Low credit, try a $3-wide spread",
                theme::warning(),
            )));
        }
        CreditAdvisory::TooLow => {
            lines.push(Line::from(Span::styled(
                "Credit too low, SKIP",
                theme::negative(),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "OK >= {:.2}   min {:.2}",
            app.config.credit_ok, app.config.credit_min
        ),
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
