//! Two side-by-side metric blocks: price vs trend, volatility vs cap.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_price_block(f, columns[0], app);
    render_volatility_block(f, columns[1], app);
}

fn render_price_block(f: &mut Frame, area: Rect, app: &AppState) {
    let config = &app.config;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", config.index_symbol));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = match &app.snapshot {
        Some(snapshot) => {
            let delta = snapshot.price_delta();
            vec![
                Line::from(vec![
                    Span::styled(
                        format!("${:.2}", snapshot.index_quote.price),
                        theme::title(),
                    ),
                    Span::raw("  "),
                    Span::styled(format!("{delta:+.2} vs MA"), theme::delta(delta)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "{}-day MA  ${:.2}",
                        config.ma_window, snapshot.moving_average
                    ),
                    theme::muted(),
                )),
                Line::from(Span::styled(
                    format!("as of {}", snapshot.index_quote.date),
                    theme::muted(),
                )),
            ]
        }
        None => placeholder_lines(app),
    };
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_volatility_block(f: &mut Frame, area: Rect, app: &AppState) {
    let config = &app.config;
    let block = Block::default().borders(Borders::ALL).title(" VIX ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = match &app.snapshot {
        Some(snapshot) => {
            let headroom = snapshot.vix_headroom(config.vix_cap);
            let holiday_span = if snapshot.holiday {
                Span::styled("Holiday: YES, skip", theme::negative())
            } else {
                Span::styled("Holiday: no", theme::positive())
            };
            vec![
                Line::from(vec![
                    Span::styled(format!("{:.2}", snapshot.vix_quote.price), theme::title()),
                    Span::raw("  "),
                    Span::styled(
                        format!("{headroom:+.1} from cap {:.0}", config.vix_cap),
                        theme::delta(headroom),
                    ),
                ]),
                Line::from(holiday_span),
                Line::from(Span::styled(
                    format!("as of {}", snapshot.vix_quote.date),
                    theme::muted(),
                )),
            ]
        }
        None => placeholder_lines(app),
    };
    f.render_widget(Paragraph::new(lines), inner);
}

fn placeholder_lines(app: &AppState) -> Vec<Line<'static>> {
    let text = if app.refresh_in_progress {
        "fetching..."
    } else {
        "no data yet"
    };
    vec![Line::from(Span::styled(text.to_string(), theme::muted()))]
}
