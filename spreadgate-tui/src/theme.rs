//! Style tokens for the dashboard.
//!
//! Neon accents on the terminal's dark background: green for passing
//! rows and gains, red for failures, orange for the manual credit row,
//! cyan for focus and informational text.

use ratatui::style::{Color, Modifier, Style};

use spreadgate_core::filters::FilterDisplay;
use spreadgate_core::signal::SignalState;

pub fn accent() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn positive() -> Style {
    Style::default().fg(Color::Green)
}

pub fn negative() -> Style {
    Style::default().fg(Color::Red)
}

pub fn warning() -> Style {
    Style::default().fg(Color::Rgb(255, 140, 0))
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn title() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn emphasis() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Row style for one filter line.
pub fn filter_row(display: FilterDisplay) -> Style {
    match display {
        FilterDisplay::Pass => positive(),
        FilterDisplay::Fail => negative(),
        FilterDisplay::Manual => warning(),
    }
}

/// Banner style for the aggregate signal.
pub fn signal_banner(state: SignalState) -> Style {
    match state {
        SignalState::Green => positive().add_modifier(Modifier::BOLD),
        SignalState::Waiting => accent(),
        SignalState::Red => negative().add_modifier(Modifier::BOLD),
    }
}

/// Style a signed delta: at-or-above zero reads as positive.
pub fn delta(value: f64) -> Style {
    if value >= 0.0 {
        positive()
    } else {
        negative()
    }
}
