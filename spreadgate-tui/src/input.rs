//! Keyboard input dispatch — overlays first, then global keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            handle_help_overlay(app, key);
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_credit(1),
        KeyCode::Down | KeyCode::Char('-') => app.adjust_credit(-1),
        KeyCode::PageUp => app.adjust_credit(5),
        KeyCode::PageDown => app.adjust_credit(-5),
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
        }
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        _ => {}
    }
}

fn handle_help_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::{WorkerCommand, WorkerResponse};
    use spreadgate_core::config::DashboardConfig;
    use std::sync::mpsc;

    fn app() -> (
        AppState,
        mpsc::Receiver<WorkerCommand>,
        mpsc::Sender<WorkerResponse>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let app = AppState::new(DashboardConfig::default(), cmd_tx, resp_rx);
        (app, cmd_rx, resp_tx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, crossterm::event::KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let (mut app, _cmd, _resp) = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn r_requests_a_refresh() {
        let (mut app, cmd_rx, _resp) = app();
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert!(matches!(cmd_rx.try_recv(), Ok(WorkerCommand::Refresh)));
        assert!(app.refresh_in_progress);
    }

    #[test]
    fn arrows_step_credit() {
        let (mut app, _cmd, _resp) = app();
        handle_key(&mut app, press(KeyCode::Up));
        assert!((app.credit - 0.28).abs() < 1e-12);
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Down));
        assert!((app.credit - 0.26).abs() < 1e-12);
    }

    #[test]
    fn page_keys_step_by_five_cents() {
        let (mut app, _cmd, _resp) = app();
        handle_key(&mut app, press(KeyCode::PageUp));
        assert!((app.credit - 0.32).abs() < 1e-12);
    }

    #[test]
    fn help_overlay_opens_and_closes() {
        let (mut app, _cmd, _resp) = app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);
        // Keys are swallowed while the overlay is up.
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert!(!app.refresh_in_progress);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn error_overlay_scrolls_within_bounds() {
        let (mut app, _cmd, _resp) = app();
        app.push_error("NET", "one");
        app.push_error("NET", "two");
        handle_key(&mut app, press(KeyCode::Char('e')));
        assert_eq!(app.overlay, Overlay::ErrorHistory);
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.error_scroll, 1);
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.error_scroll, 1);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.error_scroll, 0);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }
}
