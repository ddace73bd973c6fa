use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::InputRequest;

use crate::{app::App, models::Renderable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NavigateUp,
    NavigateDown,
    ScrollUp,
    ScrollDown,
    JumpToStart,
    JumpToEnd,
    TogglePassing,
    CopySelected,
    Rerun,
    FilterEnter,
    FilterInput(char),
    FilterBackspace,
    FilterExit,
    FilterApply,
}

/// Process a keyboard action.
pub fn handle_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,

        Action::NavigateUp => {
            app.selected = app.selected.saturating_sub(1);
        }

        Action::NavigateDown => {
            let max = app.visible_rows().len().saturating_sub(1);
            app.selected = (app.selected + 1).min(max);
        }

        Action::ScrollUp => {
            let half = (app.viewport_height / 2).max(1);
            app.selected = app.selected.saturating_sub(half);
        }

        Action::ScrollDown => {
            let half = (app.viewport_height / 2).max(1);
            let max = app.visible_rows().len().saturating_sub(1);
            app.selected = (app.selected + half).min(max);
        }

        Action::JumpToStart => app.selected = 0,

        Action::JumpToEnd => app.select_last(),

        Action::TogglePassing => {
            app.hide_passing = !app.hide_passing;
            app.refresh_rows();
            app.clamp_selection();
            let state = if app.hide_passing { "hidden" } else { "shown" };
            app.notifier.info(format!("passing results {}", state));
        }

        Action::CopySelected => {
            let Some(text) = app.selected_result().map(|r| r.output_string(true)) else {
                return;
            };
            match copy_to_clipboard(text) {
                Ok(()) => app.notifier.info("copied to clipboard"),
                Err(e) => app.notifier.error(format!("{:#}", e)),
            }
        }

        Action::Rerun => {
            if app.streaming {
                app.notifier.info("source is still running");
            } else {
                app.rerun_requested = true;
            }
        }

        Action::FilterEnter => {
            app.filter_active = true;
        }

        Action::FilterInput(c) => {
            app.filter.handle(InputRequest::InsertChar(c));
            app.refresh_rows();
            app.selected = 0;
        }

        Action::FilterBackspace => {
            app.filter.handle(InputRequest::DeletePrevChar);
            app.refresh_rows();
            app.clamp_selection();
        }

        Action::FilterExit => {
            app.filter.reset();
            app.filter_active = false;
            app.refresh_rows();
            app.clamp_selection();
        }

        Action::FilterApply => {
            app.filter_active = false;
        }
    }
}

fn copy_to_clipboard(text: String) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text)
        .context("failed to copy to clipboard")?;
    Ok(())
}

/// Map a key press to an action, honoring filter input mode.
pub fn trigger_action(key: KeyEvent, filter_active: bool) -> Option<Action> {
    if filter_active {
        match key.code {
            KeyCode::Esc => Some(Action::FilterExit),
            KeyCode::Enter => Some(Action::FilterApply),
            KeyCode::Backspace => Some(Action::FilterBackspace),
            KeyCode::Up => Some(Action::NavigateUp),
            KeyCode::Down => Some(Action::NavigateDown),
            KeyCode::Char(c) => Some(Action::FilterInput(c)),
            _ => None,
        }
    } else {
        map_key(key)
    }
}

fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ScrollUp),
            KeyCode::Char('d') => Some(Action::ScrollDown),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::NavigateDown),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::JumpToStart),
        KeyCode::Char('G') | KeyCode::End => Some(Action::JumpToEnd),
        KeyCode::Char('p') => Some(Action::TogglePassing),
        KeyCode::Char('y') => Some(Action::CopySelected),
        KeyCode::Char('r') => Some(Action::Rerun),
        KeyCode::Char('f') | KeyCode::Char('/') => Some(Action::FilterEnter),
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::PageDown => Some(Action::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Framework, ResultKind, TestResult};
    use crate::theme::Palette;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(n: usize) -> App {
        let (mut app, _rx) = App::new(Palette::default(), false);
        for i in 0..n {
            app.push_result(
                TestResult::builder("Suite")
                    .framework(Framework::xunit(format!("test{}", i), ""))
                    .kind(if i % 2 == 0 { ResultKind::Pass } else { ResultKind::Fail })
                    .build(),
            );
        }
        app.selected = 0;
        app
    }

    #[test]
    fn key_mapping() {
        assert_eq!(trigger_action(key(KeyCode::Char('j')), false), Some(Action::NavigateDown));
        assert_eq!(trigger_action(key(KeyCode::Char('y')), false), Some(Action::CopySelected));
        assert_eq!(
            trigger_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), false),
            Some(Action::Quit)
        );
        assert_eq!(trigger_action(key(KeyCode::Char('q')), true), Some(Action::FilterInput('q')));
        assert_eq!(trigger_action(key(KeyCode::Esc), true), Some(Action::FilterExit));
        assert_eq!(trigger_action(key(KeyCode::F(5)), false), None);
    }

    #[test]
    fn navigation_is_bounded() {
        let mut app = app_with(3);
        handle_action(&mut app, Action::NavigateUp);
        assert_eq!(app.selected, 0);
        for _ in 0..5 {
            handle_action(&mut app, Action::NavigateDown);
        }
        assert_eq!(app.selected, 2);
        handle_action(&mut app, Action::JumpToStart);
        assert_eq!(app.selected, 0);
        handle_action(&mut app, Action::JumpToEnd);
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn half_page_scroll() {
        let mut app = app_with(20);
        app.viewport_height = 10;
        handle_action(&mut app, Action::ScrollDown);
        assert_eq!(app.selected, 5);
        handle_action(&mut app, Action::ScrollUp);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn filter_typing_and_exit() {
        let mut app = app_with(4);
        handle_action(&mut app, Action::FilterEnter);
        assert!(app.filter_active);
        for c in "test3".chars() {
            handle_action(&mut app, Action::FilterInput(c));
        }
        assert_eq!(app.visible_rows(), vec![3]);
        handle_action(&mut app, Action::FilterBackspace);
        assert_eq!(app.visible_rows().len(), 4);
        handle_action(&mut app, Action::FilterExit);
        assert!(!app.filter_active);
        assert_eq!(app.filter.value(), "");
    }

    #[test]
    fn toggle_passing_clamps_selection() {
        let mut app = app_with(4);
        app.selected = 3;
        handle_action(&mut app, Action::TogglePassing);
        assert!(app.hide_passing);
        assert_eq!(app.visible_rows(), vec![1, 3]);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn rerun_waits_for_running_source() {
        let mut app = app_with(0);
        app.streaming = true;
        handle_action(&mut app, Action::Rerun);
        assert!(!app.rerun_requested);
        app.streaming = false;
        handle_action(&mut app, Action::Rerun);
        assert!(app.rerun_requested);
    }
}
