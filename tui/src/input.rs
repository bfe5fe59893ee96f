//! Terminal event handling.
//!
//! Modal: Normal mode navigates and toggles, Insert mode edits the draft.
//! Mouse presses act as taps on list rows in either mode.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use questlog_types::ui::InputMode;

use crate::app::App;
use crate::effects::TICKS_PER_SECOND;

const POLL_INTERVAL: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND as u64);

/// Poll for one frame's worth of terminal events and apply them.
pub fn handle_events(app: &mut App) -> Result<()> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(());
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.mode() {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Insert => handle_insert_key(app, key),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('i' | 'a') => app.set_mode(InputMode::Insert),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        _ => {}
    }
}

fn handle_insert_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.set_mode(InputMode::Normal),
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Backspace => app.draft_mut().delete_char(),
        KeyCode::Delete => app.draft_mut().delete_char_forward(),
        KeyCode::Left => app.draft_mut().move_cursor_left(),
        KeyCode::Right => app.draft_mut().move_cursor_right(),
        KeyCode::Home => app.draft_mut().reset_cursor(),
        KeyCode::End => app.draft_mut().move_cursor_end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.draft_mut().clear();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.draft_mut().delete_word_backwards();
        }
        KeyCode::Char(c) => app.draft_mut().enter_char(c),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.click(mouse.column, mouse.row);
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_key, handle_mouse};
    use crate::app::App;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use questlog_types::ui::{InputMode, UiOptions};
    use questlog_types::Variant;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_flows_through_insert_mode() {
        let mut app = App::new(Variant::Plain, UiOptions::default());

        handle_key(&mut app, press(KeyCode::Char('i')));
        assert_eq!(app.mode(), InputMode::Insert);

        for c in "buy milk".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.draft().text(), "buy milk");

        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.list().len(), 1);
        assert_eq!(app.draft().text(), "");
        assert_eq!(app.mode(), InputMode::Insert, "stays in insert mode");
    }

    #[test]
    fn escape_returns_to_normal_and_enter_toggles() {
        let mut app = App::new(Variant::Plain, UiOptions::default());
        handle_key(&mut app, press(KeyCode::Char('i')));
        for c in "task".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.mode(), InputMode::Normal);

        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.list().items()[0].is_completed());
    }

    #[test]
    fn q_only_quits_in_normal_mode() {
        let mut app = App::new(Variant::Plain, UiOptions::default());
        handle_key(&mut app, press(KeyCode::Char('i')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.draft().text(), "q");

        handle_key(&mut app, press(KeyCode::Esc));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let mut app = App::new(Variant::Plain, UiOptions::default());
        handle_key(&mut app, press(KeyCode::Char('i')));
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_w_deletes_last_word() {
        let mut app = App::new(Variant::Plain, UiOptions::default());
        handle_key(&mut app, press(KeyCode::Char('i')));
        for c in "slay the dragon".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, ctrl('w'));
        assert_eq!(app.draft().text(), "slay the ");
    }

    #[test]
    fn left_click_taps_a_row() {
        let mut app = App::new(Variant::Plain, UiOptions::default());
        handle_key(&mut app, press(KeyCode::Char('i')));
        for c in "task".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        app.set_list_viewport(Rect::new(1, 8, 40, 6));

        handle_mouse(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 4,
                row: 8,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(app.list().items()[0].is_completed());
    }
}
