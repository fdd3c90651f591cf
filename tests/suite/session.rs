//! Whole sessions driven by terminal events, as the binary would see them.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use flames_engine::{App, EMPTY_NAMES_MESSAGE, NameSlot, ResultCode, ScreenKind, UiOptions};
use flames_tui::apply_event;

const DELAY: Duration = Duration::from_millis(2000);
const FRAME: Duration = Duration::from_millis(8);

fn press(app: &mut App, code: KeyCode) -> bool {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), false)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Step the frame clock until the result shows; returns frames taken.
fn run_frames(app: &mut App) -> usize {
    let mut frames = 0;
    while app.screen_kind() == ScreenKind::Calculating {
        app.advance(FRAME);
        frames += 1;
        assert!(frames < 10_000, "calculation never finished");
    }
    frames
}

#[test]
fn calculate_then_try_again_then_quit() {
    let mut app = App::new(UiOptions::default(), DELAY);

    type_str(&mut app, "Romeo");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "Juliet");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen_kind(), ScreenKind::Calculating);

    // keys other than quit do nothing mid-calculation
    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Enter);

    let frames = run_frames(&mut app);
    assert_eq!(frames, 250);
    assert_eq!(app.result(), Some(ResultCode::Enemy));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen_kind(), ScreenKind::Input);
    assert_eq!(app.focus(), NameSlot::First);

    type_str(&mut app, "Harry");
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "Sally");
    press(&mut app, KeyCode::Enter);
    run_frames(&mut app);
    assert_eq!(app.result(), Some(ResultCode::Marriage));

    assert!(press(&mut app, KeyCode::Esc));
}

#[test]
fn blank_second_name_is_caught_before_calculating() {
    let mut app = App::new(UiOptions::default(), DELAY);
    type_str(&mut app, "Alice");
    press(&mut app, KeyCode::Down);
    type_str(&mut app, "   ");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen_kind(), ScreenKind::Input);
    assert_eq!(app.error(), Some(EMPTY_NAMES_MESSAGE));

    // fixing the field clears the message
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "Bob");
    assert!(app.error().is_none());
    press(&mut app, KeyCode::Enter);
    run_frames(&mut app);
    assert_eq!(app.result(), Some(ResultCode::Affection));
    assert_eq!(app.submission().unwrap().second.as_str(), "Bob");
}

#[test]
fn pasted_names_are_validated_whole() {
    let mut app = App::new(UiOptions::default(), Duration::ZERO);
    apply_event(&mut app, Event::Paste("Mary Jane".to_string()), false);
    press(&mut app, KeyCode::Tab);
    apply_event(&mut app, Event::Paste("Peter 2".to_string()), false);
    assert!(app.draft(NameSlot::Second).text().is_empty());
    apply_event(&mut app, Event::Paste("Peter\nParker".to_string()), false);
    press(&mut app, KeyCode::Enter);
    app.advance(Duration::ZERO);
    assert_eq!(app.result(), Some(ResultCode::Affection));
}

#[test]
fn editing_keys_work_mid_name() {
    let mut app = App::new(UiOptions::default(), Duration::ZERO);
    type_str(&mut app, "Lam");
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    type_str(&mut app, "i");
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Delete);
    type_str(&mut app, "L");
    assert_eq!(app.draft(NameSlot::First).text(), "Liam");
}
