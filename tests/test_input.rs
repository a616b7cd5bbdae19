use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use space_invaders::compute::Intents;
use space_invaders::input::{InputTracker, HOLD_WINDOW, REPEAT_DELAY};

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
}

fn press(code: KeyCode) -> Event {
    key(code, KeyEventKind::Press)
}

fn space() -> KeyCode {
    KeyCode::Char(' ')
}

fn tracker() -> InputTracker {
    let mut t = InputTracker::new();
    t.next_frame();
    t
}

// ── Edge-triggered ────────────────────────────────────────────────────────────

#[test]
fn space_press_fires_once() {
    let mut t = tracker();
    t.handle(&press(space()));

    let first = t.intents();
    assert!(first.fire);
    assert!(!first.start);

    t.next_frame();
    assert!(!t.intents().fire);
}

#[test]
fn repeated_presses_while_held_fire_once() {
    // Classic terminals report auto-repeat as more presses.
    let mut t = tracker();
    let mut fired = 0;
    for _ in 0..30 {
        t.handle(&press(space()));
        if t.intents().fire {
            fired += 1;
        }
        t.next_frame();
    }
    assert_eq!(fired, 1);
}

#[test]
fn repeat_events_never_fire() {
    let mut t = tracker();
    t.handle(&press(space()));
    let _ = t.intents();

    t.next_frame();
    t.handle(&key(space(), KeyEventKind::Repeat));
    assert!(!t.intents().fire);
}

#[test]
fn release_then_press_fires_again() {
    let mut t = tracker();
    t.handle(&press(space()));
    assert!(t.intents().fire);

    t.next_frame();
    t.handle(&key(space(), KeyEventKind::Release));
    t.handle(&press(space()));
    assert!(t.intents().fire);
}

#[test]
fn held_fire_survives_the_auto_repeat_delay() {
    // No release events: one press, then repeats-as-presses every other
    // frame once the OS repeat delay (half a second) has passed.
    let mut t = tracker();
    let mut fired = 0;
    for frame in 0..90 {
        if frame == 0 || (frame >= 30 && frame % 2 == 0) {
            t.handle(&press(space()));
        }
        if t.intents().fire {
            fired += 1;
        }
        t.next_frame();
    }
    assert_eq!(fired, 1);
}

#[test]
fn press_after_silence_fires_again() {
    let mut t = tracker();
    t.handle(&press(space()));
    assert!(t.intents().fire);

    for _ in 0..=REPEAT_DELAY {
        t.next_frame();
    }
    t.handle(&press(space()));
    assert!(t.intents().fire);
}

#[test]
fn press_after_repeats_stop_fires_again() {
    let mut t = tracker();
    t.handle(&press(space()));
    assert!(t.intents().fire);
    t.next_frame();
    t.handle(&press(space()));
    assert!(!t.intents().fire);

    for _ in 0..=HOLD_WINDOW {
        t.next_frame();
    }
    t.handle(&press(space()));
    assert!(t.intents().fire);
}

#[test]
fn two_presses_in_one_frame_fire_once() {
    let mut t = tracker();
    t.handle(&press(space()));
    t.handle(&press(space()));
    assert!(t.intents().fire);
    assert!(!t.intents().fire);
}

#[test]
fn enter_starts_without_firing() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Enter));
    let intents = t.intents();
    assert!(intents.start);
    assert!(!intents.fire);
}

// ── Quit ──────────────────────────────────────────────────────────────────────

#[test]
fn quit_keys() {
    for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')] {
        let mut t = tracker();
        t.handle(&press(code));
        assert!(t.intents().quit, "{code:?}");
    }

    let mut t = tracker();
    t.handle(&Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(t.intents().quit);
}

#[test]
fn plain_c_does_not_quit() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Char('c')));
    assert_eq!(t.intents(), Intents::default());
}

// ── Held ──────────────────────────────────────────────────────────────────────

#[test]
fn movement_is_held_through_the_repeat_delay() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Left));

    for _ in 0..REPEAT_DELAY {
        assert!(t.intents().left);
        t.next_frame();
    }
    assert!(t.intents().left);

    t.next_frame();
    assert!(!t.intents().left);
}

#[test]
fn movement_drops_soon_after_repeats_stop() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Left));
    t.next_frame();
    t.handle(&press(KeyCode::Left));

    for _ in 0..HOLD_WINDOW {
        t.next_frame();
    }
    assert!(t.intents().left);

    t.next_frame();
    assert!(!t.intents().left);
}

#[test]
fn repeats_keep_movement_held() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Char('d')));
    for _ in 0..50 {
        t.next_frame();
        t.handle(&key(KeyCode::Char('d'), KeyEventKind::Repeat));
        assert!(t.intents().right);
    }
}

#[test]
fn release_drops_movement_immediately() {
    let mut t = tracker();
    t.handle(&press(KeyCode::Char('a')));
    assert!(t.intents().left);

    t.handle(&key(KeyCode::Char('a'), KeyEventKind::Release));
    assert!(!t.intents().left);
}

#[test]
fn arrows_and_letters_map_to_same_direction() {
    for code in [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')] {
        let mut t = tracker();
        t.handle(&press(code));
        let i = t.intents();
        assert!(i.left && !i.right, "{code:?}");
    }
    for code in [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')] {
        let mut t = tracker();
        t.handle(&press(code));
        let i = t.intents();
        assert!(i.right && !i.left, "{code:?}");
    }
}

#[test]
fn non_key_events_are_ignored() {
    let mut t = tracker();
    t.handle(&Event::FocusGained);
    t.handle(&Event::Resize(80, 24));
    assert_eq!(t.intents(), Intents::default());
}
