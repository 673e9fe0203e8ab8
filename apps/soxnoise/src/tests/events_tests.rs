use super::*;

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press))
}

#[test]
fn maps_documented_keys() {
    assert_eq!(KeyAction::from_key('0'), Some(KeyAction::VolumeUp));
    assert_eq!(KeyAction::from_key('='), Some(KeyAction::VolumeUp));
    assert_eq!(KeyAction::from_key('9'), Some(KeyAction::VolumeDown));
    assert_eq!(KeyAction::from_key('-'), Some(KeyAction::VolumeDown));
    assert_eq!(KeyAction::from_key('m'), Some(KeyAction::ToggleMute));
    assert_eq!(KeyAction::from_key('c'), Some(KeyAction::FrequencyUp));
    assert_eq!(KeyAction::from_key('C'), Some(KeyAction::FrequencyDown));
    assert_eq!(KeyAction::from_key('r'), Some(KeyAction::ReverbUp));
    assert_eq!(KeyAction::from_key('R'), Some(KeyAction::ReverbDown));
    assert_eq!(
        KeyAction::from_key('b'),
        Some(KeyAction::SetColor(NoiseColor::Brown))
    );
    assert_eq!(KeyAction::from_key('h'), Some(KeyAction::ToggleHelp));
    assert_eq!(KeyAction::from_key('q'), Some(KeyAction::Quit));
    assert_eq!(KeyAction::from_key('x'), None);
}

#[test]
fn translates_plain_characters() {
    assert_eq!(
        translate(key(KeyCode::Char('C'), KeyModifiers::SHIFT)),
        Some(InputEvent::Key('C'))
    );
}

#[test]
fn ctrl_c_is_an_interrupt() {
    assert_eq!(
        translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(InputEvent::Interrupt)
    );
}

#[test]
fn resize_and_non_character_keys() {
    assert_eq!(translate(Event::Resize(80, 24)), Some(InputEvent::Resize));
    assert_eq!(translate(key(KeyCode::Up, KeyModifiers::NONE)), None);
    assert_eq!(translate(Event::FocusGained), None);
}

#[test]
fn key_releases_are_ignored() {
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('q'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert_eq!(translate(release), None);
}
