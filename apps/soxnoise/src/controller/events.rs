//! Terminal input translated into controller events and key actions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use noise_model::NoiseColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(char),
    Interrupt,
    Resize,
    /// Input timeout elapsed with nothing pressed.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    VolumeUp,
    VolumeDown,
    ToggleMute,
    FrequencyUp,
    FrequencyDown,
    ReverbUp,
    ReverbDown,
    SetColor(NoiseColor),
    ToggleHelp,
    Quit,
}

impl KeyAction {
    pub fn from_key(key: char) -> Option<Self> {
        let action = match key {
            '0' | '=' => KeyAction::VolumeUp,
            '9' | '-' => KeyAction::VolumeDown,
            'm' => KeyAction::ToggleMute,
            'c' => KeyAction::FrequencyUp,
            'C' => KeyAction::FrequencyDown,
            'r' => KeyAction::ReverbUp,
            'R' => KeyAction::ReverbDown,
            'p' => KeyAction::SetColor(NoiseColor::Pink),
            'b' => KeyAction::SetColor(NoiseColor::Brown),
            'w' => KeyAction::SetColor(NoiseColor::White),
            'h' => KeyAction::ToggleHelp,
            'q' => KeyAction::Quit,
            _ => return None,
        };
        Some(action)
    }
}

pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Interrupt)
            }
            KeyCode::Char(c) => Some(InputEvent::Key(c)),
            _ => None,
        },
        Event::Resize(..) => Some(InputEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
