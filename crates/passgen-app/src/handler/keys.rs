//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};
use passgen_core::{MAX_LENGTH, MIN_LENGTH};

/// Slider step for PageUp/PageDown
const PAGE_STEP: isize = 10;

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Focus navigation
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrevious),

        // Left/Right drive the slider when it has focus, otherwise move focus
        InputKey::Left | InputKey::Char('h') => Some(if state.focus == Focus::Length {
            Message::AdjustLength(-1)
        } else {
            Message::FocusPrevious
        }),
        InputKey::Right | InputKey::Char('l') => Some(if state.focus == Focus::Length {
            Message::AdjustLength(1)
        } else {
            Message::FocusNext
        }),

        // Slider shortcuts that work from anywhere
        InputKey::Char('-') => Some(Message::AdjustLength(-1)),
        InputKey::Char('+' | '=') => Some(Message::AdjustLength(1)),
        InputKey::PageDown => Some(Message::AdjustLength(-PAGE_STEP)),
        InputKey::PageUp => Some(Message::AdjustLength(PAGE_STEP)),
        InputKey::Home => Some(Message::SetLength(MIN_LENGTH)),
        InputKey::End => Some(Message::SetLength(MAX_LENGTH)),

        // Toggles
        InputKey::Char('n') => Some(Message::ToggleNumbers),
        InputKey::Char('s') => Some(Message::ToggleSymbols),

        // Buttons
        InputKey::Char('g' | 'r') => Some(Message::Regenerate),
        InputKey::Char('c' | 'y') => Some(Message::CopyPassword),

        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateFocused),

        _ => None,
    }
}
