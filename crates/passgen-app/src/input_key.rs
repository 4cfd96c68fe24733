//! Abstract input key event, independent of terminal library.
//!
//! Keeps passgen-app free of crossterm types; the TUI converts its key
//! events into `InputKey` at the boundary.

/// Keyboard input the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}
