//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Config Messages (each one regenerates when it changes the config)
    // ─────────────────────────────────────────────────────────
    /// Move the length slider by a number of steps
    AdjustLength(isize),
    /// Jump the length slider to a value (clamped)
    SetLength(usize),
    /// Flip digit inclusion
    ToggleNumbers,
    /// Flip symbol inclusion
    ToggleSymbols,

    // ─────────────────────────────────────────────────────────
    // Button Messages
    // ─────────────────────────────────────────────────────────
    /// Generate button pressed
    Regenerate,
    /// Copy button pressed
    CopyPassword,

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    /// Enter/Space on the focused control
    ActivateFocused,

    // ─────────────────────────────────────────────────────────
    // Deferred Work Completion
    // ─────────────────────────────────────────────────────────
    /// A generation timer fired; only the current token is accepted
    PasswordGenerated { token: u64, password: String },
    /// The clipboard accepted the password
    CopySucceeded,
    /// The clipboard write failed (non-fatal)
    CopyFailed { reason: String },
    /// The copy acknowledgement window elapsed
    AcknowledgementExpired { token: u64 },
}
