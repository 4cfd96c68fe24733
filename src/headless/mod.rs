//! Headless mode - JSON event output instead of the TUI
//!
//! Runs the same engine as the TUI, requests one password and writes
//! NDJSON (one JSON object per line) to stdout, so scripts can use passgen
//! without parsing terminal output.
//!
//! # Example Output
//!
//! ```json
//! {"event":"generation_started","length":16,"timestamp":1704700001000}
//! {"event":"password_generated","password":"...","length":16,"strength":"Very Strong","percent":100,"timestamp":1704700001300}
//! ```

pub mod runner;

use chrono::Utc;
use passgen_core::StrengthInfo;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A generation was requested
    GenerationStarted { length: usize, timestamp: i64 },

    /// The pending generation completed
    PasswordGenerated {
        password: String,
        length: usize,
        strength: String,
        percent: u16,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn generation_started(length: usize) -> Self {
        Self::GenerationStarted {
            length,
            timestamp: Self::now(),
        }
    }

    pub fn password_generated(password: &str, strength: &StrengthInfo) -> Self {
        Self::PasswordGenerated {
            password: password.to_string(),
            length: password.chars().count(),
            strength: strength.label.to_string(),
            percent: strength.percent,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}
