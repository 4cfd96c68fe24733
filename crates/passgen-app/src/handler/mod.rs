//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event to message mapping

pub(crate) mod keys;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;
use passgen_core::{GeneratorConfig, IndexPolicy};

pub use keys::handle_key;
pub use update::update;

/// Actions that the engine should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Generate a password after `delay`, replacing any pending generation
    ScheduleGeneration {
        token: u64,
        config: GeneratorConfig,
        policy: IndexPolicy,
        delay: Duration,
    },

    /// Write `text` to the system clipboard
    CopyToClipboard { text: String },

    /// Clear the copy acknowledgement after `delay`, replacing any pending reset
    ScheduleAcknowledgementReset { token: u64, delay: Duration },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the engine to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
