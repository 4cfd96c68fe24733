//! passgen-app - Application state and orchestration for passgen
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine that owns state and timers, configuration loading,
//! and the clipboard adapter. It has no terminal dependencies.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use clipboard::{Clipboard, SystemClipboard};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Focus, GenerationState, MASKED_PLACEHOLDER};
