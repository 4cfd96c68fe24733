//! passgen-tui - Terminal UI for passgen
//!
//! This crate provides the ratatui-based terminal interface. It creates an Engine
//! from passgen-app and adds the card rendering, keyboard polling and widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
