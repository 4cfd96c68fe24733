//! Semantic style builders

use passgen_core::Strength;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT_TEXT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

/// Label style for a control, brighter when focused
pub fn control_label(focused: bool) -> Style {
    if focused {
        accent_bold()
    } else {
        text_primary()
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Buttons ---

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Enabled,
    Disabled,
    Success,
}

pub fn button(state: ButtonState, focused: bool) -> Style {
    let style = match state {
        ButtonState::Enabled => Style::default().fg(palette::CONTRAST_FG).bg(palette::BUTTON_BG),
        ButtonState::Disabled => Style::default()
            .fg(palette::BUTTON_DISABLED_FG)
            .bg(palette::BUTTON_DISABLED_BG),
        ButtonState::Success => Style::default().fg(palette::CONTRAST_FG).bg(palette::COPIED_BG),
    };
    if focused && state != ButtonState::Disabled {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

// --- Strength ---

/// Palette colour for a strength level
pub fn strength_color(strength: Strength) -> Color {
    match strength {
        Strength::Weak => palette::STRENGTH_RED,
        Strength::Fair => palette::STRENGTH_ORANGE,
        Strength::Good => palette::STRENGTH_YELLOW,
        Strength::Strong => palette::STRENGTH_LIME,
        Strength::VeryStrong => palette::STRENGTH_GREEN,
    }
}

pub fn strength_label(strength: Strength) -> Style {
    Style::default()
        .fg(strength_color(strength))
        .add_modifier(Modifier::BOLD)
}
