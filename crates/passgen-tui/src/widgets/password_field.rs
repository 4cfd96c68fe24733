//! Password display and its copy button

use passgen_app::{AppState, Focus};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Widget},
};

use crate::theme::{palette, styles, styles::ButtonState};

/// Read-only password field.
///
/// Shows the mask while generating. Long passwords wrap onto further rows
/// so the whole text stays visible. After a successful copy the text is
/// drawn highlighted, like a selected input.
pub struct PasswordField<'a> {
    text: &'a str,
    generating: bool,
    selected: bool,
}

impl<'a> PasswordField<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            generating: false,
            selected: false,
        }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self {
            generating: state.is_generating(),
            ..Self::new(state.displayed_password())
        }
        .selected(state.copied)
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Split `text` into rows of at most `width` characters
fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|row| row.iter().collect())
        .collect()
}

impl Widget for PasswordField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.selected)
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(palette::FIELD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text_style = if self.generating {
            styles::text_muted().add_modifier(Modifier::SLOW_BLINK)
        } else if self.selected {
            Style::default()
                .fg(palette::CONTRAST_FG)
                .bg(palette::ACCENT)
        } else {
            styles::text_primary()
        };

        let lines: Vec<Line> = wrap_chars(self.text, usize::from(inner.width))
            .into_iter()
            .map(|row| Line::from(Span::styled(row, text_style)))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Copy button to the right of the password field
pub struct CopyButton {
    state: ButtonState,
    focused: bool,
}

impl CopyButton {
    pub fn new(state: ButtonState, focused: bool) -> Self {
        Self { state, focused }
    }

    pub fn from_state(state: &AppState) -> Self {
        let button_state = if state.copied {
            ButtonState::Success
        } else if state.can_copy() {
            ButtonState::Enabled
        } else {
            ButtonState::Disabled
        };
        Self::new(button_state, state.focus == Focus::Copy)
    }

    fn label(&self) -> &'static str {
        match self.state {
            ButtonState::Success => "Copied!",
            _ => "Copy",
        }
    }
}

impl Widget for CopyButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = styles::button(self.state, self.focused);
        let block = styles::glass_block(self.focused).style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.label())
            .style(style)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{generating_state, idle_state_with_password, TestTerminal};
    use passgen_app::MASKED_PLACEHOLDER;

    #[test]
    fn test_field_shows_password_when_idle() {
        let state = idle_state_with_password("aBcDeFgH");
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(PasswordField::from_state(&state), term.area());

        assert!(term.line_contains(1, "aBcDeFgH"));
    }

    #[test]
    fn test_field_shows_mask_while_generating() {
        let state = generating_state("aBcDeFgH");
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(PasswordField::from_state(&state), term.area());

        assert!(term.buffer_contains(MASKED_PLACEHOLDER));
        assert!(!term.buffer_contains("aBcDeFgH"));
    }

    #[test]
    fn test_long_password_wraps_without_loss() {
        let password = "ABCDEFGHIJ".repeat(10);
        let mut term = TestTerminal::with_size(40, 6);
        term.render_widget(PasswordField::new(&password), term.area());

        // 36 columns inside border and padding: 36 + 36 + 28
        assert!(term.line_contains(1, &password[..36]));
        assert!(term.line_contains(2, &password[36..72]));
        assert!(term.line_contains(3, &password[72..]));
        assert!(!term.buffer_contains("…"));
    }

    #[test]
    fn test_selected_field_uses_highlight_background() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(PasswordField::new("abcdefgh").selected(true), term.area());

        // Text starts after the border and one column of padding
        assert_eq!(term.buffer()[(2, 1)].bg, palette::ACCENT);
    }

    #[test]
    fn test_wrap_chars() {
        assert_eq!(wrap_chars("abc", 10), vec!["abc"]);
        assert_eq!(wrap_chars("abcdef", 4), vec!["abcd", "ef"]);
        assert!(wrap_chars("", 4).is_empty());
    }

    #[test]
    fn test_copy_button_labels() {
        let mut term = TestTerminal::with_size(12, 3);
        term.render_widget(CopyButton::new(ButtonState::Enabled, false), term.area());
        assert!(term.buffer_contains("Copy"));
        assert!(!term.buffer_contains("Copied!"));

        term.render_widget(CopyButton::new(ButtonState::Success, false), term.area());
        assert!(term.buffer_contains("Copied!"));
    }

    #[test]
    fn test_copy_button_disabled_without_password() {
        let state = AppState::new();
        let button = CopyButton::from_state(&state);
        assert_eq!(button.state, ButtonState::Disabled);
    }

    #[test]
    fn test_copy_button_success_while_copied() {
        let mut state = idle_state_with_password("abcdefgh");
        state.copied = true;
        assert_eq!(CopyButton::from_state(&state).state, ButtonState::Success);
    }
}
