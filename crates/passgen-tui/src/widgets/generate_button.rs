//! Generate button with in-progress state

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, styles::ButtonState};

pub const IDLE_LABEL: &str = "Generate New Password";
pub const BUSY_LABEL: &str = "Generating...";

/// Full-width button. Disabled with a spinner while a generation is pending.
pub struct GenerateButton<'a> {
    generating: bool,
    focused: bool,
    spinner: &'a str,
}

impl<'a> GenerateButton<'a> {
    pub fn new(generating: bool, focused: bool, spinner: &'a str) -> Self {
        Self {
            generating,
            focused,
            spinner,
        }
    }
}

impl Widget for GenerateButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = if self.generating {
            ButtonState::Disabled
        } else {
            ButtonState::Enabled
        };
        let style = styles::button(state, self.focused);
        let block = styles::glass_block(self.focused && !self.generating).style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        let label = if self.generating {
            format!("{} {}", self.spinner, BUSY_LABEL)
        } else {
            IDLE_LABEL.to_string()
        };

        Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;

    #[test]
    fn test_idle_label() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(GenerateButton::new(false, false, "⠋"), term.area());

        assert!(term.line_contains(1, IDLE_LABEL));
        assert_eq!(term.buffer()[(20, 1)].bg, palette::BUTTON_BG);
    }

    #[test]
    fn test_generating_label_and_disabled_style() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(GenerateButton::new(true, true, "⠋"), term.area());

        assert!(term.line_contains(1, "⠋ Generating..."));
        assert!(!term.buffer_contains(IDLE_LABEL));
        assert_eq!(term.buffer()[(20, 1)].bg, palette::BUTTON_DISABLED_BG);
    }
}
