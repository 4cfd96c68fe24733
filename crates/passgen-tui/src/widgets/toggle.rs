//! Checkbox-style toggle

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct Toggle<'a> {
    label: &'a str,
    hotkey: char,
    checked: bool,
    focused: bool,
}

impl<'a> Toggle<'a> {
    pub fn new(label: &'a str, hotkey: char, checked: bool, focused: bool) -> Self {
        Self {
            label,
            hotkey,
            checked,
            focused,
        }
    }
}

impl Widget for Toggle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let (mark, mark_style) = if self.checked {
            ("[✓]", styles::accent_bold())
        } else {
            ("[ ]", styles::text_muted())
        };

        let line = Line::from(vec![
            Span::styled(mark, mark_style),
            Span::raw(" "),
            Span::styled(self.label, styles::control_label(self.focused)),
            Span::styled(format!(" ({})", self.hotkey), styles::text_muted()),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_checked_toggle() {
        let mut term = TestTerminal::with_size(30, 1);
        term.render_widget(Toggle::new("Include Numbers", 'n', true, false), term.area());

        assert!(term.buffer_contains("[✓] Include Numbers (n)"));
    }

    #[test]
    fn test_unchecked_toggle() {
        let mut term = TestTerminal::with_size(30, 1);
        term.render_widget(Toggle::new("Include Symbols", 's', false, false), term.area());

        assert!(term.buffer_contains("[ ] Include Symbols (s)"));
    }
}
