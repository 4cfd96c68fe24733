//! Footer: disclaimer, then key hints or the clipboard notice

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const DISCLAIMER: &str =
    "Your passwords are generated locally and never stored or transmitted.";

const HINTS: &[(&str, &str)] = &[
    ("Tab", "focus"),
    ("-/+", "length"),
    ("n/s", "toggle"),
    ("g", "new"),
    ("c", "copy"),
    ("q", "quit"),
];

pub struct Footer<'a> {
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(notice: Option<&'a str>) -> Self {
        Self { notice }
    }
}

fn hints_line() -> Line<'static> {
    let mut spans = Vec::with_capacity(HINTS.len() * 3);
    for (i, (key, action)) in HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, styles::accent_bold()));
        spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
    }
    Line::from(spans)
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let second = match self.notice {
            Some(notice) => Line::from(Span::styled(
                notice.to_string(),
                Style::default().fg(palette::NOTICE_WARNING),
            )),
            None => hints_line(),
        };

        let disclaimer = Line::from(Span::styled(DISCLAIMER, styles::text_muted()));

        Paragraph::new(vec![disclaimer, second])
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
