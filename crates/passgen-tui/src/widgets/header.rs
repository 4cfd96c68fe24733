//! Card header: title and tagline

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const TITLE: &str = "Password Generator";
pub const TAGLINE: &str = "Create strong, secure passwords instantly";

/// Title row in two tones plus the tagline underneath
#[derive(Debug, Default)]
pub struct Header;

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(
                "Password ",
                Style::default()
                    .fg(palette::TITLE_START)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Generator",
                Style::default()
                    .fg(palette::TITLE_END)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let tagline = Line::from(Span::styled(TAGLINE, styles::text_secondary()));

        Paragraph::new(vec![title, tagline])
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
