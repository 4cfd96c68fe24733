//! Strength label and bar

use passgen_core::StrengthInfo;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// "Password Strength ........ Good" over a bar filled to the percentage
pub struct StrengthMeter {
    info: StrengthInfo,
}

impl StrengthMeter {
    pub fn new(info: StrengthInfo) -> Self {
        Self { info }
    }
}

/// Number of filled cells for `percent` of `width`
fn filled_cells(width: u16, percent: u16) -> u16 {
    (u32::from(width) * u32::from(percent.min(100)) / 100) as u16
}

impl Widget for StrengthMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let title = Line::from(Span::styled("Password Strength", styles::text_secondary()));
        buf.set_line(area.x, area.y, &title, area.width);

        let label = Line::from(Span::styled(
            self.info.label,
            styles::strength_label(self.info.strength),
        ));
        let label_width = label.width() as u16;
        if label_width < area.width {
            buf.set_line(area.right() - label_width, area.y, &label, label_width);
        }

        if area.height < 2 {
            return;
        }

        let bar_y = area.y + 1;
        let filled = filled_cells(area.width, self.info.percent);
        let fill_style = Style::default().fg(styles::strength_color(self.info.strength));
        let empty_style = Style::default().fg(palette::TRACK_BG);

        for offset in 0..area.width {
            let (symbol, style) = if offset < filled {
                (FILLED, fill_style)
            } else {
                (EMPTY, empty_style)
            };
            buf[(area.x + offset, bar_y)].set_symbol(symbol).set_style(style);
        }
    }
}
