//! Length slider

use passgen_core::{MAX_LENGTH, MIN_LENGTH};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const TRACK_FILLED: &str = "━";
const TRACK_EMPTY: &str = "─";
const KNOB: &str = "●";

/// "Password Length" with the current value, over a horizontal track
pub struct LengthSlider {
    length: usize,
    focused: bool,
}

impl LengthSlider {
    pub fn new(length: usize, focused: bool) -> Self {
        Self { length, focused }
    }
}

/// Column of the knob on a track `width` cells wide
fn knob_offset(length: usize, width: u16) -> u16 {
    if width <= 1 {
        return 0;
    }
    let span = MAX_LENGTH - MIN_LENGTH;
    let clamped = length.clamp(MIN_LENGTH, MAX_LENGTH) - MIN_LENGTH;
    (clamped * usize::from(width - 1) / span) as u16
}

impl Widget for LengthSlider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let title = Line::from(Span::styled(
            "Password Length",
            styles::control_label(self.focused),
        ));
        buf.set_line(area.x, area.y, &title, area.width);

        let value = Line::from(Span::styled(self.length.to_string(), styles::accent_bold()));
        let value_width = value.width() as u16;
        if value_width < area.width {
            buf.set_line(area.right() - value_width, area.y, &value, value_width);
        }

        if area.height < 2 {
            return;
        }

        let track_y = area.y + 1;
        let knob = knob_offset(self.length, area.width);
        let filled_style = Style::default().fg(palette::ACCENT);
        let empty_style = Style::default().fg(palette::TRACK_BG);
        let knob_style = if self.focused {
            styles::accent_bold()
        } else {
            Style::default().fg(palette::TEXT_PRIMARY)
        };

        for offset in 0..area.width {
            let (symbol, style) = match offset.cmp(&knob) {
                std::cmp::Ordering::Less => (TRACK_FILLED, filled_style),
                std::cmp::Ordering::Equal => (KNOB, knob_style),
                std::cmp::Ordering::Greater => (TRACK_EMPTY, empty_style),
            };
            buf[(area.x + offset, track_y)].set_symbol(symbol).set_style(style);
        }
    }
}
