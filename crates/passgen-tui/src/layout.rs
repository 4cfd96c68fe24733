//! Card layout for the generator screen
//!
//! The whole UI is one centered card. Rows inside the card are fixed so the
//! controls never jump around while a password is regenerated.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Maximum card width (columns)
pub const CARD_WIDTH: u16 = 76;

/// Card height including its border
pub const CARD_HEIGHT: u16 = 22;

/// Width of the copy button at the right of the password field
pub const COPY_BUTTON_WIDTH: u16 = 12;

/// Screen areas for the generator card
#[derive(Debug, Clone, Copy)]
pub struct CardAreas {
    /// Outer card including border
    pub card: Rect,

    /// Title + tagline
    pub header: Rect,

    /// Bordered password display
    pub password: Rect,

    /// Copy button next to the password
    pub copy_button: Rect,

    /// Strength label + bar
    pub strength: Rect,

    /// Length label + slider track
    pub slider: Rect,

    pub numbers_toggle: Rect,
    pub symbols_toggle: Rect,

    /// Generate button
    pub generate: Rect,

    /// Disclaimer + key hints / notice
    pub footer: Rect,
}

/// Center a `width` x `height` rectangle in `area`, shrinking it to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Compute every area of the card for a given screen
pub fn create(area: Rect) -> CardAreas {
    let card = centered(area, CARD_WIDTH, CARD_HEIGHT);

    // Border plus one column of horizontal padding
    let inner = Rect {
        x: card.x.saturating_add(2),
        y: card.y.saturating_add(1),
        width: card.width.saturating_sub(4),
        height: card.height.saturating_sub(2),
    };

    let [header, _, password_row, strength, _, slider, _, toggles, _, generate, footer] =
        Layout::vertical([
            Constraint::Length(2), // Title + tagline
            Constraint::Length(1),
            Constraint::Length(4), // Password field (bordered, two rows)
            Constraint::Length(2), // Strength label + bar
            Constraint::Length(1),
            Constraint::Length(2), // Length label + track
            Constraint::Length(1),
            Constraint::Length(1), // Toggles
            Constraint::Length(1),
            Constraint::Length(3), // Generate button (bordered)
            Constraint::Length(2), // Footer
        ])
        .areas(inner);

    let [password, copy_button] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(COPY_BUTTON_WIDTH)])
            .areas(password_row);

    let [numbers_toggle, symbols_toggle] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(toggles);

    CardAreas {
        card,
        header,
        password,
        copy_button,
        strength,
        slider,
        numbers_toggle,
        symbols_toggle,
        generate,
        footer,
    }
}
