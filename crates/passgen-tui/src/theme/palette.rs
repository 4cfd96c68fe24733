//! Color palette (dark slate card with indigo accents)

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(17, 24, 39); // gray-900
pub const CARD_BG: Color = Color::Rgb(31, 41, 55); // gray-800
pub const FIELD_BG: Color = Color::Rgb(17, 24, 39);
pub const TRACK_BG: Color = Color::Rgb(55, 65, 81); // gray-700

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(75, 85, 99);
pub const BORDER_ACTIVE: Color = Color::Rgb(129, 140, 248); // indigo-400

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(99, 102, 241); // indigo-500
pub const ACCENT_TEXT: Color = Color::Rgb(129, 140, 248);
pub const TITLE_START: Color = Color::Rgb(96, 165, 250); // blue-400
pub const TITLE_END: Color = Color::Rgb(147, 51, 234); // purple-600

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235);
pub const TEXT_SECONDARY: Color = Color::Rgb(156, 163, 175);
pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128);
pub const CONTRAST_FG: Color = Color::White;

// --- Buttons ---
pub const BUTTON_BG: Color = Color::Rgb(79, 70, 229); // indigo-600
pub const BUTTON_DISABLED_BG: Color = Color::Rgb(75, 85, 99); // gray-600
pub const BUTTON_DISABLED_FG: Color = Color::Rgb(209, 213, 219);
pub const COPIED_BG: Color = Color::Rgb(22, 163, 74); // green-600

// --- Strength levels ---
pub const STRENGTH_RED: Color = Color::Rgb(239, 68, 68);
pub const STRENGTH_ORANGE: Color = Color::Rgb(249, 115, 22);
pub const STRENGTH_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const STRENGTH_LIME: Color = Color::Rgb(132, 204, 22);
pub const STRENGTH_GREEN: Color = Color::Rgb(34, 197, 94);

// --- Notices ---
pub const NOTICE_WARNING: Color = Color::Rgb(251, 191, 36);
