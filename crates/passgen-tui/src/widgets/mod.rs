//! Custom widget components

mod footer;
mod generate_button;
mod header;
mod length_slider;
mod password_field;
mod strength_meter;
mod toggle;

pub use footer::{Footer, DISCLAIMER};
pub use generate_button::GenerateButton;
pub use header::Header;
pub use length_slider::LengthSlider;
pub use password_field::{CopyButton, PasswordField};
pub use strength_meter::StrengthMeter;
pub use toggle::Toggle;
