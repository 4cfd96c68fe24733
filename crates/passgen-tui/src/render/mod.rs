//! Main render/view function (View in TEA pattern)


use passgen_app::{AppState, Focus};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::{palette, styles};
use crate::{layout, widgets};

/// Render the complete UI.
///
/// Pure function of `state`: everything shown, including the strength
/// display, is derived here on every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        styles::glass_block(false).style(Style::default().bg(palette::CARD_BG)),
        areas.card,
    );

    frame.render_widget(widgets::Header, areas.header);

    frame.render_widget(widgets::PasswordField::from_state(state), areas.password);
    frame.render_widget(widgets::CopyButton::from_state(state), areas.copy_button);

    frame.render_widget(widgets::StrengthMeter::new(state.strength()), areas.strength);

    frame.render_widget(
        widgets::LengthSlider::new(state.config.length(), state.focus == Focus::Length),
        areas.slider,
    );

    frame.render_widget(
        widgets::Toggle::new(
            "Include Numbers",
            'n',
            state.config.numbers,
            state.focus == Focus::Numbers,
        ),
        areas.numbers_toggle,
    );
    frame.render_widget(
        widgets::Toggle::new(
            "Include Symbols",
            's',
            state.config.symbols,
            state.focus == Focus::Symbols,
        ),
        areas.symbols_toggle,
    );

    frame.render_widget(
        widgets::GenerateButton::new(
            state.is_generating(),
            state.focus == Focus::Generate,
            state.spinner(),
        ),
        areas.generate,
    );

    frame.render_widget(
        widgets::Footer::new(state.clipboard_notice.as_deref()),
        areas.footer,
    );
}
