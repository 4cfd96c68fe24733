//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, Focus};
use tracing::{debug, info, warn};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick_spinner();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Config Messages
        // ─────────────────────────────────────────────────────────
        Message::AdjustLength(delta) => {
            if state.config.step_length(delta) {
                schedule_generation(state)
            } else {
                UpdateResult::none()
            }
        }

        Message::SetLength(length) => {
            if state.config.set_length(length) {
                schedule_generation(state)
            } else {
                UpdateResult::none()
            }
        }

        Message::ToggleNumbers => {
            state.config.toggle_numbers();
            schedule_generation(state)
        }

        Message::ToggleSymbols => {
            state.config.toggle_symbols();
            schedule_generation(state)
        }

        // ─────────────────────────────────────────────────────────
        // Button Messages
        // ─────────────────────────────────────────────────────────
        Message::Regenerate => {
            if !state.can_generate() {
                debug!("Regenerate ignored: generation already pending");
                return UpdateResult::none();
            }
            schedule_generation(state)
        }

        Message::CopyPassword => {
            if state.is_generating() {
                debug!("Copy ignored: generation pending");
                return UpdateResult::none();
            }
            if state.password.is_empty() {
                debug!("Copy ignored: nothing generated yet");
                return UpdateResult::none();
            }
            UpdateResult::action(UpdateAction::CopyToClipboard {
                text: state.password.clone(),
            })
        }

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }

        Message::ActivateFocused => match state.focus {
            Focus::Length => UpdateResult::none(),
            Focus::Numbers => UpdateResult::message(Message::ToggleNumbers),
            Focus::Symbols => UpdateResult::message(Message::ToggleSymbols),
            Focus::Generate => UpdateResult::message(Message::Regenerate),
            Focus::Copy => UpdateResult::message(Message::CopyPassword),
        },

        // ─────────────────────────────────────────────────────────
        // Deferred Work Completion
        // ─────────────────────────────────────────────────────────
        Message::PasswordGenerated { token, password } => {
            let length = password.chars().count();
            if state.complete_generation(token, password) {
                debug!("Generation {} landed ({} chars)", token, length);
            } else {
                debug!("Dropping stale generation {}", token);
            }
            UpdateResult::none()
        }

        Message::CopySucceeded => {
            state.copied = true;
            state.clipboard_notice = None;
            schedule_acknowledgement_reset(state)
        }

        Message::CopyFailed { reason } => {
            warn!("Clipboard write failed: {}", reason);
            state.copied = false;
            state.clipboard_notice = Some(format!("Clipboard unavailable: {}", reason));
            schedule_acknowledgement_reset(state)
        }

        Message::AcknowledgementExpired { token } => {
            if !state.expire_acknowledgement(token) {
                debug!("Ignoring superseded acknowledgement {}", token);
            }
            UpdateResult::none()
        }
    }
}

/// Enter `Generating` and ask the engine for a (replacing) generation timer
fn schedule_generation(state: &mut AppState) -> UpdateResult {
    let token = state.begin_generation();
    debug!(
        "Scheduling generation {} (length={}, numbers={}, symbols={})",
        token,
        state.config.length(),
        state.config.numbers,
        state.config.symbols
    );
    UpdateResult::action(UpdateAction::ScheduleGeneration {
        token,
        config: state.config,
        policy: state.index_policy,
        delay: state.timing.generation_delay(),
    })
}

fn schedule_acknowledgement_reset(state: &mut AppState) -> UpdateResult {
    let token = state.begin_acknowledgement();
    UpdateResult::action(UpdateAction::ScheduleAcknowledgementReset {
        token,
        delay: state.timing.copied_flash(),
    })
}
