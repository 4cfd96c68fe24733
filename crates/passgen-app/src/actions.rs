//! Action handlers: UpdateAction dispatch and timer spawning
//!
//! Deferred work never touches state. Timer tasks sleep, then post a
//! `Message` back to the engine; scheduling a new timer of the same kind
//! aborts the previous task so at most one of each is pending.

use std::time::Duration;

use passgen_core::{generate, GeneratorConfig, IndexPolicy};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::clipboard::Clipboard;
use crate::message::Message;
use crate::UpdateAction;

/// Pending timer tasks, one slot per kind
#[derive(Debug, Default)]
pub struct TimerSlots {
    generation: Option<JoinHandle<()>>,
    acknowledgement: Option<JoinHandle<()>>,
}

impl TimerSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new generation timer, aborting the one it replaces
    fn replace_generation(&mut self, handle: JoinHandle<()>) {
        if let Some(previous) = self.generation.replace(handle) {
            if !previous.is_finished() {
                debug!("Aborting superseded generation timer");
                previous.abort();
            }
        }
    }

    fn replace_acknowledgement(&mut self, handle: JoinHandle<()>) {
        if let Some(previous) = self.acknowledgement.replace(handle) {
            previous.abort();
        }
    }

    /// Abort everything (shutdown)
    pub fn abort_all(&mut self) {
        if let Some(handle) = self.generation.take() {
            handle.abort();
        }
        if let Some(handle) = self.acknowledgement.take() {
            handle.abort();
        }
    }
}

impl Drop for TimerSlots {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Execute an action.
///
/// Timer actions spawn onto the tokio runtime and return `None`. The
/// clipboard write is synchronous and returns its outcome as a follow-up
/// message for the same update cycle, so the acknowledgement shows at once.
pub fn handle_action(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    timers: &mut TimerSlots,
    clipboard: &mut dyn Clipboard,
) -> Option<Message> {
    match action {
        UpdateAction::ScheduleGeneration {
            token,
            config,
            policy,
            delay,
        } => {
            let handle = spawn_generation(token, config, policy, delay, msg_tx.clone());
            timers.replace_generation(handle);
            None
        }

        UpdateAction::CopyToClipboard { text } => match clipboard.set_text(&text) {
            Ok(()) => Some(Message::CopySucceeded),
            Err(e) => {
                warn!("{}", e);
                Some(Message::CopyFailed {
                    reason: clipboard_reason(e),
                })
            }
        },

        UpdateAction::ScheduleAcknowledgementReset { token, delay } => {
            let handle = spawn_acknowledgement_reset(token, delay, msg_tx.clone());
            timers.replace_acknowledgement(handle);
            None
        }
    }
}

fn clipboard_reason(error: passgen_core::Error) -> String {
    match error {
        passgen_core::Error::ClipboardUnavailable { reason } => reason,
        other => other.to_string(),
    }
}

/// Sleep for `delay`, generate, and post the result tagged with `token`
pub fn spawn_generation(
    token: u64,
    config: GeneratorConfig,
    policy: IndexPolicy,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let password = generate(&config, policy, &mut rand::thread_rng());

        if msg_tx
            .send(Message::PasswordGenerated { token, password })
            .await
            .is_err()
        {
            debug!("Engine gone before generation {} completed", token);
        }
    })
}

/// Sleep for `delay`, then post the acknowledgement expiry for `token`
pub fn spawn_acknowledgement_reset(
    token: u64,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = msg_tx.send(Message::AcknowledgementExpired { token }).await;
    })
}
