//! Engine - owns the state and drives the TEA loop
//!
//! Both frontends (TUI and headless) create an `Engine`, feed it messages,
//! and read `engine.state` to render. The engine is the only place state is
//! mutated, and it runs on a single task.

use std::collections::VecDeque;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::actions::{handle_action, TimerSlots};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::Settings;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Capacity of the engine's message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 64;

pub struct Engine {
    /// Application state (read by renderers)
    pub state: AppState,

    /// Messages posted by timers and signal handlers
    pub msg_rx: mpsc::Receiver<Message>,

    msg_tx: mpsc::Sender<Message>,
    clipboard: Box<dyn Clipboard>,
    timers: TimerSlots,
}

impl Engine {
    /// Create an engine backed by the system clipboard
    pub fn new(settings: &Settings) -> Self {
        Self::with_clipboard(settings, Box::new(SystemClipboard::new()))
    }

    /// Create an engine with a specific clipboard implementation
    pub fn with_clipboard(settings: &Settings, clipboard: Box<dyn Clipboard>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        Self {
            state: AppState::with_settings(settings),
            msg_rx,
            msg_tx,
            clipboard,
            timers: TimerSlots::new(),
        }
    }

    /// Sender for tasks that want to post messages (signal handler, stdin)
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Kick off the first generation
    pub fn start(&mut self) {
        info!(
            "Engine starting (length={}, numbers={}, symbols={}, policy={})",
            self.state.config.length(),
            self.state.config.numbers,
            self.state.config.symbols,
            self.state.index_policy
        );
        self.process_message(Message::Regenerate);
    }

    /// Run a message and every follow-up it produces through `update`
    pub fn process_message(&mut self, message: Message) {
        let mut queue = VecDeque::from([message]);

        while let Some(msg) = queue.pop_front() {
            let result = handler::update(&mut self.state, msg);

            if let Some(action) = result.action {
                if let Some(follow_up) = handle_action(
                    action,
                    &self.msg_tx,
                    &mut self.timers,
                    self.clipboard.as_mut(),
                ) {
                    queue.push_back(follow_up);
                }
            }

            if let Some(next) = result.message {
                queue.push_back(next);
            }
        }
    }

    /// Process every message already waiting on the channel, without blocking
    pub fn drain_pending(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next posted message and process it.
    /// Returns false when the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Cancel pending timers
    pub fn shutdown(&mut self) {
        debug!("Engine shutting down");
        self.timers.abort_all();
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("timers", &self.timers)
            .finish_non_exhaustive()
    }
}
