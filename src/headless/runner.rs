//! Headless mode runner - one generation, no terminal

use passgen_app::config::Settings;
use passgen_app::{signals, Engine};
use passgen_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: &Settings) -> Result<()> {
    info!("passgen starting in headless mode");

    let mut engine = Engine::new(settings);
    signals::spawn_signal_handler(engine.msg_sender());

    let result = generate_once(&mut engine).await;
    engine.shutdown();

    match result {
        Ok(events) => {
            for event in &events {
                event.emit();
            }
            Ok(())
        }
        Err(e) => {
            HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            Err(e)
        }
    }
}

/// Start the engine and wait for its first password.
///
/// Returns the events to print. Quitting (a signal) before the password
/// lands yields only the start event.
pub async fn generate_once(engine: &mut Engine) -> Result<Vec<HeadlessEvent>> {
    engine.start();
    let mut events = vec![HeadlessEvent::generation_started(
        engine.state.config.length(),
    )];

    while engine.state.is_generating() {
        if !engine.process_next().await {
            return Err(Error::ChannelClosed);
        }
        if engine.should_quit() {
            warn!("Quit before generation completed");
            return Ok(events);
        }
    }

    debug!(
        "Headless generation complete ({} chars)",
        engine.state.password.chars().count()
    );
    events.push(HeadlessEvent::password_generated(
        &engine.state.password,
        &engine.state.strength(),
    ));
    Ok(events)
}
