//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal for the lifetime of the app:
//! - `run`: sets up the terminal, creates the engine, runs the loop, restores
//! - `run_loop`: drains timer messages, renders, polls the keyboard

use passgen_app::config::Settings;
use passgen_app::signals;
use passgen_app::Engine;
use passgen_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive generator until the user quits
pub async fn run(settings: &Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings);

    // Initialize terminal
    let mut term = ratatui::init();

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(engine.msg_sender());

    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();

    // Restore terminal
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop failed: {}", e);
    }
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Timer completions and signals
        engine.drain_pending();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Leaving TUI loop");
    Ok(())
}
