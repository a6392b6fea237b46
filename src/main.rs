//! FPB Editor (headless).
//!
//! Spielt ein JSON-Skript aus `AppIntent`s gegen die Engine ab und gibt die
//! Datenhaltung aller Prozesse als JSON aus.

use anyhow::Context;
use fpb_editor::app::{data_store, layer_tree};
use fpb_editor::{AppController, AppIntent, AppState, EditorOptions};
use std::time::{Duration, Instant};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("FPB Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let Some(script_path) = std::env::args().nth(1) else {
        anyhow::bail!("Aufruf: fpb-editor <skript.json>");
    };
    let content = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Skript nicht lesbar: {}", script_path))?;
    let intents: Vec<AppIntent> = serde_json::from_str(&content)
        .with_context(|| format!("Skript fehlerhaft: {}", script_path))?;

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let delay = Duration::from_millis(options.import_switch_delay_ms);
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    state.bus.subscribe("*", |notification| {
        log::debug!("[{}] {:?}", notification.topic(), notification);
    });

    for (index, intent) in intents.into_iter().enumerate() {
        controller
            .handle_intent(&mut state, intent)
            .with_context(|| format!("Intent #{} fehlgeschlagen", index))?;
        // Verzögerte Arbeit sofort fällig machen
        controller.poll_deferred(&mut state, Instant::now() + delay)?;
    }

    log::info!(
        "{} Elemente, Fokus {:?}, {} Commands ausgeführt, davon {} Ebenenwechsel",
        state.element_count(),
        state.focus,
        state.command_log.len(),
        state.command_log.navigation_count()
    );
    for layer in layer_tree::build(&state.model, state.focus) {
        log::debug!("Ebene: {:?}", layer);
    }
    println!("{}", data_store::build(&state.model).to_json()?);
    Ok(())
}
