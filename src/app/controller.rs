//! Application Controller für zentrale Event-Verarbeitung.

use super::view_projection;
use super::{AppCommand, AppIntent, AppState};
use crate::core::ConnectTarget;
use crate::shared::ViewProjection;
use std::time::Instant;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Struktur ===
            AppCommand::CreateShape { type_tag, position } => {
                handlers::editing::create_shape(state, &type_tag, position)?
            }
            AppCommand::Connect {
                source,
                target,
                hint,
            } => handlers::editing::connect(state, source, target, hint)?,
            AppCommand::Reconnect {
                connection,
                source,
                target,
            } => handlers::editing::reconnect(
                state,
                connection,
                source,
                ConnectTarget::Element(target),
            )?,
            AppCommand::DeleteElements { ids } => handlers::editing::delete(state, &ids)?,
            AppCommand::MoveShapes { ids, delta } => {
                handlers::editing::move_shapes(state, &ids, delta)?
            }
            AppCommand::ResizeShape { id, bounds } => handlers::editing::resize(state, id, bounds)?,

            // === Navigation ===
            AppCommand::Decompose { operator } => handlers::navigation::decompose(state, operator)?,
            AppCommand::Compose { system_limit } => {
                handlers::navigation::compose(state, system_limit)?
            }
            AppCommand::SwitchProcess { process } => {
                handlers::navigation::switch_process(state, process)?
            }

            // === Werkzeug & Labels ===
            AppCommand::SetFlowHint { hint } => handlers::editing::set_flow_hint(state, hint),
            AppCommand::BeginLabelEdit { id } => handlers::label::begin(state, id),
            AppCommand::CommitLabelEdit { text } => handlers::label::commit(state, &text),
            AppCommand::CancelLabelEdit => handlers::label::cancel(state),

            // === Eigenschaften ===
            AppCommand::UpdateIdentification { id, identification } => {
                handlers::editing::update_identification(state, id, identification)?
            }
            AppCommand::UpdateCharacteristics {
                id,
                characteristics,
            } => handlers::editing::update_characteristics(state, id, characteristics)?,
            AppCommand::RenameSystemLimit { id, name } => {
                handlers::editing::rename_system_limit(state, id, &name)?
            }

            // === Import & History ===
            AppCommand::ImportModel { model } => handlers::navigation::import(state, *model)?,
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Ansicht ===
            AppCommand::SetViewbox { viewbox } => handlers::view::set_viewbox(state, viewbox),
            AppCommand::ZoomToFit => handlers::view::zoom_to_fit(state),
        }

        Ok(())
    }

    /// Führt fällige verzögerte Arbeit aus: den Wechsel zum
    /// Einstiegsprozess nach einem Import und das Ausblenden des Tooltips.
    pub fn poll_deferred(&mut self, state: &mut AppState, now: Instant) -> anyhow::Result<()> {
        if state.view.tooltip.as_ref().is_some_and(|t| t.expires_at <= now) {
            state.view.tooltip = None;
        }

        let Some(pending) = state.pending_switch else {
            return Ok(());
        };
        if pending.due > now {
            return Ok(());
        }
        state.pending_switch = None;
        log::debug!("Verzögerter Wechsel zu Prozess {}", pending.process);
        self.handle_command(
            state,
            AppCommand::SwitchProcess {
                process: pending.process,
            },
        )
    }

    /// Baut die Projektion des Fokus-Prozesses aus dem aktuellen AppState.
    pub fn build_view_projection(&self, state: &AppState) -> ViewProjection {
        view_projection::build(&state.model, state.focus, state.view.viewbox)
    }
}
