//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Strukturelle Commands brechen ein offenes Label-Editing vorher ab.
fn structural(state: &AppState, command: AppCommand) -> Vec<AppCommand> {
    if state.editor.label_edit.is_some() {
        vec![AppCommand::CancelLabelEdit, command]
    } else {
        vec![command]
    }
}

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CreateShapeRequested { type_tag, position } => {
            structural(state, AppCommand::CreateShape { type_tag, position })
        }
        AppIntent::ConnectRequested { source, target } => structural(
            state,
            AppCommand::Connect {
                source,
                target,
                hint: state.editor.flow_hint,
            },
        ),
        AppIntent::FlowHintSelected { hint } => vec![AppCommand::SetFlowHint { hint }],
        AppIntent::ReconnectRequested {
            connection,
            source,
            target,
        } => structural(
            state,
            AppCommand::Reconnect {
                connection,
                source,
                target,
            },
        ),
        AppIntent::DeleteRequested { ids } => {
            structural(state, AppCommand::DeleteElements { ids })
        }
        AppIntent::MoveRequested { ids, delta } => {
            structural(state, AppCommand::MoveShapes { ids, delta })
        }
        AppIntent::ResizeRequested { id, bounds } => {
            structural(state, AppCommand::ResizeShape { id, bounds })
        }
        AppIntent::DecomposeRequested { operator } => {
            structural(state, AppCommand::Decompose { operator })
        }
        AppIntent::ComposeRequested { system_limit } => {
            structural(state, AppCommand::Compose { system_limit })
        }
        AppIntent::ProcessSelected { process } => {
            structural(state, AppCommand::SwitchProcess { process })
        }
        AppIntent::LabelEditStarted { id } => vec![AppCommand::BeginLabelEdit { id }],
        AppIntent::LabelEditCommitted { text } => vec![AppCommand::CommitLabelEdit { text }],
        AppIntent::LabelEditCancelled => vec![AppCommand::CancelLabelEdit],
        AppIntent::IdentificationEdited { id, identification } => structural(
            state,
            AppCommand::UpdateIdentification { id, identification },
        ),
        AppIntent::CharacteristicsEdited {
            id,
            characteristics,
        } => structural(
            state,
            AppCommand::UpdateCharacteristics {
                id,
                characteristics,
            },
        ),
        AppIntent::SystemLimitRenamed { id, name } => {
            structural(state, AppCommand::RenameSystemLimit { id, name })
        }
        AppIntent::ImportRequested { model } => {
            structural(state, AppCommand::ImportModel { model })
        }
        AppIntent::UndoRequested => structural(state, AppCommand::Undo),
        AppIntent::RedoRequested => structural(state, AppCommand::Redo),
        AppIntent::ViewboxChanged { viewbox } => vec![AppCommand::SetViewbox { viewbox }],
        AppIntent::ZoomToFitRequested => vec![AppCommand::ZoomToFit],
    }
}
