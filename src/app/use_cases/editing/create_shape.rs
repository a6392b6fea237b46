//! Use-Case: Shape an einer Position anlegen.

use crate::app::notifications::Notification;
use crate::app::use_cases::{commit, data_changed, reject};
use crate::app::AppState;
use crate::core::{factory, rules, sync, ShapeRequest};
use glam::Vec2;

/// Legt ein Shape des Typs `type_tag` zentriert auf `position` an.
///
/// Ohne aktiven Prozess werden Projekt und Wurzelprozess angelegt und
/// fokussiert. Eine Ablehnung der Platzierung verwirft auch diese.
pub fn create_shape(state: &mut AppState, type_tag: &str, position: Vec2) -> anyhow::Result<()> {
    let mut work = (*state.model).clone();
    let process = match state.focus.filter(|p| work.process(*p).is_ok()) {
        Some(process) => process,
        None => sync::ensure_root_process(&mut work, &state.options)?,
    };
    let created_root = !state.model.contains(process);

    let (object, bounds) =
        factory::create_shape(
            &mut work,
            ShapeRequest::from_tag(type_tag, position),
            &state.options,
        )?;
    let element_type = object.element_type();

    if let Err(rejection) = rules::can_create(&work, Some(process), element_type, bounds) {
        reject(state, rejection);
        return Ok(());
    }

    let id = sync::attach_shape(&mut work, process, object, bounds)?;
    commit(state, work, Some(process));
    log::info!(
        "{} {} in Prozess {} angelegt",
        element_type.tag(),
        id,
        process
    );

    if created_root {
        state.bus.publish(Notification::ProcessCreated { process });
        state.bus.publish(Notification::ProcessSwitched { process });
    }
    data_changed(state);
    Ok(())
}
