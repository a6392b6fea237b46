//! Prozessbaum für das Ebenen-Panel.

use crate::core::{ElementId, ProcessModel};
use serde::Serialize;
use std::collections::HashSet;

/// Knoten des Ebenen-Baums
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerNode {
    /// Prozess
    pub process: ElementId,
    /// Anzeigename
    pub name: String,
    /// Verfeinerter Operator (bei Unterprozessen)
    pub decomposed_operator: Option<ElementId>,
    /// Aktuell fokussiert
    pub focused: bool,
    /// Unterprozesse
    pub children: Vec<LayerNode>,
}

impl LayerNode {
    /// Sucht einen Prozess im Teilbaum.
    pub fn find(&self, process: ElementId) -> Option<&LayerNode> {
        if self.process == process {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(process))
    }
}

fn node(
    model: &ProcessModel,
    process_id: ElementId,
    focus: Option<ElementId>,
    visited: &mut HashSet<ElementId>,
) -> Option<LayerNode> {
    if !visited.insert(process_id) {
        log::warn!("Zyklus im Prozessbaum bei {}", process_id);
        return None;
    }
    let process = model.process(process_id).ok()?;
    let children = process
        .consists_of_processes
        .iter()
        .filter_map(|child| node(model, *child, focus, visited))
        .collect();
    Some(LayerNode {
        process: process_id,
        name: model.process_name(process_id),
        decomposed_operator: process.is_decomposed_process_operator,
        focused: focus == Some(process_id),
        children,
    })
}

/// Baut den Prozessbaum; Wurzeln sind Prozesse ohne übergeordneten Prozess.
pub fn build(model: &ProcessModel, focus: Option<ElementId>) -> Vec<LayerNode> {
    let mut visited = HashSet::new();
    let roots: Vec<ElementId> = model
        .processes()
        .filter(|p| !p.parent.is_some_and(|parent| model.process(parent).is_ok()))
        .map(|p| p.id)
        .collect();
    roots
        .into_iter()
        .filter_map(|root| node(model, root, focus, &mut visited))
        .collect()
}
