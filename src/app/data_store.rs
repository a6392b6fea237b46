//! Flache Datenhaltung pro Prozess für Panels und Exporter.
//!
//! Wird nach jedem `dataStore.update` neu berechnet.

use crate::core::{BusinessObject, ElementId, ProcessModel, Visual};
use serde::Serialize;

/// Ein Element mit Typ-Tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataEntry {
    /// Element-ID
    pub id: ElementId,
    /// Typ-Tag (`fpb:Product`, …)
    pub tag: &'static str,
    /// Fachobjekt
    pub object: BusinessObject,
}

/// Visual-Eintrag eines Elements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualEntry {
    /// Element-ID
    pub id: ElementId,
    /// Geometrie
    pub visual: Visual,
}

/// Daten eines Prozesses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessData {
    /// Prozess-ID
    pub process: ElementId,
    /// Anzeigename
    pub name: String,
    /// Prozess, Systemgrenze, Inhalt und Ressourcen
    pub data: Vec<DataEntry>,
    /// Geometrie aller Elemente mit Visual
    pub visuals: Vec<VisualEntry>,
}

/// Datenhaltung des gesamten Modells
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataStore {
    /// Projektname
    pub project: Option<String>,
    /// Einstiegsprozess
    pub entry_point: Option<ElementId>,
    /// Ein Eintrag pro Prozess in Modellreihenfolge
    pub processes: Vec<ProcessData>,
}

impl DataStore {
    /// Daten eines Prozesses
    pub fn process(&self, id: ElementId) -> Option<&ProcessData> {
        self.processes.iter().find(|p| p.process == id)
    }

    /// Serialisiert die Datenhaltung als JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn members(model: &ProcessModel, process_id: ElementId) -> Vec<ElementId> {
    let Ok(process) = model.process(process_id) else {
        return Vec::new();
    };
    let mut ids = vec![process_id];
    if let Some(sl) = process
        .consists_of_system_limit
        .and_then(|sl| model.get(sl))
        .and_then(BusinessObject::as_system_limit)
    {
        ids.push(sl.id);
        ids.extend(sl.elements_container.iter().copied());
    }
    ids.extend(
        process
            .elements_container
            .iter()
            .copied()
            .filter(|id| Some(*id) != process.consists_of_system_limit),
    );
    ids
}

/// Baut die Datenhaltung aller Prozesse.
pub fn build(model: &ProcessModel) -> DataStore {
    let processes = model
        .processes()
        .map(|process| {
            let ids = members(model, process.id);
            ProcessData {
                process: process.id,
                name: model.process_name(process.id),
                data: ids
                    .iter()
                    .filter_map(|id| model.get(*id))
                    .map(|object| DataEntry {
                        id: object.id(),
                        tag: object.element_type().tag(),
                        object: object.clone(),
                    })
                    .collect(),
                visuals: ids
                    .iter()
                    .filter_map(|id| {
                        model.visual(*id).map(|visual| VisualEntry {
                            id: *id,
                            visual: visual.clone(),
                        })
                    })
                    .collect(),
            }
        })
        .collect();

    DataStore {
        project: model.project().map(|p| p.name.clone()),
        entry_point: model.project().and_then(|p| p.entry_point),
        processes,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::core::test_support::Fixture;
    use crate::core::FlowKind;

    #[test]
    fn store_contains_process_members_with_visuals() {
        let mut fx = Fixture::with_system_limit();
        let state = fx.state(300.0, 200.0);
        let op = fx.operator(300.0, 400.0);
        let flow = fx.flow(state, op, FlowKind::Flow);

        let store = build(&fx.model);
        let data = store.process(fx.process).expect("Prozessdaten");

        let ids: Vec<_> = data.data.iter().map(|e| e.id).collect();
        assert_eq!(ids[0], fx.process);
        assert_eq!(ids[1], fx.system_limit);
        assert!(ids.contains(&state) && ids.contains(&op) && ids.contains(&flow));
        assert!(data.visuals.iter().any(|v| v.id == flow));
        assert_eq!(store.entry_point, Some(fx.process));
    }

    #[test]
    fn store_serializes_to_json_with_tags() {
        let mut fx = Fixture::with_system_limit();
        fx.state(300.0, 200.0);

        let json = build(&fx.model).to_json().expect("JSON");

        assert!(json.contains("\"fpb:SystemLimit\""));
        assert!(json.contains("\"fpb:Product\""));
    }
}
