//! Die zentrale Arena aller Fachobjekte mit ihren Visual-Einträgen.

use super::{
    Bounds, BusinessObject, ElementId, ElementType, EngineError, EngineResult, Process, Project,
};
use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Persistierter Visual-Eintrag (Bounds bzw. Wegpunkte) eines Elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Visual {
    /// Shape mit Rechteck
    Shape {
        /// Aktuelle Geometrie
        bounds: Bounds,
    },
    /// Verbindung mit Wegpunkten
    Edge {
        /// Wegpunkte von der Quelle zum Ziel
        waypoints: Vec<Vec2>,
    },
}

/// ID-basierte Arena des gesamten Modells
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessModel {
    /// Alle Fachobjekte in Einfügereihenfolge
    elements: IndexMap<ElementId, BusinessObject>,
    /// Geometrie je Shape bzw. Verbindung
    visuals: IndexMap<ElementId, Visual>,
    /// Das Projekt (höchstens eines)
    project: Option<ElementId>,
    /// Nächste freie ID
    next_id: ElementId,
}

impl ProcessModel {
    /// Erstellt ein leeres Modell
    pub fn new() -> Self {
        Self {
            elements: IndexMap::new(),
            visuals: IndexMap::new(),
            project: None,
            next_id: 1,
        }
    }

    /// Reserviert die nächste freie ID
    pub fn allocate_id(&mut self) -> ElementId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    /// Fügt ein Objekt ein. ID 0 wird durch eine neue ID ersetzt.
    pub fn insert(&mut self, mut object: BusinessObject) -> ElementId {
        if object.id() == 0 {
            let id = self.allocate_id();
            object.set_id(id);
        }
        let id = object.id();
        self.next_id = self.next_id.max(id + 1);
        if let BusinessObject::Project(_) = object {
            self.project = Some(id);
        }
        self.elements.insert(id, object);
        id
    }

    /// Entfernt ein Objekt samt Visual-Eintrag
    pub fn remove(&mut self, id: ElementId) -> Option<BusinessObject> {
        self.visuals.shift_remove(&id);
        if self.project == Some(id) {
            self.project = None;
        }
        self.elements.shift_remove(&id)
    }

    /// Prüft ob eine ID existiert
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Objekt zu einer ID
    pub fn get(&self, id: ElementId) -> Option<&BusinessObject> {
        self.elements.get(&id)
    }

    /// Objekt zu einer ID, veränderlich
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut BusinessObject> {
        self.elements.get_mut(&id)
    }

    /// Objekt zu einer ID oder Fehler
    pub fn require(&self, id: ElementId) -> EngineResult<&BusinessObject> {
        self.elements.get(&id).ok_or(EngineError::UnknownElement(id))
    }

    /// Objekt zu einer ID oder Fehler, veränderlich
    pub fn require_mut(&mut self, id: ElementId) -> EngineResult<&mut BusinessObject> {
        self.elements
            .get_mut(&id)
            .ok_or(EngineError::UnknownElement(id))
    }

    /// Typ-Tag eines Elements
    pub fn element_type(&self, id: ElementId) -> Option<ElementType> {
        self.get(id).map(BusinessObject::element_type)
    }

    /// Iterator über alle Objekte (read-only)
    pub fn iter(&self) -> impl Iterator<Item = &BusinessObject> {
        self.elements.values()
    }

    /// Anzahl aller Objekte
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Gibt `true` zurück, wenn das Modell leer ist
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// ID des Projekts
    pub fn project_id(&self) -> Option<ElementId> {
        self.project
    }

    /// Das Projekt
    pub fn project(&self) -> Option<&Project> {
        match self.get(self.project?)? {
            BusinessObject::Project(p) => Some(p),
            _ => None,
        }
    }

    /// Das Projekt, veränderlich
    pub fn project_mut(&mut self) -> EngineResult<&mut Project> {
        let id = self.project.ok_or(EngineError::MissingProject)?;
        self.require_mut(id)?
            .as_project_mut()
            .ok_or(EngineError::MissingProject)
    }

    /// Alle Prozesse in Einfügereihenfolge
    pub fn processes(&self) -> impl Iterator<Item = &Process> {
        self.elements.values().filter_map(BusinessObject::as_process)
    }

    /// Prozess zu einer ID
    pub fn process(&self, id: ElementId) -> EngineResult<&Process> {
        let object = self.require(id)?;
        object.as_process().ok_or(EngineError::WrongType {
            id,
            expected: ElementType::Process,
            actual: object.element_type(),
        })
    }

    /// Prozess zu einer ID, veränderlich
    pub fn process_mut(&mut self, id: ElementId) -> EngineResult<&mut Process> {
        let object = self.require_mut(id)?;
        let actual = object.element_type();
        object.as_process_mut().ok_or(EngineError::WrongType {
            id,
            expected: ElementType::Process,
            actual,
        })
    }

    /// Prüft Typ eines Elements
    pub fn expect_type(&self, id: ElementId, expected: ElementType) -> EngineResult<()> {
        let actual = self.require(id)?.element_type();
        if actual == expected {
            Ok(())
        } else {
            Err(EngineError::WrongType {
                id,
                expected,
                actual,
            })
        }
    }

    /// Systemgrenze eines Prozesses; prüft Referenz und Container-Eintrag.
    pub fn system_limit_of(&self, process_id: ElementId) -> EngineResult<ElementId> {
        let process = self.process(process_id)?;
        let sl = process
            .consists_of_system_limit
            .filter(|sl| process.elements_container.contains(sl))
            .ok_or(EngineError::MissingSystemLimit(process_id))?;
        match self.element_type(sl) {
            Some(ElementType::SystemLimit) => Ok(sl),
            _ => Err(EngineError::MissingSystemLimit(process_id)),
        }
    }

    /// Prozess, zu dem ein Element gehört (`None` für Prozesse und das Projekt)
    pub fn owning_process(&self, id: ElementId) -> Option<ElementId> {
        self.processes()
            .find(|process| {
                process.elements_container.contains(&id)
                    || process.consists_of_states.contains(&id)
                    || process.consists_of_process_operator.contains(&id)
                    || process
                        .consists_of_system_limit
                        .and_then(|sl| self.get(sl))
                        .and_then(BusinessObject::as_system_limit)
                        .is_some_and(|sl| sl.elements_container.contains(&id))
            })
            .map(|process| process.id)
    }

    /// Parent auf der Zeichenfläche: Systemgrenze für Zustände, Operatoren und
    /// Flüsse, sonst der Prozess.
    pub fn canvas_parent(&self, id: ElementId) -> Option<ElementId> {
        let process = self.owning_process(id)?;
        let ty = self.element_type(id)?;
        if ty.lives_inside_system_limit() || ty.is_flow() {
            self.system_limit_of(process).ok()
        } else {
            Some(process)
        }
    }

    /// Geometrie eines Shapes
    pub fn bounds(&self, id: ElementId) -> Option<Bounds> {
        match self.visuals.get(&id)? {
            Visual::Shape { bounds } => Some(*bounds),
            Visual::Edge { .. } => None,
        }
    }

    /// Geometrie eines Shapes oder Fehler
    pub fn require_bounds(&self, id: ElementId) -> EngineResult<Bounds> {
        self.bounds(id).ok_or(EngineError::MissingBounds(id))
    }

    /// Setzt die Geometrie eines Shapes
    pub fn set_bounds(&mut self, id: ElementId, bounds: Bounds) {
        self.visuals.insert(id, Visual::Shape { bounds });
    }

    /// Wegpunkte einer Verbindung
    pub fn waypoints(&self, id: ElementId) -> Option<&[Vec2]> {
        match self.visuals.get(&id)? {
            Visual::Edge { waypoints } => Some(waypoints),
            Visual::Shape { .. } => None,
        }
    }

    /// Setzt die Wegpunkte einer Verbindung
    pub fn set_waypoints(&mut self, id: ElementId, waypoints: Vec<Vec2>) {
        self.visuals.insert(id, Visual::Edge { waypoints });
    }

    /// Visual-Eintrag eines Elements
    pub fn visual(&self, id: ElementId) -> Option<&Visual> {
        self.visuals.get(&id)
    }

    /// Alle ein- und ausgehenden Verbindungen eines Elements
    pub fn connections_of(&self, id: ElementId) -> Vec<ElementId> {
        self.get(id)
            .and_then(BusinessObject::connectable)
            .map(|c| c.incoming.iter().chain(c.outgoing.iter()).copied().collect())
            .unwrap_or_default()
    }

    /// Ausgehende Flüsse (ohne Nutzungen) einer Quelle
    pub fn outgoing_flows(&self, source: ElementId) -> Vec<ElementId> {
        self.get(source)
            .and_then(BusinessObject::connectable)
            .map(|c| {
                c.outgoing
                    .iter()
                    .copied()
                    .filter(|id| self.get(*id).and_then(BusinessObject::as_flow).is_some())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Eingehende Flüsse (ohne Nutzungen) eines Ziels
    pub fn incoming_flows(&self, target: ElementId) -> Vec<ElementId> {
        self.get(target)
            .and_then(BusinessObject::connectable)
            .map(|c| {
                c.incoming
                    .iter()
                    .copied()
                    .filter(|id| self.get(*id).and_then(BusinessObject::as_flow).is_some())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Verbindung von `source` nach `target` (exaktes Match)
    pub fn find_connection(&self, source: ElementId, target: ElementId) -> Option<ElementId> {
        let outgoing = &self.get(source)?.connectable()?.outgoing;
        outgoing.iter().copied().find(|id| {
            self.get(*id)
                .and_then(BusinessObject::endpoints)
                .is_some_and(|(_, t)| t == target)
        })
    }

    /// Verbindung zwischen zwei Elementen in beliebiger Richtung
    pub fn find_connection_between(&self, a: ElementId, b: ElementId) -> Option<ElementId> {
        self.find_connection(a, b)
            .or_else(|| self.find_connection(b, a))
    }

    /// Alle Zustände und Operatoren innerhalb einer Systemgrenze
    pub fn shapes_inside(&self, system_limit: ElementId) -> Vec<ElementId> {
        self.get(system_limit)
            .and_then(BusinessObject::as_system_limit)
            .map(|sl| {
                sl.elements_container
                    .iter()
                    .copied()
                    .filter(|id| {
                        self.element_type(*id)
                            .is_some_and(ElementType::lives_inside_system_limit)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Alle technischen Ressourcen eines Prozesses
    pub fn resources_of(&self, process_id: ElementId) -> Vec<ElementId> {
        self.process(process_id)
            .map(|p| {
                p.elements_container
                    .iter()
                    .copied()
                    .filter(|id| self.element_type(*id) == Some(ElementType::TechnicalResource))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Alle Prozesse unterhalb von `process_id` (rekursiv, ohne sich selbst)
    pub fn descendant_processes(&self, process_id: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut stack: Vec<ElementId> = self
            .process(process_id)
            .map(|p| p.consists_of_processes.iter().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            if let Ok(process) = self.process(id) {
                result.push(id);
                stack.extend(process.consists_of_processes.iter().copied());
            }
        }
        result
    }

    /// Anzeigename eines Prozesses (Name des verfeinerten Operators bzw. der Systemgrenze)
    pub fn process_name(&self, process_id: ElementId) -> String {
        let Ok(process) = self.process(process_id) else {
            return String::new();
        };
        if let Some(name) = process
            .is_decomposed_process_operator
            .and_then(|op| self.get(op))
            .and_then(BusinessObject::connectable)
            .map(|c| c.identification.display_name().to_string())
        {
            return name;
        }
        process
            .consists_of_system_limit
            .and_then(|sl| self.get(sl))
            .and_then(BusinessObject::as_system_limit)
            .map(|sl| sl.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("Process {process_id}"))
    }
}

#[cfg(test)]
mod tests;
