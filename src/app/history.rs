//! Undo/Redo über Modell-Snapshots.
//!
//! Das Modell liegt hinter einem `Arc`; Befehle ersetzen es nach dem Commit
//! durch eine neue Arbeitskopie. Ein Snapshot hält daher nur einen weiteren
//! Verweis auf die alte Version samt Fokus.

use crate::core::{ElementId, ProcessModel};
use std::collections::VecDeque;
use std::sync::Arc;

/// Wiederherstellbarer Zustand: Modellversion und Fokus-Prozess
#[derive(Clone)]
pub struct Snapshot {
    /// Modellversion
    pub model: Arc<ProcessModel>,
    /// Fokus-Prozess
    pub focus: Option<ElementId>,
}

impl Snapshot {
    /// Nimmt Modell und Fokus des AppState auf.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            model: Arc::clone(&state.model),
            focus: state.focus,
        }
    }

    /// Setzt Modell und Fokus des AppState zurück.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.model = self.model;
        state.focus = self.focus;
    }
}

/// Begrenzter Stack, der bei Überlauf den ältesten Eintrag verwirft
#[derive(Default)]
struct BoundedStack {
    entries: VecDeque<Snapshot>,
    depth: usize,
}

impl BoundedStack {
    fn push(&mut self, snapshot: Snapshot) {
        if self.depth == 0 {
            return;
        }
        while self.entries.len() >= self.depth {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }
}

/// Undo- und Redo-Stack mit gemeinsamer Tiefe
#[derive(Default)]
pub struct EditHistory {
    undo: BoundedStack,
    redo: BoundedStack,
}

impl EditHistory {
    /// Leere Historie mit `depth` Schritten je Richtung.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            undo: BoundedStack {
                entries: VecDeque::with_capacity(depth.min(64)),
                depth,
            },
            redo: BoundedStack {
                entries: VecDeque::new(),
                depth,
            },
        }
    }

    /// Merkt den Zustand vor einer Änderung; Redo verfällt.
    pub fn record(&mut self, before: Snapshot) {
        self.undo.push(before);
        self.redo.entries.clear();
    }

    /// Es gibt einen Undo-Schritt.
    pub fn can_undo(&self) -> bool {
        !self.undo.entries.is_empty()
    }

    /// Es gibt einen Redo-Schritt.
    pub fn can_redo(&self) -> bool {
        !self.redo.entries.is_empty()
    }

    /// Anzahl der Undo-Schritte
    pub fn undo_len(&self) -> usize {
        self.undo.entries.len()
    }

    /// Liefert den vorherigen Zustand; `current` wandert auf den Redo-Stack.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.entries.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Liefert den rückgängig gemachten Zustand; `current` wandert auf den
    /// Undo-Stack.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.entries.pop_back()?;
        self.undo.push(current);
        Some(next)
    }
}
