//! Achsenparallele Rechtecke für Shapes im Diagramm.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Achsenparalleles Rechteck (Ursprung oben links, y wächst nach unten).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// Linke Kante
    pub x: f32,
    /// Obere Kante
    pub y: f32,
    /// Breite
    pub width: f32,
    /// Höhe
    pub height: f32,
}

impl Bounds {
    /// Erstellt ein Rechteck aus Position und Größe.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Erstellt ein Rechteck der Größe `size`, zentriert auf `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x * 0.5,
            center.y - size.y * 0.5,
            size.x,
            size.y,
        )
    }

    /// Obere linke Ecke
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Untere rechte Ecke
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Größe als Vektor
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Mittelpunkt
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Mitte der oberen Kante
    pub fn top_mid(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y)
    }

    /// Mitte der unteren Kante
    pub fn bottom_mid(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height)
    }

    /// Mitte der linken Kante
    pub fn left_mid(&self) -> Vec2 {
        Vec2::new(self.x, self.y + self.height * 0.5)
    }

    /// Mitte der rechten Kante
    pub fn right_mid(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height * 0.5)
    }

    /// Prüft, ob `other` vollständig (randinklusive) in diesem Rechteck liegt.
    pub fn contains(&self, other: &Bounds) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }

    /// Prüft, ob ein Punkt (randinklusive) im Rechteck liegt.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x <= self.x + self.width
            && point.y <= self.y + self.height
    }

    /// Prüft auf echte Überlappung. Berührende Kanten zählen nicht.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Verschobene Kopie
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Um `padding` in alle Richtungen vergrößerte Kopie
    pub fn expanded(&self, padding: f32) -> Self {
        Self::new(
            self.x - padding,
            self.y - padding,
            self.width + 2.0 * padding,
            self.height + 2.0 * padding,
        )
    }
}
