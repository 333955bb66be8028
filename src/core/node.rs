//! Repräsentiert einen Wegpunkt des Navigationsgraphen.

use glam::Vec3;

/// Schnittstelle zum Rendering-Collaborator.
///
/// Der Graph kennt vom visuellen Objekt nur den Bounding-Volumen-Mittelpunkt
/// und die Sichtbarkeit; Besitz und Lebensdauer der Geometrie liegen beim
/// Rendering-Subsystem.
pub trait SceneObject {
    /// Mittelpunkt des Bounding-Volumens in Weltkoordinaten
    fn bounds_center(&self) -> Vec3;

    /// Setzt die Sichtbarkeit des visuellen Objekts
    fn set_visible(&mut self, visible: bool);
}

/// Ein Wegpunkt mit Position und deklarierter Nachbarschaft.
///
/// Die `id` ist nach dem Einfügen unveränderlich und graphweit eindeutig.
#[derive(Debug, Clone)]
pub struct NavNode<S> {
    id: String,
    /// Position in Weltkoordinaten; `Vec3::ZERO` bis zum ersten Recompute
    pub position: Vec3,
    /// Deklarierte Nachbar-IDs in Deklarationsreihenfolge
    pub neighbor_ids: Vec<String>,
    /// Rückreferenz auf das visuelle Objekt
    pub scene_ref: S,
}

impl<S> NavNode<S> {
    /// Erstellt einen neuen Node mit Default-Position.
    pub fn new(id: String, neighbor_ids: Vec<String>, scene_ref: S) -> Self {
        Self {
            id,
            position: Vec3::ZERO,
            neighbor_ids,
            scene_ref,
        }
    }

    /// Eindeutige Node-ID.
    pub fn id(&self) -> &str {
        &self.id
    }
}
