//! Anwendungsschicht: Szenen-Ingestion und Routenplanung.
//!
//! Hier liegt die Boundary zum Szenen-Load: Fehler einzelner Pfad-Records
//! werden geloggt und übersprungen statt den Load abzubrechen — der Core
//! selbst loggt nie.

pub mod ingest;

pub use ingest::{ingest_scene_objects, plan_route};
