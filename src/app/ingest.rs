//! Use-Case: Pfad-Records beim Szenen-Load einsammeln und Routen planen.

use anyhow::{Context, Result};
use glam::Vec3;

use crate::core::{is_part_of_graph, NavGraph, PathMetadata, SceneObject};
use crate::shared::{catmull_rom_route, DEFAULT_CURVE_SAMPLES};

/// Nimmt alle Navigationsgraph-Records aus `records` in den Graphen auf.
///
/// Records ohne Sentinel-Präfix werden still übersprungen (dekorative
/// Pfade); fehlerhafte Records werden mit Warnung geloggt, der Szenen-Load
/// läuft weiter. Gibt die Anzahl aufgenommener Nodes zurück.
pub fn ingest_scene_objects<S: SceneObject>(
    graph: &mut NavGraph<S>,
    records: impl IntoIterator<Item = (S, Option<PathMetadata>)>,
) -> usize {
    let mut ingested = 0;
    for (scene_ref, metadata) in records {
        if !is_part_of_graph(metadata.as_ref()) {
            continue;
        }
        match graph.add_node(scene_ref, metadata.as_ref()) {
            Ok(()) => ingested += 1,
            Err(err) => log::warn!("Pfad-Record uebersprungen: {}", err),
        }
    }
    ingested
}

/// Plant eine Route und tastet sie als glatte Kurve ab.
///
/// Berechnet den Graphen bei Bedarf (expliziter Lazy-Recompute über
/// `ensure_graph`) und gibt die Catmull-Rom-Abtastung durch die
/// Routen-Positionen zurück.
pub fn plan_route<S: SceneObject>(
    graph: &mut NavGraph<S>,
    start_id: &str,
    end_id: &str,
) -> Result<Vec<Vec3>> {
    graph
        .ensure_graph()
        .context("Navigationsgraph konnte nicht berechnet werden")?;

    let positions = graph
        .shortest_path(start_id, end_id)
        .with_context(|| format!("Keine Route von '{}' nach '{}'", start_id, end_id))?;

    Ok(catmull_rom_route(&positions, DEFAULT_CURVE_SAMPLES))
}
