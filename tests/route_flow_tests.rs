/// Integration-Tests für den kompletten Szenen-Workflow:
/// Ingestion aus Pfad-Metadaten, Graph-Berechnung, Nearest-Node-Abfrage
/// und Routenplanung.
use approx::assert_relative_eq;
use glam::Vec3;

use svg_nav_pathfinder::{
    ingest_scene_objects, plan_route, NavGraph, PathMetadata, QueryError, SceneObject,
};

/// Test-Double für das visuelle Objekt eines SVG-Pfads.
#[derive(Debug, Clone)]
struct StubMesh {
    center: Vec3,
    visible: bool,
}

impl StubMesh {
    fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            center: Vec3::new(x, y, z),
            visible: true,
        }
    }
}

impl SceneObject for StubMesh {
    fn bounds_center(&self) -> Vec3 {
        self.center
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Szenen-Records wie sie ein SVG-Loader liefern würde: Geometrie plus
/// optionales userData-JSON.
fn sample_records() -> Vec<(StubMesh, Option<PathMetadata>)> {
    vec![
        (
            StubMesh::at(0.0, 0.0, 0.0),
            PathMetadata::from_json(r#"{"node":{"id":"PATHFINDER_A__B"}}"#),
        ),
        (
            StubMesh::at(3.0, 0.0, 0.0),
            PathMetadata::from_json(r#"{"node":{"id":"PATHFINDER_B__C"}}"#),
        ),
        (
            StubMesh::at(3.0, 4.0, 0.0),
            PathMetadata::from_json(r#"{"node":{"id":"PATHFINDER_C__"}}"#),
        ),
        // Dekorativer Pfad ohne node-Feld: wird still uebersprungen
        (
            StubMesh::at(99.0, 99.0, 0.0),
            PathMetadata::from_json(r#"{"style":"fill"}"#),
        ),
        // Record ohne Metadaten
        (StubMesh::at(50.0, 50.0, 0.0), None),
    ]
}

#[test]
fn test_ingest_filters_non_graph_records() {
    let mut graph = NavGraph::new();
    let ingested = ingest_scene_objects(&mut graph, sample_records());

    assert_eq!(ingested, 3);
    assert_eq!(graph.node_count(), 3);
    assert!(graph.get_node("A").is_some());
    assert!(graph.get_node("C").is_some());
}

#[test]
fn test_ingest_continues_after_malformed_record() {
    let mut graph = NavGraph::new();
    let mut records = sample_records();
    // Traegt das Sentinel-Praefix, aber das Nachbar-Segment fehlt
    records.insert(
        1,
        (
            StubMesh::at(7.0, 7.0, 0.0),
            PathMetadata::from_json(r#"{"node":{"id":"PATHFINDER_Kaputt"}}"#),
        ),
    );

    let ingested = ingest_scene_objects(&mut graph, records);
    assert_eq!(ingested, 3);
    assert!(graph.get_node("Kaputt").is_none());
}

#[test]
fn test_ingested_scene_objects_start_hidden() {
    let mut graph = NavGraph::new();
    ingest_scene_objects(&mut graph, sample_records());

    for node in graph.nodes() {
        assert!(!node.scene_ref.visible);
    }
}

#[test]
fn test_recompute_derives_euclidean_weights() {
    let mut graph = NavGraph::new();
    ingest_scene_objects(&mut graph, sample_records());
    graph.recompute_graph().expect("Recompute erwartet");

    assert_relative_eq!(graph.graph()["A"]["B"], 3.0);
    assert_relative_eq!(graph.graph()["B"]["C"], 4.0);
    assert_eq!(
        graph.get_node("C").expect("Node C erwartet").position,
        Vec3::new(3.0, 4.0, 0.0)
    );
}

#[test]
fn test_nearest_node_from_arbitrary_point() {
    let mut graph = NavGraph::new();
    ingest_scene_objects(&mut graph, sample_records());
    graph.recompute_graph().expect("Recompute erwartet");

    let nearest = graph
        .nearest(Vec3::new(2.8, 3.6, 0.2))
        .expect("Treffer erwartet");
    assert_eq!(nearest.id(), "C");
}

#[test]
fn test_shortest_path_returns_ordered_positions() {
    let mut graph = NavGraph::new();
    ingest_scene_objects(&mut graph, sample_records());
    graph.recompute_graph().expect("Recompute erwartet");

    let positions = graph.shortest_path("A", "C").expect("Route erwartet");
    assert_eq!(
        positions,
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(3.0, 4.0, 0.0),
        ]
    );
}

#[test]
fn test_directionality_is_not_symmetrized() {
    let mut graph = NavGraph::new();
    ingest_scene_objects(&mut graph, sample_records());
    graph.recompute_graph().expect("Recompute erwartet");

    // A deklariert B, aber niemand deklariert A zurueck
    assert_eq!(
        graph.shortest_path("C", "A"),
        Err(QueryError::Unreachable {
            start: "C".to_string(),
            end: "A".to_string(),
        })
    );
}

#[test]
fn test_plan_route_samples_curve_through_endpoints() {
    let mut graph = NavGraph::new();
    ingest_scene_objects(&mut graph, sample_records());

    // plan_route berechnet den Graphen lazy ueber ensure_graph
    let curve = plan_route(&mut graph, "A", "C").expect("Route erwartet");

    assert_eq!(curve.len(), 2 * 50 + 1);
    assert_eq!(curve[0], Vec3::new(0.0, 0.0, 0.0));
    let last = curve.last().expect("Endpunkt erwartet");
    assert_relative_eq!(last.x, 3.0, epsilon = 1e-4);
    assert_relative_eq!(last.y, 4.0, epsilon = 1e-4);
}

#[test]
fn test_plan_route_reports_missing_node() {
    let mut graph = NavGraph::new();
    ingest_scene_objects(&mut graph, sample_records());

    let result = plan_route(&mut graph, "A", "Unbekannt");
    assert!(result.is_err());
}
