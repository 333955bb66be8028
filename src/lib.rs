//! SVG Navigation Pathfinder Library.
//!
//! Extrahiert einen Navigationsgraphen aus den Pfad-Metadaten einer
//! 2D-Vektorgrafik und beantwortet Kürzeste-Wege-Anfragen, damit eine
//! 3D-Szene eine Route zwischen einem beliebigen Punkt im Raum und einem
//! bekannten Ziel-Node darstellen kann.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{ingest_scene_objects, plan_route};
pub use core::{
    find_shortest_path, is_part_of_graph, parse_identifier, Adjacency, GraphError,
    IdentifierPayload, IngestError, MetadataNode, NavGraph, NavNode, PathMetadata, QueryError,
    SceneObject, NODE_ID_PREFIX,
};
pub use shared::{
    catmull_rom_point, catmull_rom_route, polyline_length, route_segments, DEFAULT_CURVE_SAMPLES,
};
