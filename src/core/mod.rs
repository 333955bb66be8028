//! Core-Domänentypen: Identifier-Codec, Nodes, Navigationsgraph, Routensuche.
//!
//! Dieses Modul definiert die Haupt-Datenstrukturen:
//! - NavGraph: Container für alle Nodes und die abgeleitete Adjazenzstruktur
//! - NavNode: Einzelner Wegpunkt mit Position und deklarierter Nachbarschaft
//! - IdentifierPayload: Parse-Ergebnis des Identifier-Codecs

pub mod error;
pub mod graph;
pub mod identifier;
pub mod node;
pub mod route;

pub use error::{GraphError, IngestError, QueryError};
pub use graph::{Adjacency, NavGraph};
pub use identifier::{
    is_part_of_graph, parse_identifier, IdentifierPayload, MetadataNode, PathMetadata,
    NODE_ID_PREFIX,
};
pub use node::{NavNode, SceneObject};
pub use route::find_shortest_path;
