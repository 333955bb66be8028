//! Fehler-Taxonomie des Navigationsgraphen.
//!
//! Alle Fehler sind lokal und synchron; eine fehlgeschlagene Operation
//! lässt den vorherigen Zustand vollständig unverändert. Der Core loggt
//! selbst nie — die Boundary-Schicht entscheidet über Abbruch oder
//! Fortsetzung des umgebenden Workflows.

use thiserror::Error;

/// Fehler beim Aufnehmen eines Nodes in den Graphen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// Metadaten fehlen, tragen kein Sentinel-Präfix oder haben eine
    /// ungültige Segment-Struktur
    #[error("Ungueltiger Identifier: {0}")]
    MalformedIdentifier(String),
    /// Node-ID existiert bereits im Graphen
    #[error("Node '{0}' existiert bereits im Graphen")]
    DuplicateNode(String),
}

/// Fehler beim Neuberechnen der Adjazenzstruktur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Ein deklarierter Nachbar fehlt im Node-Set
    #[error("Nachbar '{neighbor}' von Node '{node}' nicht gefunden")]
    UnknownNeighbor {
        /// Node, der den fehlenden Nachbarn deklariert
        node: String,
        /// Die nicht auflösbare Nachbar-ID
        neighbor: String,
    },
}

/// Fehler bei Abfragen gegen den Graphen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Abfrage gegen einen Graphen ohne Nodes bzw. ohne berechnete Kanten
    #[error("Abfrage gegen leeren Graphen")]
    EmptyGraph,
    /// Die angefragte Node-ID fehlt in der Adjazenzstruktur
    #[error("Node '{0}' fehlt im berechneten Graphen")]
    UnknownNode(String),
    /// Kein gerichteter Pfad vom Start zum Ziel
    #[error("Kein Pfad von '{start}' nach '{end}' gefunden")]
    Unreachable {
        /// Start-Node der Anfrage
        start: String,
        /// Ziel-Node der Anfrage
        end: String,
    },
}
