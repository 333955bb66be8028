//! Identifier-Codec für SVG-Pfad-Metadaten.
//!
//! Pfade, die am Navigationsgraphen teilnehmen, tragen eine ID der Form
//! `PATHFINDER_<node>__<nachbar>(-<nachbar>)*`, z.B. deklariert
//! `PATHFINDER_A__B-C` den Node `A` mit den Nachbarn `B` und `C`.
//! Das Format muss bit-exakt erhalten bleiben (Kompatibilität mit
//! bestehenden SVG-Dateien).

use serde::{Deserialize, Serialize};

use super::IngestError;

/// Sentinel-Präfix: markiert Pfade, die zum Navigationsgraphen gehören.
pub const NODE_ID_PREFIX: &str = "PATHFINDER_";

/// Trennzeichen zwischen Node-ID und Nachbarliste.
const SEGMENT_DELIMITER: &str = "__";

/// Trennzeichen innerhalb der Nachbarliste.
const NEIGHBOR_DELIMITER: &str = "-";

/// Strukturiertes Metadaten-Feld eines SVG-Pfad-Records (`userData`-Äquivalent).
///
/// Unbekannte Felder im Metadaten-Objekt werden ignoriert; nur `node.id`
/// ist für den Codec relevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMetadata {
    /// Node-Element mit der kodierten Identifier-Zeichenkette
    #[serde(default)]
    pub node: Option<MetadataNode>,
}

/// Das `node`-Element innerhalb der Pfad-Metadaten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataNode {
    /// Kodierter Identifier (`PATHFINDER_...`)
    pub id: String,
}

impl PathMetadata {
    /// Baut Metadaten direkt aus einer Identifier-Zeichenkette.
    pub fn with_node_id(id: &str) -> Self {
        Self {
            node: Some(MetadataNode { id: id.to_string() }),
        }
    }

    /// Parsed Metadaten aus einem JSON-String (z.B. dem `userData`-Feld
    /// eines SVG-Loaders). Ungültiges JSON ergibt `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    fn raw_id(&self) -> Option<&str> {
        self.node.as_ref().map(|node| node.id.as_str())
    }
}

/// Transientes Parse-Ergebnis: Node-ID plus deklarierte Nachbarn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierPayload {
    /// Eindeutige Node-ID
    pub id: String,
    /// Deklarierte Nachbar-IDs in Deklarationsreihenfolge
    pub neighbor_ids: Vec<String>,
}

impl IdentifierPayload {
    /// Kodiert das Payload zurück in die Identifier-Zeichenkette.
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}{}",
            NODE_ID_PREFIX,
            self.id,
            SEGMENT_DELIMITER,
            self.neighbor_ids.join(NEIGHBOR_DELIMITER)
        )
    }
}

/// Prüft ob die Metadaten zum Navigationsgraphen gehören.
///
/// Reines Prädikat über den Sentinel-Präfix: fehlende Metadaten ergeben
/// `false`, nie einen Fehler.
pub fn is_part_of_graph(metadata: Option<&PathMetadata>) -> bool {
    metadata
        .and_then(PathMetadata::raw_id)
        .map(|id| id.starts_with(NODE_ID_PREFIX))
        .unwrap_or(false)
}

/// Extrahiert Node-ID und Nachbarliste aus den Pfad-Metadaten.
///
/// Nach dem Abtrennen des Präfix muss der Rest aus exakt zwei Segmenten
/// bestehen: `<id>__<nachbarliste>`. Eine leere Nachbarliste ist erlaubt
/// (Nodes ohne ausgehende Kanten).
pub fn parse_identifier(metadata: Option<&PathMetadata>) -> Result<IdentifierPayload, IngestError> {
    let raw = metadata
        .and_then(PathMetadata::raw_id)
        .ok_or_else(|| IngestError::MalformedIdentifier("Metadaten ohne node.id".to_string()))?;

    let chain = raw.strip_prefix(NODE_ID_PREFIX).ok_or_else(|| {
        IngestError::MalformedIdentifier(format!("Sentinel-Praefix fehlt: '{}'", raw))
    })?;

    let (id, neighbor_chain) = chain.split_once(SEGMENT_DELIMITER).ok_or_else(|| {
        IngestError::MalformedIdentifier(format!("Nachbar-Segment fehlt: '{}'", raw))
    })?;

    if id.is_empty() || neighbor_chain.contains(SEGMENT_DELIMITER) {
        return Err(IngestError::MalformedIdentifier(format!(
            "Ungueltige Segment-Struktur: '{}'",
            raw
        )));
    }

    let neighbor_ids = if neighbor_chain.is_empty() {
        Vec::new()
    } else {
        neighbor_chain
            .split(NEIGHBOR_DELIMITER)
            .map(str::to_string)
            .collect()
    };

    Ok(IdentifierPayload {
        id: id.to_string(),
        neighbor_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_id_and_neighbors() {
        let metadata = PathMetadata::with_node_id("PATHFINDER_A__B-C");
        let payload = parse_identifier(Some(&metadata)).expect("gueltiger Identifier");

        assert_eq!(payload.id, "A");
        assert_eq!(payload.neighbor_ids, vec!["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn parse_allows_empty_neighbor_list() {
        let metadata = PathMetadata::with_node_id("PATHFINDER_Z__");
        let payload = parse_identifier(Some(&metadata)).expect("gueltiger Identifier");

        assert_eq!(payload.id, "Z");
        assert!(payload.neighbor_ids.is_empty());
    }

    #[test]
    fn parse_fails_without_metadata() {
        let result = parse_identifier(None);
        assert!(matches!(result, Err(IngestError::MalformedIdentifier(_))));
    }

    #[test]
    fn parse_fails_without_prefix() {
        let metadata = PathMetadata::with_node_id("WAYPOINT_A__B");
        let result = parse_identifier(Some(&metadata));
        assert!(matches!(result, Err(IngestError::MalformedIdentifier(_))));
    }

    #[test]
    fn parse_fails_without_neighbor_segment() {
        let metadata = PathMetadata::with_node_id("PATHFINDER_A");
        let result = parse_identifier(Some(&metadata));
        assert!(matches!(result, Err(IngestError::MalformedIdentifier(_))));
    }

    #[test]
    fn parse_fails_on_extra_delimiter() {
        let metadata = PathMetadata::with_node_id("PATHFINDER_A__B__C");
        let result = parse_identifier(Some(&metadata));
        assert!(matches!(result, Err(IngestError::MalformedIdentifier(_))));
    }

    #[test]
    fn parse_fails_on_empty_node_id() {
        let metadata = PathMetadata::with_node_id("PATHFINDER___B");
        let result = parse_identifier(Some(&metadata));
        assert!(matches!(result, Err(IngestError::MalformedIdentifier(_))));
    }

    #[test]
    fn encode_is_inverse_of_parse() {
        for raw in ["PATHFINDER_A__B-C", "PATHFINDER_Start__Ziel", "PATHFINDER_X__"] {
            let metadata = PathMetadata::with_node_id(raw);
            let payload = parse_identifier(Some(&metadata)).expect("gueltiger Identifier");
            assert_eq!(payload.encode(), raw);
        }
    }

    #[test]
    fn predicate_accepts_prefixed_metadata() {
        let metadata = PathMetadata::with_node_id("PATHFINDER_A__B");
        assert!(is_part_of_graph(Some(&metadata)));
    }

    #[test]
    fn predicate_rejects_missing_metadata_without_error() {
        assert!(!is_part_of_graph(None));
        assert!(!is_part_of_graph(Some(&PathMetadata { node: None })));

        let metadata = PathMetadata::with_node_id("decorative-path");
        assert!(!is_part_of_graph(Some(&metadata)));
    }

    #[test]
    fn metadata_parses_from_json() {
        let metadata = PathMetadata::from_json(r#"{"node":{"id":"PATHFINDER_A__B"}}"#)
            .expect("gueltiges JSON");
        assert!(is_part_of_graph(Some(&metadata)));

        // Fremde Felder im userData-Objekt stoeren nicht
        let metadata =
            PathMetadata::from_json(r#"{"style":"bold","node":{"id":"PATHFINDER_A__B"}}"#)
                .expect("gueltiges JSON");
        assert!(is_part_of_graph(Some(&metadata)));

        assert!(PathMetadata::from_json("kein json").is_none());
    }
}
