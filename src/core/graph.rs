//! Der Navigationsgraph: Node-Set plus abgeleitete Adjazenzstruktur.

use glam::Vec3;
use indexmap::IndexMap;

use super::identifier::{parse_identifier, PathMetadata};
use super::route::find_shortest_path;
use super::{GraphError, IngestError, NavNode, QueryError, SceneObject};

/// Abgeleitete Adjazenzstruktur: Node-ID → (Nachbar-ID → Kantengewicht).
///
/// Kanten sind gerichtet: `u → v` existiert nur, wenn `u` den Nachbarn `v`
/// deklariert. Deklariert `v` den Node `u` nicht zurück, gibt es keine
/// Kante `v → u` — die Asymmetrie ist gewollt und darf nicht durch
/// automatisches Symmetrisieren "repariert" werden.
pub type Adjacency = IndexMap<String, IndexMap<String, f32>>;

/// Navigationsgraph über den Pfad-Nodes einer Vektorgrafik.
///
/// Nodes werden einmalig beim Szenen-Load aufgenommen und nie entfernt.
/// Die Adjazenzstruktur wird explizit per [`NavGraph::recompute_graph`]
/// (neu) berechnet und veraltet, sobald sich Node-Positionen ändern —
/// es gibt keine automatische Invalidierung.
#[derive(Debug, Clone)]
pub struct NavGraph<S> {
    /// Alle Nodes in Einfüge-Reihenfolge, indexiert nach ID
    nodes: IndexMap<String, NavNode<S>>,
    /// Abgeleitete Kantengewichte; leer bis zum ersten Recompute
    adjacency: Adjacency,
}

impl<S: SceneObject> NavGraph<S> {
    /// Erstellt einen leeren Navigationsgraphen.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            adjacency: Adjacency::new(),
        }
    }

    /// Nimmt einen Node aus SVG-Pfad-Metadaten in den Graphen auf.
    ///
    /// Die Position bleibt bis zum nächsten [`NavGraph::recompute_graph`]
    /// auf `Vec3::ZERO`; das visuelle Objekt wird initial unsichtbar
    /// geschaltet (Darstellung übernimmt später der Rendering-Collaborator).
    /// Bei einem Fehler bleibt der Node-Bestand unverändert.
    pub fn add_node(
        &mut self,
        mut scene_ref: S,
        metadata: Option<&PathMetadata>,
    ) -> Result<(), IngestError> {
        let payload = parse_identifier(metadata)?;
        if self.nodes.contains_key(&payload.id) {
            return Err(IngestError::DuplicateNode(payload.id));
        }

        scene_ref.set_visible(false);
        let node = NavNode::new(payload.id.clone(), payload.neighbor_ids, scene_ref);
        self.nodes.insert(payload.id, node);
        Ok(())
    }

    /// Berechnet Node-Positionen und Kantengewichte neu.
    ///
    /// Positionen kommen aus dem Bounding-Volumen-Mittelpunkt des visuellen
    /// Objekts; Gewichte sind euklidische Distanzen zwischen den neuen
    /// Positionen. Die Adjazenzstruktur wird erst nach vollständigem Erfolg
    /// ersetzt — Aufrufer sehen nie einen teilweise neu aufgebauten Graphen,
    /// und bei `UnknownNeighbor` bleibt auch jede Node-Position unverändert.
    pub fn recompute_graph(&mut self) -> Result<(), GraphError> {
        // Positionen zuerst einsammeln, erst nach vollständigem Erfolg übernehmen
        let positions: IndexMap<String, Vec3> = self
            .nodes
            .iter()
            .map(|(id, node)| (id.clone(), node.scene_ref.bounds_center()))
            .collect();

        let mut adjacency = Adjacency::new();
        for (id, node) in &self.nodes {
            let mut neighbors = IndexMap::new();
            for neighbor_id in &node.neighbor_ids {
                let neighbor_pos =
                    positions
                        .get(neighbor_id)
                        .ok_or_else(|| GraphError::UnknownNeighbor {
                            node: id.clone(),
                            neighbor: neighbor_id.clone(),
                        })?;
                neighbors.insert(neighbor_id.clone(), positions[id].distance(*neighbor_pos));
            }
            adjacency.insert(id.clone(), neighbors);
        }

        for (id, position) in positions {
            if let Some(node) = self.nodes.get_mut(&id) {
                node.position = position;
            }
        }
        self.adjacency = adjacency;
        Ok(())
    }

    /// Berechnet den Graphen nur, wenn noch keine Kantenstruktur existiert.
    ///
    /// Expliziter Lazy-Recompute für Komfort-Aufrufer; ein bereits
    /// berechneter Graph bleibt unangetastet.
    pub fn ensure_graph(&mut self) -> Result<(), GraphError> {
        if !self.is_graph_computed() {
            self.recompute_graph()?;
        }
        Ok(())
    }

    /// `true`, sobald die Adjazenzstruktur berechnet wurde.
    pub fn is_graph_computed(&self) -> bool {
        !self.adjacency.is_empty()
    }

    /// Findet den Node mit der kleinsten euklidischen Distanz zum Punkt.
    ///
    /// Linearer Scan in Einfüge-Reihenfolge; bei Gleichstand gewinnt der
    /// zuerst eingefügte Node. Kein Spatial-Index — die Node-Anzahl bleibt
    /// auf Szenengraph-Niveau.
    pub fn nearest(&self, point: Vec3) -> Result<&NavNode<S>, QueryError> {
        let mut candidates = self.nodes.values();
        let mut nearest = candidates.next().ok_or(QueryError::EmptyGraph)?;
        let mut nearest_dist = nearest.position.distance(point);

        for node in candidates {
            let distance = node.position.distance(point);
            if distance < nearest_dist {
                nearest_dist = distance;
                nearest = node;
            }
        }
        Ok(nearest)
    }

    /// Kürzester Pfad zwischen zwei Nodes als Positionsfolge.
    ///
    /// Die Folge enthält Start- und Ziel-Position inklusive. Voraussetzung
    /// ist ein zuvor berechneter Graph (Aufrufer-Disziplin; siehe
    /// [`NavGraph::ensure_graph`]) — sonst `EmptyGraph`. Ein nicht
    /// erreichbares Ziel wird als [`QueryError::Unreachable`] gemeldet
    /// statt als degeneriertes Ein-Element-Ergebnis.
    pub fn shortest_path(&self, start_id: &str, end_id: &str) -> Result<Vec<Vec3>, QueryError> {
        let path = find_shortest_path(&self.adjacency, start_id, end_id)?;

        if path.len() == 1 && path[0] != start_id {
            return Err(QueryError::Unreachable {
                start: start_id.to_string(),
                end: end_id.to_string(),
            });
        }

        path.iter()
            .map(|id| {
                self.nodes
                    .get(id)
                    .map(|node| node.position)
                    .ok_or_else(|| QueryError::UnknownNode(id.clone()))
            })
            .collect()
    }

    /// Gibt die Anzahl der Nodes zurück.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterator über alle Nodes in Einfüge-Reihenfolge (read-only).
    pub fn nodes(&self) -> impl Iterator<Item = &NavNode<S>> {
        self.nodes.values()
    }

    /// Findet einen Node über seine ID.
    pub fn get_node(&self, id: &str) -> Option<&NavNode<S>> {
        self.nodes.get(id)
    }

    /// Die aktuell berechnete Adjazenzstruktur (read-only).
    pub fn graph(&self) -> &Adjacency {
        &self.adjacency
    }
}

impl<S: SceneObject> Default for NavGraph<S> {
    fn default() -> Self {
        Self::new()
    }
}
