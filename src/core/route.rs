//! Kürzeste-Wege-Suche (Dijkstra) über der Adjazenzstruktur.
//!
//! Kantengewichte sind euklidische Distanzen und damit nie negativ; die
//! greedy Auswahl des nächsten Nodes ist deshalb gültig. Negative Gewichte
//! werden nicht unterstützt.

use indexmap::{IndexMap, IndexSet};

use super::{Adjacency, QueryError};

/// Wählt den unbesuchten, erreichten Node mit der kleinsten tentativen Distanz.
///
/// Bei Gleichstand gewinnt der zuerst eingetragene Node (Einfüge-Reihenfolge
/// der Distanz-Map) — deterministisch für reproduzierbare Pfade.
fn shortest_distance_node<'a>(
    distances: &'a IndexMap<String, f32>,
    visited: &IndexSet<String>,
) -> Option<&'a str> {
    let mut shortest: Option<(&str, f32)> = None;
    for (node, &distance) in distances {
        // Unendliche Distanz markiert "unerreicht"
        if distance.is_infinite() || visited.contains(node.as_str()) {
            continue;
        }
        match shortest {
            Some((_, best)) if distance >= best => {}
            _ => shortest = Some((node.as_str(), distance)),
        }
    }
    shortest.map(|(node, _)| node)
}

/// Berechnet den kürzesten Pfad zwischen zwei Nodes als ID-Folge.
///
/// Der Pfad enthält Start und Ziel inklusive. Ist das Ziel vom Start aus
/// nicht erreichbar, enthält das Ergebnis nur das Ziel (degeneriertes
/// Ergebnis — `NavGraph::shortest_path` übersetzt das in ein explizites
/// `QueryError::Unreachable`).
pub fn find_shortest_path(
    graph: &Adjacency,
    start_id: &str,
    end_id: &str,
) -> Result<Vec<String>, QueryError> {
    if graph.is_empty() {
        return Err(QueryError::EmptyGraph);
    }
    let start_edges = graph
        .get(start_id)
        .ok_or_else(|| QueryError::UnknownNode(start_id.to_string()))?;
    if !graph.contains_key(end_id) {
        return Err(QueryError::UnknownNode(end_id.to_string()));
    }
    if start_id == end_id {
        return Ok(vec![start_id.to_string()]);
    }

    // Tentative Distanzen: Ziel zunächst als unerreicht markieren, dann die
    // direkten Nachbarn des Starts übernehmen
    let mut distances: IndexMap<String, f32> = IndexMap::new();
    distances.insert(end_id.to_string(), f32::INFINITY);

    // Vorgänger-Map, geschlüsselt nach der tatsächlichen Ziel-Node-ID
    let mut parents: IndexMap<String, String> = IndexMap::new();

    for (neighbor, &weight) in start_edges {
        // Der Start wird nie erneut betreten — auch nicht über eine
        // selbstreferenzielle Nachbar-Deklaration
        if neighbor == start_id {
            continue;
        }
        distances.insert(neighbor.clone(), weight);
        parents.insert(neighbor.clone(), start_id.to_string());
    }

    let mut visited: IndexSet<String> = IndexSet::new();

    while let Some(node) = shortest_distance_node(&distances, &visited) {
        let node = node.to_string();
        let distance = distances[&node];

        if let Some(children) = graph.get(node.as_str()) {
            for (child, &weight) in children {
                // Der Start wird nie erneut betreten
                if child == start_id {
                    continue;
                }
                let new_distance = distance + weight;
                let improved = match distances.get(child) {
                    Some(&known) => new_distance < known,
                    None => true,
                };
                if improved {
                    distances.insert(child.clone(), new_distance);
                    parents.insert(child.clone(), node.clone());
                }
            }
        }

        visited.insert(node);
    }

    // Pfad rückwärts über die Vorgänger rekonstruieren
    let mut path = vec![end_id.to_string()];
    let mut current = end_id;
    while let Some(parent) = parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();

    Ok(path)
}
