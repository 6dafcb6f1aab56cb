//! Parser für gespeicherte Karten-Graphen.

use super::document::{EdgeRecord, GraphDocument};
use crate::core::{Graph, InvalidEdgeReason, MapEdge, MapNode, NodeId};
use glam::DVec2;
use serde_json::Number;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Fehler beim Einlesen eines Dokuments.
///
/// Bei jedem Fehler entsteht kein (Teil-)Graph.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Kein gültiges JSON oder Pflichtfelder fehlen
    #[error("invalid graph document: {0}")]
    Json(#[from] serde_json::Error),
    /// Kante widerspricht den Struktur-Invarianten
    #[error("malformed edge at index {index}: {reason}")]
    MalformedEdge {
        /// Position der Kante im `edges`-Array
        index: usize,
        /// Verletzte Invariante
        reason: InvalidEdgeReason,
    },
}

/// Statistik eines erfolgreichen Ladevorgangs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Anzahl geladener Nodes
    pub node_count: usize,
    /// Anzahl geladener Kanten
    pub edge_count: usize,
    /// Kanten mit Index außerhalb des Node-Arrays (übersprungen)
    pub skipped_edges: usize,
}

/// Parsed einen Graphen aus einem JSON-String
pub fn parse_graph_document(json: &str) -> Result<Graph, DecodeError> {
    parse_graph_document_with_report(json).map(|(graph, _)| graph)
}

/// Parsed einen Graphen und liefert zusätzlich die Lade-Statistik
pub fn parse_graph_document_with_report(json: &str) -> Result<(Graph, LoadReport), DecodeError> {
    let document: GraphDocument = serde_json::from_str(json)?;
    decode_document(&document)
}

/// Lädt ein Dokument in einen bestehenden Graphen.
///
/// Der Graph wird erst nach vollständig erfolgreichem Parsen ersetzt;
/// bei einem Fehler bleibt der alte Inhalt unverändert.
pub fn load_graph_into(target: &mut Graph, json: &str) -> Result<LoadReport, DecodeError> {
    let (staged, report) = parse_graph_document_with_report(json)?;
    *target = staged;
    Ok(report)
}

/// Baut einen Graphen aus einem bereits deserialisierten Dokument
pub fn decode_document(document: &GraphDocument) -> Result<(Graph, LoadReport), DecodeError> {
    let mut graph = Graph::new();
    let node_ids = graph.add_nodes(document.nodes.iter().map(|record| {
        MapNode::new(
            DVec2::new(record.x, record.y),
            record.label.clone(),
            record.is_special,
        )
    }));

    let mut skipped_edges = 0usize;
    for (index, record) in document.edges.iter().enumerate() {
        let Some((node1, node2)) = resolve_endpoints(record, &node_ids) else {
            log::warn!(
                "Kante {} übersprungen: Index ({}, {}) außerhalb von 0..{}",
                index,
                record.node1_index,
                record.node2_index,
                node_ids.len()
            );
            skipped_edges += 1;
            continue;
        };

        let control = record.control_point.map(|p| DVec2::new(p.x, p.y));
        MapEdge::new(node1, node2, record.curved, control)
            .and_then(|edge| graph.insert_edge(edge))
            .map_err(|reason| DecodeError::MalformedEdge { index, reason })?;
    }

    let report = LoadReport {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        skipped_edges,
    };
    Ok((graph, report))
}

fn resolve_endpoints(record: &EdgeRecord, node_ids: &[NodeId]) -> Option<(NodeId, NodeId)> {
    let lookup = |index: &Number| -> Option<NodeId> {
        let index = usize::try_from(index.as_u64()?).ok()?;
        node_ids.get(index).copied()
    };
    Some((lookup(&record.node1_index)?, lookup(&record.node2_index)?))
}
