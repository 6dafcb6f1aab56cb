//! Writer für gespeicherte Karten-Graphen.

use super::document::{EdgeRecord, GraphDocument, NodeRecord, PointRecord};
use crate::core::Graph;
use anyhow::{bail, Result};
use serde_json::Number;

/// Bildet einen Graphen auf das Dateiformat ab.
///
/// Kanten-Endpunkte werden als Positionen im `nodes`-Array geschrieben.
pub fn encode_graph_document(graph: &Graph) -> Result<GraphDocument> {
    let mut nodes = Vec::with_capacity(graph.node_count());
    for (id, node) in graph.nodes() {
        if !node.position.is_finite() {
            bail!("Node {} hat keine endliche Position: {}", id, node.position);
        }
        nodes.push(NodeRecord {
            x: node.position.x,
            y: node.position.y,
            label: node.label.clone(),
            is_special: node.is_special,
        });
    }

    let mut edges = Vec::with_capacity(graph.edge_count());
    for (id, edge) in graph.edges() {
        let position_of = |node| {
            graph.node_position_index(node).ok_or_else(|| {
                anyhow::anyhow!(
                    "Inkonsistenter Graph: Kante {} verweist auf fehlenden Node {}",
                    id,
                    node
                )
            })
        };
        let node1_index = Number::from(position_of(edge.node1)? as u64);
        let node2_index = Number::from(position_of(edge.node2)? as u64);

        let control_point = match edge.control_point() {
            Some(control) if !control.is_finite() => {
                bail!("Kante {} hat keinen endlichen Kontrollpunkt: {}", id, control);
            }
            Some(control) => Some(PointRecord {
                x: control.x,
                y: control.y,
            }),
            None => None,
        };

        edges.push(EdgeRecord {
            node1_index,
            node2_index,
            curved: edge.is_curved(),
            control_point,
        });
    }

    Ok(GraphDocument { nodes, edges })
}

/// Schreibt einen Graphen als JSON-Dokument (eingerückt)
pub fn write_graph_document(graph: &Graph) -> Result<String> {
    let document = encode_graph_document(graph)?;
    Ok(serde_json::to_string_pretty(&document)?)
}
