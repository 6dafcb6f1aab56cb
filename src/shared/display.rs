//! Textdarstellungen für Listen und Routen-Ausgabe.

use super::MapScale;
use crate::core::{resolve_route, EdgeId, Graph, MapNode, NodeId, PathResult};

/// Listenzeile eines Nodes: `Label (x, y, special)`
pub fn describe_node(node: &MapNode, decimals: usize) -> String {
    format!(
        "{} ({:.*}, {:.*}, {})",
        node.label, decimals, node.position.x, decimals, node.position.y, node.is_special
    )
}

/// Listenzeile einer Kante: `A -> B (Gerade, 12.3 m)`
pub fn describe_edge(
    graph: &Graph,
    id: EdgeId,
    scale: &MapScale,
    decimals: usize,
) -> Option<String> {
    let edge = graph.edge(id)?;
    let label1 = &graph.node(edge.node1)?.label;
    let label2 = &graph.node(edge.node2)?.label;
    let kind = if edge.is_curved() { "Kurve" } else { "Gerade" };
    let length = graph.edge_length(id, scale.ratio)?;

    Some(format!(
        "{} -> {} ({}, {})",
        label1,
        label2,
        kind,
        scale.format_length(length, decimals)
    ))
}

/// Mehrzeiliger Routen-Bericht mit Abschnitten und Gesamtlänge im Anzeige-Maßstab.
pub fn describe_route(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    result: &PathResult,
    scale: &MapScale,
    decimals: usize,
) -> String {
    let label_of = |id: NodeId| {
        graph
            .node(id)
            .map(|n| n.label.clone())
            .unwrap_or_else(|| id.to_string())
    };

    let report = if result.is_found() {
        resolve_route(graph, &result.path, scale.ratio)
    } else {
        None
    };
    let Some(report) = report else {
        return format!(
            "Kein Weg zwischen {} und {} gefunden",
            label_of(start),
            label_of(goal)
        );
    };

    let mut text = format!("Route von {} nach {}:\n", label_of(start), label_of(goal));
    for leg in &report.legs {
        text.push_str(&format!(
            "- {} → {} ({})\n",
            label_of(leg.from),
            label_of(leg.to),
            scale.format_length(leg.length, decimals)
        ));
    }
    text.push_str(&format!(
        "\nGesamtlänge: {}",
        scale.format_length(report.total_length, decimals)
    ));
    text
}
