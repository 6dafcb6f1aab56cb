//! Rückführung eines Node-Pfades auf die befahrenen Kanten.
//!
//! Verbinden mehrere parallele Kanten dasselbe Node-Paar, wird die erste Kante
//! in Einfügereihenfolge gewählt, unabhängig davon, welche die Suche genutzt hat.

use super::{EdgeId, Graph, NodeId};

/// Ein Abschnitt einer Route in Fahrtrichtung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLeg {
    /// Befahrene Kante
    pub edge: EdgeId,
    /// Node am Anfang des Abschnitts
    pub from: NodeId,
    /// Node am Ende des Abschnitts
    pub to: NodeId,
    /// Länge im angefragten Maßstab
    pub length: f64,
}

/// Alle Abschnitte einer Route mit Gesamtlänge
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteReport {
    /// Abschnitte vom Start zum Ziel
    pub legs: Vec<RouteLeg>,
    /// Summe der Abschnittslängen
    pub total_length: f64,
}

/// Ordnet jedem aufeinanderfolgenden Node-Paar des Pfades eine Kante zu.
///
/// Gibt `None` zurück, wenn ein Paar nicht (mehr) durch eine Kante verbunden ist.
pub fn resolve_route(graph: &Graph, path: &[NodeId], scale: f64) -> Option<RouteReport> {
    let mut report = RouteReport::default();

    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let edge = *graph.edges_between(from, to).first()?;
        let length = graph.edge_length(edge, scale)?;
        report.total_length += length;
        report.legs.push(RouteLeg {
            edge,
            from,
            to,
            length,
        });
    }

    Some(report)
}
