//! A*-Wegfindung über einem Graph-Snapshot.
//!
//! Kantenkosten und Heuristik werden immer im Einheitsmaßstab (1.0) berechnet,
//! unabhängig vom Anzeige-Maßstab. Die Luftlinie ist zulässig und konsistent,
//! da keine Kante (gerade oder gekrümmt) kürzer als die Luftlinie ihrer Endpunkte ist.

use super::geometry;
use super::{Graph, NodeId};
use glam::DVec2;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Maßstab für Kosten und Heuristik der Suche.
const UNIT_SCALE: f64 = 1.0;

/// Ergebnis einer Wegsuche.
///
/// Ein leerer Pfad (Kosten 0) bedeutet: kein Weg gefunden oder Endpunkt unbekannt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathResult {
    /// Nodes vom Start bis zum Ziel (inklusive)
    pub path: Vec<NodeId>,
    /// Summe der Kantenlängen im Einheitsmaßstab
    pub total_cost: f64,
}

impl PathResult {
    /// Leeres Ergebnis für "kein Weg"
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Prüft ob ein Weg gefunden wurde.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Startknoten des Weges
    pub fn start(&self) -> Option<NodeId> {
        self.path.first().copied()
    }

    /// Zielknoten des Weges
    pub fn goal(&self) -> Option<NodeId> {
        self.path.last().copied()
    }
}

/// Eintrag der Open-Liste. Der Heap ist ein Max-Heap, daher invertierte Ordnung:
/// kleinster f-Wert zuerst, bei Gleichstand der früher eingefügte Node.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f_score: f64,
    g_score: f64,
    slot: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Dichte Sicht auf den Graphen: Nodes über ihre Einfügeposition (`slot`) adressiert.
struct SearchGraph {
    node_ids: Vec<NodeId>,
    positions: Vec<DVec2>,
    /// Nachbarn je Slot: (Nachbar-Slot, Kantenkosten)
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl SearchGraph {
    fn build(graph: &Graph) -> Self {
        let node_ids: Vec<NodeId> = graph.nodes().map(|(id, _)| id).collect();
        let positions: Vec<DVec2> = graph.nodes().map(|(_, node)| node.position).collect();
        let mut adjacency = vec![Vec::new(); node_ids.len()];

        for (_, edge) in graph.edges() {
            let (Some(s1), Some(s2)) = (
                graph.node_position_index(edge.node1),
                graph.node_position_index(edge.node2),
            ) else {
                continue;
            };
            let cost = edge.length(positions[s1], positions[s2], UNIT_SCALE);
            adjacency[s1].push((s2, cost));
            adjacency[s2].push((s1, cost));
        }

        Self {
            node_ids,
            positions,
            adjacency,
        }
    }

    fn heuristic(&self, slot: usize, goal: usize) -> f64 {
        geometry::distance(self.positions[slot], self.positions[goal], UNIT_SCALE)
    }
}

/// Sucht den kürzesten Weg von `start` nach `goal` (A*).
///
/// Bei `start == goal` besteht der Weg nur aus dem Start (Kosten 0).
/// Unbekannte Endpunkte oder getrennte Komponenten liefern ein leeres Ergebnis.
/// Parallele Kanten nehmen alle an der Relaxierung teil.
pub fn find_path(graph: &Graph, start: NodeId, goal: NodeId) -> PathResult {
    let (Some(start_slot), Some(goal_slot)) = (
        graph.node_position_index(start),
        graph.node_position_index(goal),
    ) else {
        log::debug!("Wegsuche {} → {}: Endpunkt unbekannt", start, goal);
        return PathResult::unreachable();
    };

    let search = SearchGraph::build(graph);
    let node_count = search.node_ids.len();

    let mut g_score = vec![f64::INFINITY; node_count];
    let mut came_from: Vec<Option<usize>> = vec![None; node_count];
    let mut open = BinaryHeap::new();

    g_score[start_slot] = 0.0;
    open.push(OpenEntry {
        f_score: search.heuristic(start_slot, goal_slot),
        g_score: 0.0,
        slot: start_slot,
    });

    let mut expanded = 0usize;
    while let Some(entry) = open.pop() {
        // Veralteter Eintrag: Node wurde inzwischen günstiger erreicht
        if entry.g_score > g_score[entry.slot] {
            continue;
        }
        expanded += 1;

        if entry.slot == goal_slot {
            let path = reconstruct_path(&search, &came_from, goal_slot);
            log::debug!(
                "Wegsuche {} → {}: {} Nodes, Kosten {:.3}, {} Expansionen",
                start,
                goal,
                path.len(),
                entry.g_score,
                expanded
            );
            return PathResult {
                path,
                total_cost: entry.g_score,
            };
        }

        for &(neighbor, cost) in &search.adjacency[entry.slot] {
            let tentative = entry.g_score + cost;
            if tentative < g_score[neighbor] {
                came_from[neighbor] = Some(entry.slot);
                g_score[neighbor] = tentative;
                open.push(OpenEntry {
                    f_score: tentative + search.heuristic(neighbor, goal_slot),
                    g_score: tentative,
                    slot: neighbor,
                });
            }
        }
    }

    log::debug!(
        "Wegsuche {} → {}: kein Weg ({} Expansionen)",
        start,
        goal,
        expanded
    );
    PathResult::unreachable()
}

/// Sucht den Weg zwischen den ersten Nodes mit den gegebenen Beschriftungen.
pub fn find_path_by_labels(graph: &Graph, start_label: &str, goal_label: &str) -> PathResult {
    match (
        graph.find_node_by_label(start_label),
        graph.find_node_by_label(goal_label),
    ) {
        (Some(start), Some(goal)) => find_path(graph, start, goal),
        _ => {
            log::debug!(
                "Wegsuche '{}' → '{}': Beschriftung nicht gefunden",
                start_label,
                goal_label
            );
            PathResult::unreachable()
        }
    }
}

fn reconstruct_path(search: &SearchGraph, came_from: &[Option<usize>], goal: usize) -> Vec<NodeId> {
    let mut slots = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from[current] {
        slots.push(prev);
        current = prev;
    }
    slots.reverse();
    slots.into_iter().map(|slot| search.node_ids[slot]).collect()
}
