//! Spatial-Index (KD-Tree) für Node-Abfragen nach Position.

use glam::DVec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};
use std::collections::HashMap;

use super::geometry;
use crate::core::{MapNode, NodeId};

/// Relativer Zuschlag auf den Suchradius, damit Treffer exakt auf dem Rand
/// nicht an Rundungen im Baum scheitern. Gefiltert wird danach exakt.
const RADIUS_SLACK: f64 = 1e-9;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Nodes
    pub node_id: NodeId,
    /// Position des Nodes in Einfügereihenfolge
    pub position_index: usize,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über allen Nodes eines Graphen.
///
/// Der KD-Tree enthält jede endliche Position genau einmal; deckungsgleiche Nodes
/// teilen sich einen Eintrag. Nodes mit nicht-endlichen Koordinaten stehen nicht
/// im Baum und werden linear geprüft.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    /// Slots (Einfügepositionen) je Baum-Eintrag, aufsteigend
    buckets: Vec<Vec<usize>>,
    /// Slots mit nicht-endlicher Position
    unindexed: Vec<usize>,
    node_ids: Vec<NodeId>,
    positions: Vec<DVec2>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            buckets: Vec::new(),
            unindexed: Vec::new(),
            node_ids: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den Nodes (Einfügereihenfolge bleibt erhalten).
    pub fn from_nodes(nodes: &IndexMap<NodeId, MapNode>) -> Self {
        let node_ids: Vec<NodeId> = nodes.keys().copied().collect();
        let positions: Vec<DVec2> = nodes.values().map(|node| node.position).collect();

        let mut entries: Vec<[f64; 2]> = Vec::new();
        let mut buckets: Vec<Vec<usize>> = Vec::new();
        let mut unindexed = Vec::new();
        let mut bucket_of: HashMap<(u64, u64), usize> = HashMap::new();

        for (slot, position) in positions.iter().enumerate() {
            if !position.is_finite() {
                unindexed.push(slot);
                continue;
            }
            // +0.0 vereinheitlicht -0.0 und 0.0
            let x = position.x + 0.0;
            let y = position.y + 0.0;
            let bucket = *bucket_of.entry((x.to_bits(), y.to_bits())).or_insert_with(|| {
                entries.push([x, y]);
                buckets.push(Vec::new());
                buckets.len() - 1
            });
            buckets[bucket].push(slot);
        }

        if !unindexed.is_empty() {
            log::warn!(
                "{} Nodes mit nicht-endlicher Position nicht im Spatial-Index",
                unindexed.len()
            );
        }

        Self {
            tree: (&entries).into(),
            buckets,
            unindexed,
            node_ids,
            positions,
        }
    }

    /// Gibt die Anzahl indexierter Nodes zurück.
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Nodes im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    fn make_match(&self, position_index: usize, query: DVec2) -> Option<SpatialMatch> {
        let node_id = *self.node_ids.get(position_index)?;
        let position = *self.positions.get(position_index)?;
        Some(SpatialMatch {
            node_id,
            position_index,
            distance: geometry::distance(query, position, 1.0),
        })
    }

    fn bucket_slots(&self, item: u64) -> &[usize] {
        usize::try_from(item)
            .ok()
            .and_then(|bucket| self.buckets.get(bucket))
            .map_or(&[], Vec::as_slice)
    }

    /// Findet den nächsten Node zur gegebenen Position.
    ///
    /// Bei deckungsgleichen Nodes gewinnt der früher eingefügte.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if !query.is_finite() {
            return None;
        }

        let from_tree = if self.buckets.is_empty() {
            None
        } else {
            let result = self
                .tree
                .nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
            self.bucket_slots(result.item)
                .first()
                .and_then(|&slot| self.make_match(slot, query))
        };

        self.unindexed
            .iter()
            .filter_map(|&slot| self.make_match(slot, query))
            .chain(from_tree)
            .filter(|m| !m.distance.is_nan())
            .min_by(|a, b| {
                a.distance
                    .total_cmp(&b.distance)
                    .then_with(|| a.position_index.cmp(&b.position_index))
            })
    }

    /// Findet alle Nodes mit Distanz ≤ `radius`, sortiert nach Distanz.
    ///
    /// Bei gleicher Distanz entscheidet die Einfügereihenfolge.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<SpatialMatch> {
        if self.is_empty()
            || !query.is_finite()
            || radius.is_sign_negative()
            || radius.is_nan()
        {
            return Vec::new();
        }

        let search_sq = radius * radius * (1.0 + RADIUS_SLACK) + f64::EPSILON;
        let tree_slots = if self.buckets.is_empty() {
            Vec::new()
        } else {
            self.tree
                .within::<SquaredEuclidean>(&[query.x, query.y], search_sq)
                .into_iter()
                .flat_map(|entry| self.bucket_slots(entry.item).iter().copied())
                .collect()
        };

        let mut results = tree_slots
            .into_iter()
            .chain(self.unindexed.iter().copied())
            .filter_map(|slot| self.make_match(slot, query))
            .filter(|m| m.distance <= radius)
            .collect::<Vec<_>>();

        results.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.position_index.cmp(&b.position_index))
        });
        results
    }

    /// Erster Node in Einfügereihenfolge mit Distanz ≤ `radius`.
    pub fn first_within_radius(&self, query: DVec2, radius: f64) -> Option<SpatialMatch> {
        self.within_radius(query, radius)
            .into_iter()
            .min_by_key(|m| m.position_index)
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}
