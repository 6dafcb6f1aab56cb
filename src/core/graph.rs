//! Der zentrale Graph mit Nodes, Kanten und Spatial-Index.
//!
//! Nodes und Kanten liegen in einfügegeordneten Arenen mit stabilen IDs.
//! Die Einfügereihenfolge bestimmt die Positions-Indizes des Dateiformats
//! und die Reihenfolge in Listenansichten.

use super::{EdgeId, GraphError, InvalidEdgeReason, MapEdge, MapNode, NodeId};
use super::{EdgeShape, SpatialIndex, SpatialMatch};
use glam::DVec2;
use indexmap::IndexMap;


/// Graph aus beschrifteten Wegpunkten und ungerichteten Kanten
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Alle Nodes in Einfügereihenfolge
    nodes: IndexMap<NodeId, MapNode>,
    /// Alle Kanten in Einfügereihenfolge
    edges: IndexMap<EdgeId, MapEdge>,
    next_node_id: u64,
    next_edge_id: u64,
    /// Persistenter Spatial-Index, wird bei Positionsänderungen neu aufgebaut
    spatial_index: SpatialIndex,
}

impl Graph {
    /// Erstellt einen leeren Graphen
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Node am Ende an und gibt seine ID zurück
    pub fn add_node(
        &mut self,
        position: DVec2,
        label: impl Into<String>,
        is_special: bool,
    ) -> NodeId {
        self.next_node_id += 1;
        let id = NodeId(self.next_node_id);
        self.nodes
            .insert(id, MapNode::new(position, label, is_special));
        self.rebuild_spatial_index();
        id
    }

    /// Fügt mehrere Nodes in Reihenfolge an; der Spatial-Index wird nur einmal aufgebaut.
    pub fn add_nodes<I>(&mut self, nodes: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = MapNode>,
    {
        let ids = nodes
            .into_iter()
            .map(|node| {
                self.next_node_id += 1;
                let id = NodeId(self.next_node_id);
                self.nodes.insert(id, node);
                id
            })
            .collect();
        self.rebuild_spatial_index();
        ids
    }

    /// Fügt eine Kante am Ende an.
    ///
    /// Schlägt mit `InvalidEdge` fehl bei Selbstreferenz, unbekanntem Endpunkt oder
    /// wenn `curved` und `control` nicht zusammenpassen. Der Graph bleibt dann unverändert.
    pub fn add_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        curved: bool,
        control: Option<DVec2>,
    ) -> Result<EdgeId, GraphError> {
        let edge = MapEdge::new(a, b, curved, control)?;
        Ok(self.insert_edge(edge)?)
    }

    /// Fügt eine bereits validierte Kante an, sofern beide Endpunkte existieren
    pub fn insert_edge(&mut self, edge: MapEdge) -> Result<EdgeId, InvalidEdgeReason> {
        for endpoint in [edge.node1, edge.node2] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(InvalidEdgeReason::UnknownNode(endpoint));
            }
        }

        self.next_edge_id += 1;
        let id = EdgeId(self.next_edge_id);
        self.edges.insert(id, edge);
        Ok(id)
    }

    /// Entfernt einen Node inklusive aller Kanten, die ihn referenzieren
    pub fn remove_node(&mut self, id: NodeId) -> Option<MapNode> {
        let removed = self.nodes.shift_remove(&id)?;
        let before = self.edges.len();
        self.edges.retain(|_, edge| !edge.touches(id));
        log::debug!(
            "Node {} entfernt, {} Kanten mitgelöscht",
            id,
            before - self.edges.len()
        );
        self.rebuild_spatial_index();
        Some(removed)
    }

    /// Entfernt eine einzelne Kante, Nodes bleiben unberührt
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<MapEdge> {
        self.edges.shift_remove(&id)
    }

    /// Entfernt alle Nodes und Kanten. IDs werden nicht zurückgesetzt.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.rebuild_spatial_index();
    }

    /// Erster Node (Einfügereihenfolge) mit Distanz ≤ `radius` zum Punkt
    pub fn find_node_near(&self, point: DVec2, radius: f64) -> Option<NodeId> {
        self.spatial_index
            .first_within_radius(point, radius)
            .map(|m| m.node_id)
    }

    /// Nächstgelegener Node zur Position
    pub fn nearest_node(&self, point: DVec2) -> Option<SpatialMatch> {
        self.spatial_index.nearest(point)
    }

    /// Alle Nodes innerhalb eines Radius, sortiert nach Distanz
    pub fn nodes_within_radius(&self, point: DVec2, radius: f64) -> Vec<SpatialMatch> {
        self.spatial_index.within_radius(point, radius)
    }

    /// Alle Kanten, die den Node referenzieren, in Einfügereihenfolge
    pub fn incident_edges(&self, node: NodeId) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|(_, edge)| edge.touches(node))
            .map(|(&id, _)| id)
            .collect()
    }

    /// Alle Kanten zwischen zwei Nodes (beide Richtungen), in Einfügereihenfolge
    pub fn edges_between(&self, a: NodeId, b: NodeId) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|(_, edge)| edge.connects(a, b))
            .map(|(&id, _)| id)
            .collect()
    }

    /// Verschiebt einen Node
    pub fn move_node(&mut self, id: NodeId, position: DVec2) -> bool {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };

        if node.position == position {
            return true;
        }

        node.position = position;
        self.rebuild_spatial_index();
        true
    }

    /// Ändert die Beschriftung eines Nodes
    pub fn set_node_label(&mut self, id: NodeId, label: impl Into<String>) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Markiert einen Node als (nicht) wählbaren Start/Ziel-Punkt
    pub fn set_node_special(&mut self, id: NodeId, is_special: bool) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.is_special = is_special;
                true
            }
            None => false,
        }
    }

    /// Verschiebt den Kontrollpunkt einer gekrümmten Kante
    pub fn set_control_point(&mut self, id: EdgeId, control: DVec2) -> Result<(), GraphError> {
        let edge = self
            .edges
            .get_mut(&id)
            .ok_or(GraphError::EdgeNotFound(id))?;
        match &mut edge.shape {
            EdgeShape::Curved { control: current } => {
                *current = control;
                Ok(())
            }
            EdgeShape::Straight => Err(InvalidEdgeReason::NotCurved.into()),
        }
    }

    /// Beschriftung für einen neu platzierten Node: laufende Nummer ab 1
    pub fn next_default_label(&self) -> String {
        (self.nodes.len() + 1).to_string()
    }

    /// Node per ID
    pub fn node(&self, id: NodeId) -> Option<&MapNode> {
        self.nodes.get(&id)
    }

    /// Kante per ID
    pub fn edge(&self, id: EdgeId) -> Option<&MapEdge> {
        self.edges.get(&id)
    }

    /// Prüft ob der Node existiert
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterator über alle Nodes in Einfügereihenfolge
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &MapNode)> {
        self.nodes.iter().map(|(&id, node)| (id, node))
    }

    /// Iterator über alle Kanten in Einfügereihenfolge
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &MapEdge)> {
        self.edges.iter().map(|(&id, edge)| (id, edge))
    }

    /// Erster Node mit exakt dieser Beschriftung
    pub fn find_node_by_label(&self, label: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.label == label)
            .map(|(&id, _)| id)
    }

    /// Alle als Start/Ziel markierten Nodes in Einfügereihenfolge
    pub fn special_nodes(&self) -> impl Iterator<Item = (NodeId, &MapNode)> {
        self.nodes().filter(|(_, node)| node.is_special)
    }

    /// Position des Nodes in der Einfügereihenfolge
    pub fn node_position_index(&self, id: NodeId) -> Option<usize> {
        self.nodes.get_index_of(&id)
    }

    /// Node an einer Position der Einfügereihenfolge
    pub fn node_at_index(&self, index: usize) -> Option<NodeId> {
        self.nodes.get_index(index).map(|(&id, _)| id)
    }

    /// Länge einer Kante bei gegebenem Maßstab
    pub fn edge_length(&self, id: EdgeId, scale: f64) -> Option<f64> {
        let edge = self.edges.get(&id)?;
        let pos1 = self.nodes.get(&edge.node1)?.position;
        let pos2 = self.nodes.get(&edge.node2)?.position;
        Some(edge.length(pos1, pos2, scale))
    }

    /// Gibt die Anzahl der Nodes zurück
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt die Anzahl der Kanten zurück
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Gibt `true` zurück, wenn der Graph keine Nodes enthält.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Baut den persistenten Spatial-Index aus den aktuellen Nodes neu auf.
    fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_nodes(&self.nodes);
    }
}
