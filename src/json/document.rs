//! Serialisierbare Abbildung des Dateiformats.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Wurzel-Dokument einer gespeicherten Karte
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Nodes in Einfügereihenfolge
    pub nodes: Vec<NodeRecord>,
    /// Kanten mit Indizes in `nodes`
    pub edges: Vec<EdgeRecord>,
}

/// Ein Node im Dateiformat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub is_special: bool,
}

/// Eine Kante im Dateiformat.
///
/// Indizes werden als beliebige JSON-Zahl gelesen: ältere Dateien enthalten `-1`
/// für fehlende Nodes, und zu große Werte sollen übersprungen statt abgelehnt werden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    pub node1_index: Number,
    pub node2_index: Number,
    pub curved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_point: Option<PointRecord>,
}

/// Kontrollpunkt einer gekrümmten Kante
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
}
