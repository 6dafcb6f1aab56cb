//! Repräsentiert einen beschrifteten Wegpunkt auf der Karte.

use glam::DVec2;
use std::fmt;

/// Stabile Node-ID innerhalb eines Graphen.
///
/// IDs werden fortlaufend vergeben und nach dem Löschen nicht wiederverwendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein Wegpunkt mit Position, Beschriftung und Start/Ziel-Markierung
#[derive(Debug, Clone, PartialEq)]
pub struct MapNode {
    /// Position in Bild-Pixel-Koordinaten
    pub position: DVec2,
    /// Anzeigename (nicht eindeutig)
    pub label: String,
    /// Node darf als Start oder Ziel einer Route gewählt werden
    pub is_special: bool,
}

impl MapNode {
    /// Erstellt einen neuen Node
    pub fn new(position: DVec2, label: impl Into<String>, is_special: bool) -> Self {
        Self {
            position,
            label: label.into(),
            is_special,
        }
    }
}
