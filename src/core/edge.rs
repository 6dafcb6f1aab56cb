//! Repräsentiert eine ungerichtete Kante zwischen zwei Wegpunkten.

use super::geometry;
use super::{InvalidEdgeReason, NodeId};
use glam::DVec2;
use std::fmt;

/// Stabile Kanten-ID innerhalb eines Graphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Verlauf einer Kante
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EdgeShape {
    /// Gerade Strecke zwischen den Endpunkten
    #[default]
    Straight,
    /// Quadratische Bézier-Kurve über einen Kontrollpunkt
    Curved {
        /// Kontrollpunkt der Kurve
        control: DVec2,
    },
}

impl EdgeShape {
    /// Baut den Verlauf aus Krümmungs-Flag und optionalem Kontrollpunkt.
    ///
    /// `curved` und `control` müssen zueinander passen.
    pub fn from_parts(curved: bool, control: Option<DVec2>) -> Result<Self, InvalidEdgeReason> {
        match (curved, control) {
            (true, Some(control)) => Ok(Self::Curved { control }),
            (false, None) => Ok(Self::Straight),
            (true, None) => Err(InvalidEdgeReason::MissingControlPoint),
            (false, Some(_)) => Err(InvalidEdgeReason::UnexpectedControlPoint),
        }
    }
}

/// Eine ungerichtete Kante zwischen zwei verschiedenen Nodes
#[derive(Debug, Clone, PartialEq)]
pub struct MapEdge {
    /// Erster Endpunkt
    pub node1: NodeId,
    /// Zweiter Endpunkt
    pub node2: NodeId,
    /// Gerade oder gekrümmt
    pub shape: EdgeShape,
}

impl MapEdge {
    /// Erstellt eine neue Kante und prüft die Invarianten
    pub fn new(
        node1: NodeId,
        node2: NodeId,
        curved: bool,
        control: Option<DVec2>,
    ) -> Result<Self, InvalidEdgeReason> {
        if node1 == node2 {
            return Err(InvalidEdgeReason::SelfLoop);
        }
        let shape = EdgeShape::from_parts(curved, control)?;
        Ok(Self {
            node1,
            node2,
            shape,
        })
    }

    /// Gibt `true` zurück, wenn die Kante gekrümmt ist.
    pub fn is_curved(&self) -> bool {
        matches!(self.shape, EdgeShape::Curved { .. })
    }

    /// Kontrollpunkt einer gekrümmten Kante
    pub fn control_point(&self) -> Option<DVec2> {
        match self.shape {
            EdgeShape::Curved { control } => Some(control),
            EdgeShape::Straight => None,
        }
    }

    /// Prüft ob die Kante den Node berührt
    pub fn touches(&self, node: NodeId) -> bool {
        self.node1 == node || self.node2 == node
    }

    /// Prüft ob die Kante genau diese beiden Nodes verbindet (Reihenfolge egal)
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.node1 == a && self.node2 == b) || (self.node1 == b && self.node2 == a)
    }

    /// Liefert den gegenüberliegenden Endpunkt oder `None`, falls `node` kein Endpunkt ist.
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if self.node1 == node {
            Some(self.node2)
        } else if self.node2 == node {
            Some(self.node1)
        } else {
            None
        }
    }

    /// Länge der Kante bei gegebenen Endpunkt-Positionen und Maßstab.
    pub fn length(&self, pos1: DVec2, pos2: DVec2, scale: f64) -> f64 {
        match self.shape {
            EdgeShape::Straight => geometry::distance(pos1, pos2, scale),
            EdgeShape::Curved { control } => geometry::curve_length(pos1, control, pos2, scale),
        }
    }
}
