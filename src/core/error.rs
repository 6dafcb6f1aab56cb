//! Fehlertypen des Graph-Kerns.

use super::{EdgeId, NodeId};
use thiserror::Error;

/// Grund, aus dem eine Kante abgelehnt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidEdgeReason {
    /// Beide Endpunkte zeigen auf denselben Node
    #[error("start and end node are identical")]
    SelfLoop,
    /// Ein Endpunkt existiert nicht im Graphen
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    /// Gekrümmte Kante ohne Kontrollpunkt
    #[error("curved edge without control point")]
    MissingControlPoint,
    /// Gerade Kante mit Kontrollpunkt
    #[error("straight edge with control point")]
    UnexpectedControlPoint,
    /// Kontrollpunkt soll auf einer geraden Kante verschoben werden
    #[error("edge is not curved")]
    NotCurved,
}

/// Fehler bei strukturellen Änderungen am Graphen.
///
/// Bei einem Fehler bleibt der Graph unverändert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Kante verletzt eine Struktur-Invariante
    #[error("invalid edge: {0}")]
    InvalidEdge(#[from] InvalidEdgeReason),
    /// Kante existiert nicht (mehr)
    #[error("edge {0} not found")]
    EdgeNotFound(EdgeId),
}
