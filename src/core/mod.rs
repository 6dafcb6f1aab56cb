//! Core-Domänentypen: Nodes, Kanten, Graph, Geometrie, Wegfindung.

pub mod edge;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod node;
pub mod pathfinder;
pub mod route;
pub mod spatial;

pub use edge::{EdgeId, EdgeShape, MapEdge};
pub use error::{GraphError, InvalidEdgeReason};
pub use graph::Graph;
pub use node::{MapNode, NodeId};
pub use pathfinder::{find_path, find_path_by_labels, PathResult};
pub use route::{resolve_route, RouteLeg, RouteReport};
pub use spatial::{SpatialIndex, SpatialMatch};
