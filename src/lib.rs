//! MiniMap Builder Library.
//! Graph-Modell, Geometrie, A*-Wegfindung und Dateiformat für Wegpunkt-Karten.

pub mod core;
pub mod json;
pub mod shared;

pub use core::{
    find_path, find_path_by_labels, resolve_route, EdgeId, EdgeShape, Graph, GraphError,
    InvalidEdgeReason, MapEdge, MapNode, NodeId, PathResult, RouteLeg, RouteReport,
};
pub use core::{SpatialIndex, SpatialMatch};
pub use json::{
    load_graph_file, load_graph_into, parse_graph_document, save_graph_file,
    write_graph_document, DecodeError, LoadReport,
};
pub use shared::{EditorOptions, MapScale};
