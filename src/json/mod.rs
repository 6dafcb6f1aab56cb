//! JSON Import/Export für Karten-Graphen.
//!
//! Das Format speichert Nodes als Array und Kanten mit Positions-Indizes
//! in dieses Array (keine Node-IDs).

pub mod document;
pub mod file_io;
pub mod parser;
pub mod writer;

pub use document::{EdgeRecord, GraphDocument, NodeRecord, PointRecord};
pub use file_io::{load_graph_file, save_graph_file};
pub use parser::{
    load_graph_into, parse_graph_document, parse_graph_document_with_report, DecodeError,
    LoadReport,
};
pub use writer::{encode_graph_document, write_graph_document};
