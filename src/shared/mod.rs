//! Anzeige-nahe Typen für Editoren: Optionen, Maßstab, Textdarstellungen.
//!
//! Der Graph-Kern kennt keinen Anzeige-Maßstab; alles Maßstabsabhängige liegt hier.

pub mod display;
pub mod options;
mod scale;

pub use display::{describe_edge, describe_node, describe_route};
pub use options::EditorOptions;
pub use options::{DEFAULT_SCALE_RATIO, DEFAULT_UNIT_NAME, PICK_RADIUS_PX};
pub use scale::MapScale;
