//! Laden und Speichern von Karten-Dateien.

use super::{parse_graph_document_with_report, write_graph_document, LoadReport};
use crate::core::Graph;
use anyhow::{Context, Result};
use std::path::Path;

/// Lädt einen Graphen aus einer JSON-Datei.
pub fn load_graph_file(path: &Path) -> Result<(Graph, LoadReport)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Karte konnte nicht gelesen werden: {}", path.display()))?;
    let (graph, report) = parse_graph_document_with_report(&content)
        .with_context(|| format!("Karte fehlerhaft: {}", path.display()))?;

    log::info!(
        "Karte geladen: {} Nodes, {} Kanten aus {}",
        report.node_count,
        report.edge_count,
        path.display()
    );
    if report.skipped_edges > 0 {
        log::warn!(
            "{} Kanten mit ungültigem Node-Index übersprungen",
            report.skipped_edges
        );
    }

    Ok((graph, report))
}

/// Speichert einen Graphen als JSON-Datei.
pub fn save_graph_file(graph: &Graph, path: &Path) -> Result<()> {
    let content = write_graph_document(graph)?;
    std::fs::write(path, content)
        .with_context(|| format!("Karte konnte nicht gespeichert werden: {}", path.display()))?;

    log::info!(
        "Karte gespeichert: {} Nodes, {} Kanten nach {}",
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(())
}
