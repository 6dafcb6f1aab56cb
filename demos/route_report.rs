//! Beispiel: Route zwischen zwei beschrifteten Nodes einer Karte berechnen.
//! Aufruf: cargo run --example route_report -- <karte.json> <start> <ziel>

use minimap_builder::shared::display::describe_route;
use minimap_builder::{find_path_by_labels, load_graph_file, EditorOptions};
use std::path::Path;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| "tests/fixtures/farm_map.json".to_string());
    let start = args.next().unwrap_or_else(|| "Hof".to_string());
    let goal = args.next().unwrap_or_else(|| "Feld Nord".to_string());

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let scale = options.map_scale();

    let (graph, report) =
        load_graph_file(Path::new(&path)).expect("Karte konnte nicht geladen werden");

    println!("=== Karte ===");
    println!(
        "{} Nodes, {} Kanten ({} übersprungen)",
        report.node_count, report.edge_count, report.skipped_edges
    );
    println!();

    println!("Start/Ziel-Punkte:");
    for (_, node) in graph.special_nodes() {
        println!("- {}", node.label);
    }
    println!();

    let (Some(start_id), Some(goal_id)) =
        (graph.find_node_by_label(&start), graph.find_node_by_label(&goal))
    else {
        println!("Start oder Ziel nicht gefunden: {} / {}", start, goal);
        return;
    };
    let result = find_path_by_labels(&graph, &start, &goal);

    println!(
        "{}",
        describe_route(&graph, start_id, goal_id, &result, &scale, options.route_decimals)
    );
}
