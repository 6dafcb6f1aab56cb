//! Integrationstests für den Editier-Ablauf eines externen Editors:
//! - Nodes platzieren mit fortlaufender Beschriftung
//! - Kanten per Klick-Auswahl verbinden (gerade und gekrümmt)
//! - Löschen mit Kaskade und erneutes Laden

use glam::DVec2;
use minimap_builder::core::geometry;
use minimap_builder::json::load_graph_into;
use minimap_builder::{
    find_path, write_graph_document, EditorOptions, Graph, GraphError, InvalidEdgeReason,
};

/// Platziert Nodes wie ein Editor: Beschriftung = laufende Nummer
fn place(graph: &mut Graph, x: f64, y: f64) {
    let label = graph.next_default_label();
    graph.add_node(DVec2::new(x, y), label, false);
}

#[test]
fn test_place_pick_and_connect() {
    let options = EditorOptions::default();
    let mut graph = Graph::new();
    place(&mut graph, 10.0, 10.0);
    place(&mut graph, 110.0, 10.0);
    place(&mut graph, 110.0, 90.0);

    let labels: Vec<&str> = graph.nodes().map(|(_, n)| n.label.as_str()).collect();
    assert_eq!(labels, vec!["1", "2", "3"]);

    // Klick knapp neben Node 1 und Node 2
    let first = graph
        .find_node_near(DVec2::new(12.0, 13.0), options.pick_radius_px)
        .expect("Node 1 getroffen");
    let second = graph
        .find_node_near(DVec2::new(108.0, 9.0), options.pick_radius_px)
        .expect("Node 2 getroffen");
    assert!(graph
        .find_node_near(DVec2::new(60.0, 60.0), options.pick_radius_px)
        .is_none());

    graph.add_edge(first, second, false, None).expect("gerade Kante");

    // Gekrümmte Kante ohne gezogenen Kontrollpunkt: Mittelpunkt als Standard
    let third = graph
        .find_node_near(DVec2::new(110.0, 90.0), options.pick_radius_px)
        .expect("Node 3 getroffen");
    let control = geometry::midpoint(
        graph.node(second).expect("Node 2").position,
        graph.node(third).expect("Node 3").position,
    );
    let curve = graph
        .add_edge(second, third, true, Some(control))
        .expect("gekrümmte Kante");

    // Degenerierte Kurve hat die Länge der Geraden
    let length = graph.edge_length(curve, 1.0).expect("Länge");
    assert!((length - 80.0).abs() < 1e-6);

    let result = find_path(&graph, first, third);
    assert_eq!(result.path, vec![first, second, third]);
    assert!((result.total_cost - 180.0).abs() < 1e-6);
}

#[test]
fn test_invalid_edges_leave_graph_unchanged() {
    let mut graph = Graph::new();
    place(&mut graph, 0.0, 0.0);
    place(&mut graph, 10.0, 0.0);
    let a = graph.node_at_index(0).expect("Node 1");
    let b = graph.node_at_index(1).expect("Node 2");

    assert_eq!(
        graph.add_edge(a, b, true, None),
        Err(GraphError::InvalidEdge(InvalidEdgeReason::MissingControlPoint))
    );
    assert_eq!(
        graph.add_edge(a, b, false, Some(DVec2::new(5.0, 5.0))),
        Err(GraphError::InvalidEdge(
            InvalidEdgeReason::UnexpectedControlPoint
        ))
    );
    assert_eq!(
        graph.add_edge(a, a, false, None),
        Err(GraphError::InvalidEdge(InvalidEdgeReason::SelfLoop))
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_delete_node_cascades_and_survives_save() {
    let mut graph = Graph::new();
    for (x, y) in [(0.0, 0.0), (50.0, 0.0), (100.0, 0.0), (50.0, 50.0)] {
        place(&mut graph, x, y);
    }
    let ids: Vec<_> = graph.nodes().map(|(id, _)| id).collect();
    graph.add_edge(ids[0], ids[1], false, None).expect("1-2");
    graph.add_edge(ids[1], ids[2], false, None).expect("2-3");
    graph
        .add_edge(ids[1], ids[3], true, Some(DVec2::new(80.0, 40.0)))
        .expect("2-4");
    graph.add_edge(ids[0], ids[3], false, None).expect("1-4");

    graph.remove_node(ids[1]);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.edges().all(|(_, e)| !e.touches(ids[1])));
    assert!(!find_path(&graph, ids[0], ids[2]).is_found());

    let json = write_graph_document(&graph).expect("Export");
    let mut reloaded = Graph::new();
    let report = load_graph_into(&mut reloaded, &json).expect("Laden");

    assert_eq!(report.node_count, 3);
    assert_eq!(report.edge_count, 1);
    assert_eq!(report.skipped_edges, 0);

    let labels: Vec<&str> = reloaded.nodes().map(|(_, n)| n.label.as_str()).collect();
    assert_eq!(labels, vec!["1", "3", "4"]);
}

#[test]
fn test_dragging_control_point_changes_length() {
    let mut graph = Graph::new();
    let a = graph.add_node(DVec2::new(0.0, 0.0), "A", true);
    let b = graph.add_node(DVec2::new(100.0, 0.0), "B", true);
    let edge = graph
        .add_edge(a, b, true, Some(DVec2::new(50.0, 0.0)))
        .expect("Kurve");

    let flat = graph.edge_length(edge, 1.0).expect("Länge");
    graph
        .set_control_point(edge, DVec2::new(50.0, 60.0))
        .expect("Kontrollpunkt ziehen");
    let bent = graph.edge_length(edge, 1.0).expect("Länge");

    assert!(bent > flat);
    assert!((find_path(&graph, a, b).total_cost - bent).abs() < 1e-9);
}
