use super::*;
use glam::DVec2;

const SIMPLE_DOCUMENT: &str = r#"{
    "nodes": [
        {"x": 0.0, "y": 0.0, "label": "Hof", "isSpecial": true},
        {"x": 30, "y": 40, "label": "Kreuzung", "isSpecial": false},
        {"x": 60.5, "y": 0.25, "label": "Feld", "isSpecial": true}
    ],
    "edges": [
        {"node1Index": 0, "node2Index": 1, "curved": false},
        {"node1Index": 1, "node2Index": 2, "curved": true, "controlPoint": {"x": 50.0, "y": 40.0}}
    ]
}"#;

#[test]
fn test_parse_simple_document() {
    let (graph, report) = parse_graph_document_with_report(SIMPLE_DOCUMENT).expect("Parsing");

    assert_eq!(report.node_count, 3);
    assert_eq!(report.edge_count, 2);
    assert_eq!(report.skipped_edges, 0);

    let labels: Vec<&str> = graph.nodes().map(|(_, n)| n.label.as_str()).collect();
    assert_eq!(labels, vec!["Hof", "Kreuzung", "Feld"]);

    let kreuzung = graph.node_at_index(1).expect("Node 1");
    assert_eq!(
        graph.node(kreuzung).map(|n| n.position),
        Some(DVec2::new(30.0, 40.0))
    );

    let (_, curved) = graph.edges().nth(1).expect("Kante 1");
    assert_eq!(curved.control_point(), Some(DVec2::new(50.0, 40.0)));
    assert_eq!(graph.node_position_index(curved.node1), Some(1));
    assert_eq!(graph.node_position_index(curved.node2), Some(2));
}

#[test]
fn test_out_of_range_edges_are_skipped() {
    let json = r#"{
        "nodes": [
            {"x": 0, "y": 0, "label": "A", "isSpecial": true},
            {"x": 1, "y": 0, "label": "B", "isSpecial": true}
        ],
        "edges": [
            {"node1Index": 0, "node2Index": 2, "curved": false},
            {"node1Index": -1, "node2Index": 1, "curved": false},
            {"node1Index": 1, "node2Index": 0, "curved": false}
        ]
    }"#;

    let (graph, report) = parse_graph_document_with_report(json).expect("Parsing");
    assert_eq!(report.skipped_edges, 2);
    assert_eq!(report.edge_count, 1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_curved_edge_without_control_point_is_malformed() {
    let json = r#"{
        "nodes": [
            {"x": 0, "y": 0, "label": "A", "isSpecial": true},
            {"x": 1, "y": 0, "label": "B", "isSpecial": true}
        ],
        "edges": [
            {"node1Index": 0, "node2Index": 1, "curved": true}
        ]
    }"#;

    match parse_graph_document(json) {
        Err(DecodeError::MalformedEdge { index, reason }) => {
            assert_eq!(index, 0);
            assert_eq!(reason, InvalidEdgeReason::MissingControlPoint);
        }
        other => panic!("MalformedEdge erwartet, erhalten: {:?}", other.map(|g| g.edge_count())),
    }
}

#[test]
fn test_straight_edge_with_control_point_is_malformed() {
    let json = r#"{
        "nodes": [
            {"x": 0, "y": 0, "label": "A", "isSpecial": true},
            {"x": 1, "y": 0, "label": "B", "isSpecial": true}
        ],
        "edges": [
            {"node1Index": 0, "node2Index": 1, "curved": false},
            {"node1Index": 0, "node2Index": 1, "curved": false, "controlPoint": {"x": 0.5, "y": 1}}
        ]
    }"#;

    assert!(matches!(
        parse_graph_document(json),
        Err(DecodeError::MalformedEdge {
            index: 1,
            reason: InvalidEdgeReason::UnexpectedControlPoint
        })
    ));
}

#[test]
fn test_self_loop_is_malformed() {
    let json = r#"{
        "nodes": [{"x": 0, "y": 0, "label": "A", "isSpecial": true}],
        "edges": [{"node1Index": 0, "node2Index": 0, "curved": false}]
    }"#;

    assert!(matches!(
        parse_graph_document(json),
        Err(DecodeError::MalformedEdge {
            reason: InvalidEdgeReason::SelfLoop,
            ..
        })
    ));
}

#[test]
fn test_null_control_point_counts_as_absent() {
    let json = r#"{
        "nodes": [
            {"x": 0, "y": 0, "label": "A", "isSpecial": true},
            {"x": 1, "y": 0, "label": "B", "isSpecial": true}
        ],
        "edges": [{"node1Index": 0, "node2Index": 1, "curved": false, "controlPoint": null}]
    }"#;

    let graph = parse_graph_document(json).expect("Parsing");
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_missing_required_field_is_fatal() {
    let json = r#"{
        "nodes": [{"x": 0, "y": 0, "label": "A"}],
        "edges": []
    }"#;

    assert!(matches!(parse_graph_document(json), Err(DecodeError::Json(_))));
}

#[test]
fn test_missing_edges_array_is_fatal() {
    assert!(matches!(
        parse_graph_document(r#"{"nodes": []}"#),
        Err(DecodeError::Json(_))
    ));
    assert!(matches!(parse_graph_document("kein json"), Err(DecodeError::Json(_))));
}

#[test]
fn test_empty_document() {
    let graph = parse_graph_document(r#"{"nodes": [], "edges": []}"#).expect("Parsing");
    assert!(graph.is_empty());
}

#[test]
fn test_failed_load_keeps_existing_graph() {
    let mut graph = parse_graph_document(SIMPLE_DOCUMENT).expect("Parsing");
    let broken = r#"{
        "nodes": [
            {"x": 0, "y": 0, "label": "X", "isSpecial": true},
            {"x": 1, "y": 0, "label": "Y", "isSpecial": true}
        ],
        "edges": [{"node1Index": 0, "node2Index": 1, "curved": true}]
    }"#;

    assert!(load_graph_into(&mut graph, broken).is_err());
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.find_node_by_label("Hof"), graph.node_at_index(0));
}

#[test]
fn test_successful_load_replaces_graph() {
    let mut graph = Graph::new();
    graph.add_node(DVec2::ZERO, "alt", false);

    let report = load_graph_into(&mut graph, SIMPLE_DOCUMENT).expect("Laden");
    assert_eq!(report.node_count, 3);
    assert!(graph.find_node_by_label("alt").is_none());
    assert!(graph.find_node_by_label("Feld").is_some());
}

#[test]
fn test_many_nodes_on_one_position_load() {
    let nodes: Vec<String> = (0..33)
        .map(|i| format!(r#"{{"x": 0, "y": 0, "label": "{}", "isSpecial": false}}"#, i))
        .collect();
    let json = format!(r#"{{"nodes": [{}], "edges": []}}"#, nodes.join(","));

    let graph = parse_graph_document(&json).expect("Parsing");
    assert_eq!(graph.node_count(), 33);
    assert_eq!(graph.find_node_near(DVec2::ZERO, 1.0), graph.node_at_index(0));
}

#[test]
fn test_indices_beyond_signed_range_are_skipped() {
    let json = r#"{
        "nodes": [
            {"x": 0, "y": 0, "label": "A", "isSpecial": true},
            {"x": 1, "y": 0, "label": "B", "isSpecial": true}
        ],
        "edges": [
            {"node1Index": 0, "node2Index": 18446744073709551615, "curved": false},
            {"node1Index": 100000000000000000000000, "node2Index": 1, "curved": false},
            {"node1Index": 0.5, "node2Index": 1, "curved": false},
            {"node1Index": 0, "node2Index": 1, "curved": false}
        ]
    }"#;

    let (graph, report) = parse_graph_document_with_report(json).expect("Parsing");
    assert_eq!(report.skipped_edges, 3);
    assert_eq!(report.edge_count, 1);
    assert_eq!(graph.edge_count(), 1);
}
