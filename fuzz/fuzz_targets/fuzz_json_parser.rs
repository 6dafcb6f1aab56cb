#![no_main]

use libfuzzer_sys::fuzz_target;
use minimap_builder::parse_graph_document;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(graph) = parse_graph_document(text) {
            // Geladene Kanten referenzieren nur existierende Nodes
            for (_, edge) in graph.edges() {
                assert!(graph.contains_node(edge.node1));
                assert!(graph.contains_node(edge.node2));
                assert_ne!(edge.node1, edge.node2);
            }
        }
    }
});
