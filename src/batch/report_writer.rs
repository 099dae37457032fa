use std::io::{ErrorKind, Write};

use super::report::Report;

pub type Result<T> = std::io::Result<T>;

/// Serializes the report as pretty-printed JSON.
pub fn write_report<W: Write>(writer: W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(writer, report)
        .map_err(|e| std::io::Error::new(ErrorKind::Other, e))
}

#[cfg(test)]
mod test {
    use super::super::report::*;
    use super::*;

    use crate::mst::graph::Edge;
    use crate::mst::SpanningTree;

    #[test]
    fn report_carries_both_algorithms_and_input_stats() {
        let mut tree = SpanningTree::new();
        tree.accept(Edge::new("A", "B", 3));
        tree.edges_examined = 1;

        let report = Report {
            results: vec![GraphResult {
                graph_id: 1,
                input_stats: InputStats {
                    vertices: 2,
                    edges: 1,
                },
                prim: AlgorithmResult::new(tree.clone(), 0.25),
                kruskal: AlgorithmResult::new(tree, 0.125),
            }],
        };

        let mut buffer = Vec::new();
        write_report(&mut buffer, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let result = &value["results"][0];

        assert_eq!(result["graph_id"], 1);
        assert_eq!(result["input_stats"]["vertices"], 2);
        assert_eq!(result["input_stats"]["edges"], 1);

        for algorithm in ["prim", "kruskal"] {
            let sub = &result[algorithm];
            assert_eq!(sub["mst_edges"][0]["from"], "A");
            assert_eq!(sub["mst_edges"][0]["to"], "B");
            assert_eq!(sub["mst_edges"][0]["weight"], 3);
            assert_eq!(sub["total_cost"], 3);
            assert_eq!(sub["operations_count"], 1);
            assert!(sub["execution_time_ms"].is_f64());
        }
    }
}
