use serde::Serialize;

use crate::mst::graph::*;
use crate::mst::SpanningTree;

/// Per-algorithm slice of the report: the chosen edges in selection
/// order plus the instrumentation readings.
#[derive(Debug, Serialize)]
pub struct AlgorithmResult {
    pub mst_edges: Vec<Edge>,
    pub total_cost: Cost,
    pub operations_count: NumOps,
    pub execution_time_ms: f64,
}

impl AlgorithmResult {
    pub fn new(tree: SpanningTree, execution_time_ms: f64) -> Self {
        Self {
            mst_edges: tree.edges,
            total_cost: tree.total_cost,
            operations_count: tree.edges_examined,
            execution_time_ms,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InputStats {
    pub vertices: NumNodes,
    pub edges: NumEdges,
}

#[derive(Debug, Serialize)]
pub struct GraphResult {
    pub graph_id: GraphId,
    pub input_stats: InputStats,
    pub prim: AlgorithmResult,
    pub kruskal: AlgorithmResult,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub results: Vec<GraphResult>,
}
