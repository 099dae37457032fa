use serde::{Deserialize, Serialize};

pub type Node = String;
pub type GraphId = i64;
pub type Weight = i64;
pub type Cost = i64;

pub type NumNodes = usize;
pub type NumEdges = usize;
pub type NumOps = u64;

/// Undirected weighted edge; endpoints reference nodes by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: impl Into<Node>, to: impl Into<Node>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

}

#[derive(Debug, Clone, Deserialize)]
pub struct Graph {
    pub id: GraphId,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn number_of_nodes(&self) -> NumNodes {
        self.nodes.len()
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len()
    }
}
