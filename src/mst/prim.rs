use std::collections::HashSet;

use super::graph::*;
use super::tree::SpanningTree;

/// Grows a single tree from the first declared node. Each round scans the
/// full edge list for the cheapest edge with exactly one visited endpoint;
/// ties keep the first edge encountered in scan order. Stops early when no
/// edge leaves the visited component, so on a disconnected graph the tree
/// covers the start component only.
pub fn prim_mst(graph: &Graph) -> SpanningTree {
    let mut tree = SpanningTree::new();

    let start = match graph.nodes.first() {
        Some(node) => node,
        None => return tree,
    };

    let mut visited: HashSet<&str> = HashSet::with_capacity(graph.number_of_nodes());
    visited.insert(start.as_str());

    while visited.len() < graph.number_of_nodes() {
        let mut best: Option<&Edge> = None;

        for edge in &graph.edges {
            tree.edges_examined += 1;

            // exactly one endpoint inside the tree
            let crossing = visited.contains(edge.from.as_str()) ^ visited.contains(edge.to.as_str());
            if crossing && best.map_or(true, |b| edge.weight < b.weight) {
                best = Some(edge);
            }
        }

        match best {
            Some(edge) => {
                visited.insert(edge.from.as_str());
                visited.insert(edge.to.as_str());
                tree.accept(edge.clone());
            }
            // the remaining nodes are unreachable from the start component
            None => break,
        }
    }

    tree
}
