use itertools::Itertools;

use super::graph::*;
use super::tree::SpanningTree;
use super::union_find::{Result, UnionFind};

/// Global greedy edge selection: consider edges in ascending weight order
/// (stable, so equal weights keep input order) and accept every edge whose
/// endpoints lie in different components. The whole edge list is scanned
/// even once the tree is complete, which keeps the examined-edge count
/// equal to the edge count on every run.
pub fn kruskal_mst(graph: &Graph) -> Result<SpanningTree> {
    let mut tree = SpanningTree::new();
    let mut components = UnionFind::new(graph.nodes.iter().map(String::as_str));

    for edge in graph.edges.iter().sorted_by_key(|e| e.weight) {
        tree.edges_examined += 1;

        let root_from = components.find(&edge.from)?;
        let root_to = components.find(&edge.to)?;

        if root_from != root_to {
            components.union(root_from, root_to);
            tree.accept(edge.clone());
        }
    }

    Ok(tree)
}
