use std::collections::HashSet;
use std::io::{ErrorKind, Read};

use serde::Deserialize;

use crate::mst::graph::*;

pub type Result<T> = std::io::Result<T>;

#[derive(Debug, Deserialize)]
pub struct InputData {
    pub graphs: Vec<Graph>,
}

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

/// Deserializes a graph collection and validates it before anything runs:
/// node identifiers must be unique within a graph and every edge endpoint
/// must be declared. Garbage input is rejected here rather than surfacing
/// as undefined traversal behavior later.
pub fn read_input<R: Read>(reader: R) -> Result<InputData> {
    let input: InputData = serde_json::from_reader(reader)
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;

    for graph in &input.graphs {
        validate_graph(graph)?;
    }

    Ok(input)
}

fn validate_graph(graph: &Graph) -> Result<()> {
    let mut declared = HashSet::with_capacity(graph.number_of_nodes());

    for node in &graph.nodes {
        raise_error_unless!(
            declared.insert(node.as_str()),
            ErrorKind::InvalidData,
            format!("Graph {}: duplicate node {node:?}", graph.id)
        );
    }

    for edge in &graph.edges {
        for endpoint in [&edge.from, &edge.to] {
            raise_error_unless!(
                declared.contains(endpoint.as_str()),
                ErrorKind::InvalidData,
                format!("Graph {}: edge references undeclared node {endpoint:?}", graph.id)
            );
        }
    }

    Ok(())
}
