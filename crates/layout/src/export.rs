//! Plain node and edge records for rendering front ends.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::LayoutError;
use crate::graph::{Graph, IndexPosition, LayoutEdge, LayoutNode, NodeKind, Position};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub index_position: IndexPosition,
    pub position: Position,
    pub width: f64,
}

impl From<&LayoutNode> for NodeRecord {
    fn from(node: &LayoutNode) -> Self {
        Self {
            id: node.id.to_string(),
            name: node.name.clone(),
            kind: node.kind,
            index_position: node.index_position,
            position: node.position,
            width: node.width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub id: String,
    pub source: String,
    pub target: String,
    pub name: String,
    pub source_position: Position,
    pub target_position: Position,
}

impl From<&LayoutEdge> for EdgeRecord {
    fn from(edge: &LayoutEdge) -> Self {
        Self {
            id: edge.id.to_string(),
            source: edge.source().to_string(),
            target: edge.target().to_string(),
            name: edge.name.clone(),
            source_position: edge.source_position,
            target_position: edge.target_position,
        }
    }
}

/// Node and edge records keyed by id, plus the grid size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutExport {
    pub nodes: BTreeMap<String, NodeRecord>,
    pub edges: BTreeMap<String, EdgeRecord>,
    pub size: (usize, usize),
}

impl LayoutExport {
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&Graph> for LayoutExport {
    fn from(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(NodeRecord::from)
            .map(|n| (n.id.clone(), n))
            .collect();
        let edges = graph
            .edges()
            .map(EdgeRecord::from)
            .map(|e| (e.id.clone(), e))
            .collect();
        Self {
            nodes,
            edges,
            size: graph.size(),
        }
    }
}
