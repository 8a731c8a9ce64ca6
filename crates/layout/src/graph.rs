//! # Layout Graph
//!
//! Nodes are the wires and boxes of every slice; edges are wire
//! continuations between consecutive slices. The graph is stored in a
//! petgraph `DiGraph` with an id index on the side.

use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a node sits: slice rank and column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub name: String,
    pub layer: usize,
    pub column: usize,
}

impl NodeId {
    pub fn new(name: impl Into<String>, layer: usize, column: usize) -> Self {
        Self {
            name: name.into(),
            layer,
            column,
        }
    }
}

/// `f_(1)_(0)`
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_({})_({})", self.name, self.layer, self.column)
    }
}

/// An edge is named by its endpoints and wire. `occurrence` separates
/// repeated connections carrying the same wire between the same nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    pub source: NodeId,
    pub target: NodeId,
    pub wire: String,
    pub occurrence: usize,
}

/// `[f_(1)_(0)]*[id_{a}_(2)_(0)]_a`, with `#n` appended for repeats.
impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]*[{}]_{}", self.source, self.target, self.wire)?;
        if self.occurrence > 0 {
            write!(f, "#{}", self.occurrence)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Identity,
    Named,
}

/// Layout coordinates, y first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub y: f64,
    pub x: f64,
}

/// Grid coordinates: slice rank and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexPosition {
    pub y: usize,
    pub x: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: NodeId,
    /// The wire name for identities, the label for boxes.
    pub name: String,
    pub kind: NodeKind,
    /// Set for transposition boxes.
    pub braid: bool,
    pub index_position: IndexPosition,
    pub position: Position,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    pub id: EdgeId,
    /// The wire carried.
    pub name: String,
    pub source_position: Position,
    pub target_position: Position,
}

impl LayoutEdge {
    pub fn source(&self) -> &NodeId {
        &self.id.source
    }

    pub fn target(&self) -> &NodeId {
        &self.id.target
    }
}

/// A positioned diagram.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    graph: DiGraph<LayoutNode, LayoutEdge>,
    node_index: FxHashMap<NodeId, NodeIndex>,
    size: (usize, usize),
}

impl Graph {
    pub(crate) fn add_node(&mut self, node: LayoutNode) -> NodeIndex {
        let id = node.id.clone();
        let index = self.graph.add_node(node);
        self.node_index.insert(id, index);
        index
    }

    pub(crate) fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, edge: LayoutEdge) {
        self.graph.add_edge(source, target, edge);
    }

    pub(crate) fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub(crate) fn set_size(&mut self, size: (usize, usize)) {
        self.size = size;
    }

    pub fn node(&self, id: &NodeId) -> Option<&LayoutNode> {
        self.index_of(id).and_then(|i| self.graph.node_weight(i))
    }

    /// Nodes in layout order: by slice, then left to right.
    pub fn nodes(&self) -> impl Iterator<Item = &LayoutNode> {
        self.graph.node_weights()
    }

    /// Edges in the order they were found.
    pub fn edges(&self) -> impl Iterator<Item = &LayoutEdge> {
        self.graph.edge_weights()
    }

    /// Edges arriving at a node.
    pub fn incoming(&self, id: &NodeId) -> Vec<&LayoutEdge> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };
        let mut edges: Vec<&LayoutEdge> = self
            .graph
            .edges_directed(index, petgraph::Direction::Incoming)
            .map(|e| e.weight())
            .collect();
        // petgraph walks adjacency lists newest first
        edges.reverse();
        edges
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// `(slice count, widest slice)`
    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    /// Largest slice rank holding a node.
    pub fn max_layer(&self) -> usize {
        self.nodes().map(|n| n.index_position.y).max().unwrap_or(0)
    }
}
