//! # Element Export
//!
//! Cytoscape-style elements: one record per node with a shape, label and
//! size chosen by what the node is, and one record per edge with its
//! endpoints expressed as offsets from the node centres.
//!
//! | node            | shape           | height    | label     |
//! |-----------------|-----------------|-----------|-----------|
//! | braid box       | round-rectangle | scale / 4 | `τ`       |
//! | box             | round-rectangle | scale / 2 | box name  |
//! | wire            | ellipse         | scale / 4 | wire name |
//! | unlabelled wire | ellipse         | 0.5       | none      |
//! | empty wire      | none            | 0         | none      |

use serde::Serialize;

use crate::config::VisConfig;
use crate::graph::{Graph, IndexPosition, LayoutNode, NodeKind, Position};

const BOX_COLOR: &str = "#dcdcdc";
const BRAID_COLOR: &str = "white";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Nodes,
    Edges,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeData {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub index_position: IndexPosition,
    pub position: Position,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeData {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    pub source_position: String,
    pub target_position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ElementData {
    Node(NodeData),
    Edge(EdgeData),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub group: Group,
    pub data: ElementData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

fn node_data(node: &LayoutNode, config: &VisConfig, last_layer: usize) -> NodeData {
    let scale = config.scale;
    let mut data = NodeData {
        id: node.id.to_string(),
        name: node.name.clone(),
        kind: node.kind,
        index_position: node.index_position,
        position: node.position,
        width: node.width * scale,
        height: scale / 2.0,
        opacity: 1.0,
        shape: Some("round-rectangle"),
        label: Some(node.name.clone()),
        color: Some(BOX_COLOR),
    };

    match node.kind {
        NodeKind::Named if node.braid => {
            data.label = Some("\u{03C4}".to_string());
            data.height = scale / 4.0;
            data.color = Some(BRAID_COLOR);
        }
        NodeKind::Named => {}
        NodeKind::Identity if node.name.is_empty() => {
            data.width = 0.0;
            data.height = 0.0;
            data.opacity = 0.0;
            data.shape = None;
            data.label = None;
            data.color = None;
        }
        NodeKind::Identity => {
            let layer = node.index_position.y;
            data.shape = Some("ellipse");
            if config.label_strings || layer == 0 || layer == last_layer {
                data.width = scale / 4.0;
                data.height = scale / 4.0;
            } else {
                data.width = 0.5;
                data.height = 0.5;
                data.label = None;
            }
        }
    }
    data
}

fn offset(anchor: f64, center: f64, scale: f64, side: &str) -> String {
    format!("{} {}", (anchor - center) * scale, side)
}

/// Nodes first, then edges.
pub fn to_elements(graph: &Graph, config: &VisConfig) -> Vec<Element> {
    let last_layer = graph.max_layer();
    let scale = config.scale;

    let nodes = graph.nodes().map(|node| Element {
        group: Group::Nodes,
        data: ElementData::Node(node_data(node, config, last_layer)),
        position: Some(Position {
            y: node.position.y * scale,
            x: node.position.x * scale,
        }),
    });

    let edges = graph.edges().filter_map(|edge| {
        let source_center = graph.node(edge.source())?.position.x;
        let target_center = graph.node(edge.target())?.position.x;
        Some(Element {
            group: Group::Edges,
            data: ElementData::Edge(EdgeData {
                id: edge.id.to_string(),
                source: edge.source().to_string(),
                target: edge.target().to_string(),
                label: edge.name.clone(),
                source_position: offset(edge.source_position.x, source_center, scale, "50%"),
                target_position: offset(edge.target_position.x, target_center, scale, "-50%"),
            }),
            position: None,
        })
    });

    nodes.chain(edges).collect()
}
