//! # Layered Layout
//!
//! Slices are laid out top to bottom, one row per slice. Within a row every
//! morphism gets a cell `pocket × wire count` wide, placed directly after its
//! left neighbour:
//!
//! ```text
//! row 0:   (1)   (2)          wires, one pocket each
//! row 1:   [    f    ]        box over two wires
//! row 2:   (3)   (4)
//! ```
//!
//! Each wire entering a morphism is connected to the first unclaimed
//! morphism in the row above whose codomain carries a wire of that name.
//! Boxes are claimed per output port, so a box emitting `a ⊗ a` feeds two
//! different wires below it.

use braidweave_core::{Diagram, Morphism, MorphismKind, Object, Slice, StringDiagram};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::array::NameGrid;
use crate::config::{LayoutConfig, VisConfig};
use crate::graph::{
    EdgeId, Graph, IndexPosition, LayoutEdge, LayoutNode, NodeId, NodeKind, Position,
};
use crate::vis::{to_elements, Element};

/// A claimed source: a whole node, or one output port of a box.
type Claim = (NodeId, Option<usize>);

fn node_kind(morphism: &Morphism) -> NodeKind {
    match morphism.kind() {
        MorphismKind::Identity => NodeKind::Identity,
        MorphismKind::Named | MorphismKind::Monoidal => NodeKind::Named,
    }
}

fn node_name(morphism: &Morphism) -> String {
    match morphism.kind() {
        MorphismKind::Identity => morphism.domain().name(),
        _ => morphism.name(),
    }
}

fn node_width(morphism: &Morphism, config: &LayoutConfig) -> f64 {
    let wires = morphism.domain().len().max(morphism.codomain().len());
    config.pocket() * wires as f64
}

fn find_source(
    previous: &[Morphism],
    rank: usize,
    wire: &Object,
    claimed: &FxHashSet<Claim>,
) -> Option<Claim> {
    for (column, candidate) in previous.iter().enumerate() {
        let id = NodeId::new(candidate.name(), rank, column);
        let codomain = candidate.codomain();
        match node_kind(candidate) {
            NodeKind::Named => {
                let port = codomain.iter().enumerate().find_map(|(port, o)| {
                    let claim = (id.clone(), Some(port));
                    (o == wire && !claimed.contains(&claim)).then_some(port)
                });
                if let Some(port) = port {
                    return Some((id, Some(port)));
                }
            }
            NodeKind::Identity => {
                let claim = (id, None);
                if codomain.iter().any(|o| o == wire) && !claimed.contains(&claim) {
                    return Some(claim);
                }
            }
        }
    }
    None
}

/// Position every morphism of every slice and connect matching wires.
///
/// Wires that can't be traced to the row above are logged and left
/// unconnected.
pub fn to_graph_from_slices(slices: &[Slice], config: &LayoutConfig) -> Graph {
    let mut graph = Graph::default();
    let mut claimed: FxHashSet<Claim> = FxHashSet::default();
    let mut repeats: FxHashMap<(NodeId, NodeId, String), usize> = FxHashMap::default();
    let mut widest: Option<usize> = None;

    for (rank, slice) in slices.iter().enumerate() {
        let mut cursor = config.offset;
        for (column, morphism) in slice.iter().enumerate() {
            widest = widest.max(Some(column));

            let width = node_width(morphism, config);
            let x = cursor + width / 2.0;
            cursor = x + width / 2.0;

            let id = NodeId::new(morphism.name(), rank, column);
            let kind = node_kind(morphism);
            let target = graph.add_node(LayoutNode {
                id: id.clone(),
                name: node_name(morphism),
                kind,
                braid: morphism.is_braid(),
                index_position: IndexPosition { y: rank, x: column },
                position: Position {
                    y: rank as f64,
                    x,
                },
                width,
            });

            // the first slice holds the inputs
            let Some(previous) = rank.checked_sub(1).map(|r| &slices[r]) else {
                continue;
            };

            for wire in morphism.domain().iter() {
                let Some(claim) = find_source(previous, rank - 1, wire, &claimed) else {
                    warn!(node = %id, wire = %wire, "cannot find source node, dropping edge");
                    continue;
                };
                let source_id = claim.0.clone();
                claimed.insert(claim);

                let Some((source, source_kind, source_x)) = graph
                    .index_of(&source_id)
                    .and_then(|i| graph.node(&source_id).map(|n| (i, n.kind, n.position.x)))
                else {
                    continue;
                };

                let (from_x, to_x) = match (kind, source_kind) {
                    (NodeKind::Identity, NodeKind::Named) => (x, x),
                    (NodeKind::Named, NodeKind::Identity) => (source_x, source_x),
                    _ => (source_x, x),
                };

                let occurrence = repeats
                    .entry((source_id.clone(), id.clone(), wire.name().to_string()))
                    .or_insert(0);
                let edge = LayoutEdge {
                    id: EdgeId {
                        source: source_id,
                        target: id.clone(),
                        wire: wire.name().to_string(),
                        occurrence: *occurrence,
                    },
                    name: wire.name().to_string(),
                    source_position: Position {
                        y: (rank - 1) as f64,
                        x: from_x,
                    },
                    target_position: Position {
                        y: rank as f64,
                        x: to_x,
                    },
                };
                *occurrence += 1;
                graph.add_edge(source, target, edge);
            }
        }
    }

    graph.set_size((slices.len(), widest.map_or(0, |c| c + 1)));
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "laid out slices"
    );
    graph
}

/// Layout and its exports for anything that can be sliced.
pub trait AsGraph {
    fn slices(&self) -> Vec<Slice>;

    fn layout(&self, config: &LayoutConfig) -> Graph {
        to_graph_from_slices(&self.slices(), config)
    }

    fn as_graph(&self) -> Graph {
        self.layout(&LayoutConfig::default())
    }

    fn to_array(&self) -> NameGrid {
        NameGrid::from_graph(&self.as_graph())
    }

    fn to_elements(&self, config: &VisConfig) -> Vec<Element> {
        to_elements(&self.as_graph(), config)
    }
}

impl AsGraph for Diagram {
    fn slices(&self) -> Vec<Slice> {
        Diagram::slices(self)
    }
}

impl AsGraph for StringDiagram {
    fn slices(&self) -> Vec<Slice> {
        StringDiagram::slices(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braidweave_core::MonoidalObject;

    fn named(dom: &[&str], cod: &[&str], name: &str) -> Morphism {
        Morphism::named(
            MonoidalObject::new(dom.iter().copied()),
            MonoidalObject::new(cod.iter().copied()),
            name,
        )
        .unwrap()
    }

    #[test]
    fn test_single_box() {
        let f = Diagram::new(named(&["1", "2"], &["3", "4"], "f"));
        let graph = f.as_graph();

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.size(), (3, 2));

        let node = graph.node(&NodeId::new("f", 1, 0)).unwrap();
        assert_eq!(node.kind, NodeKind::Named);
        assert_eq!(node.width, 2.0);
        assert_eq!(node.position, Position { y: 1.0, x: 1.0 });

        let wire = graph.node(&NodeId::new("id_{4}", 2, 1)).unwrap();
        assert_eq!(wire.name, "4");
        assert_eq!(wire.position.x, 1.5);
    }

    #[test]
    fn test_edge_anchors() {
        let f = Diagram::new(named(&["1", "2"], &["3", "4"], "f"));
        let graph = f.as_graph();

        // wire into box: vertical at the wire
        let into = graph.incoming(&NodeId::new("f", 1, 0));
        assert_eq!(into.len(), 2);
        assert_eq!(into[1].source_position, Position { y: 0.0, x: 1.5 });
        assert_eq!(into[1].target_position, Position { y: 1.0, x: 1.5 });

        // box into wire: vertical at the wire below
        let out = graph.incoming(&NodeId::new("id_{3}", 2, 0));
        assert_eq!(out[0].source_position, Position { y: 1.0, x: 0.5 });
        assert_eq!(out[0].target_position, Position { y: 2.0, x: 0.5 });
        assert_eq!(out[0].id.to_string(), "[f_(1)_(0)]*[id_{3}_(2)_(0)]_3");
    }

    #[test]
    fn test_wire_to_wire_edges_slant() {
        let slices = vec![
            vec![Morphism::identity(Object::new("a"))],
            vec![
                Morphism::identity(Object::new("b")),
                Morphism::identity(Object::new("a")),
            ],
        ];
        let graph = to_graph_from_slices(&slices, &LayoutConfig::default());
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source_position.x, 0.5);
        assert_eq!(edges[0].target_position.x, 1.5);
    }

    #[test]
    fn test_repeated_outputs_are_claimed_per_port() {
        let f = Diagram::new(named(&["x"], &["a", "a"], "f"));
        let graph = f.as_graph();
        let first = graph.incoming(&NodeId::new("id_{a}", 2, 0));
        let second = graph.incoming(&NodeId::new("id_{a}", 2, 1));
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(first[0].source(), second[0].source());
    }

    #[test]
    fn test_repeated_edges_get_distinct_ids() {
        let slices = vec![
            vec![named(&["x"], &["a", "a"], "f")],
            vec![named(&["a", "a"], &["y"], "g")],
        ];
        let graph = to_graph_from_slices(&slices, &LayoutConfig::default());
        let ids: Vec<String> = graph.edges().map(|e| e.id.to_string()).collect();
        assert_eq!(
            ids,
            vec!["[f_(0)_(0)]*[g_(1)_(0)]_a", "[f_(0)_(0)]*[g_(1)_(0)]_a#1"]
        );
    }

    #[test]
    fn test_unmatched_wire_drops_edge() {
        let slices = vec![
            vec![Morphism::identity(Object::new("a"))],
            vec![named(&["a", "b"], &["c"], "g")],
        ];
        let graph = to_graph_from_slices(&slices, &LayoutConfig::default());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_offset_and_padding() {
        let config = LayoutConfig {
            padding: 1.0,
            offset: 3.0,
        };
        let slices = vec![vec![
            Morphism::identity(Object::new("a")),
            Morphism::identity(Object::new("b")),
        ]];
        let graph = to_graph_from_slices(&slices, &config);
        let xs: Vec<f64> = graph.nodes().map(|n| n.position.x).collect();
        assert_eq!(xs, vec![4.0, 6.0]);
    }

    #[test]
    fn test_empty_slices() {
        let graph = to_graph_from_slices(&[], &LayoutConfig::default());
        assert_eq!(graph.size(), (0, 0));
        assert_eq!(graph.node_count(), 0);
    }
}
