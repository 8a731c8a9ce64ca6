//! # Braidweave Layout - Positioned String Diagrams
//!
//! Turns the slices of a [`Diagram`](braidweave_core::Diagram) or
//! [`StringDiagram`](braidweave_core::StringDiagram) into a layered graph
//! and exports it:
//!
//! - **Layout**: node positions, widths and wire edges ([`to_graph_from_slices`])
//! - **Records**: plain node and edge maps ([`LayoutExport`])
//! - **Grid**: a dense array of name codes ([`NameGrid`])
//! - **Elements**: cytoscape-style styled elements ([`to_elements`])
//! - **Requests**: JSON request bodies resolved into composed diagrams ([`BuildRequest`])
//!
//! ## Example
//!
//! ```rust
//! use braidweave_core::{Diagram, Morphism, MonoidalObject};
//! use braidweave_layout::AsGraph;
//!
//! let f = Morphism::named(MonoidalObject::new(["1", "2"]), MonoidalObject::new(["3", "4"]), "f")?;
//! let graph = Diagram::new(f).as_graph();
//! assert_eq!(graph.node_count(), 5);
//! assert_eq!(graph.edge_count(), 4);
//! assert_eq!(graph.size(), (3, 2));
//! # Ok::<(), braidweave_core::CoreError>(())
//! ```

pub mod array;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod graph;
pub mod request;
pub mod vis;

pub use array::{name_code, NameGrid};
pub use config::{LayoutConfig, VisConfig};
pub use engine::{to_graph_from_slices, AsGraph};
pub use error::LayoutError;
pub use export::{EdgeRecord, LayoutExport, NodeRecord};
pub use graph::{
    EdgeId, Graph, IndexPosition, LayoutEdge, LayoutNode, NodeId, NodeKind, Position,
};
pub use request::{BuildRequest, MorphismSpec};
pub use vis::{to_elements, EdgeData, Element, ElementData, Group, NodeData};
