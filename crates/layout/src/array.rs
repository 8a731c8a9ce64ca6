//! Dense grid export: every cell holds a number derived from the name of
//! the node occupying it, or 0 when empty.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

use crate::graph::Graph;

const HASH_RANGE: u64 = 100_000_000 - 1;

/// Stable non-zero code for a node name.
pub fn name_code(name: &str) -> u64 {
    let mut hasher = FxHasher::default();
    name.hash(&mut hasher);
    hasher.finish() % HASH_RANGE + 1
}

/// A `rows × columns` grid of name codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGrid {
    rows: usize,
    columns: usize,
    cells: Vec<u64>,
}

impl NameGrid {
    /// Paint each node over `width` cells starting at its column. Nodes
    /// later in layout order overwrite earlier ones; cells past the last
    /// column are dropped.
    pub fn from_graph(graph: &Graph) -> Self {
        let (rows, columns) = graph.size();
        let mut grid = Self {
            rows,
            columns,
            cells: vec![0; rows * columns],
        };
        for node in graph.nodes() {
            let code = name_code(&node.name);
            let (row, column) = (node.index_position.y, node.index_position.x);
            let span = node.width.max(0.0).floor() as usize;
            for shift in 0..span {
                if let Some(cell) = grid.cell_mut(row, column + shift) {
                    *cell = code;
                }
            }
        }
        grid
    }

    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut u64> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get_mut(row * self.columns + column)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u64> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[u64]> {
        let start = row.checked_mul(self.columns)?;
        (row < self.rows).then(|| &self.cells[start..start + self.columns])
    }

    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Rows as nested vectors, for serialization.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        (0..self.rows)
            .filter_map(|r| self.row(r).map(<[u64]>::to_vec))
            .collect()
    }
}
