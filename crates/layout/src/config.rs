//! Layout and rendering parameters.
//!
//! Both records deserialize from partial JSON; absent fields take their
//! defaults.

use serde::{Deserialize, Serialize};

/// Geometry of the layered layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Half the width of a single wire cell.
    pub padding: f64,
    /// Horizontal position where every layer starts.
    pub offset: f64,
}

impl LayoutConfig {
    /// Width of one wire cell.
    pub fn pocket(&self) -> f64 {
        self.padding * 2.0
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 0.5,
            offset: 0.0,
        }
    }
}

/// Presentation of the element export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisConfig {
    /// Pixels per layout unit.
    pub scale: f64,
    /// Label interior wires too, not just the first and last rows.
    pub label_strings: bool,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            scale: 100.0,
            label_strings: true,
        }
    }
}
