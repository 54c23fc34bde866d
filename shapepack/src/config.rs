use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::RepackError;

/// Configuration of a repacking run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct RepackConfig {
    /// Maximum number of shapes read from the input, the remainder is ignored
    pub max_shapes: usize,
    /// Width of the output canvas, rows wrap when they would exceed it
    pub canvas_width: f64,
    /// Height of the output canvas, only used for the document envelope
    pub canvas_height: f64,
    /// Spacing multiplier (at least 1.0) applied to the room each shape takes up
    pub fudge_factor: f64,
    /// Strategy used to assign new centroids
    pub layout_policy: LayoutPolicy,
    /// Order in which shapes are handed to the packer
    pub sort_key: SortKey,
    /// Key used by the row policy to reorder shapes within a closed row. If undefined, rows keep their input order
    pub secondary_row_key: Option<RowKey>,
}

impl Default for RepackConfig {
    fn default() -> Self {
        Self {
            max_shapes: 100_000,
            canvas_width: 1280.0,
            canvas_height: 4000.0,
            fudge_factor: 1.1,
            layout_policy: LayoutPolicy::Row,
            sort_key: SortKey::AscendingRadius,
            secondary_row_key: Some(RowKey::Lightness),
        }
    }
}

impl RepackConfig {
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| -> Result<()> {
            Err(RepackError::InvalidConfig { reason }.into())
        };
        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            return invalid(format!("canvas_width must be positive, got {}", self.canvas_width));
        }
        if !(self.canvas_height.is_finite() && self.canvas_height > 0.0) {
            return invalid(format!(
                "canvas_height must be positive, got {}",
                self.canvas_height
            ));
        }
        if !(self.fudge_factor.is_finite() && self.fudge_factor >= 1.0) {
            return invalid(format!(
                "fudge_factor must be at least 1.0, got {}",
                self.fudge_factor
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPolicy {
    /// Buffers shapes into rows, reorders each closed row by the secondary key, then places it
    Row,
    /// Places every shape immediately, wrapping to a new row on overflow
    DiagonalOverflow,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    AscendingRadius,
    DeclarationOrder,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RowKey {
    /// Lightness of the fill colour in HLS space
    Lightness,
    /// Hue of the fill colour in HLS space
    Hue,
}
