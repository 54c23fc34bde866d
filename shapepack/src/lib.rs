//! Path geometry and greedy row packing for vector shapes.
//!
//! Shapes are measured (centroid and bounding radius of their sampled vertices) and relocated
//! onto a fresh canvas by a pluggable [`packing::PackingPolicy`]. Relocation is always a rigid
//! translation.

/// Geometric primitives and the operations deriving metrics from them
pub mod geometry;

/// Shapes: a path together with its fill token and derived metrics
pub mod entities;

/// Greedy packing policies assigning a new centroid to every shape
pub mod packing;

/// Configuration of a repacking run
pub mod config;

mod error;
mod repack;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::RepackError;

#[doc(inline)]
pub use repack::repack;
