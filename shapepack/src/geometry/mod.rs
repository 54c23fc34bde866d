/// Set of traits representing geometric operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

/// Sample points, centroid and radius of a path
pub mod metrics;
