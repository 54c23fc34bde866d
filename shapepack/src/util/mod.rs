/// Set of functions used throughout assertion checks in debug builds
pub mod assertions;

/// Colour decomposition of fill tokens, used as row sort key
pub mod color;

mod fpa;

#[doc(inline)]
pub use fpa::FPA;
