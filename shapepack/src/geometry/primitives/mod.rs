mod path;
mod point;

#[doc(inline)]
pub use path::Path;
#[doc(inline)]
pub use path::PathElement;
#[doc(inline)]
pub use point::Point;
