mod shape;

#[doc(inline)]
pub use shape::Shape;
