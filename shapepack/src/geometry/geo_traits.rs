use crate::geometry::primitives::Point;

/// Trait for types that can be rigidly moved by a translation vector.
///
/// This is the only transformation shapes are subjected to: no scaling, rotation or skew.
pub trait Translatable: Clone {
    /// Adds `delta` to every point held by `self`.
    fn translate(&mut self, delta: Point) -> &mut Self;

    /// Applies a translation to a clone.
    fn translate_clone(&self, delta: Point) -> Self {
        let mut clone = self.clone();
        clone.translate(delta);
        clone
    }
}
