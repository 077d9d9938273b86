use nalgebra::Vector2;

/// Euclidean distance between two points.
///
/// Symmetric, non-negative, zero exactly for coordinate-equal inputs.
/// Never fails for finite inputs.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm()
}
