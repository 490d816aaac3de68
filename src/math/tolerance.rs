use super::Point2;

/// Returns `true` if `a` and `b` differ by strictly less than `eps`.
#[must_use]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Returns `true` if both coordinate deltas between `a` and `b` are
/// strictly less than `eps`.
///
/// Tolerance equality is symmetric and reflexive for exact values, but not
/// transitive near the `eps` boundary.
#[must_use]
pub fn points_coincident(a: &Point2, b: &Point2, eps: f64) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}
