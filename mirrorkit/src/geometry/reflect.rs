use super::affine::Affine;
use crate::model::Point;

/// Reflection across the infinite line through `p` and `q`.
pub fn reflection_matrix(p: Point, q: Point) -> Affine {
    if q.x == p.x {
        return Affine([-1.0, 0.0, 0.0, 1.0, 2.0 * p.x, 0.0]);
    }
    // Line y = m*x + b
    let m = (q.y - p.y) / (q.x - p.x);
    let b = p.y - m * p.x;
    let d = 1.0 / (m * m + 1.0);
    Affine([1.0 - m * m, 2.0 * m, 2.0 * m, m * m - 1.0, -2.0 * m * b, 2.0 * b].map(|e| e * d))
}
