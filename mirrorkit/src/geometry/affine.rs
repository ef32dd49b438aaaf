// 2x3 affine matrices in the SVG/DOMMatrix layout [a, b, c, d, e, f]:
//   x' = a*x + c*y + e
//   y' = b*x + d*y + f
use serde::{Deserialize, Serialize};

use super::tolerance::{approx_eq, near_zero, EPS_DET};
use crate::model::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Affine(pub [f64; 6]);

impl Default for Affine {
    fn default() -> Self { Affine::IDENTITY }
}

impl Affine {
    pub const IDENTITY: Affine = Affine([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    pub fn translation(x: f64, y: f64) -> Affine { Affine([1.0, 0.0, 0.0, 1.0, x, y]) }

    pub fn coefficients(&self) -> [f64; 6] { self.0 }

    /// `self × other`: the result applies `other` first, then `self`.
    pub fn multiply(&self, other: &Affine) -> Affine {
        let [a1, b1, c1, d1, e1, f1] = self.0;
        let [a2, b2, c2, d2, e2, f2] = other.0;
        Affine([
            a1 * a2 + c1 * b2,
            b1 * a2 + d1 * b2,
            a1 * c2 + c1 * d2,
            b1 * c2 + d1 * d2,
            a1 * e2 + c1 * f2 + e1,
            b1 * e2 + d1 * f2 + f1,
        ])
    }

    pub fn apply(&self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.0;
        Point { x: a * p.x + c * p.y + e, y: b * p.x + d * p.y + f }
    }

    pub fn determinant(&self) -> f64 {
        let [a, b, c, d, _, _] = self.0;
        a * d - b * c
    }

    pub fn inverse(&self) -> Option<Affine> {
        let det = self.determinant();
        if near_zero(det, EPS_DET) || !det.is_finite() { return None; }
        let [a, b, c, d, e, f] = self.0;
        let inv = 1.0 / det;
        let na = d * inv; let nb = -b * inv;
        let nc = -c * inv; let nd = a * inv;
        Some(Affine([na, nb, nc, nd, -(na * e + nc * f), -(nb * e + nd * f)]))
    }

    pub fn approx_eq(&self, other: &Affine, eps: f64) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| approx_eq(*a, *b, eps))
    }
}
