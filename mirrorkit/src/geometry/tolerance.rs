// Centralized tolerances for matrix comparisons

pub const EPS_MATRIX: f64 = 1e-9;         // per-coefficient matrix compare slack
pub const EPS_DET: f64 = 1e-12;           // singular matrix guard

#[inline] pub fn near_zero(x: f64, eps: f64) -> bool { x.abs() <= eps }

/// Relative comparison that degrades to absolute near zero.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps * a.abs().max(b.abs()).max(1.0)
}
