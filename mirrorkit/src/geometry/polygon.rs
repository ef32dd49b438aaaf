// Base polygon construction: regular n-gons, recentred vertex lists, scaling.
use std::f64::consts::PI;

use crate::model::Point;
use crate::numfmt::js_number_string;

pub const MIN_VERTICES: usize = 3;

/// `n` vertices on the unit circle starting at angle 0, counter-clockwise.
pub fn regular_polygon(n: usize) -> Vec<Point> {
    let center_angle = 2.0 * PI / n as f64;
    (0..n)
        .map(|i| {
            let a = center_angle * i as f64;
            Point::new(a.cos(), a.sin())
        })
        .collect()
}

/// Parses a JSON array of `[x, y]` pairs and shifts it so the vertex mean sits
/// on the origin. Returns None for anything else, including lists too short to
/// form a polygon.
pub fn recenter_polygon(vertex_json: &str) -> Option<Vec<Point>> {
    let raw: Vec<[f64; 2]> = serde_json::from_str(vertex_json).ok()?;
    if raw.len() < MIN_VERTICES { return None; }
    let n = raw.len() as f64;
    let (sx, sy) = raw.iter().fold((0.0, 0.0), |(sx, sy), [x, y]| (sx + x, sy + y));
    let (mx, my) = (sx / n, sy / n);
    Some(raw.into_iter().map(|[x, y]| Point::new(x - mx, y - my)).collect())
}

// Enough fraction digits to print any finite f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 1075;

/// Rounds like `+x.toFixed(decimals)`: nearest, with exact ties going away
/// from zero.
pub fn round_to(x: f64, decimals: usize) -> f64 {
    if !x.is_finite() { return x; }
    let exact = format!("{:.*}", decimals + EXACT_FRACTION_DIGITS, x.abs());
    let tail = exact.split_once('.').map_or("", |(_, frac)| &frac[decimals..]);
    let tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    // Rust's formatter sends ties to even; nudge past the tie instead.
    let magnitude = if tie { f64::from_bits(x.abs().to_bits() + 1) } else { x.abs() };
    let rounded: f64 = format!("{:.*}", decimals, magnitude).parse().unwrap_or(x.abs());
    if x < 0.0 { -rounded } else { rounded }
}

/// Uniformly scales so that max(y) - min(y) == `height`, rounding each
/// coordinate to `decimals` places.
pub fn scale_polygon(vertices: &[Point], height: f64, decimals: usize) -> Vec<Point> {
    let (high, low) = vertices
        .iter()
        .fold((f64::NEG_INFINITY, f64::INFINITY), |(hi, lo), p| (hi.max(p.y), lo.min(p.y)));
    let scale = height / (high - low);
    vertices
        .iter()
        .map(|p| Point::new(round_to(p.x * scale, decimals), round_to(p.y * scale, decimals)))
        .collect()
}

/// `points` attribute text: "x,y x,y ...".
pub fn points_attr(vertices: &[Point]) -> String {
    vertices
        .iter()
        .map(|p| format!("{},{}", js_number_string(p.x), js_number_string(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}
