// Ray vs. segment crossing tests used to find the polygon edge under a click.
//
// The ray starts at `a` and passes through `b`. A ray passing exactly through a
// polygon vertex may report either adjacent edge (or neither); callers accept
// that imprecision.
use crate::model::Point;

pub fn ray_intersects_segment(a: Point, b: Point, c: Point, d: Point) -> bool {
    let Point { x: ax, y: ay } = a;
    let Point { x: bx, y: by } = b;
    let Point { x: cx, y: cy } = c;
    let Point { x: dx, y: dy } = d;
    if bx == ax {
        // Vertical ray: the segment must straddle the line x = ax.
        if dx == cx || (ax < cx) == (ax < dx) {
            return false;
        }
        return 0.0 < (by - ay) * (cy - ay - (cx - ax) * (dy - cy) / (dx - cx));
    }
    let ray_slope = (by - ay) / (bx - ax);
    if (cy - ay < ray_slope * (cx - ax)) == (dy - ay < ray_slope * (dx - ax)) {
        return false;
    }
    if dx == cx {
        return 0.0 < (bx - ax) * (dx - ax);
    }
    let seg_slope = (dy - cy) / (dx - cx);
    0.0 < (bx - ax) * (seg_slope - ray_slope) * (seg_slope * (cx - ax) - cy + ay)
}

/// First edge (lowest index, wrapping last→first) crossed by the ray from the
/// origin through `on_ray`. Falls back to the wrap-around edge when none is.
///
/// `vertices` must be non-empty.
pub fn side_of_polygon_on_ray(vertices: &[Point], on_ray: Point) -> (Point, Point) {
    for pair in vertices.windows(2) {
        if ray_intersects_segment(Point::ORIGIN, on_ray, pair[0], pair[1]) {
            return (pair[0], pair[1]);
        }
    }
    (vertices[vertices.len() - 1], vertices[0])
}
