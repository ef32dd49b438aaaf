use mirrorkit::geometry::affine::Affine;
use mirrorkit::geometry::intersect::{ray_intersects_segment, side_of_polygon_on_ray};
use mirrorkit::geometry::reflect::reflection_matrix;
use mirrorkit::geometry::tolerance::EPS_MATRIX;
use mirrorkit::model::Point;
use mirrorkit::numfmt::{js_number_string, short_number_string};
use mirrorkit::text::encode::to_query_value;
use mirrorkit::text::transforms::char_swap;
use proptest::prelude::*;
use std::f64::consts::PI;
use url::form_urlencoded;

fn coord() -> impl Strategy<Value = f64> {
    (-100i32..=100).prop_map(f64::from)
}

fn distinct_points() -> impl Strategy<Value = (Point, Point)> {
    (coord(), coord(), coord(), coord())
        .prop_filter("distinct endpoints", |(px, py, qx, qy)| px != qx || py != qy)
        .prop_map(|(px, py, qx, qy)| (Point::new(px, py), Point::new(qx, qy)))
}

proptest! {
    #[test]
    fn reflecting_twice_is_identity((p, q) in distinct_points(), x in -1e3f64..1e3, y in -1e3f64..1e3) {
        let r = reflection_matrix(p, q);
        prop_assert!(r.multiply(&r).approx_eq(&Affine::IDENTITY, EPS_MATRIX));
        let back = r.apply(r.apply(Point::new(x, y)));
        prop_assert!((back.x - x).abs() < 1e-7 && (back.y - y).abs() < 1e-7);
    }

    #[test]
    fn vertical_reflection_is_involution(px in -50f64..50.0, y0 in -5f64..5.0, y1 in 6f64..9.0, x in -1e3f64..1e3, y in -1e3f64..1e3) {
        let r = reflection_matrix(Point::new(px, y0), Point::new(px, y1));
        let back = r.apply(r.apply(Point::new(x, y)));
        prop_assert!((back.x - x).abs() < 1e-9 && back.y == y);
    }

    #[test]
    fn exactly_one_edge_crosses_ray(n in 3usize..12, radius in 0.5f64..50.0, rot in 0f64..(2.0 * PI), ang in 0f64..(2.0 * PI)) {
        let step = 2.0 * PI / n as f64;
        let vts: Vec<Point> = (0..n)
            .map(|i| {
                let a = rot + step * i as f64;
                Point::new(radius * a.cos(), radius * a.sin())
            })
            .collect();
        // keep clear of vertex directions
        let rel = (ang - rot).rem_euclid(step);
        prop_assume!(rel > 1e-6 && step - rel > 1e-6);
        let target = Point::new(ang.cos() * 3.0, ang.sin() * 3.0);
        let edges: Vec<(Point, Point)> = (0..n).map(|i| (vts[i], vts[(i + 1) % n])).collect();
        let hits: Vec<&(Point, Point)> = edges
            .iter()
            .filter(|(c, d)| ray_intersects_segment(Point::ORIGIN, target, *c, *d))
            .collect();
        prop_assert_eq!(hits.len(), 1);
        prop_assert_eq!(side_of_polygon_on_ray(&vts, target), *hits[0]);
    }

    #[test]
    fn short_number_round_trips(n in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let s = short_number_string(n);
        prop_assert_eq!(s.parse::<f64>().ok(), Some(n), "{} -> {}", n, s);
        prop_assert!(s.len() <= js_number_string(n).len());
    }

    #[test]
    fn char_swap_is_involution(map in Just("abcdefgh#&<>()".chars().collect::<Vec<_>>()).prop_shuffle(), k in 1usize..14, picks in prop::collection::vec(0usize..14, 0..40)) {
        let map: String = map[..k].iter().collect();
        let chars: Vec<char> = map.chars().collect();
        let text: String = picks.iter().map(|i| chars[i % k]).collect();
        prop_assert_eq!(char_swap(&char_swap(&text, &map), &map), text);
    }

    #[test]
    fn query_value_decodes_to_original(s in "[a-zA-Z0-9 #&'+%=?/;:,é✿\n]{0,40}") {
        let encoded = to_query_value(&s);
        prop_assert!(!encoded.contains(|c: char| matches!(c, '#' | '&' | '\'' | ' ')));
        let query = format!("h={}", encoded);
        let decoded: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes()).into_owned().collect();
        prop_assert_eq!(decoded, vec![("h".to_string(), s)]);
    }
}
