use crate::geometry::polygon::points_attr;
use crate::numfmt::js_number_string;
use crate::text::encode::encode_uri;
use crate::Kaleidoscope;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// `data:` URI for an SVG document. `#` would start a fragment, so it is
/// escaped on top of `encodeURI`.
pub fn svg_data_uri(xml: &str) -> String {
    format!("data:image/svg+xml;charset=UTF-8,{}", encode_uri(xml).replace('#', "%23"))
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

// minx, miny, maxx, maxy over every placed copy, or the base polygon alone
fn bounds(k: &Kaleidoscope) -> (f64, f64, f64, f64) {
    let mut b = (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    let mut grow = |x: f64, y: f64| {
        b.0 = b.0.min(x); b.1 = b.1.min(y);
        b.2 = b.2.max(x); b.3 = b.3.max(y);
    };
    let mut any = false;
    for c in k.copies() {
        any = true;
        for v in &k.vertices { let p = c.transform.apply(*v); grow(p.x, p.y); }
    }
    if !any {
        for v in &k.vertices { grow(v.x, v.y); }
    }
    b
}

pub fn to_svg_impl(k: &Kaleidoscope) -> String {
    let p = &k.params;
    let (minx, miny, maxx, maxy) = bounds(k);
    let margin = p.selected_width.max(p.unselected_width);
    let view_box = if minx.is_finite() && maxx.is_finite() {
        format!(
            "{} {} {} {}",
            js_number_string(minx - margin),
            js_number_string(miny - margin),
            js_number_string(maxx - minx + 2.0 * margin),
            js_number_string(maxy - miny + 2.0 * margin)
        )
    } else {
        "0 0 0 0".to_string()
    };
    let points = points_attr(&k.vertices);
    let mut out = format!(
        r#"<svg xmlns="{}" viewBox="{}" style="{}">"#,
        SVG_NS, view_box, escape_attr(&p.inline_style)
    );
    for c in k.copies() {
        let width = if k.selected == Some(c.id) { p.selected_width } else { p.unselected_width };
        let m = c.transform.coefficients().map(js_number_string).join(" ");
        out.push_str(&format!(
            r#"<polygon fill="{}" stroke="{}" stroke-width="{}" points="{}" transform="matrix({})"></polygon>"#,
            escape_attr(&p.fill_color),
            escape_attr(&p.border_color),
            js_number_string(width),
            points,
            m
        ));
    }
    out.push_str("</svg>");
    out
}
