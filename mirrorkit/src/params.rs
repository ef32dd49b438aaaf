//! Query-string configuration for both tools.
//!
//! The mirror tool reads single-letter keys (`b`, `d`, `f`, `h`, `i`, `s`, `u`,
//! `v`); the text tool reads `f`, `f-name`, `a` and `a-hint`. Missing keys keep
//! their defaults, and numeric values that do not parse fall back silently.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// First value per key, like `URLSearchParams#get`.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut out = HashMap::new();
    for (k, v) in form_urlencoded::parse(query.as_bytes()) {
        out.entry(k.into_owned()).or_insert_with(|| v.into_owned());
    }
    out
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorParams {
    pub border_color: String,
    pub decimal_places: usize,
    pub fill_color: String,
    pub height_of_polygon: f64,
    pub inline_style: String,
    pub selected_width: f64,
    pub unselected_width: f64,
    /// Vertex count, or a JSON list of `[x, y]` pairs.
    pub vertices: String,
}

impl Default for MirrorParams {
    fn default() -> Self {
        MirrorParams {
            border_color: "CanvasText".to_string(),
            decimal_places: 12,
            fill_color: "red".to_string(),
            height_of_polygon: 10.0,
            inline_style: "background-color: Canvas; color-scheme: light dark".to_string(),
            selected_width: 0.5,
            unselected_width: 0.1,
            vertices: "5".to_string(),
        }
    }
}

// toFixed accepts 0..=100 digits
const MAX_DECIMAL_PLACES: usize = 100;

impl MirrorParams {
    pub fn from_query(query: &str) -> MirrorParams {
        let q = parse_query(query);
        let mut p = MirrorParams::default();
        if let Some(v) = q.get("b") { p.border_color = v.clone(); }
        if let Some(v) = q.get("d").and_then(|v| v.trim().parse::<usize>().ok()) {
            p.decimal_places = v.min(MAX_DECIMAL_PLACES);
        }
        if let Some(v) = q.get("f") { p.fill_color = v.clone(); }
        if let Some(v) = parse_positive(q.get("h")) { p.height_of_polygon = v; }
        if let Some(v) = q.get("i") { p.inline_style = v.clone(); }
        if let Some(v) = parse_positive(q.get("s")) { p.selected_width = v; }
        if let Some(v) = parse_positive(q.get("u")) { p.unselected_width = v; }
        if let Some(v) = q.get("v") { p.vertices = v.clone(); }
        p
    }
}

fn parse_positive(v: Option<&String>) -> Option<f64> {
    v.and_then(|s| s.trim().parse::<f64>().ok()).filter(|x| x.is_finite() && *x > 0.0)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextToolParams {
    /// Pipeline expression for the user transform.
    pub function: Option<String>,
    pub function_name: Option<String>,
    pub default_arg: Option<String>,
    pub arg_hint: Option<String>,
}

impl TextToolParams {
    pub fn from_query(query: &str) -> TextToolParams {
        let mut q = parse_query(query);
        TextToolParams {
            function: q.remove("f"),
            function_name: q.remove("f-name"),
            default_arg: q.remove("a"),
            arg_hint: q.remove("a-hint"),
        }
    }
}
