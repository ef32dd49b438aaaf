use crate::{MirrorCanvas, TextTool};
use js_sys::Float64Array;
use mirrorkit::geometry::{intersect, polygon, reflect};
use mirrorkit::model::Point;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn pairs(flat: &[f64]) -> Vec<Point> {
    flat.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect()
}

// Pure helpers
#[wasm_bindgen]
pub fn short_number_string(n: f64) -> String { mirrorkit::numfmt::short_number_string(n) }

#[wasm_bindgen]
pub fn js_number_string(n: f64) -> String { mirrorkit::numfmt::js_number_string(n) }

#[wasm_bindgen]
pub fn ray_intersects_segment(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64, dx: f64, dy: f64) -> bool {
    intersect::ray_intersects_segment(Point::new(ax, ay), Point::new(bx, by), Point::new(cx, cy), Point::new(dx, dy))
}

/// `vertices` is flat `[x0, y0, x1, y1, ...]`; returns `[px, py, qx, qy]`.
#[wasm_bindgen]
pub fn side_of_polygon_on_ray(vertices: &[f64], x: f64, y: f64) -> JsValue {
    let vts = pairs(vertices);
    if vts.len() < polygon::MIN_VERTICES {
        return JsValue::NULL;
    }
    let (p, q) = intersect::side_of_polygon_on_ray(&vts, Point::new(x, y));
    crate::interop::arr_f64(&[p.x, p.y, q.x, q.y]).into()
}

#[wasm_bindgen]
pub fn side_of_polygon_on_ray_res(vertices: &[f64], x: f64, y: f64) -> JsValue {
    if !x.is_finite() { return error::non_finite("x"); }
    if !y.is_finite() { return error::non_finite("y"); }
    let n = vertices.len() / 2;
    if n < polygon::MIN_VERTICES {
        return error::too_few_vertices(n);
    }
    error::ok(side_of_polygon_on_ray(vertices, x, y))
}

/// `[a, b, c, d, e, f]` reflecting across the line through (px, py), (qx, qy).
#[wasm_bindgen]
pub fn reflection_matrix(px: f64, py: f64, qx: f64, qy: f64) -> Float64Array {
    crate::interop::arr_f64(&reflect::reflection_matrix(Point::new(px, py), Point::new(qx, qy)).coefficients())
}

#[wasm_bindgen]
pub fn svg_data_uri(xml: &str) -> String { mirrorkit::svg_data_uri(xml) }

/// One-shot transform over the built-in registry.
#[wasm_bindgen]
pub fn apply_transform_res(key: &str, subject: &str, arg: &str) -> JsValue {
    match mirrorkit::TransformRegistry::builtin().apply(key, subject, arg) {
        Ok(text) => error::ok(JsValue::from_str(&text)),
        Err(e) => error::transform(&e),
    }
}

#[wasm_bindgen]
impl MirrorCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(query: &str) -> MirrorCanvas {
        crate::MirrorCanvas::rs_from_query(query)
    }
    pub fn geom_version(&self) -> u64 {
        self.rs_geom_version()
    }

    // Copies
    pub fn click(&mut self, x: f64, y: f64) -> u32 {
        self.inner.click(x, y)
    }
    pub fn click_res(&mut self, x: f64, y: f64) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        error::ok(JsValue::from_f64(self.inner.click(x, y) as f64))
    }
    pub fn select(&mut self, id: Option<u32>) -> bool {
        self.inner.select(id)
    }
    pub fn select_res(&mut self, id: Option<u32>) -> JsValue {
        match id {
            Some(i) if self.inner.copy(i).is_none() => error::invalid_id("copy", i),
            _ => error::ok(JsValue::from_bool(self.inner.select(id))),
        }
    }
    pub fn selected(&self) -> Option<u32> {
        self.inner.selected()
    }
    pub fn delete_selected(&mut self) -> Option<u32> {
        self.inner.delete_selected()
    }
    pub fn clear(&mut self) {
        self.inner.clear();
    }
    pub fn copy_count(&self) -> u32 {
        self.inner.copy_count()
    }
    pub fn get_copy(&self, id: u32) -> JsValue {
        match self.inner.copy(id) {
            Some(c) => crate::interop::arr_f64(&c.transform.coefficients()).into(),
            None => JsValue::NULL,
        }
    }
    pub fn get_copy_res(&self, id: u32) -> JsValue {
        match self.inner.copy(id) {
            Some(_) => error::ok(self.get_copy(id)),
            None => error::invalid_id("copy", id),
        }
    }

    // Typed arrays: ids plus 6 matrix coefficients per copy
    pub fn get_copy_data(&self) -> JsValue {
        let mut ids = Vec::new();
        let mut matrices = Vec::new();
        for c in self.inner.copies() {
            ids.push(c.id);
            matrices.extend_from_slice(&c.transform.coefficients());
        }
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "ids", &crate::interop::arr_u32(&ids).into());
        crate::interop::set_kv(&obj, "matrices", &crate::interop::arr_f64(&matrices).into());
        if let Some(sel) = self.inner.selected() {
            crate::interop::set_kv(&obj, "selected", &JsValue::from_f64(sel as f64));
        }
        obj.into()
    }
    pub fn vertices(&self) -> Float64Array {
        let flat: Vec<f64> = self.inner.vertices().iter().flat_map(|p| [p.x, p.y]).collect();
        crate::interop::arr_f64(&flat)
    }
    pub fn points_attr(&self) -> String {
        polygon::points_attr(self.inner.vertices())
    }
    pub fn params(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.params()).unwrap_or(JsValue::NULL)
    }

    // Export
    pub fn to_svg(&self) -> String {
        self.inner.to_svg()
    }
    pub fn to_data_uri(&self) -> String {
        self.inner.to_data_uri()
    }
}

#[wasm_bindgen]
impl TextTool {
    #[wasm_bindgen(constructor)]
    pub fn new(query: &str) -> TextTool {
        let inner = mirrorkit::TextTool::from_query(query);
        if let Some(e) = inner.load_error() {
            web_sys::console::warn_1(&JsValue::from_str(&format!("user transform rejected: {}", e)));
        }
        TextTool { inner }
    }
    pub fn entries(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.registry().entries()).unwrap_or(JsValue::NULL)
    }
    pub fn initial_key(&self) -> Option<String> {
        self.inner.initial_key().map(str::to_string)
    }
    pub fn input(&self) -> String {
        self.inner.input.clone()
    }
    pub fn set_input(&mut self, text: &str) {
        self.inner.input = text.to_string();
    }
    pub fn output(&self) -> String {
        self.inner.output.clone()
    }
    pub fn apply(&mut self, key: &str, arg: &str) -> Option<String> {
        self.inner.apply(key, arg).ok().map(str::to_string)
    }
    pub fn apply_res(&mut self, key: &str, arg: &str) -> JsValue {
        match self.inner.apply(key, arg) {
            Ok(text) => error::ok(JsValue::from_str(text)),
            Err(e) => error::transform(&e),
        }
    }
    pub fn move_output_to_input(&mut self) {
        self.inner.move_output_to_input();
    }
    pub fn accept_fetch_body(&mut self, body: &str) {
        self.inner.accept_fetch(Ok(body.to_string()));
    }
    pub fn accept_fetch_error(&mut self, message: &str) {
        self.inner.accept_fetch(Err(message.to_string()));
    }
}
