pub mod error;
pub mod model;
pub mod numfmt;
pub mod params;
pub mod geometry {
    pub mod affine;
    pub mod intersect;
    pub mod polygon;
    pub mod reflect;
    pub mod tolerance;
}
pub mod text {
    pub mod encode;
    pub mod pipeline;
    pub mod registry;
    pub mod tool;
    pub mod transforms;
}
mod svg;

use geometry::affine::Affine;
use geometry::intersect::side_of_polygon_on_ray;
use geometry::polygon::{recenter_polygon, regular_polygon, scale_polygon, MIN_VERTICES};
use geometry::reflect::reflection_matrix;
use model::{PlacedCopy, Point};
use params::MirrorParams;
use tracing::debug;

pub use error::TransformError;
pub use svg::svg_data_uri;
pub use text::registry::TransformRegistry;
pub use text::tool::TextTool;

/// Mirror-polygon drawing state: the base polygon plus every placed copy.
///
/// Copies live in an arena keyed by creation index; deleting leaves a hole so
/// ids stay stable. Clicking with a copy selected reflects that copy across
/// the edge under the click, in the copy's own frame.
pub struct Kaleidoscope {
    pub(crate) params: MirrorParams,
    pub(crate) vertices: Vec<Point>,
    pub(crate) copies: Vec<Option<PlacedCopy>>, // id is index
    pub(crate) selected: Option<u32>,
    pub(crate) geom_ver: u64,
}

impl Default for Kaleidoscope {
    fn default() -> Self { Kaleidoscope::new(MirrorParams::default()) }
}

impl Kaleidoscope {
    pub fn new(params: MirrorParams) -> Kaleidoscope {
        let vertices = base_polygon(&params);
        Kaleidoscope { params, vertices, copies: Vec::new(), selected: None, geom_ver: 1 }
    }

    pub fn from_query(query: &str) -> Kaleidoscope { Kaleidoscope::new(MirrorParams::from_query(query)) }

    /// Uses `vertices` as given, without recentring or scaling.
    pub fn with_vertices(params: MirrorParams, vertices: Vec<Point>) -> Kaleidoscope {
        Kaleidoscope { params, vertices, copies: Vec::new(), selected: None, geom_ver: 1 }
    }

    pub fn params(&self) -> &MirrorParams { &self.params }
    pub fn vertices(&self) -> &[Point] { &self.vertices }
    pub fn geom_version(&self) -> u64 { self.geom_ver }
    pub fn selected(&self) -> Option<u32> { self.selected }

    pub fn copy(&self, id: u32) -> Option<&PlacedCopy> {
        self.copies.get(id as usize).and_then(|c| c.as_ref())
    }

    pub fn copies(&self) -> impl Iterator<Item = &PlacedCopy> {
        self.copies.iter().flatten()
    }

    pub fn copy_count(&self) -> u32 { self.copies().count() as u32 }

    /// Places a new copy for a click at `(x, y)` in canvas coordinates and
    /// selects it. Returns the new copy's id.
    pub fn click(&mut self, x: f64, y: f64) -> u32 {
        let click = Point::new(x, y);
        let transform = match self.selected.and_then(|id| self.copy(id)) {
            None => Affine::translation(x, y),
            Some(sel) => {
                let last = sel.transform;
                let local = last.inverse().map_or(click, |inv| inv.apply(click));
                let (p, q) = side_of_polygon_on_ray(&self.vertices, local);
                last.multiply(&reflection_matrix(p, q))
            }
        };
        let id = self.copies.len() as u32;
        self.copies.push(Some(PlacedCopy { id, transform }));
        self.selected = Some(id);
        self.geom_ver = self.geom_ver.wrapping_add(1);
        debug!(id, ?transform, "placed copy");
        id
    }

    /// Selects a live copy, or the base state with `None`.
    pub fn select(&mut self, id: Option<u32>) -> bool {
        match id {
            Some(i) if self.copy(i).is_none() => false,
            _ => {
                self.selected = id;
                true
            }
        }
    }

    /// Removes the selected copy and selects the nearest earlier live copy.
    /// With nothing selected, removes nothing and selects the newest copy.
    /// Returns the id of the removed copy, if any.
    pub fn delete_selected(&mut self) -> Option<u32> {
        let Some(id) = self.selected else {
            self.selected = self.copies().last().map(|c| c.id);
            return None;
        };
        if let Some(slot) = self.copies.get_mut(id as usize) {
            *slot = None;
        }
        self.selected = self.copies[..id as usize].iter().rev().flatten().next().map(|c| c.id);
        self.geom_ver = self.geom_ver.wrapping_add(1);
        debug!(id, selected = ?self.selected, "deleted copy");
        Some(id)
    }

    pub fn clear(&mut self) {
        self.copies.clear();
        self.selected = None;
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }

    pub fn to_svg(&self) -> String { svg::to_svg_impl(self) }

    pub fn to_data_uri(&self) -> String { svg_data_uri(&self.to_svg()) }
}

/// Base polygon for `params`: the `vertices` JSON list recentred, or a regular
/// polygon with that many vertices, scaled to the configured height.
pub fn base_polygon(params: &MirrorParams) -> Vec<Point> {
    let shape = recenter_polygon(&params.vertices).unwrap_or_else(|| {
        let n = params.vertices.trim().parse::<usize>().unwrap_or(5).max(MIN_VERTICES);
        regular_polygon(n)
    });
    scale_polygon(&shape, params.height_of_polygon, params.decimal_places)
}
