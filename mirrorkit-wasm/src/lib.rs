use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct MirrorCanvas { pub(crate) inner: mirrorkit::Kaleidoscope }

#[wasm_bindgen]
pub struct TextTool { pub(crate) inner: mirrorkit::TextTool }

impl MirrorCanvas {
    pub fn rs_from_query(query: &str) -> MirrorCanvas { MirrorCanvas { inner: mirrorkit::Kaleidoscope::from_query(query) } }
    pub fn rs_geom_version(&self) -> u64 { self.inner.geom_version() }
}
