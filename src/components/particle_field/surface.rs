//! Drawing surface abstraction and browser canvas lookup.
//!
//! The renderer only needs three primitives, captured by [`Surface`]. The
//! browser implementation is a 2D canvas context; tests substitute a recorder.

use std::f64::consts::PI;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::theme::Color;

/// DOM id of the background canvas.
pub const DEFAULT_CANVAS_ID: &str = "bg";

/// The raster operations consumed by the particle renderer.
pub trait Surface {
	/// Clear a rectangle back to transparent.
	fn clear(&mut self, x: f64, y: f64, width: f64, height: f64);
	/// Set the fill color used by subsequent [`Surface::fill_circle`] calls.
	fn set_fill_color(&mut self, color: Color);
	/// Fill a full circle centered at `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.clear_rect(x, y, width, height);
	}

	fn set_fill_color(&mut self, color: Color) {
		self.set_fill_style_str(&color.to_css());
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Reasons the browser drawing surface could not be acquired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
	NoWindow,
	NoDocument,
	ElementMissing(String),
	NotACanvas(String),
	ContextUnavailable,
	ViewportUnavailable,
}

impl fmt::Display for SurfaceError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SurfaceError::NoWindow => write!(f, "no global window"),
			SurfaceError::NoDocument => write!(f, "window has no document"),
			SurfaceError::ElementMissing(id) => write!(f, "no element with id \"{id}\""),
			SurfaceError::NotACanvas(id) => write!(f, "element \"{id}\" is not a canvas"),
			SurfaceError::ContextUnavailable => write!(f, "2d canvas context unavailable"),
			SurfaceError::ViewportUnavailable => write!(f, "viewport size unavailable"),
		}
	}
}

impl std::error::Error for SurfaceError {}

impl From<SurfaceError> for JsValue {
	fn from(err: SurfaceError) -> Self {
		JsValue::from_str(&format!("snowfield: {err}"))
	}
}

pub fn window() -> Result<Window, SurfaceError> {
	web_sys::window().ok_or(SurfaceError::NoWindow)
}

/// Look up a canvas element by DOM id.
pub fn canvas_by_id(id: &str) -> Result<HtmlCanvasElement, SurfaceError> {
	let document = window()?.document().ok_or(SurfaceError::NoDocument)?;
	let element = document
		.get_element_by_id(id)
		.ok_or_else(|| SurfaceError::ElementMissing(id.to_string()))?;
	element
		.dyn_into()
		.map_err(|_| SurfaceError::NotACanvas(id.to_string()))
}

/// Current window inner size in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<(f64, f64), SurfaceError> {
	let w = window
		.inner_width()
		.ok()
		.and_then(|v| v.as_f64())
		.ok_or(SurfaceError::ViewportUnavailable)?;
	let h = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.ok_or(SurfaceError::ViewportUnavailable)?;
	Ok((w, h))
}

/// Size the canvas backing store to the viewport and return its 2D context.
///
/// The size is read once; later window resizes are not tracked.
pub fn prepare_canvas(
	canvas: &HtmlCanvasElement,
) -> Result<(CanvasRenderingContext2d, f64, f64), SurfaceError> {
	let (w, h) = viewport_size(&window()?)?;
	let (w, h) = backing_size(w, h);
	canvas.set_width(w);
	canvas.set_height(h);

	let ctx = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.ok_or(SurfaceError::ContextUnavailable)?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| SurfaceError::ContextUnavailable)?;

	Ok((ctx, w as f64, h as f64))
}

/// Whole-pixel canvas size for a viewport measured in CSS pixels.
pub fn backing_size(width: f64, height: f64) -> (u32, u32) {
	(width as u32, height as u32)
}

/// Random source seeded from the JS host; only meaningful inside a browser.
pub fn host_rng() -> StdRng {
	let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
	let now = js_sys::Date::now() as u64;
	StdRng::seed_from_u64(noise ^ now.rotate_left(32))
}
