//! snowfield: falling snow background for web pages.
//!
//! This crate provides a WASM particle effect drawn on a full-window canvas,
//! either as a Leptos component or attached to an existing `<canvas id="bg">`.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod components;

pub use components::particle_field::{
	Color, DEFAULT_CANVAS_ID, FrameLoop, InvalidParticle, Particle, ParticleField,
	ParticleFieldCanvas, ParticleFieldRenderer, ParticleStyle, Surface, SurfaceError,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("snowfield: logging initialized");
}

/// Running snow animation returned to JavaScript.
#[wasm_bindgen]
pub struct FieldHandle {
	frame_loop: FrameLoop,
}

#[wasm_bindgen]
impl FieldHandle {
	/// Stop animating. The last painted frame stays on the canvas.
	pub fn stop(&self) {
		self.frame_loop.stop();
	}

	#[wasm_bindgen(js_name = isRunning)]
	pub fn is_running(&self) -> bool {
		self.frame_loop.is_running()
	}
}

/// Start the snow effect on an existing canvas element, looked up by DOM id.
///
/// For pages that already contain the background canvas and do not mount [`App`].
#[wasm_bindgen]
pub fn attach(canvas_id: &str) -> Result<FieldHandle, JsValue> {
	let canvas = components::particle_field::surface::canvas_by_id(canvas_id).map_err(|e| {
		error!("snowfield: cannot attach: {}", e);
		e
	})?;
	let frame_loop = components::particle_field::start_on_canvas(&canvas)?;
	Ok(FieldHandle { frame_loop })
}

/// Main application component.
/// Places the snow canvas behind the page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="snowfield" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas />
	}
}
