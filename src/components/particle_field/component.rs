//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a fixed full-window canvas, sizes its backing store
//! to the viewport once on mount, and starts the frame loop. Unmounting stops it.

use leptos::prelude::*;
use log::{error, info};
use web_sys::HtmlCanvasElement;

use super::frame_loop::FrameLoop;
use super::particles::ParticleField;
use super::render::ParticleFieldRenderer;
use super::surface::{self, DEFAULT_CANVAS_ID};
use super::theme::ParticleStyle;

/// Build the renderer for `canvas` and start animating it.
pub fn start_on_canvas(canvas: &HtmlCanvasElement) -> Result<FrameLoop, wasm_bindgen::JsValue> {
	let (ctx, w, h) = surface::prepare_canvas(canvas)?;
	let style = ParticleStyle::default();
	let field = ParticleField::new(&style, w, h, &mut surface::host_rng());
	info!(
		"snowfield: starting {} particles on {}x{} surface",
		field.len(),
		w,
		h
	);
	FrameLoop::start(ParticleFieldRenderer::new(field, ctx, style))
}

/// Renders falling snow on a canvas that fills the viewport behind other content.
///
/// The canvas size is taken from the window once; later resizes are ignored.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(into, default = DEFAULT_CANVAS_ID.to_string())] id: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop = StoredValue::new_local(None::<FrameLoop>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if frame_loop.with_value(Option::is_some) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match start_on_canvas(&canvas) {
			Ok(handle) => frame_loop.set_value(Some(handle)),
			Err(e) => error!("snowfield: failed to start particle field: {:?}", e),
		}
	});

	on_cleanup(move || {
		frame_loop.try_update_value(|handle| {
			if let Some(handle) = handle.take() {
				handle.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=id
			class="particle-field-canvas"
			style="position: fixed; top: 0; left: 0; z-index: -1; pointer-events: none; display: block;"
		/>
	}
}
