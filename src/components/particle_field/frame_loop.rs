//! `requestAnimationFrame` driver for the particle renderer.
//!
//! The loop reschedules itself after every frame until [`FrameLoop::stop`] is
//! called. Dropping the handle leaves the loop running.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::prelude::*;

use super::render::ParticleFieldRenderer;
use super::surface::{self, Surface, SurfaceError};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running animation loop.
pub struct FrameLoop {
	running: Rc<Cell<bool>>,
	pending: Rc<Cell<Option<i32>>>,
	callback: FrameCallback,
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	window.request_animation_frame(cb.as_ref().unchecked_ref())
}

impl FrameLoop {
	/// Start painting `renderer` once per display refresh.
	pub fn start<S: Surface + 'static>(
		mut renderer: ParticleFieldRenderer<S>,
	) -> Result<Self, JsValue> {
		let running = Rc::new(Cell::new(true));
		let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let callback: FrameCallback = Rc::new(RefCell::new(None));

		let (running_cb, pending_cb, callback_inner) =
			(running.clone(), pending.clone(), callback.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_cb.set(None);
			if !running_cb.get() {
				return;
			}
			renderer.step();
			if let Some(ref cb) = *callback_inner.borrow() {
				match request_frame(cb) {
					Ok(id) => pending_cb.set(Some(id)),
					Err(e) => {
						error!("snowfield: failed to schedule frame: {:?}", e);
						running_cb.set(false);
					}
				}
			}
		}));

		let first = match *callback.borrow() {
			Some(ref cb) => request_frame(cb),
			None => Err(SurfaceError::NoWindow.into()),
		};
		let handle = Self {
			running,
			pending,
			callback,
		};
		match first {
			Ok(id) => {
				handle.pending.set(Some(id));
				Ok(handle)
			}
			Err(e) => {
				handle.stop();
				Err(e)
			}
		}
	}

	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Stop the loop, cancel any queued frame and release the frame callback.
	pub fn stop(&self) {
		let was_running = self.running.replace(false);
		if let Some(id) = self.pending.take() {
			if let Ok(window) = surface::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		self.callback.borrow_mut().take();
		if was_running {
			debug!("snowfield: animation stopped");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn idle_loop() -> FrameLoop {
		FrameLoop {
			running: Rc::new(Cell::new(true)),
			pending: Rc::new(Cell::new(None)),
			callback: Rc::new(RefCell::new(None)),
		}
	}

	#[test]
	fn stop_halts_and_is_repeatable() {
		let handle = idle_loop();
		assert!(handle.is_running());

		handle.stop();
		assert!(!handle.is_running());
		assert!(handle.callback.borrow().is_none());

		handle.stop();
		assert!(!handle.is_running());
	}
}
