//! Per-frame drawing of the particle field.
//!
//! Each step clears the whole surface, sets the fill color once, then draws
//! every particle at its current position before moving it down.

use super::particles::ParticleField;
use super::surface::Surface;
use super::theme::ParticleStyle;

/// Owns a particle field together with the surface it is painted on.
pub struct ParticleFieldRenderer<S: Surface> {
	field: ParticleField,
	surface: S,
	style: ParticleStyle,
}

impl<S: Surface> ParticleFieldRenderer<S> {
	pub fn new(field: ParticleField, surface: S, style: ParticleStyle) -> Self {
		Self {
			field,
			surface,
			style,
		}
	}

	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Paint one frame and advance the field.
	pub fn step(&mut self) {
		let (width, height) = (self.field.width(), self.field.height());
		let surface = &mut self.surface;

		surface.clear(0.0, 0.0, width, height);
		surface.set_fill_color(self.style.color);

		self.field
			.for_each_then_advance(|p| surface.fill_circle(p.x, p.y, p.r));
	}

	/// Run a fixed number of frames back to back.
	pub fn run_steps(&mut self, steps: usize) {
		for _ in 0..steps {
			self.step();
		}
	}
}
