//! Visual style for the particle field.
//!
//! The field has a single look: small white flakes on a transparent canvas.
//! Values live here as compile-time defaults rather than scattered literals.

/// Opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Particle field configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of particles, fixed for the lifetime of a field
	pub count: usize,
	/// Fill color for every particle
	pub color: Color,
	/// Exclusive upper bound on particle radius
	pub radius_max: f64,
	/// Exclusive upper bound on per-frame fall speed
	pub speed_max: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 100,
			color: Color::WHITE,
			radius_max: 3.0,
			speed_max: 2.0,
		}
	}
}
