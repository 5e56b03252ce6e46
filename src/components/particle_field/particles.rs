//! Falling particles for the snow background.

use std::fmt;

use rand::Rng;

use super::theme::ParticleStyle;

/// A single falling particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	/// Render radius
	pub r: f64,
	/// Fall distance per frame
	pub d: f64,
}

impl Particle {
	/// Move down by one frame's fall distance, wrapping to the top once past `height`.
	///
	/// Only `y` changes; a wrapped particle re-enters in the same column.
	pub fn advance(&mut self, height: f64) {
		self.y += self.d;
		if self.y > height {
			self.y = 0.0;
		}
	}
}

/// A particle handed to [`ParticleField::from_particles`] that could leave the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct InvalidParticle {
	pub index: usize,
	pub particle: Particle,
}

impl fmt::Display for InvalidParticle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let p = &self.particle;
		write!(
			f,
			"particle {} out of range: y={} r={} d={}",
			self.index, p.y, p.r, p.d
		)
	}
}

impl std::error::Error for InvalidParticle {}

/// Fixed-size set of particles bound to the surface size captured at startup.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	pub fn new<R: Rng>(style: &ParticleStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle {
				x: rng.random::<f64>() * width,
				y: rng.random::<f64>() * height,
				r: rng.random::<f64>() * style.radius_max,
				d: rng.random::<f64>() * style.speed_max,
			})
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Build a field from already-placed particles.
	///
	/// Every particle must start with `0 <= y <= height` and non-negative `r` and `d`,
	/// otherwise it could drift off the top and never wrap.
	pub fn from_particles(
		particles: Vec<Particle>,
		width: f64,
		height: f64,
	) -> Result<Self, InvalidParticle> {
		let in_range = |p: &Particle| {
			(0.0..=height).contains(&p.y)
				&& p.r >= 0.0
				&& p.d >= 0.0
				&& p.x.is_finite()
				&& p.r.is_finite()
				&& p.d.is_finite()
		};
		if let Some(index) = particles.iter().position(|p| !in_range(p)) {
			return Err(InvalidParticle {
				index,
				particle: particles[index],
			});
		}

		Ok(Self {
			particles,
			width,
			height,
		})
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Visit each particle in order, handing it out for drawing before it advances.
	pub(super) fn for_each_then_advance(&mut self, mut draw: impl FnMut(&Particle)) {
		for p in &mut self.particles {
			draw(p);
			p.advance(self.height);
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn field(seed: u64, width: f64, height: f64) -> ParticleField {
		let mut rng = StdRng::seed_from_u64(seed);
		ParticleField::new(&ParticleStyle::default(), width, height, &mut rng)
	}

	#[test]
	fn initial_particles_stay_within_bounds() {
		for seed in 0..20 {
			let f = field(seed, 800.0, 600.0);
			assert_eq!(f.len(), 100);
			for p in f.particles() {
				assert!((0.0..800.0).contains(&p.x), "x out of range: {}", p.x);
				assert!((0.0..600.0).contains(&p.y), "y out of range: {}", p.y);
				assert!((0.0..3.0).contains(&p.r), "r out of range: {}", p.r);
				assert!((0.0..2.0).contains(&p.d), "d out of range: {}", p.d);
			}
		}
	}

	#[test]
	fn same_seed_gives_same_field() {
		let a = field(42, 1024.0, 768.0);
		let b = field(42, 1024.0, 768.0);
		assert_eq!(a.particles(), b.particles());
	}

	#[test]
	fn zero_sized_surface_does_not_panic() {
		let f = field(7, 0.0, 0.0);
		assert_eq!(f.len(), 100);
		assert!(f.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
	}

	#[test]
	fn custom_count_is_respected() {
		let style = ParticleStyle {
			count: 3,
			..ParticleStyle::default()
		};
		let mut rng = StdRng::seed_from_u64(1);
		let f = ParticleField::new(&style, 10.0, 10.0, &mut rng);
		assert_eq!(f.len(), 3);
	}

	#[test]
	fn particle_past_bottom_wraps_to_zero() {
		let mut p = Particle {
			x: 12.0,
			y: 599.0,
			r: 1.5,
			d: 2.0,
		};
		p.advance(600.0);
		assert_eq!(p.y, 0.0);
		assert_eq!(p.x, 12.0);
		assert_eq!(p.r, 1.5);
	}

	#[test]
	fn particle_landing_exactly_on_bottom_does_not_wrap() {
		let mut p = Particle {
			x: 0.0,
			y: 598.0,
			r: 1.0,
			d: 2.0,
		};
		p.advance(600.0);
		assert_eq!(p.y, 600.0);
	}

	#[test]
	fn long_run_keeps_count_bounds_and_wrap_rule() {
		let mut f = field(2024, 800.0, 600.0);
		let initial: Vec<Particle> = f.particles().to_vec();
		let mut wraps = 0;

		for _ in 0..1000 {
			let before: Vec<Particle> = f.particles().to_vec();
			f.for_each_then_advance(|_| {});
			assert_eq!(f.len(), 100);

			for (old, new) in before.iter().zip(f.particles()) {
				assert!(new.y >= 0.0 && new.y <= 600.0, "y escaped: {}", new.y);
				if old.y + old.d > 600.0 {
					assert_eq!(new.y, 0.0);
					wraps += 1;
				} else {
					assert_eq!(new.y, old.y + old.d);
				}
			}
		}
		assert!(wraps > 0, "no particle wrapped in 1000 frames");

		for (old, new) in initial.iter().zip(f.particles()) {
			assert_eq!(old.x, new.x);
			assert_eq!(old.r, new.r);
			assert_eq!(old.d, new.d);
		}
	}

	#[test]
	fn explicit_particles_must_stay_on_the_surface() {
		let flake = |y: f64, d: f64| Particle {
			x: 10.0,
			y,
			r: 1.0,
			d,
		};

		let rising =
			ParticleField::from_particles(vec![flake(10.0, 1.0), flake(10.0, -1.5)], 800.0, 600.0);
		assert_eq!(
			rising.unwrap_err(),
			InvalidParticle {
				index: 1,
				particle: flake(10.0, -1.5),
			}
		);

		for bad in [flake(-0.5, 1.0), flake(600.5, 1.0), flake(f64::NAN, 1.0)] {
			assert!(ParticleField::from_particles(vec![bad], 800.0, 600.0).is_err());
		}
		assert!(
			ParticleField::from_particles(vec![flake(0.0, 0.0), flake(600.0, 1.9)], 800.0, 600.0)
				.is_ok()
		);
	}

	#[test]
	fn for_each_then_advance_hands_out_pre_advance_positions() {
		let mut f = ParticleField::from_particles(
			vec![
				Particle {
					x: 1.0,
					y: 10.0,
					r: 1.0,
					d: 1.0,
				},
				Particle {
					x: 2.0,
					y: 599.5,
					r: 2.0,
					d: 1.0,
				},
			],
			800.0,
			600.0,
		)
		.unwrap();

		let mut seen = Vec::new();
		f.for_each_then_advance(|p| seen.push((p.x, p.y)));

		assert_eq!(seen, vec![(1.0, 10.0), (2.0, 599.5)]);
		assert_eq!(f.particles()[0].y, 11.0);
		assert_eq!(f.particles()[1].y, 0.0);
	}
}
