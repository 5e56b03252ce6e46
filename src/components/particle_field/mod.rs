//! Falling snow particle field.
//!
//! Paints a fixed set of small white particles on a full-window canvas and
//! moves each one down by its own speed every frame. A particle that drops
//! below the bottom edge re-enters at the top of the same column.
//!
//! - [`ParticleField`] holds the particles and the surface size captured at startup
//! - [`ParticleFieldRenderer`] paints a field onto any [`Surface`]
//! - [`FrameLoop`] drives the renderer from `requestAnimationFrame`
//!
//! # Example
//!
//! ```ignore
//! use rand::{SeedableRng, rngs::StdRng};
//! use snowfield::{ParticleField, ParticleFieldRenderer, ParticleStyle};
//!
//! let style = ParticleStyle::default();
//! let field = ParticleField::new(&style, 800.0, 600.0, &mut StdRng::seed_from_u64(1));
//! let mut renderer = ParticleFieldRenderer::new(field, my_surface, style);
//! renderer.run_steps(1000);
//! ```

mod component;
mod frame_loop;
mod particles;
mod render;
pub mod surface;
pub mod theme;

pub use component::{ParticleFieldCanvas, start_on_canvas};
pub use frame_loop::FrameLoop;
pub use particles::{InvalidParticle, Particle, ParticleField};
pub use render::ParticleFieldRenderer;
pub use surface::{DEFAULT_CANVAS_ID, Surface, SurfaceError};
pub use theme::{Color, ParticleStyle};
