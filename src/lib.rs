//! Parametric surface tessellation.
//!
//! Surfaces are closed-form mappings from `(u, v)` to 3D position. Each
//! mapping is evaluated with [`Dual2`] inputs, so the partial derivatives
//! fall out of the arithmetic and give an analytic normal at every sample.
//! The tessellator samples a regular grid and emits triangle strips.

pub mod error;
pub mod geometry;
pub mod math;
pub mod scene;
pub mod tessellation;

pub use error::{ParamsurfError, Result};
pub use geometry::{evaluate, ParamSurface, SurfaceKind, SurfacePoint};
pub use math::Dual2;
pub use tessellation::{StripMesh, TessellateSurface, TessellationParams};
