pub mod surface;

pub use surface::{evaluate, tangents, ParamSurface, SurfaceKind, SurfacePoint};
