use thiserror::Error;

/// Top-level error type for paramsurf.
#[derive(Debug, Error)]
pub enum ParamsurfError {
    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to tessellation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TessellationError {
    #[error("invalid tessellation resolution: {axis} = {value} is zero or too large")]
    InvalidResolution { axis: &'static str, value: usize },
}

/// Errors related to scene assembly.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("degenerate transform: {0}")]
    Degenerate(String),

    #[error("unknown surface: {0}")]
    UnknownSurface(String),
}

/// Convenience type alias for results using [`ParamsurfError`].
pub type Result<T> = std::result::Result<T, ParamsurfError>;
