use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::geometry::ParamSurface;

use super::{StripMesh, TessellateSurface, TessellationParams};

/// Tessellates several independent surfaces in parallel.
///
/// Samples depend only on their own `(u, v)`, so the jobs share nothing and
/// run on the rayon thread pool. Meshes come back in job order.
#[derive(Default)]
pub struct TessellateBatch<'a> {
    jobs: Vec<(&'a dyn ParamSurface, TessellationParams)>,
}

impl<'a> TessellateBatch<'a> {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a surface to tessellate at the given resolution.
    #[must_use]
    pub fn with(mut self, surface: &'a dyn ParamSurface, params: TessellationParams) -> Self {
        self.push(surface, params);
        self
    }

    /// Adds a job in place.
    pub fn push(&mut self, surface: &'a dyn ParamSurface, params: TessellationParams) {
        self.jobs.push((surface, params));
    }

    /// Number of queued jobs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns `true` if no jobs are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Executes all jobs, returning one mesh per job.
    ///
    /// # Errors
    ///
    /// Every job's resolution is checked before any work starts; the first
    /// invalid one is returned and no meshes are produced.
    pub fn execute(&self) -> Result<Vec<StripMesh>> {
        for (_, params) in &self.jobs {
            params.validate()?;
        }
        debug!(jobs = self.jobs.len(), "tessellating batch");
        self.jobs
            .par_iter()
            .map(|&(surface, params)| TessellateSurface::new(surface, params).execute())
            .collect()
    }
}
