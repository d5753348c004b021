mod config;
mod transform;

pub use config::{ObjectConfig, SceneConfig};
pub use transform::Transform;

use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::geometry::{ParamSurface, SurfaceKind};
use crate::math::Matrix4;
use crate::tessellation::{StripMesh, TessellateBatch};

/// A tessellated surface instance.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Catalog surface the mesh was sampled from.
    pub surface: SurfaceKind,
    /// Placement of the mesh in world space.
    pub transform: Transform,
    /// Shared read-only with whatever renders it.
    pub mesh: Arc<StripMesh>,
}

impl SceneObject {
    /// Object-to-world matrix.
    #[must_use]
    pub fn model_matrix(&self) -> Matrix4 {
        self.transform.model_matrix()
    }

    /// World-to-object matrix.
    #[must_use]
    pub fn inverse_model_matrix(&self) -> Matrix4 {
        self.transform.inverse_model_matrix()
    }
}

/// The assembled scene: one mesh per configured object, in config order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Objects in config order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Total vertices across all meshes.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.objects.iter().map(|o| o.mesh.vertex_count()).sum()
    }
}

/// Builds a [`Scene`] from a [`SceneConfig`].
pub struct SceneBuilder {
    config: SceneConfig,
}

impl SceneBuilder {
    /// Creates a new `SceneBuilder`.
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    /// Validates every object and tessellates them all in parallel.
    ///
    /// # Errors
    ///
    /// Returns an error if any transform is degenerate or any resolution is
    /// zero. Nothing is tessellated in that case.
    pub fn build(&self) -> Result<Scene> {
        let mut batch = TessellateBatch::new();
        for object in &self.config.objects {
            object.transform.validate()?;
            let params = object.resolution.unwrap_or(self.config.resolution);
            batch.push(&object.surface as &dyn ParamSurface, params);
        }
        let meshes = batch.execute()?;

        let objects: Vec<SceneObject> = self
            .config
            .objects
            .iter()
            .zip(meshes)
            .map(|(object, mesh)| SceneObject {
                surface: object.surface,
                transform: object.transform,
                mesh: Arc::new(mesh),
            })
            .collect();

        let scene = Scene { objects };
        info!(
            objects = scene.len(),
            vertices = scene.vertex_count(),
            "scene built"
        );
        Ok(scene)
    }
}
