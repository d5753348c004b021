use crate::geometry::SurfaceKind;
use crate::math::Vector3;
use crate::tessellation::TessellationParams;

use super::Transform;

/// One surface instance in a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectConfig {
    /// Catalog surface to tessellate.
    pub surface: SurfaceKind,
    /// Placement of the instance.
    pub transform: Transform,
    /// Overrides the scene-wide resolution for this object.
    pub resolution: Option<TessellationParams>,
}

impl ObjectConfig {
    /// Creates an object at the scene-wide resolution.
    #[must_use]
    pub fn new(surface: SurfaceKind, transform: Transform) -> Self {
        Self {
            surface,
            transform,
            resolution: None,
        }
    }

    /// Places the object at `translation`.
    #[must_use]
    pub fn at(mut self, translation: Vector3) -> Self {
        self.transform = self.transform.translated(translation);
        self
    }

    /// Tessellates this object at `resolution` instead of the scene's.
    #[must_use]
    pub fn with_resolution(mut self, resolution: TessellationParams) -> Self {
        self.resolution = Some(resolution);
        self
    }
}

/// Everything needed to assemble a [`Scene`](super::Scene).
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Resolution for objects without their own.
    pub resolution: TessellationParams,
    /// Objects in draw order.
    pub objects: Vec<ObjectConfig>,
}

impl SceneConfig {
    /// A scene with no objects at the default resolution.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            resolution: TessellationParams::default(),
            objects: Vec::new(),
        }
    }

    /// Appends an object.
    #[must_use]
    pub fn with_object(mut self, object: ObjectConfig) -> Self {
        self.objects.push(object);
        self
    }
}

impl Default for SceneConfig {
    /// The demo scene at rest: a large floor, a squat drum with its lid, and
    /// a stack of balls and posts topped by a paraboloid bowl. Each post
    /// stands on the ball below it and each ball sits on the post's top.
    fn default() -> Self {
        let object = |surface: SurfaceKind, (sx, sy, sz): (f64, f64, f64), at: [f64; 3]| {
            ObjectConfig::new(surface, Transform::scaled(sx, sy, sz)).at(Vector3::from(at))
        };
        Self {
            resolution: TessellationParams::default(),
            objects: vec![
                object(SurfaceKind::Plane, (16.0, 16.0, 16.0), [0.0, -3.5, 0.0]),
                object(SurfaceKind::Cylinder, (2.0, 0.5, 2.0), [0.0, -3.5, 0.0]),
                object(SurfaceKind::CylinderCap, (2.01, 0.25, 2.01), [0.0, -3.0, 0.0]),
                object(SurfaceKind::Sphere, (0.5, 0.5, 0.5), [0.0, -3.0, 0.0]),
                object(SurfaceKind::Cylinder, (0.3, 2.0, 0.3), [0.0, -3.0, 0.0]),
                object(SurfaceKind::Sphere, (0.5, 0.5, 0.5), [0.0, -1.0, 0.0]),
                object(SurfaceKind::Cylinder, (0.3, 2.0, 0.3), [0.0, -1.0, 0.0]),
                object(SurfaceKind::Sphere, (0.5, 0.5, 0.5), [0.0, 1.0, 0.0]),
                object(SurfaceKind::Paraboloid, (2.0, 1.5, 2.0), [0.0, 1.0, 0.0]),
            ],
        }
    }
}
