use std::fmt;
use std::str::FromStr;

use crate::error::SceneError;
use crate::math::Dual2;

use super::{
    Boy, Cylinder, CylinderCap, Dini, KleinBottle, Mobius, ParamSurface, Paraboloid, Plane,
    Sphere, Torus, Tractricoid,
};

/// Every surface in the catalog, selectable by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Unit sphere, see [`Sphere`].
    Sphere,
    /// Open unit cylinder, see [`Cylinder`].
    Cylinder,
    /// Square in the XZ plane, see [`Plane`].
    Plane,
    /// Upward paraboloid bowl, see [`Paraboloid`].
    Paraboloid,
    /// Unit disk closing a cylinder, see [`CylinderCap`].
    CylinderCap,
    /// Ring torus, see [`Torus`].
    Torus,
    /// Mobius strip, see [`Mobius`].
    Mobius,
    /// Klein bottle immersion, see [`KleinBottle`].
    KleinBottle,
    /// Boy's surface, see [`Boy`].
    Boy,
    /// Dini's surface, see [`Dini`].
    Dini,
    /// Pseudosphere, see [`Tractricoid`].
    Tractricoid,
}

impl SurfaceKind {
    /// All catalog entries, in declaration order.
    pub const ALL: [SurfaceKind; 11] = [
        SurfaceKind::Sphere,
        SurfaceKind::Cylinder,
        SurfaceKind::Plane,
        SurfaceKind::Paraboloid,
        SurfaceKind::CylinderCap,
        SurfaceKind::Torus,
        SurfaceKind::Mobius,
        SurfaceKind::KleinBottle,
        SurfaceKind::Boy,
        SurfaceKind::Dini,
        SurfaceKind::Tractricoid,
    ];

    fn mapping(self) -> &'static dyn ParamSurface {
        match self {
            SurfaceKind::Sphere => &Sphere,
            SurfaceKind::Cylinder => &Cylinder,
            SurfaceKind::Plane => &Plane,
            SurfaceKind::Paraboloid => &Paraboloid,
            SurfaceKind::CylinderCap => &CylinderCap,
            SurfaceKind::Torus => &Torus,
            SurfaceKind::Mobius => &Mobius,
            SurfaceKind::KleinBottle => &KleinBottle,
            SurfaceKind::Boy => &Boy,
            SurfaceKind::Dini => &Dini,
            SurfaceKind::Tractricoid => &Tractricoid,
        }
    }
}

impl ParamSurface for SurfaceKind {
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
        self.mapping().eval(u, v)
    }

    fn name(&self) -> &'static str {
        self.mapping().name()
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SurfaceKind {
    type Err = SceneError;

    /// Parses a surface name, ignoring case, `-`, `_` and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        SurfaceKind::ALL
            .into_iter()
            .find(|kind| kind.name().replace('-', "") == key)
            .ok_or_else(|| SceneError::UnknownSurface(s.to_owned()))
    }
}
