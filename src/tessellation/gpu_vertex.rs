use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::geometry::SurfacePoint;

/// Interleaved single-precision vertex as uploaded to a vertex buffer.
///
/// Attribute 0 is the position, 1 the normal and 2 the texture coordinate.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unnormalized surface normal.
    pub normal: [f32; 3],
    /// Parameter coordinates `(u, v)`.
    pub texcoord: [f32; 2],
}

impl GpuVertex {
    /// Byte distance between consecutive vertices.
    pub const STRIDE: usize = size_of::<GpuVertex>();
    /// Byte offset of [`position`](Self::position).
    pub const POSITION_OFFSET: usize = offset_of!(GpuVertex, position);
    /// Byte offset of [`normal`](Self::normal).
    pub const NORMAL_OFFSET: usize = offset_of!(GpuVertex, normal);
    /// Byte offset of [`texcoord`](Self::texcoord).
    pub const TEXCOORD_OFFSET: usize = offset_of!(GpuVertex, texcoord);

    /// Reinterprets a vertex slice as raw bytes for upload.
    #[must_use]
    pub fn as_bytes(vertices: &[GpuVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

impl From<&SurfacePoint> for GpuVertex {
    #[allow(clippy::cast_possible_truncation)]
    fn from(p: &SurfacePoint) -> Self {
        Self {
            position: [p.position.x as f32, p.position.y as f32, p.position.z as f32],
            normal: [p.normal.x as f32, p.normal.y as f32, p.normal.z as f32],
            texcoord: [p.texcoord.x as f32, p.texcoord.y as f32],
        }
    }
}
