//! CPU-side mesh representations: raw parse output and the indexed,
//! upload-ready form.

use bytemuck::{Pod, Zeroable};
use corelib::{Vec2, Vec3};

/// One face corner as written in the source: 1-based, `0` when absent,
/// negative for references relative to the end of the array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexGroup {
    pub vertex: i32,
    pub tex_coord: i32,
    pub normal: i32,
}

impl IndexGroup {
    pub const fn new(vertex: i32, tex_coord: i32, normal: i32) -> Self {
        Self {
            vertex,
            tex_coord,
            normal,
        }
    }
}

/// A triangular face: three parallel index triples, one slot per corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceRecord {
    pub vertex: [i32; 3],
    pub tex_coord: [i32; 3],
    pub normal: [i32; 3],
}

impl FaceRecord {
    pub fn from_groups(groups: [IndexGroup; 3]) -> Self {
        Self {
            vertex: groups.map(|g| g.vertex),
            tex_coord: groups.map(|g| g.tex_coord),
            normal: groups.map(|g| g.normal),
        }
    }

    #[inline]
    pub fn corner(&self, i: usize) -> IndexGroup {
        IndexGroup::new(self.vertex[i], self.tex_coord[i], self.normal[i])
    }

    pub fn corners(&self) -> [IndexGroup; 3] {
        [self.corner(0), self.corner(1), self.corner(2)]
    }
}

/// Parse result of an OBJ file. Indices in `faces` are kept as written
/// and are not checked against the attribute arrays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    /// Unit length, or zero for an all-zero source normal.
    pub normals: Vec<Vec3>,
    pub tex_coords: Vec<Vec2>,
    pub faces: Vec<FaceRecord>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve every array for `records` entries. A capacity hint only.
    pub fn with_capacity(records: usize) -> Self {
        Self {
            positions: Vec::with_capacity(records),
            normals: Vec::with_capacity(records),
            tex_coords: Vec::with_capacity(records),
            faces: Vec::with_capacity(records),
        }
    }

    /// Total number of data records across all arrays.
    pub fn record_count(&self) -> usize {
        self.positions.len() + self.normals.len() + self.tex_coords.len() + self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

/// Vertex with position/normal/uv. Values are in object space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// Indexed triangle mesh with tightly-packed vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    pub fn new(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Returns `true` if both vertex and index buffers are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.vertices.is_empty() && !self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer contents, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents (`u32`), ready for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
