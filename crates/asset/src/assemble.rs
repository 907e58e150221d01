//! Consumer-side assembly: validate face indices and build an
//! [`IndexedMesh`] with one vertex per unique corner.

use std::collections::HashMap;

use crate::{
    error::{Attribute, ObjError, ObjResult},
    mesh::{IndexGroup, IndexedMesh, MeshData, MeshVertex},
};

const DEFAULT_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];
const DEFAULT_UV: [f32; 2] = [0.0, 0.0];

/// Zero-based (position, tex coord, normal) of one corner.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
struct Key(usize, Option<usize>, Option<usize>);

impl IndexedMesh {
    /// Resolve every face corner of `data` into deduplicated vertices.
    ///
    /// A vertex index must be in `1..=positions.len()`. Tex-coord and
    /// normal slots of `0` are absent and take `(0, 0)` / `(0, 0, 1)`.
    pub fn from_mesh_data(data: &MeshData) -> ObjResult<Self> {
        let mut unique: HashMap<Key, u32> = HashMap::new();
        let mut vertices: Vec<MeshVertex> = Vec::new();
        let mut indices: Vec<u32> = Vec::with_capacity(data.faces.len() * 3);

        for (face_no, face) in data.faces.iter().enumerate() {
            for (corner, group) in face.corners().into_iter().enumerate() {
                let at = Corner {
                    face: face_no,
                    corner,
                };
                let key = at.resolve(group, data)?;
                let index = match unique.get(&key) {
                    Some(&idx) => idx,
                    None => {
                        let Key(vi, ti, ni) = key;
                        let position = data.positions[vi].to_array();
                        let uv = ti.map_or(DEFAULT_UV, |i| data.tex_coords[i].to_array());
                        let normal = ni.map_or(DEFAULT_NORMAL, |i| data.normals[i].to_array());

                        let idx = next_index(vertices.len())?;
                        vertices.push(MeshVertex::new(position, normal, uv));
                        unique.insert(key, idx);
                        idx
                    }
                };
                indices.push(index);
            }
        }

        log::debug!(
            "Assembled {} faces into {} unique vertices",
            data.faces.len(),
            vertices.len()
        );
        Ok(IndexedMesh::new(vertices, indices))
    }
}

/// Index buffer entry for the vertex about to be pushed at `len`.
fn next_index(len: usize) -> ObjResult<u32> {
    u32::try_from(len).map_err(|_| ObjError::TooManyVertices)
}

/// Location of a corner, for error reporting.
#[derive(Clone, Copy)]
struct Corner {
    face: usize,
    corner: usize,
}

impl Corner {
    fn resolve(self, group: IndexGroup, data: &MeshData) -> ObjResult<Key> {
        let vertex = self.index(group.vertex, data.positions.len(), Attribute::Position)?;
        let tex = self.optional(group.tex_coord, data.tex_coords.len(), Attribute::TexCoord)?;
        let normal = self.optional(group.normal, data.normals.len(), Attribute::Normal)?;
        Ok(Key(vertex, tex, normal))
    }

    fn optional(self, index: i32, len: usize, attribute: Attribute) -> ObjResult<Option<usize>> {
        if index == 0 {
            return Ok(None);
        }
        self.index(index, len, attribute).map(Some)
    }

    /// 1-based `index` to a zero-based one, or `IndexOutOfRange`.
    fn index(self, index: i32, len: usize, attribute: Attribute) -> ObjResult<usize> {
        match usize::try_from(index) {
            Ok(i) if (1..=len).contains(&i) => Ok(i - 1),
            _ => Err(ObjError::IndexOutOfRange {
                face: self.face,
                corner: self.corner,
                attribute,
                index,
                len,
            }),
        }
    }
}
