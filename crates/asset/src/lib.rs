//! Asset loading: Wavefront OBJ meshes.
//! Raw parse output ([`MeshData`]) plus an optional indexed, upload-ready
//! form ([`IndexedMesh`]).

pub mod assemble;
pub mod error;
pub mod fields;
pub mod mesh;
pub mod note;
pub mod obj;
pub mod scanner;
pub mod source;

pub use error::{Attribute, ObjError, ObjResult};
pub use mesh::{FaceRecord, IndexGroup, IndexedMesh, MeshData, MeshVertex};
pub use note::ParseNote;
pub use obj::{
    load_mesh_data_from_obj, load_mesh_data_from_obj_with_notes, parse_obj, parse_obj_str,
    parse_obj_with_notes, parse_source,
};
pub use source::RawSource;
