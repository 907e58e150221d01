//! Wavefront OBJ loader producing [`MeshData`].
//!
//! Supported directives: `v`, `vt`, `vn` and triangular `f` lines. `mtllib`,
//! `usemtl`, `s`, `o`, `l`, `g` and comments are skipped. Any other leading
//! byte aborts with [`crate::ObjError::MalformedDirective`].

use std::path::Path;

use corelib::{Vec2, Vec3, math::noz_vec3};

use crate::{
    error::ObjResult,
    fields::{self, Components},
    mesh::{FaceRecord, IndexGroup, MeshData},
    note::ParseNote,
    scanner::{Directive, Scanner},
    source::RawSource,
};

/// Load an OBJ mesh from a file path.
pub fn load_mesh_data_from_obj(path: impl AsRef<Path>) -> ObjResult<MeshData> {
    load_mesh_data_from_obj_with_notes(path).map(|(mesh, _)| mesh)
}

/// Load an OBJ mesh from a file path, also returning the quality notes.
pub fn load_mesh_data_from_obj_with_notes(
    path: impl AsRef<Path>,
) -> ObjResult<(MeshData, Vec<ParseNote>)> {
    let path = path.as_ref();
    let source = RawSource::read(path)?;
    let (mesh, notes) = parse_source(&source)?;
    log::info!(
        "Loaded {}: {} positions, {} normals, {} tex coords, {} faces",
        path.display(),
        mesh.positions.len(),
        mesh.normals.len(),
        mesh.tex_coords.len(),
        mesh.faces.len()
    );
    Ok((mesh, notes))
}

/// Parse in-memory OBJ contents.
pub fn parse_obj(contents: &[u8]) -> ObjResult<MeshData> {
    parse_obj_with_notes(contents).map(|(mesh, _)| mesh)
}

/// Convenience helper to parse an OBJ string literal.
pub fn parse_obj_str(contents: &str) -> ObjResult<MeshData> {
    parse_obj(contents.as_bytes())
}

pub fn parse_obj_with_notes(contents: &[u8]) -> ObjResult<(MeshData, Vec<ParseNote>)> {
    parse_source(&RawSource::from_bytes(contents))
}

/// Single left-to-right pass over `source`.
pub fn parse_source(source: &RawSource) -> ObjResult<(MeshData, Vec<ParseNote>)> {
    // At most one record per line.
    let line_count = source.line_count();
    let mut mesh = MeshData::with_capacity(line_count + 1);
    let mut notes = Vec::new();
    let mut scanner = Scanner::new(source);

    loop {
        let directive = scanner.classify()?;
        match directive {
            Directive::End => break,
            Directive::Skip(kind) => {
                log::trace!("line {}: skipping {:?}", scanner.line(), kind);
                scanner.consume(directive);
            }
            Directive::Whitespace | Directive::LineBreak { .. } => scanner.consume(directive),
            Directive::Position => {
                let [x, y, z] = vector_fields::<3>(&mut scanner, directive, &mut notes);
                mesh.positions.push(Vec3::new(x, y, z));
            }
            Directive::TexCoord => {
                let [u, v] = vector_fields::<2>(&mut scanner, directive, &mut notes);
                mesh.tex_coords.push(Vec2::new(u, v));
            }
            Directive::Normal => {
                let [x, y, z] = vector_fields::<3>(&mut scanner, directive, &mut notes);
                mesh.normals.push(noz_vec3(Vec3::new(x, y, z)));
            }
            Directive::Face => {
                let face = face_record(&mut scanner, &mesh, &mut notes);
                mesh.faces.push(face);
            }
        }
    }

    log::debug!(
        "Parsed {} lines into {} records ({} notes)",
        line_count + 1,
        mesh.record_count(),
        notes.len()
    );
    for note in &notes {
        log::warn!("{note}");
    }
    Ok((mesh, notes))
}

fn vector_fields<const N: usize>(
    scanner: &mut Scanner<'_>,
    directive: Directive,
    notes: &mut Vec<ParseNote>,
) -> [f32; N] {
    scanner.consume(directive);
    let Components {
        values,
        first_missing,
    } = fields::parse_components::<N>(scanner.cursor());
    if let Some(index) = first_missing {
        notes.push(ParseNote::MissingComponent {
            line: scanner.line(),
            directive,
            index,
        });
    }
    scanner.next_line();
    values
}

fn face_record(
    scanner: &mut Scanner<'_>,
    mesh: &MeshData,
    notes: &mut Vec<ParseNote>,
) -> FaceRecord {
    scanner.consume(Directive::Face);
    let fields = fields::parse_face(scanner.cursor());
    let line = scanner.line();

    if fields.found < 3 {
        notes.push(ParseNote::MissingIndexGroup {
            line,
            group: fields.found,
        });
    } else if fields.extra > 0 {
        notes.push(ParseNote::NonTriangularFace {
            line,
            corners: 3 + fields.extra,
        });
    }
    scanner.next_line();

    FaceRecord::from_groups(fields.groups.map(|g| absolute(g, mesh)))
}

/// Rewrite negative (relative) indices as 1-based ones against the counts
/// parsed so far. References before the start stay negative.
fn absolute(group: IndexGroup, mesh: &MeshData) -> IndexGroup {
    let resolve = |index: i32, len: usize| {
        if index >= 0 {
            return index;
        }
        let abs = len as i64 + i64::from(index) + 1;
        if abs > 0 { abs as i32 } else { index }
    };
    IndexGroup::new(
        resolve(group.vertex, mesh.positions.len()),
        resolve(group.tex_coord, mesh.tex_coords.len()),
        resolve(group.normal, mesh.normals.len()),
    )
}
