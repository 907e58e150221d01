//! End-to-end OBJ loader properties.

use std::{fs, path::PathBuf};

use asset::{
    FaceRecord, MeshData, ObjError, load_mesh_data_from_obj, parse_obj, parse_obj_str,
};
use corelib::{Vec2, Vec3, math::is_unit_length};

const CUBE: &str = "\
# unit cube corner
mtllib cube.mtl
o Cube
v 1.000000 -1.000000 -1.000000
v 1.000000 -1.000000 1.000000
v -1.000000 -1.000000 1.000000
v -1.000000 -1.000000 -1.000000
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vn 0.0 -2.0 0.0
vn 0.3 0.4 0.0
vn 0 0 0
usemtl Material
s off
g bottom
f 1/1/1 2/2/1 3/3/1
f 1//1 3//1 4//1
l 1 2
";

fn temp_obj(name: &str, contents: &[u8]) -> PathBuf {
    let file = format!("asset_props_{}_{}.obj", name, std::process::id());
    let path = std::env::temp_dir().join(file);
    fs::write(&path, contents).expect("write OBJ fixture");
    path
}

#[test]
fn record_count_is_bounded_by_lines() {
    for src in [CUBE, "v 0 0 0", "", "\n\n\n", "f 1 2 3\nf 1 2 3\n"] {
        let mesh = parse_obj_str(src).expect("parse");
        let lines = src.bytes().filter(|&b| b == b'\n').count() + 1;
        assert!(
            mesh.record_count() <= lines,
            "{} records for {} lines",
            mesh.record_count(),
            lines
        );
    }
}

#[test]
fn normals_are_unit_or_zero() {
    let mesh = parse_obj_str(CUBE).expect("parse");
    assert_eq!(mesh.normals.len(), 3);
    assert!(is_unit_length(mesh.normals[0], 1e-6));
    assert!(is_unit_length(mesh.normals[1], 1e-6));
    assert!((mesh.normals[1].x - 0.6).abs() < 1e-6);
    assert_eq!(mesh.normals[0], Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(mesh.normals[2], Vec3::ZERO);
    assert!(mesh.normals.iter().all(|n| n.is_finite()));
}

#[test]
fn single_position_round_trips() {
    let mesh = parse_obj_str("v 1.0 2.0 3.0\n").expect("parse");
    assert_eq!(mesh.positions, vec![Vec3::new(1.0, 2.0, 3.0)]);
    assert!(mesh.normals.is_empty() && mesh.tex_coords.is_empty() && mesh.faces.is_empty());
}

#[test]
fn tex_coords_keep_two_components() {
    let mesh = parse_obj_str("vt 0.5 0.25\n").expect("parse");
    assert_eq!(mesh.tex_coords, vec![Vec2::new(0.5, 0.25)]);

    let mesh = parse_obj_str("vt 0.5 0.25 0.75\n").expect("parse");
    assert_eq!(mesh.tex_coords, vec![Vec2::new(0.5, 0.25)]);
}

#[test]
fn face_index_group_forms() {
    let full = parse_obj_str("f 1/2/3 4/5/6 7/8/9\n").expect("parse");
    assert_eq!(
        full.faces,
        vec![FaceRecord {
            vertex: [1, 4, 7],
            tex_coord: [2, 5, 8],
            normal: [3, 6, 9],
        }]
    );

    let no_tex = parse_obj_str("f 1//3 4//6 7//9\n").expect("parse");
    assert_eq!(
        no_tex.faces,
        vec![FaceRecord {
            vertex: [1, 4, 7],
            tex_coord: [0, 0, 0],
            normal: [3, 6, 9],
        }]
    );
}

#[test]
fn skip_only_file_is_empty() {
    let mesh = parse_obj_str("# comment\no MyObject\ng group1\n").expect("parse");
    assert_eq!(mesh, MeshData::default());
}

#[test]
fn crlf_and_lf_agree() {
    let lf = parse_obj_str(CUBE).expect("parse lf");
    let crlf = parse_obj(CUBE.replace('\n', "\r\n").as_bytes()).expect("parse crlf");
    assert_eq!(lf, crlf);
    assert_eq!(lf.positions.len(), 4);
    assert_eq!(lf.faces.len(), 2);
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("asset_props_does_not_exist.obj");
    let _ = fs::remove_file(&path);
    let err = load_mesh_data_from_obj(&path).unwrap_err();
    assert!(matches!(err, ObjError::Io { .. }), "got {err:?}");
}

#[test]
fn triangle_scenario_from_file() {
    let path = temp_obj("scenario", b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
    let mesh = load_mesh_data_from_obj(&path).expect("load");
    let _ = fs::remove_file(&path);

    assert_eq!(
        mesh.positions,
        vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)]
    );
    assert_eq!(
        mesh.faces,
        vec![FaceRecord {
            vertex: [1, 2, 3],
            tex_coord: [0, 0, 0],
            normal: [0, 0, 0],
        }]
    );
}

#[test]
fn negative_coordinates_from_file() {
    let path = temp_obj("negative", b"v -1.0 -2.5 3.0\r\nvn -1 0 0\r\n");
    let mesh = load_mesh_data_from_obj(&path).expect("load");
    let _ = fs::remove_file(&path);

    assert_eq!(mesh.positions, vec![Vec3::new(-1.0, -2.5, 3.0)]);
    assert_eq!(mesh.normals, vec![Vec3::new(-1.0, 0.0, 0.0)]);
}

#[test]
fn malformed_file_yields_no_mesh() {
    let path = temp_obj("malformed", b"v 0 0 0\n? what\n");
    let result = load_mesh_data_from_obj(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(ObjError::MalformedDirective { line: 2, byte: b'?', .. })
    ));
}
