//! Integration tests for loading real asset files
//!
//! Each test writes a small asset (and its textures) into a temporary
//! directory, then runs the full load + analyze path on it.

use approx::assert_relative_eq;
use meshpalette_core::{Color, Error};
use meshpalette_io::{analyze, analyze_colors, load_scene};
use meshpalette_algorithms::AnalysisOptions;
use serde_json::json;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RED: Color = Color::new(255, 0, 0);
const GREEN: Color = Color::new(0, 255, 0);
const BLUE: Color = Color::new(0, 0, 255);
const WHITE: Color = Color::new(255, 255, 255);

/// 2x2 PNG: top row red, green; bottom row blue, white
fn write_checker_png(path: &Path) {
    let image = image::RgbImage::from_fn(2, 2, |x, y| match (x, y) {
        (0, 0) => image::Rgb([255, 0, 0]),
        (1, 0) => image::Rgb([0, 255, 0]),
        (0, 1) => image::Rgb([0, 0, 255]),
        _ => image::Rgb([255, 255, 255]),
    });
    image.save(path).unwrap();
}

fn f32_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Write a glTF document with an external buffer holding `sections`
///
/// Every section becomes one buffer view and one accessor, in order.
fn write_gltf(
    dir: &Path,
    sections: &[(&[f32], &str)],
    primitive: serde_json::Value,
    extra: serde_json::Value,
) -> PathBuf {
    let mut buffer = Vec::new();
    let mut views = Vec::new();
    let mut accessors = Vec::new();

    for (index, (values, kind)) in sections.iter().enumerate() {
        let bytes = f32_bytes(values);
        let components = match *kind {
            "VEC2" => 2,
            "VEC3" => 3,
            _ => 4,
        };
        views.push(json!({
            "buffer": 0,
            "byteOffset": buffer.len(),
            "byteLength": bytes.len(),
        }));
        let mut accessor = json!({
            "bufferView": index,
            "componentType": 5126,
            "count": values.len() / components,
            "type": kind,
        });
        if index == 0 {
            accessor["min"] = json!([0.0, 0.0, 0.0]);
            accessor["max"] = json!([1.0, 1.0, 0.0]);
        }
        accessors.push(accessor);
        buffer.extend(bytes);
    }

    fs::write(dir.join("scene.bin"), &buffer).unwrap();

    let mut document = json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "mesh": 0 }],
        "meshes": [{ "name": "triangle", "primitives": [primitive] }],
        "buffers": [{ "uri": "scene.bin", "byteLength": buffer.len() }],
        "bufferViews": views,
        "accessors": accessors,
    });
    if let (Some(document), Some(extra)) = (document.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            document.insert(key.clone(), value.clone());
        }
    }

    let path = dir.join("scene.gltf");
    fs::write(&path, serde_json::to_vec_pretty(&document).unwrap()).unwrap();
    path
}

const TRIANGLE: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];

#[test]
fn test_gltf_vertex_colors() {
    let dir = TempDir::new().unwrap();
    let colors = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let path = write_gltf(
        dir.path(),
        &[(&TRIANGLE, "VEC3"), (&colors, "VEC3")],
        json!({ "attributes": { "POSITION": 0, "COLOR_0": 1 }, "mode": 4 }),
        json!({}),
    );

    let entries = analyze_colors(&path, None).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].color, entries[0].count), (RED, 2));
    assert_eq!((entries[1].color, entries[1].count), (GREEN, 1));
    assert_relative_eq!(entries[0].frequency, 2.0 / 3.0);
}

#[test]
fn test_gltf_base_color_texture() {
    let dir = TempDir::new().unwrap();
    write_checker_png(&dir.path().join("checker.png"));
    let uvs = [0.25, 0.75, 0.25, 1.75, 0.75, 0.25];
    let path = write_gltf(
        dir.path(),
        &[(&TRIANGLE, "VEC3"), (&uvs, "VEC2")],
        json!({ "attributes": { "POSITION": 0, "TEXCOORD_0": 1 }, "material": 0, "mode": 4 }),
        json!({
            "materials": [{ "pbrMetallicRoughness": { "baseColorTexture": { "index": 0 } } }],
            "textures": [{ "source": 0 }],
            "images": [{ "uri": "checker.png" }],
        }),
    );

    let entries = analyze_colors(&path, None).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].color, entries[0].count), (RED, 2));
    assert_eq!((entries[1].color, entries[1].count), (WHITE, 1));
}

#[test]
fn test_gltf_points_are_not_geometry() {
    let dir = TempDir::new().unwrap();
    let colors = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let path = write_gltf(
        dir.path(),
        &[(&TRIANGLE, "VEC3"), (&colors, "VEC3")],
        json!({ "attributes": { "POSITION": 0, "COLOR_0": 1 }, "mode": 0 }),
        json!({}),
    );

    assert!(matches!(analyze_colors(&path, None), Err(Error::NoGeometry)));
}

#[test]
fn test_gltf_without_colors() {
    let dir = TempDir::new().unwrap();
    let path = write_gltf(
        dir.path(),
        &[(&TRIANGLE, "VEC3")],
        json!({ "attributes": { "POSITION": 0 }, "mode": 4 }),
        json!({}),
    );

    let scene = load_scene(&path).unwrap();
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.meshes[0].vertex_count, 3);
    assert!(matches!(analyze_colors(&path, None), Err(Error::NoColorData)));
}

#[test]
fn test_malformed_gltf_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.gltf");
    fs::write(&path, b"{ \"asset\": ").unwrap();

    assert!(matches!(analyze_colors(&path, None), Err(Error::Decode(_))));
}

#[test]
fn test_missing_asset() {
    let dir = TempDir::new().unwrap();
    let result = analyze_colors(dir.path().join("scene.gltf"), None);
    assert!(matches!(result, Err(Error::AssetNotFound { .. })));
}

#[test]
fn test_obj_with_textured_material() {
    let dir = TempDir::new().unwrap();
    write_checker_png(&dir.path().join("checker.png"));
    fs::write(
        dir.path().join("quad.mtl"),
        "newmtl checker\nKd 1.0 1.0 1.0\nmap_Kd checker.png\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("quad.obj"),
        "mtllib quad.mtl\n\
         o quad\n\
         v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
         vt 0.25 0.25\nvt 0.75 0.25\nvt 0.75 0.75\nvt 0.25 0.75\n\
         usemtl checker\n\
         f 1/1 2/2 3/3\n\
         f 1/1 3/3 4/4\n",
    )
    .unwrap();

    let report = analyze(dir.path().join("quad.obj"), &AnalysisOptions::default()).unwrap();
    assert_eq!(report.total_samples, 4);
    let colors: Vec<Color> = report.entries.iter().map(|e| e.color).collect();
    assert_eq!(colors, vec![BLUE, GREEN, RED, WHITE]);
}

#[test]
fn test_obj_with_missing_material_library() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tri.obj"),
        "mtllib missing.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl nothing\nf 1 2 3\n",
    )
    .unwrap();

    let result = analyze_colors(dir.path().join("tri.obj"), None);
    assert!(matches!(result, Err(Error::NoColorData)));
}

#[test]
fn test_obj_with_malformed_material_library() {
    let dir = TempDir::new().unwrap();
    write_checker_png(&dir.path().join("checker.png"));
    fs::write(
        dir.path().join("bad.mtl"),
        "newmtl checker\nKd not a number\nmap_Kd checker.png\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("tri.obj"),
        "mtllib bad.mtl\n\
         v 0 0 0\nv 1 0 0\nv 0 1 0\n\
         vt 0.25 0.25\nvt 0.75 0.25\nvt 0.75 0.75\n\
         usemtl checker\n\
         f 1/1 2/2 3/3\n",
    )
    .unwrap();

    let result = analyze_colors(dir.path().join("tri.obj"), None);
    assert!(matches!(result, Err(Error::Decode(_))));
}

const PLY_HEADER_COLORED: &str = "ply\n\
format ascii 1.0\n\
element vertex 3\n\
property float x\n\
property float y\n\
property float z\n\
property uchar red\n\
property uchar green\n\
property uchar blue\n\
element face 1\n\
property list uchar int vertex_indices\n\
end_header\n";

#[test]
fn test_ply_single_triangle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("triangle.ply");
    let body = "0 0 0 255 0 0\n1 0 0 255 0 0\n0 1 0 0 255 0\n3 0 1 2\n";
    fs::write(&path, format!("{}{}", PLY_HEADER_COLORED, body)).unwrap();

    let full = analyze_colors(&path, None).unwrap();
    assert_eq!(full.len(), 2);
    assert_eq!((full[0].color, full[0].count), (RED, 2));
    assert_relative_eq!(full[0].frequency, 0.6667, epsilon = 1e-4);
    assert_eq!((full[1].color, full[1].count), (GREEN, 1));
    assert_relative_eq!(full[1].frequency, 0.3333, epsilon = 1e-4);

    let top = analyze_colors(&path, NonZeroUsize::new(1)).unwrap();
    assert_eq!(top.as_slice(), &full[..1]);
}

#[test]
fn test_ply_texture_file_comment() {
    let dir = TempDir::new().unwrap();
    write_checker_png(&dir.path().join("checker.png"));
    let path = dir.path().join("textured.ply");
    fs::write(
        &path,
        "ply\n\
         format ascii 1.0\n\
         comment TextureFile checker.png\n\
         element vertex 3\n\
         property float x\n\
         property float y\n\
         property float z\n\
         property float s\n\
         property float t\n\
         element face 1\n\
         property list uchar int vertex_indices\n\
         end_header\n\
         0 0 0 0.75 0.75\n\
         1 0 0 0.75 0.75\n\
         0 1 0 0.25 0.25\n\
         3 0 1 2\n",
    )
    .unwrap();

    let entries = analyze_colors(&path, None).unwrap();
    assert_eq!((entries[0].color, entries[0].count), (GREEN, 2));
    assert_eq!((entries[1].color, entries[1].count), (BLUE, 1));
}

#[test]
fn test_ply_signed_color_channels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signed.ply");
    fs::write(
        &path,
        "ply\n\
         format ascii 1.0\n\
         element vertex 3\n\
         property float x\n\
         property float y\n\
         property float z\n\
         property short red\n\
         property short green\n\
         property char blue\n\
         element face 1\n\
         property list uchar int vertex_indices\n\
         end_header\n\
         0 0 0 300 -4 127\n\
         1 0 0 300 -4 127\n\
         0 1 0 10 20 -1\n\
         3 0 1 2\n",
    )
    .unwrap();

    let entries = analyze_colors(&path, None).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].color, entries[0].count), (Color::new(255, 0, 127), 2));
    assert_eq!((entries[1].color, entries[1].count), (Color::new(10, 20, 0), 1));
}

#[test]
fn test_ply_point_cloud_has_no_geometry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cloud.ply");
    fs::write(
        &path,
        "ply\nformat ascii 1.0\nelement vertex 1\nproperty float x\nproperty float y\nproperty float z\nend_header\n0 0 0\n",
    )
    .unwrap();

    assert!(matches!(analyze_colors(&path, None), Err(Error::NoGeometry)));
}
