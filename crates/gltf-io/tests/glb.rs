//! End-to-end: a GLB container through parsing down to typed accessor data.

use gltf_core::buffer::BufferData;
use gltf_core::slice::AccessorSlice;
use gltf_io::glb::{CHUNK_BIN, CHUNK_JSON, GLB_MAGIC, HEADER_SIZE};
use gltf_io::{parse, ParseOptions};
use serde_json::json;

fn chunk(chunk_type: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(&chunk_type.to_le_bytes());
    out.extend_from_slice(payload);
    out
}

fn container(chunks: &[Vec<u8>]) -> Vec<u8> {
    let body: usize = chunks.iter().map(Vec::len).sum();
    let mut out = Vec::new();
    out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&((HEADER_SIZE + body) as u32).to_le_bytes());
    for chunk in chunks {
        out.extend_from_slice(chunk);
    }
    out
}

fn f32_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[test]
fn glb_triangle_parses_down_to_typed_positions() {
    let positions = [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let position_bytes = f32_bytes(&positions);
    let index_bytes: Vec<u8> = [0u16, 1, 2].iter().flat_map(|v| v.to_le_bytes()).collect();

    let doc_json = json!({
        "asset": {"version": "2.0", "generator": "integration test"},
        "buffers": [
            {"byteLength": position_bytes.len()},
            {"byteLength": index_bytes.len()}
        ],
        "bufferViews": [
            {"buffer": 0, "byteOffset": 0, "byteLength": position_bytes.len(), "target": 34962},
            {"buffer": 1, "byteOffset": 0, "byteLength": index_bytes.len(), "target": 34963}
        ],
        "accessors": [
            {
                "bufferView": 0,
                "componentType": 5126,
                "count": 3,
                "type": "VEC3",
                "min": [0.0, 0.0, 0.0],
                "max": [1.0, 1.0, 0.0]
            },
            {"bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR"}
        ],
        "meshes": [
            {"primitives": [{"attributes": {"POSITION": 0}, "indices": 1}]}
        ],
        "nodes": [{"mesh": 0}],
        "scenes": [{"nodes": [0]}],
        "scene": 0
    })
    .to_string();

    let data = container(&[
        chunk(CHUNK_JSON, doc_json.as_bytes()),
        chunk(CHUNK_BIN, &position_bytes),
        chunk(CHUNK_BIN, &index_bytes),
    ]);

    let options = ParseOptions {
        binary: true,
        ..ParseOptions::default()
    };
    let doc = parse(&data, &options).unwrap();

    // Both URI-less buffers picked up their chunk in file order.
    assert_eq!(doc.buffers[0].data, BufferData::Bytes(position_bytes.clone()));
    assert_eq!(doc.buffers[1].data, BufferData::Bytes(index_bytes));

    // The scene graph survived intact.
    assert_eq!(doc.scene, Some(0));
    assert_eq!(doc.scenes[0].nodes, vec![0]);
    assert_eq!(doc.nodes[0].mesh, Some(0));
    let primitive = &doc.meshes[0].primitives[0];
    assert_eq!(primitive.attributes["POSITION"], 0);
    assert_eq!(primitive.indices, Some(1));

    // Typed access reproduces the exact bytes written into the BIN chunk.
    match doc.buffer_slice(0).unwrap() {
        AccessorSlice::Vec3F32(slice) => {
            assert_eq!(slice.len(), 3);
            assert_eq!(slice[0], [0.0, 0.0, 0.0]);
            assert_eq!(slice[1], [1.0, 0.0, 0.0]);
            assert_eq!(slice[2], [0.0, 1.0, 0.0]);
        }
        other => panic!("wrong variant: {other:?}"),
    }
    match doc.buffer_slice(1).unwrap() {
        AccessorSlice::ScalarU16(slice) => assert_eq!(slice, &[0, 1, 2]),
        other => panic!("wrong variant: {other:?}"),
    }

    // The strided path agrees with the flat one on packed data.
    let positions_iter: Vec<[f32; 3]> = doc.buffer_iter(0).unwrap().typed().collect();
    assert_eq!(
        positions_iter,
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
    );
}

#[test]
fn broken_json_chunk_fails_the_whole_parse() {
    let data = container(&[chunk(CHUNK_JSON, b"{\"asset\":")]);
    let options = ParseOptions {
        binary: true,
        ..ParseOptions::default()
    };
    assert!(matches!(
        parse(&data, &options),
        Err(gltf_io::GltfError::Json(_))
    ));
}
