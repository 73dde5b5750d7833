//! Parsers for the `buffers` and `bufferViews` sections.

use serde_json::{Map, Value};

use gltf_core::buffer::{Buffer, BufferData, BufferView, BufferViewTarget};
use gltf_core::error::Result;

use crate::json;

pub(crate) fn parse(root: &Map<String, Value>) -> Result<Vec<Buffer>> {
    json::parse_section(root, "buffers", parse_buffer)
}

fn parse_buffer(obj: &Map<String, Value>, index: usize) -> Result<Buffer> {
    const ENTITY: &str = "buffers";

    let mut byte_length = None;
    let mut data = BufferData::Missing;
    let mut name = None;

    for (key, value) in obj {
        match key.as_str() {
            "byteLength" => byte_length = Some(json::usize_value(value, ENTITY, index, "byteLength")?),
            "uri" => data = BufferData::Uri(json::string_value(value, ENTITY, index, "uri")?),
            "name" => name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(Buffer {
        byte_length: byte_length.ok_or_else(|| json::missing(ENTITY, index, "byteLength"))?,
        data,
        name,
    })
}

pub(crate) fn parse_views(root: &Map<String, Value>) -> Result<Vec<BufferView>> {
    json::parse_section(root, "bufferViews", parse_view)
}

fn parse_view(obj: &Map<String, Value>, index: usize) -> Result<BufferView> {
    const ENTITY: &str = "bufferViews";

    let mut buffer = None;
    let mut byte_offset = 0;
    let mut byte_length = None;
    let mut byte_stride = None;
    let mut target = None;
    let mut name = None;

    for (key, value) in obj {
        match key.as_str() {
            "buffer" => buffer = Some(json::usize_value(value, ENTITY, index, "buffer")?),
            "byteOffset" => byte_offset = json::usize_value(value, ENTITY, index, "byteOffset")?,
            "byteLength" => byte_length = Some(json::usize_value(value, ENTITY, index, "byteLength")?),
            "byteStride" => byte_stride = Some(json::usize_value(value, ENTITY, index, "byteStride")?),
            "target" => {
                let code = json::u64_value(value, ENTITY, index, "target")?;
                target = Some(
                    BufferViewTarget::from_gl(code)
                        .ok_or_else(|| json::invalid(ENTITY, index, "target", value))?,
                );
            }
            "name" => name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(BufferView {
        buffer: buffer.ok_or_else(|| json::missing(ENTITY, index, "buffer"))?,
        byte_offset,
        byte_length: byte_length.ok_or_else(|| json::missing(ENTITY, index, "byteLength"))?,
        byte_stride,
        target,
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gltf_core::error::GltfError;
    use serde_json::json;

    fn root(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn buffer_uri_stays_an_unresolved_string() {
        let buffers = parse(&root(json!({
            "buffers": [{"byteLength": 64, "uri": "mesh.bin"}]
        })))
        .unwrap();
        assert_eq!(buffers[0].byte_length, 64);
        assert_eq!(buffers[0].data, BufferData::Uri("mesh.bin".into()));
    }

    #[test]
    fn buffer_without_uri_is_a_chunk_placeholder() {
        let buffers = parse(&root(json!({"buffers": [{"byteLength": 16}]}))).unwrap();
        assert_eq!(buffers[0].data, BufferData::Missing);
    }

    #[test]
    fn byte_length_is_required_on_both_entities() {
        let err = parse(&root(json!({"buffers": [{"uri": "a.bin"}]}))).unwrap_err();
        assert!(matches!(
            err,
            GltfError::MissingRequiredParameter { entity: "buffers", field: "byteLength", .. }
        ));

        let err = parse_views(&root(json!({"bufferViews": [{"buffer": 0}]}))).unwrap_err();
        assert!(matches!(
            err,
            GltfError::MissingRequiredParameter { entity: "bufferViews", field: "byteLength", .. }
        ));
    }

    #[test]
    fn view_parses_stride_and_target() {
        let views = parse_views(&root(json!({
            "bufferViews": [
                {"buffer": 0, "byteOffset": 8, "byteLength": 96, "byteStride": 24, "target": 34962}
            ]
        })))
        .unwrap();
        let view = &views[0];
        assert_eq!(view.byte_offset, 8);
        assert_eq!(view.byte_stride, Some(24));
        assert_eq!(view.target, Some(BufferViewTarget::ArrayBuffer));
    }

    #[test]
    fn unknown_view_target_is_invalid() {
        let err = parse_views(&root(json!({
            "bufferViews": [{"buffer": 0, "byteLength": 4, "target": 1234}]
        })))
        .unwrap_err();
        assert!(matches!(err, GltfError::InvalidType { field: "target", .. }));
    }
}
