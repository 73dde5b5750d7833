//! Parser for the `accessors` section, including sparse overrides.

use serde_json::{Map, Value};

use gltf_core::accessor::{
    Accessor, AccessorType, ComponentType, Sparse, SparseIndices, SparseValues,
};
use gltf_core::error::Result;

use crate::json;

const ENTITY: &str = "accessors";

pub(crate) fn parse(root: &Map<String, Value>) -> Result<Vec<Accessor>> {
    json::parse_section(root, "accessors", parse_accessor)
}

fn parse_accessor(obj: &Map<String, Value>, index: usize) -> Result<Accessor> {
    let mut buffer_view = None;
    let mut byte_offset = 0;
    let mut component_type = None;
    let mut count = None;
    let mut accessor_type = None;
    let mut normalized = false;
    let mut min = Vec::new();
    let mut max = Vec::new();
    let mut sparse = None;
    let mut name = None;

    for (key, value) in obj {
        match key.as_str() {
            "bufferView" => {
                buffer_view = Some(json::usize_value(value, ENTITY, index, "bufferView")?)
            }
            "byteOffset" => byte_offset = json::usize_value(value, ENTITY, index, "byteOffset")?,
            "componentType" => {
                let code = json::u64_value(value, ENTITY, index, "componentType")?;
                component_type = Some(
                    ComponentType::from_gl(code)
                        .ok_or_else(|| json::invalid(ENTITY, index, "componentType", value))?,
                );
            }
            "count" => count = Some(json::usize_value(value, ENTITY, index, "count")?),
            "type" => {
                let name = json::str_value(value, ENTITY, index, "type")?;
                accessor_type = Some(
                    AccessorType::from_name(name)
                        .ok_or_else(|| json::invalid(ENTITY, index, "type", value))?,
                );
            }
            "normalized" => normalized = json::bool_value(value, ENTITY, index, "normalized")?,
            "min" => min = json::bounds_vec(value, ENTITY, index, "min")?,
            "max" => max = json::bounds_vec(value, ENTITY, index, "max")?,
            "sparse" => sparse = Some(parse_sparse(value, index)?),
            "name" => name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(Accessor {
        buffer_view,
        byte_offset,
        component_type: component_type
            .ok_or_else(|| json::missing(ENTITY, index, "componentType"))?,
        count: count.ok_or_else(|| json::missing(ENTITY, index, "count"))?,
        accessor_type: accessor_type.ok_or_else(|| json::missing(ENTITY, index, "type"))?,
        normalized,
        min,
        max,
        sparse,
        name,
    })
}

fn parse_sparse(value: &Value, index: usize) -> Result<Sparse> {
    let obj = json::object(value, ENTITY, index, "sparse")?;

    let mut count = None;
    let mut indices = None;
    let mut values = None;

    for (key, value) in obj {
        match key.as_str() {
            "count" => count = Some(json::usize_value(value, ENTITY, index, "sparse.count")?),
            "indices" => indices = Some(parse_sparse_indices(value, index)?),
            "values" => values = Some(parse_sparse_values(value, index)?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(Sparse {
        count: count.ok_or_else(|| json::missing(ENTITY, index, "sparse.count"))?,
        indices: indices.ok_or_else(|| json::missing(ENTITY, index, "sparse.indices"))?,
        values: values.ok_or_else(|| json::missing(ENTITY, index, "sparse.values"))?,
    })
}

fn parse_sparse_indices(value: &Value, index: usize) -> Result<SparseIndices> {
    let obj = json::object(value, ENTITY, index, "sparse.indices")?;

    let mut buffer_view = None;
    let mut byte_offset = 0;
    let mut component_type = None;

    for (key, value) in obj {
        match key.as_str() {
            "bufferView" => {
                buffer_view = Some(json::usize_value(
                    value,
                    ENTITY,
                    index,
                    "sparse.indices.bufferView",
                )?)
            }
            "byteOffset" => {
                byte_offset = json::usize_value(value, ENTITY, index, "sparse.indices.byteOffset")?
            }
            "componentType" => {
                let code = json::u64_value(value, ENTITY, index, "sparse.indices.componentType")?;
                component_type = Some(ComponentType::from_gl(code).ok_or_else(|| {
                    json::invalid(ENTITY, index, "sparse.indices.componentType", value)
                })?);
            }
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(SparseIndices {
        buffer_view: buffer_view
            .ok_or_else(|| json::missing(ENTITY, index, "sparse.indices.bufferView"))?,
        byte_offset,
        component_type: component_type
            .ok_or_else(|| json::missing(ENTITY, index, "sparse.indices.componentType"))?,
    })
}

fn parse_sparse_values(value: &Value, index: usize) -> Result<SparseValues> {
    let obj = json::object(value, ENTITY, index, "sparse.values")?;

    let mut buffer_view = None;
    let mut byte_offset = 0;

    for (key, value) in obj {
        match key.as_str() {
            "bufferView" => {
                buffer_view = Some(json::usize_value(
                    value,
                    ENTITY,
                    index,
                    "sparse.values.bufferView",
                )?)
            }
            "byteOffset" => {
                byte_offset = json::usize_value(value, ENTITY, index, "sparse.values.byteOffset")?
            }
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(SparseValues {
        buffer_view: buffer_view
            .ok_or_else(|| json::missing(ENTITY, index, "sparse.values.bufferView"))?,
        byte_offset,
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
    fn minimal_accessor_parses_with_defaults() {
        let accessors = parse(&root(json!({
            "accessors": [
                {"componentType": 5126, "count": 12, "type": "VEC3"}
            ]
        })))
        .unwrap();
        assert_eq!(accessors.len(), 1);
        let acc = &accessors[0];
        assert_eq!(acc.component_type, ComponentType::F32);
        assert_eq!(acc.accessor_type, AccessorType::Vec3);
        assert_eq!(acc.count, 12);
        assert_eq!(acc.byte_offset, 0);
        assert_eq!(acc.buffer_view, None);
        assert!(!acc.normalized);
        assert!(acc.sparse.is_none());
    }

    #[test]
    fn each_required_field_is_reported_by_name_and_index() {
        for (missing_field, element) in [
            ("componentType", json!({"count": 1, "type": "SCALAR"})),
            ("count", json!({"componentType": 5126, "type": "SCALAR"})),
            ("type", json!({"componentType": 5126, "count": 1})),
        ] {
            let err = parse(&root(json!({"accessors": [
                {"componentType": 5126, "count": 1, "type": "SCALAR"},
                element,
            ]})))
            .unwrap_err();
            match err {
                GltfError::MissingRequiredParameter { entity, index, field } => {
                    assert_eq!(entity, "accessors");
                    assert_eq!(index, 1);
                    assert_eq!(field, missing_field);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn unrecognized_enum_strings_are_invalid_not_defaulted() {
        let err = parse(&root(json!({
            "accessors": [{"componentType": 5126, "count": 1, "type": "VEC5"}]
        })))
        .unwrap_err();
        assert!(matches!(
            err,
            GltfError::InvalidType { field: "type", .. }
        ));

        let err = parse(&root(json!({
            "accessors": [{"componentType": 5124, "count": 1, "type": "SCALAR"}]
        })))
        .unwrap_err();
        assert!(matches!(
            err,
            GltfError::InvalidType { field: "componentType", .. }
        ));
    }

    #[test]
    fn sparse_override_parses_and_requires_its_fields() {
        let accessors = parse(&root(json!({
            "accessors": [{
                "componentType": 5126, "count": 100, "type": "VEC3",
                "bufferView": 0,
                "sparse": {
                    "count": 2,
                    "indices": {"bufferView": 1, "componentType": 5123},
                    "values": {"bufferView": 2, "byteOffset": 8}
                }
            }]
        })))
        .unwrap();
        let sparse = accessors[0].sparse.as_ref().unwrap();
        assert_eq!(sparse.count, 2);
        assert_eq!(sparse.indices.component_type, ComponentType::U16);
        assert_eq!(sparse.values.byte_offset, 8);

        let err = parse(&root(json!({
            "accessors": [{
                "componentType": 5126, "count": 100, "type": "VEC3",
                "sparse": {"count": 2, "values": {"bufferView": 2}}
            }]
        })))
        .unwrap_err();
        assert!(matches!(
            err,
            GltfError::MissingRequiredParameter { field: "sparse.indices", .. }
        ));
    }
}
