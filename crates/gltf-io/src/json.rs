//! Typed field extraction over the generic JSON tree.
//!
//! Every entity parser walks its element's key/value pairs through these
//! helpers, so the error shape is uniform: a wrong-typed value is
//! `InvalidType` naming section, element index and field; an absent
//! required key is `MissingRequiredParameter` with the same coordinates.
//! Unrecognized keys are diagnostics, not errors; they go through
//! [`unknown_key`] so forward-compatible and vendor keys never abort a
//! parse.

use serde_json::{Map, Value};

use gltf_core::error::{GltfError, Result};

pub(crate) fn invalid(
    entity: &'static str,
    index: usize,
    field: &'static str,
    value: &Value,
) -> GltfError {
    GltfError::InvalidType {
        entity,
        index,
        field,
        value: value.to_string(),
    }
}

pub(crate) fn missing(entity: &'static str, index: usize, field: &'static str) -> GltfError {
    GltfError::MissingRequiredParameter {
        entity,
        index,
        field,
    }
}

/// Non-fatal diagnostic channel for keys no dispatch table recognizes.
pub(crate) fn unknown_key(entity: &'static str, index: usize, key: &str) {
    log::warn!("{entity}[{index}]: ignoring unrecognized key `{key}`");
}

pub(crate) fn object<'a>(
    value: &'a Value,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| invalid(entity, index, field, value))
}

pub(crate) fn u64_value(
    value: &Value,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<u64> {
    value
        .as_u64()
        .ok_or_else(|| invalid(entity, index, field, value))
}

pub(crate) fn usize_value(
    value: &Value,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<usize> {
    let n = u64_value(value, entity, index, field)?;
    usize::try_from(n).map_err(|_| invalid(entity, index, field, value))
}

pub(crate) fn f32_value(
    value: &Value,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<f32> {
    value
        .as_f64()
        .map(|n| n as f32)
        .ok_or_else(|| invalid(entity, index, field, value))
}

pub(crate) fn bool_value(
    value: &Value,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| invalid(entity, index, field, value))
}

pub(crate) fn str_value<'a>(
    value: &'a Value,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| invalid(entity, index, field, value))
}

pub(crate) fn string_value(
    value: &Value,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<String> {
    str_value(value, entity, index, field).map(str::to_owned)
}

/// An array of entity indices.
pub(crate) fn index_vec(
    value: &Value,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<Vec<usize>> {
    let items = value
        .as_array()
        .ok_or_else(|| invalid(entity, index, field, value))?;
    items
        .iter()
        .map(|item| usize_value(item, entity, index, field))
        .collect()
}

/// A variable-length array of numbers (morph weights and similar).
pub(crate) fn f32_vec(
    value: &Value,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<Vec<f32>> {
    let items = value
        .as_array()
        .ok_or_else(|| invalid(entity, index, field, value))?;
    items
        .iter()
        .map(|item| f32_value(item, entity, index, field))
        .collect()
}

/// A fixed-length numeric array (factors, matrices, quaternions).
pub(crate) fn f32_array<const N: usize>(
    value: &Value,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<[f32; N]> {
    let items = value
        .as_array()
        .ok_or_else(|| invalid(entity, index, field, value))?;
    if items.len() != N {
        return Err(invalid(entity, index, field, value));
    }
    let mut out = [0.0f32; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = f32_value(item, entity, index, field)?;
    }
    Ok(out)
}

/// Accessor min/max bounds: up to 16 numbers, kept at f64 precision.
pub(crate) fn bounds_vec(
    value: &Value,
    entity: &'static str,
    index: usize,
    field: &'static str,
) -> Result<Vec<f64>> {
    let items = value
        .as_array()
        .ok_or_else(|| invalid(entity, index, field, value))?;
    if items.len() > 16 {
        return Err(invalid(entity, index, field, value));
    }
    items
        .iter()
        .map(|item| {
            item.as_f64()
                .ok_or_else(|| invalid(entity, index, field, item))
        })
        .collect()
}

/// A top-level section that must be a JSON array when present.
pub(crate) fn section_array<'a>(
    root: &'a Map<String, Value>,
    key: &'static str,
) -> Result<Option<&'a Vec<Value>>> {
    match root.get(key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(invalid("glTF", 0, key, other)),
    }
}

/// Drives the per-entity walk for one section: absent section yields an
/// empty array, each element must be an object, elements parse in order and
/// the first failure short-circuits.
pub(crate) fn parse_section<T>(
    root: &Map<String, Value>,
    key: &'static str,
    parse: impl Fn(&Map<String, Value>, usize) -> Result<T>,
) -> Result<Vec<T>> {
    let Some(items) = section_array(root, key)? else {
        return Ok(Vec::new());
    };
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let element = object(item, key, index, key)?;
        out.push(parse(element, index)?);
    }
    Ok(out)
}

/// A top-level array of strings (`extensionsUsed` / `extensionsRequired`).
pub(crate) fn string_vec_section(
    root: &Map<String, Value>,
    key: &'static str,
) -> Result<Vec<String>> {
    let Some(items) = section_array(root, key)? else {
        return Ok(Vec::new());
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| string_value(item, key, index, key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invalid_values_carry_the_offending_json() {
        let value = json!("not a number");
        let err = usize_value(&value, "accessors", 2, "count").unwrap_err();
        assert_eq!(
            err.to_string(),
            "accessors[2]: invalid value for `count`: \"not a number\""
        );
    }

    #[test]
    fn negative_numbers_are_not_indices() {
        assert!(usize_value(&json!(-1), "nodes", 0, "mesh").is_err());
        assert!(usize_value(&json!(1.5), "nodes", 0, "mesh").is_err());
        assert_eq!(usize_value(&json!(3), "nodes", 0, "mesh").unwrap(), 3);
    }

    #[test]
    fn fixed_arrays_require_the_exact_length() {
        let three = json!([1.0, 2.0, 3.0]);
        assert_eq!(
            f32_array::<3>(&three, "nodes", 0, "scale").unwrap(),
            [1.0, 2.0, 3.0]
        );
        assert!(f32_array::<4>(&three, "nodes", 0, "rotation").is_err());
    }

    #[test]
    fn bounds_are_capped_at_sixteen_numbers() {
        let ok = json!([0.0; 16].to_vec());
        assert_eq!(bounds_vec(&ok, "accessors", 0, "min").unwrap().len(), 16);
        let too_many = json!([0.0; 17].to_vec());
        assert!(bounds_vec(&too_many, "accessors", 0, "min").is_err());
    }

    #[test]
    fn absent_sections_are_empty_not_errors() {
        let root = Map::new();
        let parsed: Vec<u8> = parse_section(&root, "meshes", |_, _| Ok(0)).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn string_section_errors_name_the_offending_entry() {
        let mut root = Map::new();
        root.insert(
            "extensionsUsed".into(),
            json!(["KHR_materials_unlit", 42]),
        );
        let err = string_vec_section(&root, "extensionsUsed").unwrap_err();
        match err {
            GltfError::InvalidType { entity, index, .. } => {
                assert_eq!(entity, "extensionsUsed");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_array_sections_are_invalid() {
        let mut root = Map::new();
        root.insert("meshes".into(), json!({}));
        let result: Result<Vec<u8>> = parse_section(&root, "meshes", |_, _| Ok(0));
        assert!(result.is_err());
    }
}
