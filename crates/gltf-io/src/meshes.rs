//! Parser for the `meshes` section.

use std::collections::HashMap;

use serde_json::{Map, Value};

use gltf_core::error::{GltfError, Result};
use gltf_core::mesh::{Mesh, Primitive, PrimitiveMode};

use crate::json;

const ENTITY: &str = "meshes";

pub(crate) fn parse(root: &Map<String, Value>) -> Result<Vec<Mesh>> {
    json::parse_section(root, "meshes", parse_mesh)
}

fn parse_mesh(obj: &Map<String, Value>, index: usize) -> Result<Mesh> {
    let mut primitives = Vec::new();
    let mut weights = Vec::new();
    let mut name = None;

    for (key, value) in obj {
        match key.as_str() {
            "primitives" => {
                let items = value
                    .as_array()
                    .ok_or_else(|| json::invalid(ENTITY, index, "primitives", value))?;
                primitives.reserve(items.len());
                for item in items {
                    let prim = json::object(item, ENTITY, index, "primitives")?;
                    primitives.push(parse_primitive(prim, index)?);
                }
            }
            "weights" => weights = json::f32_vec(value, ENTITY, index, "weights")?,
            "name" => name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    // A mesh with no primitives is as broken as one with the key absent.
    if primitives.is_empty() {
        return Err(json::missing(ENTITY, index, "primitives"));
    }

    Ok(Mesh {
        primitives,
        weights,
        name,
    })
}

fn parse_primitive(obj: &Map<String, Value>, index: usize) -> Result<Primitive> {
    let mut attributes = HashMap::new();
    let mut indices = None;
    let mut material = None;
    let mut mode = PrimitiveMode::default();

    for (key, value) in obj {
        match key.as_str() {
            "attributes" => {
                let entries = json::object(value, ENTITY, index, "attributes")?;
                for (semantic, accessor) in entries {
                    attributes.insert(
                        semantic.clone(),
                        json::usize_value(accessor, ENTITY, index, "attributes")?,
                    );
                }
            }
            "indices" => indices = Some(json::usize_value(value, ENTITY, index, "indices")?),
            "material" => material = Some(json::usize_value(value, ENTITY, index, "material")?),
            "mode" => {
                let code = json::u64_value(value, ENTITY, index, "mode")?;
                mode = PrimitiveMode::from_gl(code)
                    .ok_or_else(|| json::invalid(ENTITY, index, "mode", value))?;
            }
            // Morph targets have no decode path; failing here is the loud
            // alternative to parsing a mesh we would misrender.
            "targets" => return Err(GltfError::Unimplemented("mesh primitive morph targets")),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    if attributes.is_empty() {
        return Err(json::missing(ENTITY, index, "attributes"));
    }

    Ok(Primitive {
        attributes,
        indices,
        material,
        mode,
    })
}
