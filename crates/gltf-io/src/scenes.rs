//! Parsers for the `scenes` and `skins` sections and the default-scene index.

use serde_json::{Map, Value};

use gltf_core::error::Result;
use gltf_core::scene::{Scene, Skin};

use crate::json;

pub(crate) fn parse(root: &Map<String, Value>) -> Result<Vec<Scene>> {
    json::parse_section(root, "scenes", parse_scene)
}

fn parse_scene(obj: &Map<String, Value>, index: usize) -> Result<Scene> {
    const ENTITY: &str = "scenes";

    let mut nodes = Vec::new();
    let mut name = None;

    for (key, value) in obj {
        match key.as_str() {
            "nodes" => nodes = json::index_vec(value, ENTITY, index, "nodes")?,
            "name" => name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(Scene { nodes, name })
}

pub(crate) fn parse_skins(root: &Map<String, Value>) -> Result<Vec<Skin>> {
    json::parse_section(root, "skins", parse_skin)
}

fn parse_skin(obj: &Map<String, Value>, index: usize) -> Result<Skin> {
    const ENTITY: &str = "skins";

    let mut inverse_bind_matrices = None;
    let mut skeleton = None;
    let mut joints = None;
    let mut name = None;

    for (key, value) in obj {
        match key.as_str() {
            "inverseBindMatrices" => {
                inverse_bind_matrices =
                    Some(json::usize_value(value, ENTITY, index, "inverseBindMatrices")?)
            }
            "skeleton" => skeleton = Some(json::usize_value(value, ENTITY, index, "skeleton")?),
            "joints" => joints = Some(json::index_vec(value, ENTITY, index, "joints")?),
            "name" => name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(Skin {
        inverse_bind_matrices,
        skeleton,
        joints: joints.ok_or_else(|| json::missing(ENTITY, index, "joints"))?,
        name,
    })
}

/// Reads the top-level `scene` index if present.
pub(crate) fn parse_default_scene(root: &Map<String, Value>) -> Result<Option<usize>> {
    match root.get("scene") {
        Some(value) => Ok(Some(json::usize_value(value, "scene", 0, "scene")?)),
        None => Ok(None),
    }
}
