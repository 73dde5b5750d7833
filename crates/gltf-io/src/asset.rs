//! Parser for the `asset` section, the only mandatory top-level section.

use serde_json::{Map, Value};

use gltf_core::error::{GltfError, Result};
use gltf_core::scene::Asset;

use crate::json;

const ENTITY: &str = "asset";

pub(crate) fn parse(root: &Map<String, Value>) -> Result<Asset> {
    let section = root
        .get("asset")
        .ok_or(GltfError::JsonMissingSection("asset"))?;
    let obj = json::object(section, ENTITY, 0, "asset")?;

    let mut version = None;
    let mut generator = None;
    let mut copyright = None;
    let mut min_version = None;

    for (key, value) in obj {
        match key.as_str() {
            "version" => version = Some(json::string_value(value, ENTITY, 0, "version")?),
            "generator" => generator = Some(json::string_value(value, ENTITY, 0, "generator")?),
            "copyright" => copyright = Some(json::string_value(value, ENTITY, 0, "copyright")?),
            "minVersion" => min_version = Some(json::string_value(value, ENTITY, 0, "minVersion")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, 0, other),
        }
    }

    Ok(Asset {
        version: version.ok_or_else(|| json::missing(ENTITY, 0, "version"))?,
        generator,
        copyright,
        min_version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn missing_asset_section_is_a_hard_error() {
        let err = parse(&Map::new()).unwrap_err();
        assert!(matches!(err, GltfError::JsonMissingSection("asset")));
    }

    #[test]
    fn version_is_required() {
        let err = parse(&root(json!({"asset": {"generator": "test"}}))).unwrap_err();
        assert!(matches!(
            err,
            GltfError::MissingRequiredParameter { field: "version", .. }
        ));
    }

    #[test]
    fn full_asset_parses() {
        let asset = parse(&root(json!({
            "asset": {
                "version": "2.0",
                "generator": "unit test",
                "copyright": "nobody",
                "minVersion": "2.0"
            }
        })))
        .unwrap();
        assert_eq!(asset.version, "2.0");
        assert_eq!(asset.generator.as_deref(), Some("unit test"));
        assert_eq!(asset.copyright.as_deref(), Some("nobody"));
        assert_eq!(asset.min_version.as_deref(), Some("2.0"));
    }
}
