//! Parser for the `materials` section and its nested texture tables.
//!
//! All defaults are in place before the walk starts (via `Default`), then
//! overwritten per key as encountered.

use serde_json::{Map, Value};

use gltf_core::error::Result;
use gltf_core::material::{
    AlphaMode, Material, NormalTextureInfo, OcclusionTextureInfo, PbrMetallicRoughness,
    TextureInfo,
};

use crate::json;

const ENTITY: &str = "materials";

pub(crate) fn parse(root: &Map<String, Value>) -> Result<Vec<Material>> {
    json::parse_section(root, "materials", parse_material)
}

fn parse_material(obj: &Map<String, Value>, index: usize) -> Result<Material> {
    let mut material = Material::default();

    for (key, value) in obj {
        match key.as_str() {
            "name" => material.name = Some(json::string_value(value, ENTITY, index, "name")?),
            "pbrMetallicRoughness" => {
                material.pbr_metallic_roughness = parse_pbr(value, index)?;
            }
            "normalTexture" => material.normal_texture = Some(parse_normal_texture(value, index)?),
            "occlusionTexture" => {
                material.occlusion_texture = Some(parse_occlusion_texture(value, index)?);
            }
            "emissiveTexture" => {
                material.emissive_texture =
                    Some(parse_texture_info(value, index, "emissiveTexture")?);
            }
            "emissiveFactor" => {
                material.emissive_factor = json::f32_array(value, ENTITY, index, "emissiveFactor")?;
            }
            "alphaMode" => {
                let name = json::str_value(value, ENTITY, index, "alphaMode")?;
                material.alpha_mode = AlphaMode::from_name(name)
                    .ok_or_else(|| json::invalid(ENTITY, index, "alphaMode", value))?;
            }
            "alphaCutoff" => {
                material.alpha_cutoff = json::f32_value(value, ENTITY, index, "alphaCutoff")?;
            }
            "doubleSided" => {
                material.double_sided = json::bool_value(value, ENTITY, index, "doubleSided")?;
            }
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(material)
}

fn parse_pbr(value: &Value, index: usize) -> Result<PbrMetallicRoughness> {
    let obj = json::object(value, ENTITY, index, "pbrMetallicRoughness")?;
    let mut pbr = PbrMetallicRoughness::default();

    for (key, value) in obj {
        match key.as_str() {
            "baseColorFactor" => {
                pbr.base_color_factor = json::f32_array(value, ENTITY, index, "baseColorFactor")?;
            }
            "baseColorTexture" => {
                pbr.base_color_texture = Some(parse_texture_info(value, index, "baseColorTexture")?);
            }
            "metallicFactor" => {
                pbr.metallic_factor = json::f32_value(value, ENTITY, index, "metallicFactor")?;
            }
            "roughnessFactor" => {
                pbr.roughness_factor = json::f32_value(value, ENTITY, index, "roughnessFactor")?;
            }
            "metallicRoughnessTexture" => {
                pbr.metallic_roughness_texture =
                    Some(parse_texture_info(value, index, "metallicRoughnessTexture")?);
            }
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(pbr)
}

/// Shared walk for the three plain {index, texCoord} tables.
fn parse_texture_info(value: &Value, index: usize, field: &'static str) -> Result<TextureInfo> {
    let obj = json::object(value, ENTITY, index, field)?;
    let mut texture_index = None;
    let mut tex_coord = 0;

    for (key, value) in obj {
        match key.as_str() {
            "index" => texture_index = Some(json::usize_value(value, ENTITY, index, "index")?),
            "texCoord" => tex_coord = json::usize_value(value, ENTITY, index, "texCoord")?,
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(TextureInfo {
        index: texture_index.ok_or_else(|| json::missing(ENTITY, index, "index"))?,
        tex_coord,
    })
}

fn parse_normal_texture(value: &Value, index: usize) -> Result<NormalTextureInfo> {
    let obj = json::object(value, ENTITY, index, "normalTexture")?;
    let mut texture_index = None;
    let mut tex_coord = 0;
    let mut scale = 1.0;

    for (key, value) in obj {
        match key.as_str() {
            "index" => texture_index = Some(json::usize_value(value, ENTITY, index, "index")?),
            "texCoord" => tex_coord = json::usize_value(value, ENTITY, index, "texCoord")?,
            "scale" => scale = json::f32_value(value, ENTITY, index, "scale")?,
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(NormalTextureInfo {
        index: texture_index.ok_or_else(|| json::missing(ENTITY, index, "index"))?,
        tex_coord,
        scale,
    })
}

fn parse_occlusion_texture(value: &Value, index: usize) -> Result<OcclusionTextureInfo> {
    let obj = json::object(value, ENTITY, index, "occlusionTexture")?;
    let mut texture_index = None;
    let mut tex_coord = 0;
    let mut strength = 1.0;

    for (key, value) in obj {
        match key.as_str() {
            "index" => texture_index = Some(json::usize_value(value, ENTITY, index, "index")?),
            "texCoord" => tex_coord = json::usize_value(value, ENTITY, index, "texCoord")?,
            "strength" => strength = json::f32_value(value, ENTITY, index, "strength")?,
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(OcclusionTextureInfo {
        index: texture_index.ok_or_else(|| json::missing(ENTITY, index, "index"))?,
        tex_coord,
        strength,
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
    fn empty_material_gets_all_defaults() {
        let materials = parse(&root(json!({"materials": [{}]}))).unwrap();
        let m = &materials[0];
        assert_eq!(m.alpha_mode, AlphaMode::Opaque);
        assert_eq!(m.alpha_cutoff, 0.5);
        assert_eq!(m.pbr_metallic_roughness.base_color_factor, [1.0; 4]);
        assert_eq!(m.pbr_metallic_roughness.metallic_factor, 1.0);
        assert_eq!(m.pbr_metallic_roughness.roughness_factor, 1.0);
    }

    #[test]
    fn keys_overwrite_their_defaults() {
        let materials = parse(&root(json!({
            "materials": [{
                "name": "glass",
                "alphaMode": "BLEND",
                "alphaCutoff": 0.25,
                "doubleSided": true,
                "emissiveFactor": [0.1, 0.2, 0.3],
                "pbrMetallicRoughness": {
                    "baseColorFactor": [0.5, 0.5, 0.5, 0.5],
                    "metallicFactor": 0.0,
                    "baseColorTexture": {"index": 2, "texCoord": 1}
                },
                "normalTexture": {"index": 0, "scale": 2.0},
                "occlusionTexture": {"index": 1, "strength": 0.75}
            }]
        })))
        .unwrap();
        let m = &materials[0];
        assert_eq!(m.alpha_mode, AlphaMode::Blend);
        assert_eq!(m.alpha_cutoff, 0.25);
        assert!(m.double_sided);
        assert_eq!(m.emissive_factor, [0.1, 0.2, 0.3]);
        let pbr = &m.pbr_metallic_roughness;
        assert_eq!(pbr.metallic_factor, 0.0);
        assert_eq!(pbr.roughness_factor, 1.0); // untouched default
        assert_eq!(
            pbr.base_color_texture,
            Some(TextureInfo { index: 2, tex_coord: 1 })
        );
        assert_eq!(m.normal_texture.unwrap().scale, 2.0);
        assert_eq!(m.occlusion_texture.unwrap().strength, 0.75);
    }

    #[test]
    fn texture_tables_require_their_index() {
        let err = parse(&root(json!({
            "materials": [{"normalTexture": {"scale": 1.5}}]
        })))
        .unwrap_err();
        assert!(matches!(
            err,
            GltfError::MissingRequiredParameter { field: "index", .. }
        ));
    }

    #[test]
    fn unknown_alpha_mode_is_invalid() {
        let err = parse(&root(json!({
            "materials": [{"alphaMode": "TRANSLUCENT"}]
        })))
        .unwrap_err();
        assert!(matches!(
            err,
            GltfError::InvalidType { field: "alphaMode", .. }
        ));
    }
}
