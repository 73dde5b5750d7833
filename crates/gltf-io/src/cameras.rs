//! Parser for the `cameras` section.

use serde_json::{Map, Value};

use gltf_core::camera::{Camera, Orthographic, Perspective, Projection};
use gltf_core::error::Result;

use crate::json;

const ENTITY: &str = "cameras";

pub(crate) fn parse(root: &Map<String, Value>) -> Result<Vec<Camera>> {
    json::parse_section(root, "cameras", parse_camera)
}

fn parse_camera(obj: &Map<String, Value>, index: usize) -> Result<Camera> {
    let mut kind = None;
    let mut perspective = None;
    let mut orthographic = None;
    let mut name = None;

    for (key, value) in obj {
        match key.as_str() {
            "type" => {
                let s = json::str_value(value, ENTITY, index, "type")?;
                match s {
                    "perspective" | "orthographic" => kind = Some(s.to_owned()),
                    _ => return Err(json::invalid(ENTITY, index, "type", value)),
                }
            }
            "perspective" => perspective = Some(parse_perspective(value, index)?),
            "orthographic" => orthographic = Some(parse_orthographic(value, index)?),
            "name" => name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    // The discriminant picks exactly one sub-object; the matching one must
    // be present.
    let projection = match kind.as_deref() {
        Some("perspective") => Projection::Perspective(
            perspective.ok_or_else(|| json::missing(ENTITY, index, "perspective"))?,
        ),
        Some("orthographic") => Projection::Orthographic(
            orthographic.ok_or_else(|| json::missing(ENTITY, index, "orthographic"))?,
        ),
        _ => return Err(json::missing(ENTITY, index, "type")),
    };

    Ok(Camera { projection, name })
}

fn parse_perspective(value: &Value, index: usize) -> Result<Perspective> {
    let obj = json::object(value, ENTITY, index, "perspective")?;

    let mut aspect_ratio = None;
    let mut yfov = None;
    let mut zfar = None;
    let mut znear = None;

    for (key, value) in obj {
        match key.as_str() {
            "aspectRatio" => {
                aspect_ratio = Some(json::f32_value(value, ENTITY, index, "aspectRatio")?)
            }
            "yfov" => yfov = Some(json::f32_value(value, ENTITY, index, "yfov")?),
            "zfar" => zfar = Some(json::f32_value(value, ENTITY, index, "zfar")?),
            "znear" => znear = Some(json::f32_value(value, ENTITY, index, "znear")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(Perspective {
        aspect_ratio,
        yfov: yfov.ok_or_else(|| json::missing(ENTITY, index, "yfov"))?,
        zfar,
        znear: znear.ok_or_else(|| json::missing(ENTITY, index, "znear"))?,
    })
}

fn parse_orthographic(value: &Value, index: usize) -> Result<Orthographic> {
    let obj = json::object(value, ENTITY, index, "orthographic")?;

    let mut xmag = None;
    let mut ymag = None;
    let mut zfar = None;
    let mut znear = None;

    for (key, value) in obj {
        match key.as_str() {
            "xmag" => xmag = Some(json::f32_value(value, ENTITY, index, "xmag")?),
            "ymag" => ymag = Some(json::f32_value(value, ENTITY, index, "ymag")?),
            "zfar" => zfar = Some(json::f32_value(value, ENTITY, index, "zfar")?),
            "znear" => znear = Some(json::f32_value(value, ENTITY, index, "znear")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(Orthographic {
        xmag: xmag.ok_or_else(|| json::missing(ENTITY, index, "xmag"))?,
        ymag: ymag.ok_or_else(|| json::missing(ENTITY, index, "ymag"))?,
        zfar: zfar.ok_or_else(|| json::missing(ENTITY, index, "zfar"))?,
        znear: znear.ok_or_else(|| json::missing(ENTITY, index, "znear"))?,
    })
}
