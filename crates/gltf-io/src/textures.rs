//! Parsers for the `textures`, `images` and `samplers` sections.

use serde_json::{Map, Value};

use gltf_core::buffer::BufferData;
use gltf_core::error::Result;
use gltf_core::texture::{Image, MagFilter, MinFilter, Sampler, Texture, WrapMode};

use crate::json;

pub(crate) fn parse(root: &Map<String, Value>) -> Result<Vec<Texture>> {
    json::parse_section(root, "textures", parse_texture)
}

fn parse_texture(obj: &Map<String, Value>, index: usize) -> Result<Texture> {
    const ENTITY: &str = "textures";

    let mut sampler = None;
    let mut source = None;
    let mut name = None;

    for (key, value) in obj {
        match key.as_str() {
            "sampler" => sampler = Some(json::usize_value(value, ENTITY, index, "sampler")?),
            "source" => source = Some(json::usize_value(value, ENTITY, index, "source")?),
            "name" => name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(Texture {
        sampler,
        source,
        name,
    })
}

pub(crate) fn parse_images(root: &Map<String, Value>) -> Result<Vec<Image>> {
    json::parse_section(root, "images", parse_image)
}

fn parse_image(obj: &Map<String, Value>, index: usize) -> Result<Image> {
    const ENTITY: &str = "images";

    let mut data = BufferData::Missing;
    let mut mime_type = None;
    let mut buffer_view = None;
    let mut name = None;

    for (key, value) in obj {
        match key.as_str() {
            "uri" => data = BufferData::Uri(json::string_value(value, ENTITY, index, "uri")?),
            "mimeType" => mime_type = Some(json::string_value(value, ENTITY, index, "mimeType")?),
            "bufferView" => {
                buffer_view = Some(json::usize_value(value, ENTITY, index, "bufferView")?)
            }
            "name" => name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(Image {
        data,
        mime_type,
        buffer_view,
        name,
    })
}

pub(crate) fn parse_samplers(root: &Map<String, Value>) -> Result<Vec<Sampler>> {
    json::parse_section(root, "samplers", parse_sampler)
}

fn parse_sampler(obj: &Map<String, Value>, index: usize) -> Result<Sampler> {
    const ENTITY: &str = "samplers";

    let mut sampler = Sampler::default();

    for (key, value) in obj {
        match key.as_str() {
            "magFilter" => {
                let code = json::u64_value(value, ENTITY, index, "magFilter")?;
                sampler.mag_filter = Some(
                    MagFilter::from_gl(code)
                        .ok_or_else(|| json::invalid(ENTITY, index, "magFilter", value))?,
                );
            }
            "minFilter" => {
                let code = json::u64_value(value, ENTITY, index, "minFilter")?;
                sampler.min_filter = Some(
                    MinFilter::from_gl(code)
                        .ok_or_else(|| json::invalid(ENTITY, index, "minFilter", value))?,
                );
            }
            "wrapS" => {
                let code = json::u64_value(value, ENTITY, index, "wrapS")?;
                sampler.wrap_s = WrapMode::from_gl(code)
                    .ok_or_else(|| json::invalid(ENTITY, index, "wrapS", value))?;
            }
            "wrapT" => {
                let code = json::u64_value(value, ENTITY, index, "wrapT")?;
                sampler.wrap_t = WrapMode::from_gl(code)
                    .ok_or_else(|| json::invalid(ENTITY, index, "wrapT", value))?;
            }
            "name" => sampler.name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(sampler)
}
