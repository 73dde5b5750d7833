//! Document assembly: container framing, section dispatch and payload
//! resolution.
//!
//! [`parse`] is the single entry point for in-memory bytes; [`load_from_file`]
//! adds extension dispatch and disk reading on top. Sections parse in a fixed
//! order so the first error always points at the earliest broken section.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use gltf_core::buffer::BufferData;
use gltf_core::error::{GltfError, Result};
use gltf_core::Document;

use crate::{accessors, animations, asset, buffers, cameras, glb, json, materials, meshes, nodes,
    scenes, textures, uri};

/// How to interpret the input bytes and what to do with external payloads.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Treat the input as a GLB container instead of bare JSON.
    pub binary: bool,
    /// Decode data URIs and read relative-path URIs for buffers and images.
    pub resolve_uris: bool,
    /// Directory relative URIs resolve against (normally the source file's
    /// parent).
    pub base_dir: Option<PathBuf>,
}

/// Parses glTF or GLB bytes into a [`Document`].
pub fn parse(data: &[u8], options: &ParseOptions) -> Result<Document> {
    let (json_payload, bin_chunks) = if options.binary {
        let glb = glb::split(data)?;
        (glb.json, glb.bin)
    } else {
        (data, Vec::new())
    };

    let value: Value = serde_json::from_slice(json_payload)?;
    let mut document = {
        let root = value
            .as_object()
            .ok_or(GltfError::JsonMissingSection("asset"))?;
        parse_root(root)?
    };
    document.root = value;
    bind_binary_chunks(&mut document, &bin_chunks);

    if options.resolve_uris {
        let base_dir = options.base_dir.as_deref();
        for buffer in &mut document.buffers {
            uri::resolve_in_place(&mut buffer.data, base_dir);
        }
        for image in &mut document.images {
            uri::resolve_in_place(&mut image.data, base_dir);
        }
    }

    Ok(document)
}

/// Walks the top-level sections in a fixed order. Absent sections become
/// empty arrays; only `asset` is mandatory.
fn parse_root(root: &Map<String, Value>) -> Result<Document> {
    let document = Document {
        // Filled with the full tree by the caller once parsing succeeds.
        root: Value::Null,
        asset: asset::parse(root)?,
        accessors: accessors::parse(root)?,
        animations: animations::parse(root)?,
        buffers: buffers::parse(root)?,
        buffer_views: buffers::parse_views(root)?,
        cameras: cameras::parse(root)?,
        images: textures::parse_images(root)?,
        materials: materials::parse(root)?,
        meshes: meshes::parse(root)?,
        nodes: nodes::parse(root)?,
        samplers: textures::parse_samplers(root)?,
        scene: scenes::parse_default_scene(root)?,
        scenes: scenes::parse(root)?,
        skins: scenes::parse_skins(root)?,
        textures: textures::parse(root)?,
        extensions_used: json::string_vec_section(root, "extensionsUsed")?,
        extensions_required: json::string_vec_section(root, "extensionsRequired")?,
        extensions: root.get("extensions").cloned(),
        extras: root.get("extras").cloned(),
    };

    for key in root.keys() {
        if !KNOWN_SECTIONS.contains(&key.as_str()) {
            json::unknown_key("glTF", 0, key);
        }
    }

    Ok(document)
}

const KNOWN_SECTIONS: &[&str] = &[
    "asset",
    "accessors",
    "animations",
    "buffers",
    "bufferViews",
    "cameras",
    "images",
    "materials",
    "meshes",
    "nodes",
    "samplers",
    "scene",
    "scenes",
    "skins",
    "textures",
    "extensionsUsed",
    "extensionsRequired",
    "extensions",
    "extras",
];

/// Binds GLB binary chunks to buffers that declared no URI, in file order.
/// Chunks beyond the count of URI-less buffers are dropped with a
/// diagnostic.
fn bind_binary_chunks(document: &mut Document, chunks: &[&[u8]]) {
    let mut next = chunks.iter();
    for buffer in &mut document.buffers {
        if buffer.data == BufferData::Missing {
            match next.next() {
                Some(chunk) => buffer.data = BufferData::Bytes(chunk.to_vec()),
                None => break,
            }
        }
    }
    let leftover = next.count();
    if leftover > 0 {
        log::warn!("GLB: {leftover} binary chunk(s) not claimed by any buffer");
    }
}

/// Reads a `.gltf` or `.glb` file and parses it, dispatching on the
/// extension. Relative URIs resolve against the file's parent directory.
pub fn load_from_file(path: impl AsRef<Path>, resolve_uris: bool) -> Result<Document> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(GltfError::NoFile)?;

    let binary = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("gltf") => false,
        Some(ext) if ext.eq_ignore_ascii_case("glb") => true,
        _ => return Err(GltfError::UnknownFileType(name.to_owned())),
    };

    let data = fs::read(path).map_err(|source| GltfError::CantReadFile {
        path: path.to_owned(),
        source,
    })?;

    let options = ParseOptions {
        binary,
        resolve_uris,
        base_dir: path.parent().map(Path::to_path_buf),
    };
    parse(&data, &options)
}
