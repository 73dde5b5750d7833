//! Reading glTF 2.0 documents from `.gltf` JSON and `.glb` containers.
//!
//! The crate splits GLB framing, JSON section parsing and URI resolution
//! into separate stages behind two entry points: [`parse`] for in-memory
//! bytes and [`load_from_file`] for paths. The produced [`Document`] and its
//! typed accessor views live in `gltf-core`.

pub mod glb;
pub mod reader;

mod accessors;
mod animations;
mod asset;
mod buffers;
mod cameras;
mod json;
mod materials;
mod meshes;
mod nodes;
mod scenes;
mod textures;
mod uri;

pub use gltf_core::{Document, GltfError, Result};
pub use reader::{load_from_file, parse, ParseOptions};
