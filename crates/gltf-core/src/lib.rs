//! Core data model for the glTF 2.0 interchange format.
//!
//! This crate holds the strongly-typed document graph the reader produces
//! (accessors, buffers, meshes, materials, nodes, scenes, animations,
//! cameras, skins, textures), the unified error taxonomy, and the typed
//! buffer-access subsystem that turns accessor descriptions into concrete
//! slices and iterators over raw vertex data.
//!
//! Parsing lives in the companion `gltf-io` crate; this crate has no I/O.
//!
//! # Example
//!
//! ```ignore
//! use gltf_core::slice::AccessorSlice;
//!
//! let doc = gltf_io::load_from_file("model.glb", true)?;
//! if let AccessorSlice::Vec3F32(positions) = doc.buffer_slice(0)? {
//!     println!("first vertex: {:?}", positions[0]);
//! }
//! ```

pub mod accessor;
pub mod animation;
pub mod buffer;
pub mod camera;
pub mod document;
pub mod error;
pub mod material;
pub mod mesh;
pub mod node;
pub mod scene;
pub mod slice;
pub mod texture;

pub use document::Document;
pub use error::{GltfError, Result};
pub use slice::{AccessorIter, AccessorSlice, TypedIter};
