//! The document: root aggregate owning every parsed entity array.

use serde_json::Value;

use crate::accessor::Accessor;
use crate::animation::Animation;
use crate::buffer::{Buffer, BufferView};
use crate::camera::Camera;
use crate::error::{GltfError, Result};
use crate::material::Material;
use crate::mesh::Mesh;
use crate::node::Node;
use crate::scene::{Asset, Scene, Skin};
use crate::texture::{Image, Sampler, Texture};

/// An in-memory glTF document.
///
/// Entity arrays cross-reference each other by plain 0-based indices; there
/// are no owning pointers between entities, and indices are bounds-checked
/// only at the point of use. The document exclusively owns every array and
/// every resolved byte payload; dropping it releases everything exactly
/// once. A failed parse returns an error and never a partially built
/// document.
///
/// `extensions` and `extras` are retained verbatim as opaque JSON values.
/// The top-level pair is surfaced directly; entity-level sub-trees stay
/// reachable through [`root`](Self::root), the complete parsed JSON tree.
/// Callers that understand a specific extension parse its sub-tree
/// themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// The generic JSON tree the document was parsed from, kept so opaque
    /// per-entity `extensions`/`extras` sub-trees remain addressable.
    pub root: Value,
    pub asset: Asset,
    pub accessors: Vec<Accessor>,
    pub animations: Vec<Animation>,
    pub buffers: Vec<Buffer>,
    pub buffer_views: Vec<BufferView>,
    pub cameras: Vec<Camera>,
    pub images: Vec<Image>,
    pub materials: Vec<Material>,
    pub meshes: Vec<Mesh>,
    pub nodes: Vec<Node>,
    pub samplers: Vec<Sampler>,
    /// Index of the default scene, if the input declares one.
    pub scene: Option<usize>,
    pub scenes: Vec<Scene>,
    pub skins: Vec<Skin>,
    pub textures: Vec<Texture>,
    pub extensions_used: Vec<String>,
    pub extensions_required: Vec<String>,
    pub extensions: Option<Value>,
    pub extras: Option<Value>,
}

impl Document {
    /// Bounds-checked accessor lookup.
    pub fn accessor(&self, index: usize) -> Result<&Accessor> {
        self.accessors
            .get(index)
            .ok_or(GltfError::IndexOutOfBounds {
                entity: "accessors",
                index,
                len: self.accessors.len(),
            })
    }

    /// Bounds-checked buffer view lookup.
    pub fn buffer_view(&self, index: usize) -> Result<&BufferView> {
        self.buffer_views
            .get(index)
            .ok_or(GltfError::IndexOutOfBounds {
                entity: "bufferViews",
                index,
                len: self.buffer_views.len(),
            })
    }

    /// Bounds-checked buffer lookup.
    pub fn buffer(&self, index: usize) -> Result<&Buffer> {
        self.buffers.get(index).ok_or(GltfError::IndexOutOfBounds {
            entity: "buffers",
            index,
            len: self.buffers.len(),
        })
    }
}
