//! Meshes and their primitives.

use std::collections::HashMap;

/// GL render mode of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveMode {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    LineStrip = 3,
    #[default]
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

impl PrimitiveMode {
    pub fn from_gl(code: u64) -> Option<Self> {
        match code {
            0 => Some(PrimitiveMode::Points),
            1 => Some(PrimitiveMode::Lines),
            2 => Some(PrimitiveMode::LineLoop),
            3 => Some(PrimitiveMode::LineStrip),
            4 => Some(PrimitiveMode::Triangles),
            5 => Some(PrimitiveMode::TriangleStrip),
            6 => Some(PrimitiveMode::TriangleFan),
            _ => None,
        }
    }
}

/// One drawable piece of a mesh.
///
/// `attributes` maps semantic names (`"POSITION"`, `"NORMAL"`, ...) to
/// accessor indices and is mandatory and non-empty in the input. Morph
/// targets are an unimplemented decode path; input that carries them fails
/// at parse time rather than losing data silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primitive {
    pub attributes: HashMap<String, usize>,
    pub indices: Option<usize>,
    pub material: Option<usize>,
    pub mode: PrimitiveMode,
}

/// A mesh: a non-empty list of primitives plus optional morph weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub primitives: Vec<Primitive>,
    pub weights: Vec<f32>,
    pub name: Option<String>,
}
