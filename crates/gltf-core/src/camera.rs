//! Cameras: perspective or orthographic projection parameters.

/// Perspective projection parameters; `yfov` and `znear` are mandatory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    pub aspect_ratio: Option<f32>,
    pub yfov: f32,
    pub zfar: Option<f32>,
    pub znear: f32,
}

/// Orthographic projection parameters; all four fields are mandatory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    pub xmag: f32,
    pub ymag: f32,
    pub zfar: f32,
    pub znear: f32,
}

/// Exactly one projection kind, never both and never neither. The input's
/// `type` discriminant must be matched by the corresponding sub-object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective(Perspective),
    Orthographic(Orthographic),
}

/// A camera attached to the scene graph via node references.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub projection: Projection,
    pub name: Option<String>,
}
