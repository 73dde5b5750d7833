//! Asset metadata, scenes and skins.

/// The `asset` section; the only unconditionally mandatory section of a
/// document. `version` is required within it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Asset {
    pub version: String,
    pub generator: Option<String>,
    pub copyright: Option<String>,
    pub min_version: Option<String>,
}

/// A scene: the set of root node indices to present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scene {
    pub nodes: Vec<usize>,
    pub name: Option<String>,
}

/// A skin; `joints` is mandatory in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skin {
    /// Accessor holding one inverse bind matrix per joint.
    pub inverse_bind_matrices: Option<usize>,
    pub skeleton: Option<usize>,
    pub joints: Vec<usize>,
    pub name: Option<String>,
}
