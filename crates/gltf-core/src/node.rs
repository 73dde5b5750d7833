//! Scene-graph nodes.

/// Column-major 4x4 identity matrix, the default node transform.
pub const IDENTITY_MATRIX: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// A node in the scene graph.
///
/// The transform is either the explicit column-major `matrix` or the
/// decomposed translation/rotation/scale triple; the format treats them as
/// mutually exclusive but both are representable here, each holding its
/// identity default when absent from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub camera: Option<usize>,
    pub children: Vec<usize>,
    pub skin: Option<usize>,
    pub matrix: [f32; 16],
    pub mesh: Option<usize>,
    /// Unit quaternion `[x, y, z, w]`.
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
    pub translation: [f32; 3],
    /// Morph weights; decoding the targets they weight is unimplemented.
    pub weights: Vec<f32>,
    pub name: Option<String>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            camera: None,
            children: Vec::new(),
            skin: None,
            matrix: IDENTITY_MATRIX,
            mesh: None,
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0, 1.0, 1.0],
            translation: [0.0, 0.0, 0.0],
            weights: Vec::new(),
            name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_defaults_are_identity() {
        let node = Node::default();
        assert_eq!(node.matrix, IDENTITY_MATRIX);
        assert_eq!(node.rotation, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(node.scale, [1.0, 1.0, 1.0]);
        assert_eq!(node.translation, [0.0, 0.0, 0.0]);
    }
}
