//! Parser for the `nodes` section.

use serde_json::{Map, Value};

use gltf_core::error::Result;
use gltf_core::node::Node;

use crate::json;

const ENTITY: &str = "nodes";

pub(crate) fn parse(root: &Map<String, Value>) -> Result<Vec<Node>> {
    json::parse_section(root, "nodes", parse_node)
}

fn parse_node(obj: &Map<String, Value>, index: usize) -> Result<Node> {
    let mut node = Node::default();

    for (key, value) in obj {
        match key.as_str() {
            "camera" => node.camera = Some(json::usize_value(value, ENTITY, index, "camera")?),
            "children" => node.children = json::index_vec(value, ENTITY, index, "children")?,
            "skin" => node.skin = Some(json::usize_value(value, ENTITY, index, "skin")?),
            "matrix" => node.matrix = json::f32_array(value, ENTITY, index, "matrix")?,
            "mesh" => node.mesh = Some(json::usize_value(value, ENTITY, index, "mesh")?),
            "rotation" => node.rotation = json::f32_array(value, ENTITY, index, "rotation")?,
            "scale" => node.scale = json::f32_array(value, ENTITY, index, "scale")?,
            "translation" => {
                node.translation = json::f32_array(value, ENTITY, index, "translation")?
            }
            "weights" => node.weights = json::f32_vec(value, ENTITY, index, "weights")?,
            "name" => node.name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gltf_core::error::GltfError;
    use gltf_core::node::IDENTITY_MATRIX;
    use serde_json::json;

    fn root(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn empty_node_has_identity_transform() {
        let nodes = parse(&root(json!({"nodes": [{}]}))).unwrap();
        let node = &nodes[0];
        assert_eq!(node.matrix, IDENTITY_MATRIX);
        assert_eq!(node.rotation, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(node.scale, [1.0, 1.0, 1.0]);
        assert_eq!(node.translation, [0.0, 0.0, 0.0]);
        assert!(node.children.is_empty());
    }

    #[test]
    fn trs_and_references_parse() {
        let nodes = parse(&root(json!({
            "nodes": [{
                "mesh": 3,
                "skin": 1,
                "children": [1, 2],
                "translation": [1.0, 2.0, 3.0],
                "rotation": [0.0, 0.707, 0.0, 0.707],
                "scale": [2.0, 2.0, 2.0],
                "name": "torso"
            }]
        })))
        .unwrap();
        let node = &nodes[0];
        assert_eq!(node.mesh, Some(3));
        assert_eq!(node.skin, Some(1));
        assert_eq!(node.children, vec![1, 2]);
        assert_eq!(node.translation, [1.0, 2.0, 3.0]);
        assert_eq!(node.scale, [2.0, 2.0, 2.0]);
        assert_eq!(node.name.as_deref(), Some("torso"));
    }

    #[test]
    fn matrix_must_have_sixteen_entries() {
        let err = parse(&root(json!({"nodes": [{"matrix": [1.0, 0.0]}]}))).unwrap_err();
        assert!(matches!(err, GltfError::InvalidType { field: "matrix", .. }));
    }
}
