//! Parser for the `animations` section.

use serde_json::{Map, Value};

use gltf_core::animation::{
    Animation, AnimationSampler, Channel, ChannelTarget, Interpolation, TargetPath,
};
use gltf_core::error::Result;

use crate::json;

const ENTITY: &str = "animations";

pub(crate) fn parse(root: &Map<String, Value>) -> Result<Vec<Animation>> {
    json::parse_section(root, "animations", parse_animation)
}

fn parse_animation(obj: &Map<String, Value>, index: usize) -> Result<Animation> {
    let mut channels = None;
    let mut samplers = None;
    let mut name = None;

    for (key, value) in obj {
        match key.as_str() {
            "channels" => {
                let items = value
                    .as_array()
                    .ok_or_else(|| json::invalid(ENTITY, index, "channels", value))?;
                let mut parsed = Vec::with_capacity(items.len());
                for item in items {
                    let channel = json::object(item, ENTITY, index, "channels")?;
                    parsed.push(parse_channel(channel, index)?);
                }
                channels = Some(parsed);
            }
            "samplers" => {
                let items = value
                    .as_array()
                    .ok_or_else(|| json::invalid(ENTITY, index, "samplers", value))?;
                let mut parsed = Vec::with_capacity(items.len());
                for item in items {
                    let sampler = json::object(item, ENTITY, index, "samplers")?;
                    parsed.push(parse_sampler(sampler, index)?);
                }
                samplers = Some(parsed);
            }
            "name" => name = Some(json::string_value(value, ENTITY, index, "name")?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(Animation {
        channels: channels.ok_or_else(|| json::missing(ENTITY, index, "channels"))?,
        samplers: samplers.ok_or_else(|| json::missing(ENTITY, index, "samplers"))?,
        name,
    })
}

fn parse_channel(obj: &Map<String, Value>, index: usize) -> Result<Channel> {
    let mut sampler = None;
    let mut target = None;

    for (key, value) in obj {
        match key.as_str() {
            "sampler" => sampler = Some(json::usize_value(value, ENTITY, index, "sampler")?),
            "target" => target = Some(parse_target(value, index)?),
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(Channel {
        sampler: sampler.ok_or_else(|| json::missing(ENTITY, index, "sampler"))?,
        target: target.ok_or_else(|| json::missing(ENTITY, index, "target"))?,
    })
}

fn parse_target(value: &Value, index: usize) -> Result<ChannelTarget> {
    let obj = json::object(value, ENTITY, index, "target")?;

    let mut node = None;
    let mut path = None;

    for (key, value) in obj {
        match key.as_str() {
            "node" => node = Some(json::usize_value(value, ENTITY, index, "target.node")?),
            "path" => {
                let name = json::str_value(value, ENTITY, index, "target.path")?;
                path = Some(
                    TargetPath::from_name(name)
                        .ok_or_else(|| json::invalid(ENTITY, index, "target.path", value))?,
                );
            }
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(ChannelTarget {
        node,
        path: path.ok_or_else(|| json::missing(ENTITY, index, "target.path"))?,
    })
}

fn parse_sampler(obj: &Map<String, Value>, index: usize) -> Result<AnimationSampler> {
    let mut input = None;
    let mut output = None;
    let mut interpolation = Interpolation::default();

    for (key, value) in obj {
        match key.as_str() {
            "input" => input = Some(json::usize_value(value, ENTITY, index, "input")?),
            "output" => output = Some(json::usize_value(value, ENTITY, index, "output")?),
            "interpolation" => {
                let name = json::str_value(value, ENTITY, index, "interpolation")?;
                interpolation = Interpolation::from_name(name)
                    .ok_or_else(|| json::invalid(ENTITY, index, "interpolation", value))?;
            }
            "extensions" | "extras" => {}
            other => json::unknown_key(ENTITY, index, other),
        }
    }

    Ok(AnimationSampler {
        input: input.ok_or_else(|| json::missing(ENTITY, index, "input"))?,
        output: output.ok_or_else(|| json::missing(ENTITY, index, "output"))?,
        interpolation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gltf_core::error::GltfError;
    use serde_json::json;

    fn root(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn animation_parses_channels_and_samplers() {
        let animations = parse(&root(json!({
            "animations": [{
                "name": "spin",
                "channels": [
                    {"sampler": 0, "target": {"node": 2, "path": "rotation"}}
                ],
                "samplers": [
                    {"input": 0, "output": 1, "interpolation": "STEP"}
                ]
            }]
        })))
        .unwrap();
        let anim = &animations[0];
        assert_eq!(anim.channels[0].sampler, 0);
        assert_eq!(anim.channels[0].target.node, Some(2));
        assert_eq!(anim.channels[0].target.path, TargetPath::Rotation);
        assert_eq!(anim.samplers[0].interpolation, Interpolation::Step);
    }

    #[test]
    fn interpolation_defaults_to_linear() {
        let animations = parse(&root(json!({
            "animations": [{
                "channels": [{"sampler": 0, "target": {"path": "weights"}}],
                "samplers": [{"input": 0, "output": 1}]
            }]
        })))
        .unwrap();
        assert_eq!(
            animations[0].samplers[0].interpolation,
            Interpolation::Linear
        );
    }

    #[test]
    fn channels_and_samplers_are_required() {
        let err = parse(&root(json!({"animations": [{"samplers": []}]}))).unwrap_err();
        assert!(matches!(
            err,
            GltfError::MissingRequiredParameter { field: "channels", .. }
        ));
    }

    #[test]
    fn unknown_path_is_invalid() {
        let err = parse(&root(json!({
            "animations": [{
                "channels": [{"sampler": 0, "target": {"path": "visibility"}}],
                "samplers": [{"input": 0, "output": 1}]
            }]
        })))
        .unwrap_err();
        assert!(matches!(
            err,
            GltfError::InvalidType { field: "target.path", .. }
        ));
    }
}
