//! Animations: channels binding samplers to node properties.
//!
//! Only the structure is decoded; interpreting the curves is out of scope.

/// Node property a channel animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPath {
    Translation,
    Rotation,
    Scale,
    Weights,
}

impl TargetPath {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "translation" => Some(TargetPath::Translation),
            "rotation" => Some(TargetPath::Rotation),
            "scale" => Some(TargetPath::Scale),
            "weights" => Some(TargetPath::Weights),
            _ => None,
        }
    }
}

/// Keyframe interpolation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    #[default]
    Linear,
    Step,
    CubicSpline,
}

impl Interpolation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "LINEAR" => Some(Interpolation::Linear),
            "STEP" => Some(Interpolation::Step),
            "CUBICSPLINE" => Some(Interpolation::CubicSpline),
            _ => None,
        }
    }
}

/// What a channel drives: a node index and the property path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelTarget {
    pub node: Option<usize>,
    pub path: TargetPath,
}

/// Binds a sampler (by index into the animation's sampler array) to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub sampler: usize,
    pub target: ChannelTarget,
}

/// Keyframe data: input/output accessor indices plus interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSampler {
    pub input: usize,
    pub output: usize,
    pub interpolation: Interpolation,
}

/// A named set of channels and the samplers they reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub channels: Vec<Channel>,
    pub samplers: Vec<AnimationSampler>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interpolation_is_linear() {
        assert_eq!(Interpolation::default(), Interpolation::Linear);
    }

    #[test]
    fn path_names_are_lowercase() {
        assert_eq!(TargetPath::from_name("rotation"), Some(TargetPath::Rotation));
        assert_eq!(TargetPath::from_name("Rotation"), None);
    }
}
