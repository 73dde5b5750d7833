//! Textures, images and samplers.

use crate::buffer::BufferData;

/// Texture coordinate wrapping mode (default `REPEAT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    ClampToEdge = 33071,
    MirroredRepeat = 33648,
    #[default]
    Repeat = 10497,
}

impl WrapMode {
    pub fn from_gl(code: u64) -> Option<Self> {
        match code {
            33071 => Some(WrapMode::ClampToEdge),
            33648 => Some(WrapMode::MirroredRepeat),
            10497 => Some(WrapMode::Repeat),
            _ => None,
        }
    }
}

/// Magnification filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagFilter {
    Nearest = 9728,
    Linear = 9729,
}

impl MagFilter {
    pub fn from_gl(code: u64) -> Option<Self> {
        match code {
            9728 => Some(MagFilter::Nearest),
            9729 => Some(MagFilter::Linear),
            _ => None,
        }
    }
}

/// Minification filter, including the mipmap variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinFilter {
    Nearest = 9728,
    Linear = 9729,
    NearestMipmapNearest = 9984,
    LinearMipmapNearest = 9985,
    NearestMipmapLinear = 9986,
    LinearMipmapLinear = 9987,
}

impl MinFilter {
    pub fn from_gl(code: u64) -> Option<Self> {
        match code {
            9728 => Some(MinFilter::Nearest),
            9729 => Some(MinFilter::Linear),
            9984 => Some(MinFilter::NearestMipmapNearest),
            9985 => Some(MinFilter::LinearMipmapNearest),
            9986 => Some(MinFilter::NearestMipmapLinear),
            9987 => Some(MinFilter::LinearMipmapLinear),
            _ => None,
        }
    }
}

/// Filtering and wrapping parameters for a texture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sampler {
    pub mag_filter: Option<MagFilter>,
    pub min_filter: Option<MinFilter>,
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub name: Option<String>,
}

/// Image payload: a URI (resolvable like buffer URIs) or a buffer view.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub data: BufferData,
    pub mime_type: Option<String>,
    pub buffer_view: Option<usize>,
    pub name: Option<String>,
}

/// Pairs an image source with sampling parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub sampler: Option<usize>,
    pub source: Option<usize>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_defaults_to_repeat_wrapping() {
        let sampler = Sampler::default();
        assert_eq!(sampler.wrap_s, WrapMode::Repeat);
        assert_eq!(sampler.wrap_t, WrapMode::Repeat);
        assert_eq!(sampler.mag_filter, None);
        assert_eq!(sampler.min_filter, None);
    }

    #[test]
    fn filter_codes_round_trip() {
        assert_eq!(MagFilter::from_gl(9728), Some(MagFilter::Nearest));
        assert_eq!(MagFilter::from_gl(9984), None);
        assert_eq!(
            MinFilter::from_gl(9987),
            Some(MinFilter::LinearMipmapLinear)
        );
    }
}
