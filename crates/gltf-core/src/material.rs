//! Materials and their nested texture-reference tables.
//!
//! Every table here carries the numeric defaults the format mandates, applied
//! through `Default` before the JSON object is walked and overwritten per key
//! as encountered.

/// Alpha rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    #[default]
    Opaque,
    Mask,
    Blend,
}

impl AlphaMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "OPAQUE" => Some(AlphaMode::Opaque),
            "MASK" => Some(AlphaMode::Mask),
            "BLEND" => Some(AlphaMode::Blend),
            _ => None,
        }
    }
}

/// Plain texture reference: texture index plus TEXCOORD set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub index: usize,
    pub tex_coord: usize,
}

/// Normal-map reference with its scale factor (default 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalTextureInfo {
    pub index: usize,
    pub tex_coord: usize,
    pub scale: f32,
}

/// Occlusion-map reference with its strength factor (default 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OcclusionTextureInfo {
    pub index: usize,
    pub tex_coord: usize,
    pub strength: f32,
}

/// Metallic-roughness parameter table.
#[derive(Debug, Clone, PartialEq)]
pub struct PbrMetallicRoughness {
    pub base_color_factor: [f32; 4],
    pub base_color_texture: Option<TextureInfo>,
    pub metallic_factor: f32,
    pub roughness_factor: f32,
    pub metallic_roughness_texture: Option<TextureInfo>,
}

impl Default for PbrMetallicRoughness {
    fn default() -> Self {
        Self {
            base_color_factor: [1.0, 1.0, 1.0, 1.0],
            base_color_texture: None,
            metallic_factor: 1.0,
            roughness_factor: 1.0,
            metallic_roughness_texture: None,
        }
    }
}

/// A PBR material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: Option<String>,
    pub pbr_metallic_roughness: PbrMetallicRoughness,
    pub normal_texture: Option<NormalTextureInfo>,
    pub occlusion_texture: Option<OcclusionTextureInfo>,
    pub emissive_texture: Option<TextureInfo>,
    pub emissive_factor: [f32; 3],
    pub alpha_mode: AlphaMode,
    pub alpha_cutoff: f32,
    pub double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: None,
            pbr_metallic_roughness: PbrMetallicRoughness::default(),
            normal_texture: None,
            occlusion_texture: None,
            emissive_texture: None,
            emissive_factor: [0.0, 0.0, 0.0],
            alpha_mode: AlphaMode::Opaque,
            alpha_cutoff: 0.5,
            double_sided: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_defaults_match_the_format() {
        let material = Material::default();
        assert_eq!(material.alpha_mode, AlphaMode::Opaque);
        assert_eq!(material.alpha_cutoff, 0.5);
        assert_eq!(material.emissive_factor, [0.0, 0.0, 0.0]);
        assert!(!material.double_sided);

        let pbr = material.pbr_metallic_roughness;
        assert_eq!(pbr.base_color_factor, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(pbr.metallic_factor, 1.0);
        assert_eq!(pbr.roughness_factor, 1.0);
    }

    #[test]
    fn alpha_mode_names_are_exact() {
        assert_eq!(AlphaMode::from_name("OPAQUE"), Some(AlphaMode::Opaque));
        assert_eq!(AlphaMode::from_name("MASK"), Some(AlphaMode::Mask));
        assert_eq!(AlphaMode::from_name("BLEND"), Some(AlphaMode::Blend));
        assert_eq!(AlphaMode::from_name("opaque"), None);
    }
}
