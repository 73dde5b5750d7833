//! Accessors: typed descriptions of how to read elements out of a buffer.

/// Component type of an accessor element, using the GL data-type codes the
/// format stores on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    /// `BYTE` (5120)
    I8 = 5120,
    /// `UNSIGNED_BYTE` (5121)
    U8 = 5121,
    /// `SHORT` (5122)
    I16 = 5122,
    /// `UNSIGNED_SHORT` (5123)
    U16 = 5123,
    /// `UNSIGNED_INT` (5125)
    U32 = 5125,
    /// `FLOAT` (5126)
    F32 = 5126,
}

impl ComponentType {
    /// Maps a wire code to a component type. Unrecognized codes become an
    /// invalid-value error at the parse site.
    pub fn from_gl(code: u64) -> Option<Self> {
        match code {
            5120 => Some(ComponentType::I8),
            5121 => Some(ComponentType::U8),
            5122 => Some(ComponentType::I16),
            5123 => Some(ComponentType::U16),
            5125 => Some(ComponentType::U32),
            5126 => Some(ComponentType::F32),
            _ => None,
        }
    }

    /// Size of one component in bytes.
    pub fn size(self) -> usize {
        match self {
            ComponentType::I8 | ComponentType::U8 => 1,
            ComponentType::I16 | ComponentType::U16 => 2,
            ComponentType::U32 | ComponentType::F32 => 4,
        }
    }
}

/// Element shape of an accessor: how many components make up one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl AccessorType {
    /// Maps the wire string (`"SCALAR"`, `"VEC3"`, ...) to a shape.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SCALAR" => Some(AccessorType::Scalar),
            "VEC2" => Some(AccessorType::Vec2),
            "VEC3" => Some(AccessorType::Vec3),
            "VEC4" => Some(AccessorType::Vec4),
            "MAT2" => Some(AccessorType::Mat2),
            "MAT3" => Some(AccessorType::Mat3),
            "MAT4" => Some(AccessorType::Mat4),
            _ => None,
        }
    }

    /// Number of components per element.
    pub fn multiplicity(self) -> usize {
        match self {
            AccessorType::Scalar => 1,
            AccessorType::Vec2 => 2,
            AccessorType::Vec3 => 3,
            AccessorType::Vec4 | AccessorType::Mat2 => 4,
            AccessorType::Mat3 => 9,
            AccessorType::Mat4 => 16,
        }
    }
}

/// Index storage of a sparse accessor override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseIndices {
    pub buffer_view: usize,
    pub byte_offset: usize,
    pub component_type: ComponentType,
}

/// Value storage of a sparse accessor override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseValues {
    pub buffer_view: usize,
    pub byte_offset: usize,
}

/// Sparse override: mostly-default values with (index, value) exceptions.
///
/// Parsed for completeness, but the dense decode paths refuse accessors that
/// carry one; applying the override is an unimplemented decode path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sparse {
    pub count: usize,
    pub indices: SparseIndices,
    pub values: SparseValues,
}

/// A typed view describing how to interpret a slice of a buffer through an
/// optional buffer view.
///
/// `component_type`, `count` and `accessor_type` are mandatory in the input;
/// their absence is a hard parse error, never a default.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    pub buffer_view: Option<usize>,
    pub byte_offset: usize,
    pub component_type: ComponentType,
    pub count: usize,
    pub accessor_type: AccessorType,
    pub normalized: bool,
    /// Per-component minimum bounds, at most 16 numbers.
    pub min: Vec<f64>,
    /// Per-component maximum bounds, at most 16 numbers.
    pub max: Vec<f64>,
    pub sparse: Option<Sparse>,
    pub name: Option<String>,
}

impl Accessor {
    /// Size in bytes of one element: component size times shape multiplicity.
    pub fn element_size(&self) -> usize {
        self.component_type.size() * self.accessor_type.multiplicity()
    }
}
