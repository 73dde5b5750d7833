//! Error taxonomy for glTF parsing and accessor access.
//!
//! A single [`GltfError`] union covers both kinds of failure the reader can
//! hit: errors from the underlying JSON parser (wrapped verbatim) and
//! format/schema errors with a fixed set of kinds. Schema errors carry the
//! failing section name, the element index within that section, and the
//! offending field where applicable.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while parsing glTF/GLB input or addressing buffer data.
#[derive(Debug, Error)]
pub enum GltfError {
    /// The JSON chunk or `.gltf` payload failed to parse.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The first four bytes of a GLB container did not spell `glTF`.
    #[error("bad GLB magic {found:#010x}")]
    BadGlbMagic { found: u32 },

    /// The source file could not be read from disk.
    #[error("cannot read file {}: {source}", path.display())]
    CantReadFile { path: PathBuf, source: io::Error },

    /// The input ended before a header, chunk or accessor range was complete.
    #[error("input too short: {len} bytes, need at least {needed}")]
    DataTooShort { len: usize, needed: usize },

    /// A field the format marks as required was absent from an element.
    #[error("{entity}[{index}] is missing required parameter `{field}`")]
    MissingRequiredParameter {
        entity: &'static str,
        index: usize,
        field: &'static str,
    },

    /// The supplied path has no file name component.
    #[error("path has no file name")]
    NoFile,

    /// A field held a JSON value of the wrong type or an unrecognized
    /// enumeration value.
    #[error("{entity}[{index}]: invalid value for `{field}`: {value}")]
    InvalidType {
        entity: &'static str,
        index: usize,
        field: &'static str,
        value: String,
    },

    /// A mandatory top-level section (only `asset`) was absent.
    #[error("missing required section `{0}`")]
    JsonMissingSection(&'static str),

    /// The file extension is neither `.gltf` nor `.glb`.
    #[error("unknown file type: `{0}`")]
    UnknownFileType(String),

    /// The GLB header declares a container version below the supported
    /// minimum.
    #[error("unsupported GLB version {found} (minimum {minimum})")]
    UnsupportedVersion { found: u32, minimum: u32 },

    /// The first GLB chunk was not the JSON chunk.
    #[error("first GLB chunk has type {found:#010x}, expected JSON")]
    WrongChunkType { found: u32 },

    /// A cross-reference index pointed past the end of its entity array.
    #[error("{entity} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        entity: &'static str,
        index: usize,
        len: usize,
    },

    /// An accessor cannot be served by the requested access path, e.g. a
    /// flat view over interleaved or sparse data.
    #[error("accessor {index}: {reason}")]
    UnsupportedAccessor { index: usize, reason: &'static str },

    /// A decode path that is deliberately not implemented was exercised.
    /// These fail loudly instead of returning default data.
    #[error("unimplemented decode path: {0}")]
    Unimplemented(&'static str),
}

/// Result alias used throughout the reader.
pub type Result<T> = std::result::Result<T, GltfError>;
