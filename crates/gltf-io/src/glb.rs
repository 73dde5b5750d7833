//! GLB container framing: the fixed header and length-prefixed chunks.
//!
//! A `.glb` file is a 12-byte header `{magic, version, length}` followed by
//! chunks of `{length: u32, type: u32, data}`. The first chunk must be the
//! JSON chunk; binary chunks follow in file order and are later bound
//! positionally to buffers that declared no URI.

use byteorder::{ByteOrder, LittleEndian};

use gltf_core::error::{GltfError, Result};

/// `glTF` in little-endian ASCII.
pub const GLB_MAGIC: u32 = 0x4654_6C67;
/// Lowest container version this reader accepts.
pub const GLB_MIN_VERSION: u32 = 2;
/// `JSON` chunk type tag.
pub const CHUNK_JSON: u32 = 0x4E4F_534A;
/// `BIN\0` chunk type tag.
pub const CHUNK_BIN: u32 = 0x004E_4942;

/// Size of the fixed container header.
pub const HEADER_SIZE: usize = 12;
const CHUNK_HEADER_SIZE: usize = 8;

/// A framed container: the JSON payload plus binary chunks in file order.
#[derive(Debug, PartialEq, Eq)]
pub struct Glb<'a> {
    pub json: &'a [u8],
    pub bin: Vec<&'a [u8]>,
}

/// Splits a GLB byte stream into its chunks.
///
/// Chunk types other than JSON and BIN are skipped with a diagnostic, per
/// the container's forward-compatibility rules.
pub fn split(data: &[u8]) -> Result<Glb<'_>> {
    if data.len() < HEADER_SIZE {
        return Err(GltfError::DataTooShort {
            len: data.len(),
            needed: HEADER_SIZE,
        });
    }

    let magic = LittleEndian::read_u32(&data[0..4]);
    if magic != GLB_MAGIC {
        return Err(GltfError::BadGlbMagic { found: magic });
    }
    let version = LittleEndian::read_u32(&data[4..8]);
    if version < GLB_MIN_VERSION {
        return Err(GltfError::UnsupportedVersion {
            found: version,
            minimum: GLB_MIN_VERSION,
        });
    }
    let declared = LittleEndian::read_u32(&data[8..12]) as usize;
    let total = declared.min(data.len());

    let (first_type, json, mut offset) = read_chunk(data, total, HEADER_SIZE)?;
    if first_type != CHUNK_JSON {
        return Err(GltfError::WrongChunkType { found: first_type });
    }

    let mut bin = Vec::new();
    while offset + CHUNK_HEADER_SIZE <= total {
        let (chunk_type, payload, next) = read_chunk(data, total, offset)?;
        if chunk_type == CHUNK_BIN {
            bin.push(payload);
        } else {
            log::warn!("GLB: skipping chunk with unknown type {chunk_type:#010x}");
        }
        offset = next;
    }

    Ok(Glb { json, bin })
}

fn read_chunk(data: &[u8], total: usize, offset: usize) -> Result<(u32, &[u8], usize)> {
    if offset + CHUNK_HEADER_SIZE > total {
        return Err(GltfError::DataTooShort {
            len: total,
            needed: offset + CHUNK_HEADER_SIZE,
        });
    }
    let length = LittleEndian::read_u32(&data[offset..offset + 4]) as usize;
    let chunk_type = LittleEndian::read_u32(&data[offset + 4..offset + 8]);
    let start = offset + CHUNK_HEADER_SIZE;
    let end = start.checked_add(length).ok_or(GltfError::DataTooShort {
        len: total,
        needed: usize::MAX,
    })?;
    if end > total {
        return Err(GltfError::DataTooShort { len: total, needed: end });
    }
    Ok((chunk_type, &data[start..end], end))
}
