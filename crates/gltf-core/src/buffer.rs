//! Buffers and buffer views: the raw byte storage layer of a document.

/// Payload state of a buffer or image.
///
/// `Uri` holds the original, unresolved string from the input; resolution
/// (file read, data-URI decode, or GLB chunk assignment) replaces it with
/// `Bytes`. A resolution failure deliberately leaves the original string in
/// place so the caller can retry or resolve lazily.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BufferData {
    /// No URI was declared and no binary chunk has been assigned yet.
    #[default]
    Missing,
    /// Unresolved URI string, exactly as it appeared in the input.
    Uri(String),
    /// Resolved byte payload, owned by the document.
    Bytes(Vec<u8>),
}

impl BufferData {
    /// Resolved bytes, if any.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            BufferData::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The unresolved URI string, if that is what this payload still is.
    pub fn uri(&self) -> Option<&str> {
        match self {
            BufferData::Uri(uri) => Some(uri),
            _ => None,
        }
    }
}

/// A byte payload, either external/embedded or filled from a GLB chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Declared length in bytes; mandatory in the input.
    pub byte_length: usize,
    pub data: BufferData,
    pub name: Option<String>,
}

/// GL binding target hint for a buffer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferViewTarget {
    /// `ARRAY_BUFFER` (34962): vertex attributes.
    ArrayBuffer = 34962,
    /// `ELEMENT_ARRAY_BUFFER` (34963): indices.
    ElementArrayBuffer = 34963,
}

impl BufferViewTarget {
    pub fn from_gl(code: u64) -> Option<Self> {
        match code {
            34962 => Some(BufferViewTarget::ArrayBuffer),
            34963 => Some(BufferViewTarget::ElementArrayBuffer),
            _ => None,
        }
    }
}

/// A byte window `[byte_offset, byte_offset + byte_length)` into a buffer.
///
/// `buffer` and `byte_length` are mandatory in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferView {
    pub buffer: usize,
    pub byte_offset: usize,
    pub byte_length: usize,
    /// Distance in bytes between the starts of consecutive elements, when
    /// the view interleaves data. Absent means tightly packed.
    pub byte_stride: Option<usize>,
    pub target: Option<BufferViewTarget>,
    pub name: Option<String>,
}
