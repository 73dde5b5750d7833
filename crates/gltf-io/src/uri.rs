//! URI classification and resolution for buffer and image payloads.
//!
//! A URI is one of three things: a `data:` URI (decoded in place when its
//! media-type marks base64), a scheme-less relative path (read from the
//! source file's directory), or an opaque string. Resolution never fails a
//! parse: anything that cannot be decoded or read stays an unresolved
//! string, which lets callers resolve lazily or with their own machinery.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use gltf_core::buffer::BufferData;

/// Attempts to turn a URI string into bytes. `None` means the URI stays
/// unresolved.
pub(crate) fn resolve(uri: &str, base_dir: Option<&Path>) -> Option<Vec<u8>> {
    if let Some(rest) = uri.strip_prefix("data:") {
        return decode_data_uri(rest);
    }
    if has_scheme(uri) {
        // Opaque scheme (http:, ftp:, ...): not this reader's job.
        return None;
    }
    let path: PathBuf = match base_dir {
        Some(dir) => dir.join(uri),
        None => PathBuf::from(uri),
    };
    fs::read(&path).ok()
}

/// Upgrades `BufferData::Uri` to `BufferData::Bytes` when resolution
/// succeeds; otherwise leaves the payload untouched.
pub(crate) fn resolve_in_place(data: &mut BufferData, base_dir: Option<&Path>) {
    if let BufferData::Uri(uri) = data {
        if let Some(bytes) = resolve(uri, base_dir) {
            *data = BufferData::Bytes(bytes);
        }
    }
}

/// Decodes the part of a data URI after the `data:` prefix. Only base64
/// payloads are supported; any other encoding token leaves the URI alone.
fn decode_data_uri(rest: &str) -> Option<Vec<u8>> {
    let comma = rest.find(',')?;
    let header = &rest[..comma];
    let payload = &rest[comma + 1..];
    if !header.split(';').any(|param| param == "base64") {
        return None;
    }
    STANDARD.decode(payload).ok()
}

fn has_scheme(uri: &str) -> bool {
    match uri.find(':') {
        // A ':' after a '/' is part of the path, not a scheme.
        Some(pos) => pos > 0 && !uri[..pos].contains('/'),
        None => false,
    }
}
