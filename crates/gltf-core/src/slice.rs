//! Typed, zero-copy access to the bytes an accessor addresses.
//!
//! Two complementary paths over the same addressing arithmetic:
//!
//! - [`Document::buffer_slice`] reinterprets a packed byte range as one of
//!   the 42 concrete (shape x component type) slice types, wrapped in the
//!   closed [`AccessorSlice`] sum type. It refuses anything that would make
//!   the flat cast produce wrong data: interleaved strides, sparse
//!   overrides, accessors without a buffer view, unresolved buffers.
//! - [`Document::buffer_iter`] walks element by element and tolerates
//!   interleaved strides, yielding `element_size` bytes per element.

use std::marker::PhantomData;
use std::mem;

use bytemuck::Pod;

use crate::accessor::{Accessor, AccessorType, ComponentType};
use crate::buffer::BufferView;
use crate::document::Document;
use crate::error::{GltfError, Result};

macro_rules! accessor_slices {
    ($($variant:ident => $shape:ident / $comp:ident, $elem:ty;)*) => {
        /// A typed view over a packed accessor range, one variant per
        /// (shape, component type) pairing. Variants are generated from a
        /// single table so the dispatch and the enum cannot drift apart.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum AccessorSlice<'a> {
            $($variant(&'a [$elem]),)*
        }

        impl<'a> AccessorSlice<'a> {
            fn cast(
                shape: AccessorType,
                component: ComponentType,
                bytes: &'a [u8],
                index: usize,
            ) -> Result<Self> {
                match (shape, component) {
                    $((AccessorType::$shape, ComponentType::$comp) => {
                        let elements = bytemuck::try_cast_slice(bytes).map_err(|_| {
                            GltfError::UnsupportedAccessor {
                                index,
                                reason: "backing bytes are misaligned for the element type",
                            }
                        })?;
                        Ok(AccessorSlice::$variant(elements))
                    })*
                }
            }

            /// Number of elements in the view.
            pub fn len(&self) -> usize {
                match self {
                    $(AccessorSlice::$variant(s) => s.len(),)*
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }
    };
}

accessor_slices! {
    ScalarI8 => Scalar / I8, i8;
    ScalarU8 => Scalar / U8, u8;
    ScalarI16 => Scalar / I16, i16;
    ScalarU16 => Scalar / U16, u16;
    ScalarU32 => Scalar / U32, u32;
    ScalarF32 => Scalar / F32, f32;
    Vec2I8 => Vec2 / I8, [i8; 2];
    Vec2U8 => Vec2 / U8, [u8; 2];
    Vec2I16 => Vec2 / I16, [i16; 2];
    Vec2U16 => Vec2 / U16, [u16; 2];
    Vec2U32 => Vec2 / U32, [u32; 2];
    Vec2F32 => Vec2 / F32, [f32; 2];
    Vec3I8 => Vec3 / I8, [i8; 3];
    Vec3U8 => Vec3 / U8, [u8; 3];
    Vec3I16 => Vec3 / I16, [i16; 3];
    Vec3U16 => Vec3 / U16, [u16; 3];
    Vec3U32 => Vec3 / U32, [u32; 3];
    Vec3F32 => Vec3 / F32, [f32; 3];
    Vec4I8 => Vec4 / I8, [i8; 4];
    Vec4U8 => Vec4 / U8, [u8; 4];
    Vec4I16 => Vec4 / I16, [i16; 4];
    Vec4U16 => Vec4 / U16, [u16; 4];
    Vec4U32 => Vec4 / U32, [u32; 4];
    Vec4F32 => Vec4 / F32, [f32; 4];
    Mat2I8 => Mat2 / I8, [i8; 4];
    Mat2U8 => Mat2 / U8, [u8; 4];
    Mat2I16 => Mat2 / I16, [i16; 4];
    Mat2U16 => Mat2 / U16, [u16; 4];
    Mat2U32 => Mat2 / U32, [u32; 4];
    Mat2F32 => Mat2 / F32, [f32; 4];
    Mat3I8 => Mat3 / I8, [i8; 9];
    Mat3U8 => Mat3 / U8, [u8; 9];
    Mat3I16 => Mat3 / I16, [i16; 9];
    Mat3U16 => Mat3 / U16, [u16; 9];
    Mat3U32 => Mat3 / U32, [u32; 9];
    Mat3F32 => Mat3 / F32, [f32; 9];
    Mat4I8 => Mat4 / I8, [i8; 16];
    Mat4U8 => Mat4 / U8, [u8; 16];
    Mat4I16 => Mat4 / I16, [i16; 16];
    Mat4U16 => Mat4 / U16, [u16; 16];
    Mat4U32 => Mat4 / U32, [u32; 16];
    Mat4F32 => Mat4 / F32, [f32; 16];
}

/// Element-by-element reader over an accessor's byte range.
///
/// `start_byte(i) = i * stride`, where the stride is the buffer view's
/// declared byteStride or, when packed, the element size itself. Each step
/// yields exactly `element_size` bytes. The full span is validated at
/// construction, so iteration never ends early.
#[derive(Debug, Clone)]
pub struct AccessorIter<'a> {
    data: &'a [u8],
    element_size: usize,
    stride: usize,
    remaining: usize,
    next: usize,
}

impl<'a> AccessorIter<'a> {
    /// Size in bytes of each yielded element.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Distance in bytes between the starts of consecutive elements.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Converts into an iterator of concrete `T` values, copied out of the
    /// (possibly unaligned) source bytes.
    ///
    /// # Panics
    ///
    /// Panics when `size_of::<T>()` differs from the accessor's element
    /// size. That mismatch means the caller mis-declared the element shape,
    /// which is a programming error rather than recoverable input.
    pub fn typed<T: Pod>(self) -> TypedIter<'a, T> {
        assert_eq!(
            mem::size_of::<T>(),
            self.element_size,
            "declared element type does not match the accessor element size",
        );
        TypedIter {
            inner: self,
            _marker: PhantomData,
        }
    }
}

impl<'a> Iterator for AccessorIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.remaining == 0 {
            return None;
        }
        let start = self.next;
        let bytes = self.data.get(start..start + self.element_size)?;
        self.remaining -= 1;
        self.next = start + self.stride;
        Some(bytes)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AccessorIter<'_> {}

/// Strided iterator yielding owned `T` values, see [`AccessorIter::typed`].
#[derive(Debug, Clone)]
pub struct TypedIter<'a, T> {
    inner: AccessorIter<'a>,
    _marker: PhantomData<T>,
}

impl<T: Pod> Iterator for TypedIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(bytemuck::pod_read_unaligned)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Pod> ExactSizeIterator for TypedIter<'_, T> {}

impl Document {
    /// Reinterprets the packed byte range an accessor addresses as a typed
    /// slice of exactly `count` elements.
    ///
    /// Refused with [`GltfError::UnsupportedAccessor`] when the accessor has
    /// no buffer view, carries a sparse override (a flat view would silently
    /// drop the override), or the view declares an interleaved stride.
    pub fn buffer_slice(&self, index: usize) -> Result<AccessorSlice<'_>> {
        let (accessor, view, window) = self.accessor_window(index)?;
        let element_size = accessor.element_size();
        match view.byte_stride {
            // A stride equal to the element size is still packed.
            None => {}
            Some(stride) if stride == element_size => {}
            Some(_) => {
                return Err(GltfError::UnsupportedAccessor {
                    index,
                    reason: "buffer view declares an interleaved byte stride",
                })
            }
        }
        let needed = accessor
            .count
            .checked_mul(element_size)
            .ok_or(GltfError::DataTooShort {
                len: window.len(),
                needed: usize::MAX,
            })?;
        let bytes = window.get(..needed).ok_or(GltfError::DataTooShort {
            len: window.len(),
            needed,
        })?;
        AccessorSlice::cast(accessor.accessor_type, accessor.component_type, bytes, index)
    }

    /// Element-by-element fallback for accessors whose buffer view declares
    /// an interleaved stride. Yields `element_size` bytes per element.
    pub fn buffer_iter(&self, index: usize) -> Result<AccessorIter<'_>> {
        let (accessor, view, window) = self.accessor_window(index)?;
        let element_size = accessor.element_size();
        let stride = view
            .byte_stride
            .unwrap_or(element_size)
            .max(element_size);
        let needed = match accessor.count {
            0 => 0,
            count => (count - 1)
                .checked_mul(stride)
                .and_then(|n| n.checked_add(element_size))
                .ok_or(GltfError::DataTooShort {
                    len: window.len(),
                    needed: usize::MAX,
                })?,
        };
        if window.len() < needed {
            return Err(GltfError::DataTooShort {
                len: window.len(),
                needed,
            });
        }
        Ok(AccessorIter {
            data: window,
            element_size,
            stride,
            remaining: accessor.count,
            next: 0,
        })
    }

    /// Resolves the byte window `[view.byte_offset + accessor.byte_offset, ..)`
    /// shared by both access paths, refusing sparse accessors and accessors
    /// without resolved backing storage.
    fn accessor_window(&self, index: usize) -> Result<(&Accessor, &BufferView, &[u8])> {
        let accessor = self.accessor(index)?;
        if accessor.sparse.is_some() {
            return Err(GltfError::UnsupportedAccessor {
                index,
                reason: "sparse override would be dropped by a dense view",
            });
        }
        let view_index = accessor
            .buffer_view
            .ok_or(GltfError::UnsupportedAccessor {
                index,
                reason: "accessor has no buffer view",
            })?;
        let view = self.buffer_view(view_index)?;
        let buffer = self.buffer(view.buffer)?;
        let data = buffer.data.bytes().ok_or(GltfError::UnsupportedAccessor {
            index,
            reason: "backing buffer holds no resolved bytes",
        })?;
        let view_end = view
            .byte_offset
            .checked_add(view.byte_length)
            .ok_or(GltfError::DataTooShort {
                len: data.len(),
                needed: usize::MAX,
            })?;
        let window = data
            .get(view.byte_offset..view_end)
            .ok_or(GltfError::DataTooShort {
                len: data.len(),
                needed: view_end,
            })?;
        let window = window
            .get(accessor.byte_offset..)
            .ok_or(GltfError::DataTooShort {
                len: window.len(),
                needed: accessor.byte_offset,
            })?;
        Ok((accessor, view, window))
    }
}
