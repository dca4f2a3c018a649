//! Packing side: big-endian scalars, identifiers and strings.

use crate::buffer::Buffer;
use crate::error::{WireError, WireResult};
use crate::ids::IdKind;

impl Buffer {
    /// Packs a `u8`.
    pub fn pack_u8(&mut self, value: u8) -> WireResult<()> {
        self.put(&[value])
    }

    /// Packs a big-endian `u16`.
    pub fn pack_u16(&mut self, value: u16) -> WireResult<()> {
        self.put(&value.to_be_bytes())
    }

    /// Packs a big-endian `u32`.
    pub fn pack_u32(&mut self, value: u32) -> WireResult<()> {
        self.put(&value.to_be_bytes())
    }

    /// Packs a big-endian `u64`.
    pub fn pack_u64(&mut self, value: u64) -> WireResult<()> {
        self.put(&value.to_be_bytes())
    }

    /// Packs a big-endian `i32` (two's complement).
    pub fn pack_i32(&mut self, value: i32) -> WireResult<()> {
        self.put(&value.to_be_bytes())
    }

    /// Packs a big-endian `i64` (two's complement).
    pub fn pack_i64(&mut self, value: i64) -> WireResult<()> {
        self.put(&value.to_be_bytes())
    }

    /// Packs a boolean as one byte, `1` or `0`.
    pub fn pack_bool(&mut self, value: bool) -> WireResult<()> {
        self.pack_u8(u8::from(value))
    }

    /// Packs `id` truncated to `width` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::SizeUnsupported`] if `width` is not 1, 2, 4 or 8.
    /// The buffer is untouched in that case.
    pub fn pack_id(&mut self, id: u64, width: u8) -> WireResult<()> {
        match width {
            1 => self.pack_u8(id as u8),
            2 => self.pack_u16(id as u16),
            4 => self.pack_u32(id as u32),
            8 => self.pack_u64(id),
            _ => Err(WireError::SizeUnsupported { width }),
        }
    }

    /// Packs `id` using the configured width for `kind`.
    pub fn pack_id_of(&mut self, kind: IdKind, id: u64) -> WireResult<()> {
        self.pack_id(id, self.id_sizes().get(kind))
    }

    /// Packs an object identifier.
    pub fn pack_object_id(&mut self, id: u64) -> WireResult<()> {
        self.pack_id_of(IdKind::Object, id)
    }

    /// Packs a field identifier.
    pub fn pack_field_id(&mut self, id: u64) -> WireResult<()> {
        self.pack_id_of(IdKind::Field, id)
    }

    /// Packs a method identifier.
    pub fn pack_method_id(&mut self, id: u64) -> WireResult<()> {
        self.pack_id_of(IdKind::Method, id)
    }

    /// Packs a reference-type identifier, using the thread width.
    pub fn pack_type_id(&mut self, id: u64) -> WireResult<()> {
        self.pack_id_of(IdKind::Thread, id)
    }

    /// Packs a frame identifier.
    pub fn pack_frame_id(&mut self, id: u64) -> WireResult<()> {
        self.pack_id_of(IdKind::Frame, id)
    }

    /// Packs a 4-byte big-endian length followed by the raw bytes.
    ///
    /// No terminator is written and the bytes are not transformed. Room for
    /// the prefix and payload is reserved up front, so a failure leaves the
    /// buffer untouched.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::HeapFault`] if growth fails or if `bytes` is too
    /// long for a 32-bit length prefix.
    pub fn pack_str(&mut self, bytes: &[u8]) -> WireResult<()> {
        let len = u32::try_from(bytes.len()).map_err(|_| WireError::HeapFault {
            requested: bytes.len(),
        })?;
        self.reserve(4 + bytes.len())?;
        self.put(&len.to_be_bytes())?;
        self.put(bytes)
    }

    /// Packs UTF-8 text as a length-prefixed string.
    pub fn pack_string(&mut self, text: &str) -> WireResult<()> {
        self.pack_str(text.as_bytes())
    }
}
