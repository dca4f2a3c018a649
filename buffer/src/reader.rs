//! Unpacking side: bounded big-endian reads from the read offset.

use crate::buffer::Buffer;
use crate::error::{WireError, WireResult};
use crate::ids::IdKind;

/// Size of the length prefix on strings.
const STR_PREFIX: usize = 4;

impl Buffer {
    /// Unpacks a `u8`.
    pub fn unpack_u8(&mut self) -> WireResult<u8> {
        let [value] = self.take::<1>()?;
        Ok(value)
    }

    /// Unpacks a big-endian `u16`.
    pub fn unpack_u16(&mut self) -> WireResult<u16> {
        Ok(u16::from_be_bytes(self.take()?))
    }

    /// Unpacks a big-endian `u32`.
    pub fn unpack_u32(&mut self) -> WireResult<u32> {
        Ok(u32::from_be_bytes(self.take()?))
    }

    /// Unpacks a big-endian `u64`.
    pub fn unpack_u64(&mut self) -> WireResult<u64> {
        Ok(u64::from_be_bytes(self.take()?))
    }

    /// Unpacks a big-endian `i32`.
    pub fn unpack_i32(&mut self) -> WireResult<i32> {
        Ok(i32::from_be_bytes(self.take()?))
    }

    /// Unpacks a big-endian `i64`.
    pub fn unpack_i64(&mut self) -> WireResult<i64> {
        Ok(i64::from_be_bytes(self.take()?))
    }

    /// Unpacks a one-byte boolean. Any non-zero byte is `true`.
    pub fn unpack_bool(&mut self) -> WireResult<bool> {
        Ok(self.unpack_u8()? != 0)
    }

    /// Unpacks a `width`-byte identifier, zero-extended to 64 bits.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::SizeUnsupported`] if `width` is not 1, 2, 4 or 8,
    /// or [`WireError::NeedLength`] if fewer than `width` bytes remain. The
    /// read offset is unchanged on error.
    pub fn unpack_id(&mut self, width: u8) -> WireResult<u64> {
        match width {
            1 => self.unpack_u8().map(u64::from),
            2 => self.unpack_u16().map(u64::from),
            4 => self.unpack_u32().map(u64::from),
            8 => self.unpack_u64(),
            _ => Err(WireError::SizeUnsupported { width }),
        }
    }

    /// Unpacks an identifier using the configured width for `kind`.
    pub fn unpack_id_of(&mut self, kind: IdKind) -> WireResult<u64> {
        self.unpack_id(self.id_sizes().get(kind))
    }

    /// Unpacks an object identifier.
    pub fn unpack_object_id(&mut self) -> WireResult<u64> {
        self.unpack_id_of(IdKind::Object)
    }

    /// Unpacks a field identifier.
    pub fn unpack_field_id(&mut self) -> WireResult<u64> {
        self.unpack_id_of(IdKind::Field)
    }

    /// Unpacks a method identifier.
    pub fn unpack_method_id(&mut self) -> WireResult<u64> {
        self.unpack_id_of(IdKind::Method)
    }

    /// Unpacks a reference-type identifier, using the thread width.
    pub fn unpack_type_id(&mut self) -> WireResult<u64> {
        self.unpack_id_of(IdKind::Thread)
    }

    /// Unpacks a frame identifier.
    pub fn unpack_frame_id(&mut self) -> WireResult<u64> {
        self.unpack_id_of(IdKind::Frame)
    }

    /// Unpacks a length-prefixed string as a view into the buffer.
    ///
    /// The view borrows the buffer, so no pack or prepare call can run while
    /// it is alive. Use [`unpack_str_owned`](Self::unpack_str_owned) to keep
    /// the bytes across writes.
    ///
    /// ```compile_fail
    /// use buffer::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.pack_str(b"abc").unwrap();
    /// let view = buf.unpack_str().unwrap();
    /// buf.pack_u8(1).unwrap();
    /// assert_eq!(view, b"abc");
    /// ```
    ///
    /// Copying the view out releases the borrow:
    ///
    /// ```
    /// use buffer::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.pack_str(b"abc").unwrap();
    /// let copy = buf.unpack_str().unwrap().to_vec();
    /// buf.pack_u8(1).unwrap();
    /// assert_eq!(copy, b"abc");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`WireError::NeedLength`] if the prefix or the payload it
    /// announces is not fully present. The read offset is unchanged on error.
    pub fn unpack_str(&mut self) -> WireResult<&[u8]> {
        let len = self.str_len()?;
        self.ensure_remaining(STR_PREFIX.saturating_add(len))?;
        let start = self.offset() + STR_PREFIX;
        self.advance(STR_PREFIX + len);
        Ok(&self.as_bytes()[start..start + len])
    }

    /// Unpacks a length-prefixed string into an owned copy.
    pub fn unpack_str_owned(&mut self) -> WireResult<Vec<u8>> {
        self.unpack_str().map(<[u8]>::to_vec)
    }

    fn str_len(&self) -> WireResult<usize> {
        let mut prefix = [0u8; STR_PREFIX];
        prefix.copy_from_slice(self.peek(0, STR_PREFIX)?);
        // u32 always fits in usize on supported targets
        Ok(u32::from_be_bytes(prefix) as usize)
    }

    fn take<const N: usize>(&mut self) -> WireResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.peek(0, N)?);
        self.advance(N);
        Ok(out)
    }
}
