//! Growable byte buffer with independent write and read cursors.

use crate::error::{WireError, WireResult};
use crate::ids::IdSizes;

/// Capacity floor applied before the first growth step.
pub const MIN_CAPACITY: usize = 256;

/// Multiplier applied on every growth step.
pub const GROWTH_FACTOR: usize = 4;

/// Returns the capacity `reserve` grows to when `current` cannot hold
/// `required` bytes, or `None` if the computation overflows.
///
/// Starting from `max(current, MIN_CAPACITY)`, the capacity is multiplied by
/// [`GROWTH_FACTOR`] at least once and then until it reaches `required`.
#[must_use]
pub fn grown_capacity(current: usize, required: usize) -> Option<usize> {
    let mut capacity = current.max(MIN_CAPACITY);
    loop {
        capacity = capacity.checked_mul(GROWTH_FACTOR)?;
        if capacity >= required {
            return Some(capacity);
        }
    }
}

/// A byte buffer shared by the producer and consumer sides of one session.
///
/// Packed fields are appended at [`len`](Self::len); unpacked fields are
/// read from [`offset`](Self::offset) up to `len`. The buffer also carries
/// the session's identifier widths, so identifier fields can be coded
/// without passing widths around.
///
/// Invariant: `offset <= len <= capacity`.
///
/// A `Buffer` is not synchronized. Share it across threads only behind
/// external mutual exclusion.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    /// Valid bytes. `data.len()` is the buffer length.
    data: Vec<u8>,
    /// Capacity under the growth contract. The backing allocation may be
    /// larger after a `prepare` that shrinks this value.
    capacity: usize,
    /// Read cursor into `data`.
    offset: usize,
    id_sizes: IdSizes,
}

impl Buffer {
    /// Creates an empty buffer with no storage and unset identifier widths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer configured with `id_sizes`.
    #[must_use]
    pub fn with_id_sizes(id_sizes: IdSizes) -> Self {
        Self {
            id_sizes,
            ..Self::default()
        }
    }

    /// Creates a buffer in read mode holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> WireResult<Self> {
        let mut buf = Self::new();
        buf.prepare_unpack(bytes)?;
        Ok(buf)
    }

    /// Sets the session's identifier widths.
    pub fn configure(&mut self, id_sizes: IdSizes) {
        self.id_sizes = id_sizes;
    }

    /// Returns the session's identifier widths.
    #[must_use]
    pub const fn id_sizes(&self) -> IdSizes {
        self.id_sizes
    }

    /// Returns the number of valid bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no valid bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity under the growth contract.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the read offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Returns the valid region, the unit handed to the transport.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the unread part of the valid region.
    #[must_use]
    pub fn unread(&self) -> &[u8] {
        &self.data[self.offset..]
    }

    /// Consumes the buffer and returns its valid bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Guarantees room for `additional` bytes past the current length.
    ///
    /// A no-op when the capacity already suffices. Otherwise the capacity
    /// grows per [`grown_capacity`] with a single reallocation.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::HeapFault`] if the allocation fails. Storage and
    /// cursors are unchanged in that case.
    pub fn reserve(&mut self, additional: usize) -> WireResult<()> {
        let len = self.data.len();
        let requested = len.saturating_add(additional);
        if requested <= self.capacity {
            return Ok(());
        }
        let Some(capacity) = grown_capacity(self.capacity, requested) else {
            return Err(WireError::HeapFault { requested });
        };
        self.data
            .try_reserve_exact(capacity - len)
            .map_err(|_| WireError::HeapFault {
                requested: capacity,
            })?;
        self.capacity = capacity;
        Ok(())
    }

    /// Resets the buffer for reuse.
    ///
    /// With `Some(source)`, the first `len` bytes of `source` are copied in
    /// and the buffer is ready to unpack them. With `None`, the buffer is
    /// emptied for packing. Either way the capacity becomes exactly `len`
    /// and the read offset returns to zero. The backing allocation is never
    /// shrunk.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::NeedLength`] if `source` is shorter than `len`,
    /// or [`WireError::HeapFault`] if the allocation fails.
    pub fn prepare(&mut self, source: Option<&[u8]>, len: usize) -> WireResult<()> {
        let source = match source {
            Some(bytes) => Some(bytes.get(..len).ok_or(WireError::NeedLength {
                requested: len,
                available: bytes.len(),
            })?),
            None => None,
        };
        self.data
            .try_reserve_exact(len.saturating_sub(self.data.len()))
            .map_err(|_| WireError::HeapFault { requested: len })?;

        self.data.clear();
        if let Some(bytes) = source {
            self.data.extend_from_slice(bytes);
        }
        self.capacity = len;
        self.offset = 0;
        Ok(())
    }

    /// Resets the buffer for packing with `capacity` bytes preallocated.
    pub fn prepare_pack(&mut self, capacity: usize) -> WireResult<()> {
        self.prepare(None, capacity)
    }

    /// Resets the buffer for unpacking a copy of `bytes`.
    pub fn prepare_unpack(&mut self, bytes: &[u8]) -> WireResult<()> {
        self.prepare(Some(bytes), bytes.len())
    }

    /// Frees the storage and leaves the buffer empty.
    ///
    /// Calling this again is a no-op. Identifier widths are kept, so the
    /// buffer can be prepared again for the same session.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.capacity = 0;
        self.offset = 0;
    }

    /// Appends `bytes` after reserving room for them.
    pub(crate) fn put(&mut self, bytes: &[u8]) -> WireResult<()> {
        self.reserve(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Checks that `bytes` unread bytes remain.
    pub(crate) fn ensure_remaining(&self, bytes: usize) -> WireResult<()> {
        let available = self.remaining();
        if bytes > available {
            return Err(WireError::NeedLength {
                requested: bytes,
                available,
            });
        }
        Ok(())
    }

    /// Returns the `len` unread bytes at `skip` past the read offset,
    /// without advancing.
    pub(crate) fn peek(&self, skip: usize, len: usize) -> WireResult<&[u8]> {
        self.ensure_remaining(skip.saturating_add(len))?;
        let start = self.offset + skip;
        Ok(&self.data[start..start + len])
    }

    /// Advances the read offset. Callers check the bound first.
    pub(crate) fn advance(&mut self, len: usize) {
        debug_assert!(len <= self.remaining());
        self.offset += len;
    }
}
