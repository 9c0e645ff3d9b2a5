//! The sequential cursor buffer.
//!
//! This module provides [`RecordBuffer`], the codec primitive used to
//! serialize and deserialize structured binary records. One growable byte
//! region is paired with one forward-only cursor; every accessor operates
//! at the cursor and advances it by the bytes it consumed or produced.

use crate::error::{Error, Result};
use crate::order::ByteOrder;

/// A growable byte buffer with a single monotonically advancing
/// read/write cursor.
///
/// The buffer is one sequential pass: typed writes lay a record down
/// front to back (growing storage as needed), typed reads consume it in
/// the same order, and nothing ever moves the cursor backwards. There is
/// no seek, rewind, or peek: every read is destructive to position.
///
/// Typed writes grow storage; raw [`write`](Self::write) does not and
/// fails when the bytes do not fit. That asymmetry is part of the
/// contract: callers bounds-check before raw writes.
///
/// # Example
/// ```
/// use arkbuf::{ByteOrder, RecordBuffer};
///
/// let mut buf = RecordBuffer::new();
/// buf.write_u16(0x0102, ByteOrder::Little);
/// buf.write_u8(0xFF);
///
/// let mut dec = RecordBuffer::from_vec(buf.into_inner());
/// assert_eq!(dec.read_u16(ByteOrder::Little).unwrap(), 0x0102);
/// assert_eq!(dec.read_u8().unwrap(), 0xFF);
/// ```
pub struct RecordBuffer {
    storage: Vec<u8>,
    cursor: usize,
}

impl RecordBuffer {
    /// Creates an empty buffer with the cursor at 0, for a pure encode pass.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
            cursor: 0,
        }
    }

    /// Wraps existing bytes for a decode pass, cursor at 0.
    ///
    /// # Arguments
    /// * `storage` - Previously encoded bytes to read back
    #[must_use]
    pub fn from_vec(storage: Vec<u8>) -> Self {
        Self { storage, cursor: 0 }
    }

    /// Returns the current length of storage in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if storage is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the full storage as a byte slice, without moving the cursor.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.storage
    }

    /// Consumes the buffer and hands the storage to the caller.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.storage
    }

    /// Zeroes and empties storage and resets the cursor, keeping the
    /// allocation for reuse. Pool-internal: a buffer in caller hands
    /// never rewinds.
    pub(crate) fn clear(&mut self) {
        self.storage.fill(0);
        self.storage.clear();
        self.cursor = 0;
    }

    /// Ensures storage covers `[cursor, cursor + width)` ahead of a typed
    /// write.
    ///
    /// Exact-fit growth: the replacement region is precisely
    /// `cursor + width` bytes, zero-filled, with the old bytes copied into
    /// its prefix. No amortization. The `>=` boundary means a write ending
    /// exactly at the current length still reallocates, to the same size.
    fn ensure_capacity(&mut self, width: usize) {
        if self.cursor + width >= self.storage.len() {
            let mut grown = vec![0u8; self.cursor + width];
            grown[..self.storage.len()].copy_from_slice(&self.storage);
            self.storage = grown;
        }
    }

    /// Takes the next `width` bytes for a typed read, advancing the cursor
    /// only when they are all in bounds.
    #[inline(always)]
    fn take(&mut self, width: usize) -> Result<&[u8]> {
        let available = self.storage.len().saturating_sub(self.cursor);
        if available < width {
            return Err(Error::OutOfRange {
                offset: self.cursor,
                requested: width,
                available,
            });
        }
        let start = self.cursor;
        self.cursor += width;
        Ok(&self.storage[start..start + width])
    }

    /// Encodes `bytes` at the cursor after growing, then advances.
    #[inline(always)]
    fn put(&mut self, bytes: &[u8]) {
        self.ensure_capacity(bytes.len());
        self.storage[self.cursor..self.cursor + bytes.len()].copy_from_slice(bytes);
        self.cursor += bytes.len();
    }

    /// Reads a u8 at the cursor, advancing by 1.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if the cursor is at or past the end.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    /// Reads an i8 at the cursor, advancing by 1.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if the cursor is at or past the end.
    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8> {
        let bytes = self.take(1)?;
        Ok(bytes[0] as i8)
    }

    /// Writes a u8 at the cursor, growing if needed, advancing by 1.
    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) {
        self.put(&[value]);
    }

    /// Writes an i8 at the cursor, growing if needed, advancing by 1.
    #[inline(always)]
    pub fn write_i8(&mut self, value: i8) {
        self.put(&[value as u8]);
    }

    /// Reads a u16 in the given byte order, advancing by 2.
    ///
    /// # Arguments
    /// * `order` - Byte order of the encoded value
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if fewer than 2 bytes remain.
    #[inline(always)]
    pub fn read_u16(&mut self, order: ByteOrder) -> Result<u16> {
        let bytes = self.take(2)?;
        Ok(order.u16_from_bytes([bytes[0], bytes[1]]))
    }

    /// Reads an i16 in the given byte order, advancing by 2.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if fewer than 2 bytes remain.
    #[inline(always)]
    pub fn read_i16(&mut self, order: ByteOrder) -> Result<i16> {
        Ok(self.read_u16(order)? as i16)
    }

    /// Writes a u16 in the given byte order, growing if needed, advancing
    /// by 2.
    #[inline(always)]
    pub fn write_u16(&mut self, value: u16, order: ByteOrder) {
        self.put(&order.u16_to_bytes(value));
    }

    /// Writes an i16 in the given byte order, growing if needed, advancing
    /// by 2.
    #[inline(always)]
    pub fn write_i16(&mut self, value: i16, order: ByteOrder) {
        self.write_u16(value as u16, order);
    }

    /// Reads a u32 in the given byte order, advancing by 4.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if fewer than 4 bytes remain.
    #[inline(always)]
    pub fn read_u32(&mut self, order: ByteOrder) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(order.u32_from_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads an i32 in the given byte order, advancing by 4.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if fewer than 4 bytes remain.
    #[inline(always)]
    pub fn read_i32(&mut self, order: ByteOrder) -> Result<i32> {
        Ok(self.read_u32(order)? as i32)
    }

    /// Writes a u32 in the given byte order, growing if needed, advancing
    /// by 4.
    #[inline(always)]
    pub fn write_u32(&mut self, value: u32, order: ByteOrder) {
        self.put(&order.u32_to_bytes(value));
    }

    /// Writes an i32 in the given byte order, growing if needed, advancing
    /// by 4.
    #[inline(always)]
    pub fn write_i32(&mut self, value: i32, order: ByteOrder) {
        self.write_u32(value as u32, order);
    }

    /// Reads a u64 in the given byte order, advancing by 8.
    ///
    /// The full unsigned 64-bit range round-trips exactly.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if fewer than 8 bytes remain.
    #[inline(always)]
    pub fn read_u64(&mut self, order: ByteOrder) -> Result<u64> {
        let bytes = self.take(8)?;
        Ok(order.u64_from_bytes(bytes.try_into().unwrap()))
    }

    /// Reads an i64 in the given byte order, advancing by 8.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if fewer than 8 bytes remain.
    #[inline(always)]
    pub fn read_i64(&mut self, order: ByteOrder) -> Result<i64> {
        Ok(self.read_u64(order)? as i64)
    }

    /// Writes a u64 in the given byte order, growing if needed, advancing
    /// by 8.
    ///
    /// Accepts any integer convertible to u64, so callers can pass field
    /// values in whatever width they hold them.
    ///
    /// # Arguments
    /// * `value` - Integer convertible to u64
    /// * `order` - Byte order to encode with
    ///
    /// # Errors
    /// Returns [`Error::IntConversion`] if `value` does not fit in u64;
    /// nothing is written and the cursor does not move.
    pub fn write_u64<V>(&mut self, value: V, order: ByteOrder) -> Result<()>
    where
        V: TryInto<u64> + Copy + std::fmt::Display,
    {
        let wide: u64 = value.try_into().map_err(|_| Error::IntConversion {
            value: value.to_string(),
        })?;
        self.put(&order.u64_to_bytes(wide));
        Ok(())
    }

    /// Writes an i64 in the given byte order, growing if needed, advancing
    /// by 8.
    ///
    /// # Errors
    /// Returns [`Error::IntConversion`] if `value` does not fit in i64;
    /// nothing is written and the cursor does not move.
    pub fn write_i64<V>(&mut self, value: V, order: ByteOrder) -> Result<()>
    where
        V: TryInto<i64> + Copy + std::fmt::Display,
    {
        let wide: i64 = value.try_into().map_err(|_| Error::IntConversion {
            value: value.to_string(),
        })?;
        self.put(&order.u64_to_bytes(wide as u64));
        Ok(())
    }

    /// Returns a view of up to `n` bytes at the cursor, advancing by `n`.
    ///
    /// Standard slice semantics at the end of storage: the view is
    /// silently truncated to the bytes that exist, so its length may be
    /// less than `n`. The cursor still advances by the full `n`.
    ///
    /// The view borrows storage, so it cannot outlive a later write that
    /// may reallocate.
    ///
    /// # Arguments
    /// * `n` - Number of bytes requested
    #[must_use]
    pub fn read(&mut self, n: usize) -> &[u8] {
        let start = self.cursor.min(self.storage.len());
        let end = self.cursor.saturating_add(n).min(self.storage.len());
        self.cursor = self.cursor.saturating_add(n);
        &self.storage[start..end]
    }

    /// Overwrites `value.len()` bytes in place at the cursor, advancing by
    /// that length.
    ///
    /// Unlike the typed writes this never grows storage: the caller
    /// bounds-checks, and a write that does not fit fails with storage
    /// and cursor unchanged.
    ///
    /// # Arguments
    /// * `value` - Text or bytes to copy in
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `value` extends past the end of
    /// storage.
    pub fn write<V: AsRef<[u8]>>(&mut self, value: V) -> Result<()> {
        let src = value.as_ref();
        let available = self.storage.len().saturating_sub(self.cursor);
        // A truncating raw read can leave the cursor past the end; any raw
        // write from there is out of range, even an empty one.
        if self.cursor > self.storage.len() || src.len() > available {
            return Err(Error::OutOfRange {
                offset: self.cursor,
                requested: src.len(),
                available,
            });
        }
        self.storage[self.cursor..self.cursor + src.len()].copy_from_slice(src);
        self.cursor += src.len();
        Ok(())
    }

    /// Returns the view `[offset, len)` and forces the cursor to the end
    /// of storage.
    ///
    /// `offset` addresses from the start of storage, independent of the
    /// cursor's value at call time. The rest of the buffer is consumed as
    /// a side effect regardless of where the cursor was.
    ///
    /// # Arguments
    /// * `offset` - Start of the returned view, from the start of storage
    #[must_use]
    pub fn read_to_end(&mut self, offset: usize) -> &[u8] {
        self.cursor = self.storage.len();
        &self.storage[offset.min(self.storage.len())..]
    }
}

impl Default for RecordBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for RecordBuffer {
    fn from(storage: Vec<u8>) -> Self {
        Self::from_vec(storage)
    }
}

impl From<&[u8]> for RecordBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }
}

impl AsRef<[u8]> for RecordBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.storage
    }
}

impl std::fmt::Debug for RecordBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordBuffer")
            .field("len", &self.storage.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}
