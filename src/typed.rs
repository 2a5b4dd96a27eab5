//! Typed view over [`RingBuffer`] for plain-data records.

use std::marker::PhantomData;
use std::mem::size_of;

use bytemuck::Pod;

use crate::error::ResultCode;
use crate::ring_buffer::RingBuffer;

/// Ring buffer of `T` records
///
/// The element size is `size_of::<T>()`; records are reinterpreted as bytes
/// with `bytemuck`, so `T` must be [`Pod`].
pub struct TypedRingBuffer<T: Pod> {
    raw: RingBuffer,
    _marker: PhantomData<T>,
}

impl<T: Pod> std::fmt::Debug for TypedRingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedRingBuffer")
            .field("element", &std::any::type_name::<T>())
            .field("raw", &self.raw)
            .finish()
    }
}

impl<T: Pod> TypedRingBuffer<T> {
    /// Create a buffer holding up to `capacity` records
    ///
    /// Zero-sized `T` is rejected with `ResultCode::InvalidArgument`.
    pub fn new(capacity: usize) -> Result<Self, ResultCode> {
        RingBuffer::new(capacity, size_of::<T>()).map(|raw| TypedRingBuffer {
            raw,
            _marker: PhantomData,
        })
    }

    /// Append every record in `records`, or none of them
    pub fn write(&mut self, records: &[T]) -> Result<(), ResultCode> {
        self.raw.write(bytemuck::cast_slice(records), records.len())
    }

    /// Fill `destination` with the oldest records, or leave it untouched
    ///
    /// Requests exactly `destination.len()` records.
    pub fn read(&mut self, destination: &mut [T]) -> Result<usize, ResultCode> {
        let requested = destination.len();
        self.raw
            .read(bytemuck::cast_slice_mut(destination), requested)
    }

    /// Remove the `count` oldest records into a new vector
    pub fn read_exact(&mut self, count: usize) -> Result<Vec<T>, ResultCode> {
        if count > self.raw.len() {
            return Err(ResultCode::ReadIncomplete);
        }
        let mut records = vec![T::zeroed(); count];
        self.read(&mut records)?;
        Ok(records)
    }

    /// Discard every unread record
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Release the storage
    pub fn destroy(self) {
        self.raw.destroy();
    }

    /// Maximum number of records
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Number of unread records
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Check if no records are buffered
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Check if every slot is taken
    pub fn is_full(&self) -> bool {
        self.raw.is_full()
    }

    /// Number of free slots
    pub fn available(&self) -> usize {
        self.raw.available()
    }

    /// The underlying byte buffer
    pub fn as_raw(&self) -> &RingBuffer {
        &self.raw
    }

    /// Unwrap into the underlying byte buffer
    pub fn into_raw(self) -> RingBuffer {
        self.raw
    }
}
