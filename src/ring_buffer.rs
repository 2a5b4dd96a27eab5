use tracing::{debug, trace, warn};

use crate::error::ResultCode;

/// Fixed-capacity circular buffer of fixed-width records
///
/// - Element-type agnostic: records are moved as raw bytes, `element_size` at a time
/// - All-or-nothing writes and reads; a failed call leaves the buffer untouched
/// - Single owner, no internal locking
pub struct RingBuffer {
    /// Backing store, exactly `capacity * element_size` bytes
    storage: Vec<u8>,
    /// Maximum number of elements
    capacity: usize,
    /// Byte width of one element
    element_size: usize,
    /// Slot index of the next write, in `[0, capacity)`
    write_cursor: usize,
    /// Number of unread elements, in `[0, capacity]`
    count: usize,
}

impl std::fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity)
            .field("element_size", &self.element_size)
            .field("write_cursor", &self.write_cursor)
            .field("count", &self.count)
            .finish()
    }
}

impl Drop for RingBuffer {
    fn drop(&mut self) {
        debug!(
            capacity = self.capacity,
            element_size = self.element_size,
            unread = self.count,
            "ring buffer released"
        );
    }
}

impl RingBuffer {
    /// Create a ring buffer holding up to `capacity` elements of `element_size` bytes
    ///
    /// The storage is zero-filled and allocated up front; nothing allocates afterwards.
    ///
    /// # Returns
    /// * `Ok(RingBuffer)` on success
    /// * `Err(ResultCode::InvalidArgument)` if `capacity` or `element_size` is 0
    /// * `Err(ResultCode::OutOfMemory)` if the storage size overflows or cannot be allocated
    pub fn new(capacity: usize, element_size: usize) -> Result<Self, ResultCode> {
        if capacity == 0 || element_size == 0 {
            return Err(ResultCode::InvalidArgument);
        }

        let size = capacity
            .checked_mul(element_size)
            .filter(|&size| size <= isize::MAX as usize)
            .ok_or_else(|| {
                warn!(capacity, element_size, "ring buffer size overflows address space");
                ResultCode::OutOfMemory
            })?;

        let mut storage = Vec::new();
        if let Err(err) = storage.try_reserve_exact(size) {
            warn!(capacity, element_size, %err, "ring buffer allocation failed");
            return Err(ResultCode::OutOfMemory);
        }
        storage.resize(size, 0);

        debug!(capacity, element_size, bytes = size, "ring buffer created");

        Ok(RingBuffer {
            storage,
            capacity,
            element_size,
            write_cursor: 0,
            count: 0,
        })
    }

    /// Append `num_elements` records taken from the front of `source`
    ///
    /// Copies starting at the write cursor and wraps to slot 0 at the end of the
    /// storage. Bytes in `source` past `num_elements * element_size` are ignored.
    ///
    /// # Returns
    /// * `Ok(())` once every record is stored (always for `num_elements == 0`)
    /// * `Err(ResultCode::WriteOverflow)` if fewer than `num_elements` slots are free
    /// * `Err(ResultCode::InvalidArgument)` if `source` is too short
    pub fn write(&mut self, source: &[u8], num_elements: usize) -> Result<(), ResultCode> {
        if num_elements == 0 {
            return Ok(());
        }

        if num_elements > self.available() {
            trace!(
                requested = num_elements,
                available = self.available(),
                "write overflow"
            );
            return Err(ResultCode::WriteOverflow);
        }

        // Cannot overflow: num_elements <= capacity.
        let len = num_elements * self.element_size;
        let source = source.get(..len).ok_or(ResultCode::InvalidArgument)?;

        let start = self.write_cursor * self.element_size;
        let head = len.min(self.storage.len() - start);
        self.storage[start..start + head].copy_from_slice(&source[..head]);
        self.storage[..len - head].copy_from_slice(&source[head..]);

        self.write_cursor = (self.write_cursor + num_elements) % self.capacity;
        self.count += num_elements;

        trace!(
            elements = num_elements,
            write_cursor = self.write_cursor,
            count = self.count,
            "write"
        );
        Ok(())
    }

    /// Remove exactly `requested` of the oldest records into `destination`
    ///
    /// Nothing is delivered unless all `requested` records are buffered. The
    /// unread data is not moved; the valid window just starts later.
    ///
    /// # Returns
    /// * `Ok(delivered)` with `delivered == requested` (0 for an empty request)
    /// * `Err(ResultCode::ReadIncomplete)` if fewer than `requested` records are buffered
    /// * `Err(ResultCode::InvalidArgument)` if `destination` is too short
    pub fn read(&mut self, destination: &mut [u8], requested: usize) -> Result<usize, ResultCode> {
        if requested == 0 {
            return Ok(0);
        }

        if requested > self.count {
            trace!(requested, count = self.count, "read incomplete");
            return Err(ResultCode::ReadIncomplete);
        }

        let len = requested * self.element_size;
        let destination = destination
            .get_mut(..len)
            .ok_or(ResultCode::InvalidArgument)?;

        let start = self.read_cursor() * self.element_size;
        let head = len.min(self.storage.len() - start);
        destination[..head].copy_from_slice(&self.storage[start..start + head]);
        destination[head..].copy_from_slice(&self.storage[..len - head]);

        self.count -= requested;

        trace!(elements = requested, count = self.count, "read");
        Ok(requested)
    }

    /// Discard every unread element. The storage is kept.
    pub fn clear(&mut self) {
        self.write_cursor = 0;
        self.count = 0;
    }

    /// Release the storage
    ///
    /// Equivalent to dropping the buffer; provided as an explicit teardown point.
    pub fn destroy(self) {
        drop(self);
    }

    /// Maximum number of elements
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Byte width of one element
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Size of the backing store in bytes
    pub fn size_in_bytes(&self) -> usize {
        self.storage.len()
    }

    /// Number of unread elements
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if no elements are buffered
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if every slot holds an unread element
    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Number of free slots
    pub fn available(&self) -> usize {
        self.capacity - self.count
    }

    /// Slot index the next write starts at
    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    /// Slot index of the oldest unread element
    pub fn read_cursor(&self) -> usize {
        (self.write_cursor + self.capacity - self.count) % self.capacity
    }
}
