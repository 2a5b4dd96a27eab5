use std::mem::size_of;

use serde::{Deserialize, Serialize};

use crate::error::ResultCode;
use crate::ring_buffer::RingBuffer;

/// Default number of elements
pub const DEFAULT_CAPACITY: usize = 2048;

/// Default element width: one 16-bit PCM sample
pub const DEFAULT_ELEMENT_SIZE: usize = 2;

/// Creation parameters for a [`RingBuffer`]
///
/// Deserializable so it can be embedded in a collaborator's own configuration.
/// Missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingBufferConfig {
    /// Maximum number of elements
    pub capacity: usize,
    /// Byte width of one element
    pub element_size: usize,
}

impl Default for RingBufferConfig {
    fn default() -> Self {
        RingBufferConfig {
            capacity: DEFAULT_CAPACITY,
            element_size: DEFAULT_ELEMENT_SIZE,
        }
    }
}

impl RingBufferConfig {
    /// Config for `capacity` elements of type `T`
    pub fn for_element<T>(capacity: usize) -> Self {
        RingBufferConfig {
            capacity,
            element_size: size_of::<T>(),
        }
    }

    /// Reject zero capacity or element size
    pub fn validate(&self) -> Result<(), ResultCode> {
        if self.capacity == 0 || self.element_size == 0 {
            return Err(ResultCode::InvalidArgument);
        }
        Ok(())
    }

    /// Allocate a ring buffer with these parameters
    pub fn build(&self) -> Result<RingBuffer, ResultCode> {
        self.validate()?;
        RingBuffer::new(self.capacity, self.element_size)
    }
}
