//! # pcmring - fixed-width record ring buffer
//!
//! A fixed-capacity circular buffer for staging fixed-width records (audio
//! samples, sensor frames) between a producer and a consumer on the same thread.
//!
//! ## Design
//!
//! - Storage of `capacity * element_size` bytes allocated once, at creation
//! - Records are raw bytes of a fixed `element_size`; [`TypedRingBuffer`] adds a typed view
//! - Writes and reads are all-or-nothing: an overflowing write or a read asking for
//!   more than is buffered returns an error and changes nothing
//! - No locking; share across threads by wrapping it in your own synchronization
//!
//! ## Example
//!
//! ```
//! use pcmring::{ResultCode, TypedRingBuffer};
//!
//! let mut rb = TypedRingBuffer::<i16>::new(10).unwrap();
//!
//! let samples = [5, 7, -20, 35, 70, 100, 0, 1, -100];
//! rb.write(&samples).unwrap();
//!
//! // Only one slot left
//! assert_eq!(rb.write(&samples), Err(ResultCode::WriteOverflow));
//!
//! let mut out = [0i16; 9];
//! assert_eq!(rb.read(&mut out), Ok(9));
//! assert_eq!(out, samples);
//!
//! // Nothing buffered: the read delivers nothing
//! assert_eq!(rb.read(&mut out[..1]), Err(ResultCode::ReadIncomplete));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod ring_buffer;
mod typed;

pub use config::{RingBufferConfig, DEFAULT_CAPACITY, DEFAULT_ELEMENT_SIZE};
pub use error::ResultCode;
pub use ring_buffer::RingBuffer;
pub use typed::TypedRingBuffer;
