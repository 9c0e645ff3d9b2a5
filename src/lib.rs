//! # arkbuf
//!
//! Sequential cursor buffer for encoding and decoding binary archive records.
//!
//! This crate provides:
//! - [`RecordBuffer`] - a growable byte region paired with one forward-only
//!   read/write cursor, with typed accessors for fixed-width integers
//!   (8/16/32/64-bit, signed/unsigned, either byte order) plus raw
//!   byte-range access
//! - [`ByteOrder`] - byte order selection for multi-byte accessors
//! - [`BufferPool`] - reusable buffer allocation for repeated encode passes
//! - Error types for out-of-range access and 64-bit conversion failures
//!
//! A buffer is one sequential pass: writes lay a record down front to back,
//! reads consume it front to back, and the cursor never moves backwards.
//! Callers encoding container headers issue typed calls in field order and
//! never manage offsets themselves.

pub mod buffer;
pub mod error;
pub mod order;
pub mod pool;

pub use buffer::RecordBuffer;
pub use error::{Error, Result};
pub use order::ByteOrder;
pub use pool::BufferPool;
