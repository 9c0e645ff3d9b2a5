//! Pool of reusable record buffers.
//!
//! Encoding a stream of records allocates one buffer per record; the pool
//! amortizes that by handing buffers back out after they are cleared.

use crate::buffer::RecordBuffer;
use crossbeam_queue::ArrayQueue;
use std::sync::Arc;

/// Pool of reusable [`RecordBuffer`]s.
///
/// The pool uses a lock-free queue so producers on different threads can
/// acquire and release buffers with minimal contention. Each buffer is
/// still used by one caller at a time; the pool shares the queue, never a
/// buffer instance.
pub struct BufferPool {
    buffers: Arc<ArrayQueue<RecordBuffer>>,
    capacity: usize,
}

impl BufferPool {
    /// Creates a new pool holding `capacity` empty buffers.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of buffers in the pool
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let buffers = ArrayQueue::new(capacity);
        for _ in 0..capacity {
            let _ = buffers.push(RecordBuffer::new());
        }
        Self {
            buffers: Arc::new(buffers),
            capacity,
        }
    }

    /// Acquires a buffer from the pool.
    ///
    /// Returns `None` if the pool is empty. Acquired buffers start empty
    /// with the cursor at 0, ready for an encode pass.
    #[inline]
    #[must_use]
    pub fn acquire(&self) -> Option<RecordBuffer> {
        self.buffers.pop()
    }

    /// Releases a buffer back to the pool.
    ///
    /// The buffer's storage is zeroed and emptied and its cursor reset, so
    /// no record bytes leak into the next pass.
    ///
    /// # Arguments
    /// * `buffer` - Buffer to release
    #[inline]
    pub fn release(&self, mut buffer: RecordBuffer) {
        buffer.clear();
        let _ = self.buffers.push(buffer);
    }

    /// Returns the capacity of the pool.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of available buffers in the pool.
    #[must_use]
    pub fn available(&self) -> usize {
        self.buffers.len()
    }
}

impl Clone for BufferPool {
    fn clone(&self) -> Self {
        Self {
            buffers: Arc::clone(&self.buffers),
            capacity: self.capacity,
        }
    }
}

impl std::fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferPool")
            .field("capacity", &self.capacity)
            .field("available", &self.buffers.len())
            .finish()
    }
}
