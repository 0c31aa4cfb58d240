use bytes::{Bytes, BytesMut};

/// Most a declared `Content-Length` may reserve before any body arrives.
pub const INITIAL_BODY_CAPACITY: usize = 64 * 1024;

/// The body exceeded the upload limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooLarge;

/// Accumulates a request body up to `limit` bytes.
#[derive(Debug)]
pub struct BodyBuffer {
    buf: BytesMut,
    limit: usize,
}

impl BodyBuffer {
    /// Fails immediately when the declared length is already over `limit`.
    /// The declared length only sizes the first allocation.
    pub fn new(declared: Option<usize>, limit: usize) -> Result<Self, TooLarge> {
        if declared.is_some_and(|len| len > limit) {
            return Err(TooLarge);
        }
        let capacity = declared.unwrap_or(0).min(INITIAL_BODY_CAPACITY);
        Ok(Self {
            buf: BytesMut::with_capacity(capacity),
            limit,
        })
    }

    pub fn push(&mut self, chunk: &[u8]) -> Result<(), TooLarge> {
        if self.buf.len() + chunk.len() > self.limit {
            return Err(TooLarge);
        }
        self.buf.extend_from_slice(chunk);
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}
