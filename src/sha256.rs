//! Streaming SHA-256 hasher.
//!
//! Input is buffered into 64-byte blocks and folded into the digest with
//! [`compress`]. `finalize` resets the hasher to its initial state, so a
//! single instance can be reused for independent messages without calling
//! `new` again. That differs from most hashing APIs, which consume the
//! hasher on finalize.

use std::io;

use crate::transform::{compress, BLOCK_LEN, INITIAL_STATE};

/// Offset within a block where the 64-bit length field starts.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Incremental SHA-256 state.
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    bit_len: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    /// Fresh hasher in the initial state.
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            bit_len: 0,
        }
    }

    /// Hash `data` in one shot and return the lowercase hex digest.
    pub fn hash(data: &[u8]) -> String {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Feed more bytes into the hash. Empty input is a no-op.
    pub fn update(&mut self, data: &[u8]) {
        self.bit_len = self.bit_len.wrapping_add((data.len() as u64).wrapping_mul(8));

        let mut rest = data;
        while !rest.is_empty() {
            let take = rest.len().min(BLOCK_LEN - self.buffer_len);
            let (chunk, tail) = rest.split_at(take);
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(chunk);
            self.buffer_len += take;
            rest = tail;

            if self.buffer_len == BLOCK_LEN {
                compress(&mut self.state, &self.buffer);
                self.buffer_len = 0;
            }
        }
    }

    /// Pad, run the final transform(s) and return the 64-character hex digest.
    ///
    /// The hasher is reset afterwards and behaves as if freshly constructed.
    pub fn finalize(&mut self) -> String {
        let bit_len = self.bit_len;
        let pad_len = padding_len(self.buffer_len);
        let mut padding = [0u8; BLOCK_LEN];
        padding[0] = 0x80;
        self.update(&padding[..pad_len]);
        self.update(&bit_len.to_be_bytes());
        debug_assert_eq!(self.buffer_len, 0);

        let mut digest = [0u8; 32];
        for (out, word) in digest.chunks_exact_mut(4).zip(self.state.iter()) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        self.reset();
        hex::encode(digest)
    }

    /// Discard any consumed input and return to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Total bytes consumed since construction or the last reset.
    pub fn bytes_hashed(&self) -> u64 {
        self.bit_len / 8
    }

    /// Bytes waiting in the partial block (always below 64).
    pub fn buffered(&self) -> usize {
        self.buffer_len
    }
}

/// Number of padding bytes (`0x80` then zeros) needed so that the buffered
/// bytes plus padding end exactly where the length field begins.
fn padding_len(buffer_len: usize) -> usize {
    if buffer_len < LENGTH_OFFSET {
        LENGTH_OFFSET - buffer_len
    } else {
        BLOCK_LEN + LENGTH_OFFSET - buffer_len
    }
}

impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
