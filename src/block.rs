//! A single 64-byte message block with explicit big-endian accessors.

use crate::constants::{BLOCK_LEN, LENGTH_OFFSET};

/// One message block.
///
/// Padding is written through the byte view; the compression function reads
/// the block through [`Block::words`], which performs the big-endian decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Block {
    bytes: [u8; BLOCK_LEN],
}

impl Block {
    pub(crate) fn zeroed() -> Self {
        Self {
            bytes: [0u8; BLOCK_LEN],
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.bytes
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8; BLOCK_LEN] {
        &mut self.bytes
    }

    /// Decode word `index` (0..16) from big-endian bytes.
    pub(crate) fn word(&self, index: usize) -> u32 {
        let offset = index * 4;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&self.as_bytes()[offset..offset + 4]);
        u32::from_be_bytes(raw)
    }

    /// All sixteen words in native order.
    pub(crate) fn words(&self) -> [u32; 16] {
        let mut out = [0u32; 16];
        for (i, word) in out.iter_mut().enumerate() {
            *word = self.word(i);
        }
        out
    }

    /// Store the message bit length in the trailing 8 bytes.
    pub(crate) fn set_length(&mut self, bits: u64) {
        self.bytes[LENGTH_OFFSET..].copy_from_slice(&bits.to_be_bytes());
    }

    /// Bit length stored in the trailing 8 bytes.
    pub(crate) fn length(&self) -> u64 {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&self.as_bytes()[LENGTH_OFFSET..]);
        u64::from_be_bytes(raw)
    }
}
