//! Message framing: turns a byte source into padded 64-byte blocks.

use std::io::{self, ErrorKind, Read};

use crate::block::Block;
use crate::constants::{BLOCK_LEN, LENGTH_OFFSET};

/// Where the framer is in the padding sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Source data is still being read.
    Streaming,
    /// Data is exhausted and the `0x80` marker is written; a block holding
    /// only the length field is still owed.
    PadOnlyPending,
    /// No blocks remain.
    Done,
}

impl Phase {
    /// Phase that follows a streaming read of `bytes_read` bytes.
    pub(crate) fn after_read(bytes_read: usize) -> Phase {
        if bytes_read < LENGTH_OFFSET {
            Phase::Done
        } else if bytes_read < BLOCK_LEN {
            Phase::PadOnlyPending
        } else {
            Phase::Streaming
        }
    }
}

/// Lazy, non-restartable sequence of padded blocks over a reader.
pub(crate) struct Framer<R> {
    source: R,
    block: Block,
    bits: u64,
    phase: Phase,
    length_spilled: bool,
    blocks_emitted: u64,
}

impl<R: Read> Framer<R> {
    pub(crate) fn new(source: R) -> Self {
        Self {
            source,
            block: Block::zeroed(),
            bits: 0,
            phase: Phase::Streaming,
            length_spilled: false,
            blocks_emitted: 0,
        }
    }

    /// Message length in bits consumed so far, padding excluded.
    pub(crate) fn bits(&self) -> u64 {
        self.bits
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the length field needed its own block (framing passed
    /// through `PadOnlyPending`).
    pub(crate) fn length_spilled(&self) -> bool {
        self.length_spilled
    }

    pub(crate) fn blocks_emitted(&self) -> u64 {
        self.blocks_emitted
    }

    /// Produce the next block as native-order words.
    ///
    /// Returns `Ok(None)` once framing is complete. A failing read is
    /// returned as an error and is never treated as end of input.
    pub(crate) fn next_block(&mut self) -> io::Result<Option<[u32; 16]>> {
        match self.phase {
            Phase::Done => return Ok(None),
            Phase::PadOnlyPending => {
                let bytes = self.block.as_bytes_mut();
                bytes[..LENGTH_OFFSET].fill(0);
                self.block.set_length(self.bits);
                debug_assert_eq!(self.block.length(), self.bits);
                self.phase = Phase::Done;
            }
            Phase::Streaming => {
                let read = self.fill()?;
                self.bits = self.bits.wrapping_add(8 * read as u64);
                let next = Phase::after_read(read);
                let bytes = self.block.as_bytes_mut();
                match next {
                    Phase::Done => {
                        bytes[read] = 0x80;
                        bytes[read + 1..LENGTH_OFFSET].fill(0);
                        self.block.set_length(self.bits);
                    }
                    Phase::PadOnlyPending => {
                        bytes[read] = 0x80;
                        bytes[read + 1..].fill(0);
                        self.length_spilled = true;
                    }
                    Phase::Streaming => {}
                }
                self.phase = next;
            }
        }
        self.blocks_emitted += 1;
        Ok(Some(self.block.words()))
    }

    /// Read until the block is full or the source is exhausted.
    fn fill(&mut self) -> io::Result<usize> {
        let bytes = self.block.as_bytes_mut();
        let mut filled = 0;
        while filled < BLOCK_LEN {
            match self.source.read(&mut bytes[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(filled)
    }
}
