//! Digest driver: folds framed blocks into the running hash state.

use std::fmt;
use std::io::{self, Read};

use crate::compress::compress;
use crate::constants::{DIGEST_LEN, H0};
use crate::framer::{Framer, Phase};

/// A finished SHA-256 digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Sha256Digest([u8; DIGEST_LEN]);

impl Sha256Digest {
    fn from_state(state: &[u32; 8]) -> Self {
        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Self(out)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters, no separators.
    pub(crate) fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Digest plus the counters gathered while producing it.
#[derive(Clone, Debug)]
pub(crate) struct DigestSummary {
    pub(crate) digest: Sha256Digest,
    pub(crate) bytes: u64,
    pub(crate) blocks: u64,
    pub(crate) length_spilled: bool,
}

/// Hash everything `source` yields.
///
/// Blocks are compressed strictly in order. Any read error aborts the
/// computation; no partial digest is produced.
pub(crate) fn digest_reader<R: Read>(source: R) -> io::Result<DigestSummary> {
    let mut framer = Framer::new(source);
    let mut state = H0;
    while let Some(words) = framer.next_block()? {
        compress(&mut state, &words);
    }
    debug_assert_eq!(framer.phase(), Phase::Done);
    Ok(DigestSummary {
        digest: Sha256Digest::from_state(&state),
        bytes: framer.bits() / 8,
        blocks: framer.blocks_emitted(),
        length_spilled: framer.length_spilled(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn digest_bytes(data: &[u8]) -> Sha256Digest {
        digest_reader(data).expect("slice read").digest
    }

    fn reference(data: &[u8]) -> [u8; 32] {
        use sha2::Digest as _;
        let out = sha2::Sha256::digest(data);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&out);
        bytes
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            digest_bytes(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn abc() {
        assert_eq!(
            digest_bytes(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn two_block_nist_vector() {
        let digest = digest_bytes(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq");
        assert_eq!(
            digest.to_string(),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn million_a() {
        let data = vec![b'a'; 1_000_000];
        let summary = digest_reader(&data[..]).expect("slice read");
        assert_eq!(
            summary.digest.to_hex(),
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
        );
        assert_eq!(summary.bytes, 1_000_000);
        assert_eq!(summary.blocks, 15_626);
    }

    #[test]
    fn padding_boundaries_match_reference() {
        for len in [0usize, 1, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129] {
            let data: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(13)).collect();
            let got = digest_bytes(&data);
            assert_eq!(got.as_bytes(), &reference(&data), "len {len}");
        }
    }

    #[test]
    fn reader_and_slice_paths_agree() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let summary = digest_reader(&data[..]).expect("slice read");
        assert_eq!(summary.digest, digest_bytes(data));
        assert_eq!(summary.bytes, data.len() as u64);
        assert_eq!(summary.blocks, 1);
    }

    #[test]
    fn deterministic_across_runs() {
        let data = vec![0x5au8; 4096];
        assert_eq!(digest_bytes(&data), digest_bytes(&data));
    }

    /// Hands out the source in chunks whose sizes cycle through `steps`.
    struct Chunked<'a> {
        data: &'a [u8],
        steps: Vec<usize>,
        next: usize,
    }

    impl Read for Chunked<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let step = self.steps[self.next % self.steps.len()];
            self.next += 1;
            let n = step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    proptest! {
        #[test]
        fn chunking_does_not_change_digest(
            data in proptest::collection::vec(any::<u8>(), 0..1024),
            steps in proptest::collection::vec(1usize..130, 1..16),
        ) {
            let whole = digest_bytes(&data);
            let chunked = digest_reader(Chunked { data: &data, steps, next: 0 })
                .expect("chunked read");
            prop_assert_eq!(chunked.digest, whole);
            prop_assert_eq!(chunked.bytes, data.len() as u64);
        }

        #[test]
        fn matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let got = digest_bytes(&data);
            prop_assert_eq!(got.as_bytes(), &reference(&data));
        }

        #[test]
        fn single_bit_flip_changes_digest(
            data in proptest::collection::vec(any::<u8>(), 1..512),
            pick in any::<usize>(),
            bit in 0u8..8,
        ) {
            let mut flipped = data.clone();
            let index = pick % flipped.len();
            flipped[index] ^= 1 << bit;
            let original = digest_bytes(&data);
            let changed = digest_bytes(&flipped);
            let differing = original
                .as_bytes()
                .iter()
                .zip(changed.as_bytes())
                .filter(|(a, b)| a != b)
                .count();
            // Each byte survives with probability 1/256; 20 is far below the mean.
            prop_assert!(differing >= 20, "only {} bytes changed", differing);
        }
    }
}
