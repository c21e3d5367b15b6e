//! SHA-256 helpers for hashing files on disk.

use anyhow::{Context, Result};
use std::fs;
use std::io::BufReader;
use std::path::Path;

use crate::digest::{digest_reader, DigestSummary};
use crate::transcript::Transcript;

/// Hash a file by streaming it through the framer.
///
/// Open failures and mid-read failures are reported separately.
pub(crate) fn sha256_file(path: &Path, transcript: &mut Transcript) -> Result<DigestSummary> {
    let file = fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    transcript.note(format!("opened {}", path.display()));
    let summary = digest_reader(BufReader::new(file))
        .with_context(|| format!("read {}", path.display()))?;
    transcript.summary(&summary);
    Ok(summary)
}
