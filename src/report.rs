//! Machine-readable digest output.

use serde::Serialize;
use std::path::Path;

use crate::digest::DigestSummary;

/// One hashed file, as printed by `--json`.
#[derive(Serialize, Debug)]
pub(crate) struct DigestReport {
    pub(crate) path: String,
    pub(crate) sha256: String,
    pub(crate) bytes: u64,
    pub(crate) blocks: u64,
}

impl DigestReport {
    pub(crate) fn new(path: &Path, summary: &DigestSummary) -> Self {
        Self {
            path: path.display().to_string(),
            sha256: summary.digest.to_hex(),
            bytes: summary.bytes,
            blocks: summary.blocks,
        }
    }
}
