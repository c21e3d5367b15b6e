//! Verbose transcript of a hashing run, written to stderr.

use crate::digest::DigestSummary;

/// Opt-in stderr log; stdout stays reserved for the digest.
pub(crate) struct Transcript {
    enabled: bool,
    started: bool,
}

impl Transcript {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            started: false,
        }
    }

    pub(crate) fn note(&mut self, message: impl AsRef<str>) {
        if !self.enabled {
            return;
        }
        if !self.started {
            self.started = true;
            eprintln!("transcript:");
        }
        eprintln!("- {}", message.as_ref());
    }

    /// Record the counters and padding path of a finished digest.
    pub(crate) fn summary(&mut self, summary: &DigestSummary) {
        self.note(format!("message bytes: {}", summary.bytes));
        self.note(format!("message bits: {}", summary.bytes.wrapping_mul(8)));
        self.note(format!("blocks compressed: {}", summary.blocks));
        self.note(format!("phases: {}", phase_path(summary.length_spilled)));
    }
}

fn phase_path(length_spilled: bool) -> &'static str {
    if length_spilled {
        "Streaming -> PadOnlyPending -> Done"
    } else {
        "Streaming -> Done"
    }
}
