// src/models/summary.rs
use std::process::ExitCode;

/// Exit status reported in quiet mode when some file was inconsistent.
pub const EXIT_INCONSISTENT: u8 = 2;

/// Outcome of one invocation across all of its inputs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub inconsistent: bool,
}

impl Summary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: 0,
            inconsistent: false,
        }
    }

    /// Folds one finished file into the summary. Once set, the inconsistent
    /// flag stays set.
    #[inline]
    pub fn record_file(&mut self, inconsistent: bool) {
        self.files = self.files.saturating_add(1);
        self.inconsistent |= inconsistent;
    }

    /// Inconsistency only changes the status under quiet mode.
    #[inline]
    #[must_use]
    pub const fn exit_status(&self, quiet: bool) -> u8 {
        if quiet && self.inconsistent {
            EXIT_INCONSISTENT
        } else {
            0
        }
    }

    #[inline]
    #[must_use]
    pub fn exit_code(&self, quiet: bool) -> ExitCode {
        ExitCode::from(self.exit_status(quiet))
    }
}
