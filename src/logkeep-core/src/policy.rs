//! Threshold evaluation and the backup-then-clear rotation.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::handle::LogHandle;
use crate::snapshot::LogSnapshot;

/// Which threshold a snapshot exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationTrigger {
    Size,
    Lines,
    Both,
}

impl RotationTrigger {
    fn from_flags(size_exceeded: bool, lines_exceeded: bool) -> Option<Self> {
        match (size_exceeded, lines_exceeded) {
            (true, true) => Some(RotationTrigger::Both),
            (true, false) => Some(RotationTrigger::Size),
            (false, true) => Some(RotationTrigger::Lines),
            (false, false) => None,
        }
    }
}

/// Result of [`RotationPolicy::evaluate_and_rotate`].
#[derive(Debug, Clone, PartialEq)]
pub enum RotationOutcome {
    /// No threshold was exceeded; nothing was touched.
    Skipped,
    /// The log was copied to `backup` and then truncated.
    Rotated {
        trigger: RotationTrigger,
        backup: PathBuf,
    },
}

impl RotationOutcome {
    pub fn is_rotated(&self) -> bool {
        matches!(self, RotationOutcome::Rotated { .. })
    }
}

/// Optional size and line-count ceilings for a log file.
///
/// A threshold triggers only when strictly exceeded. With neither threshold
/// set the policy never rotates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationPolicy {
    size_threshold_mb: Option<f64>,
    line_threshold: Option<u64>,
}

impl RotationPolicy {
    pub fn new(size_threshold_mb: Option<f64>, line_threshold: Option<u64>) -> Self {
        Self {
            size_threshold_mb,
            line_threshold,
        }
    }

    /// A policy that never rotates.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_size_threshold_mb(mut self, megabytes: f64) -> Self {
        self.size_threshold_mb = Some(megabytes);
        self
    }

    pub fn with_line_threshold(mut self, lines: u64) -> Self {
        self.line_threshold = Some(lines);
        self
    }

    pub fn size_threshold_mb(&self) -> Option<f64> {
        self.size_threshold_mb
    }

    pub fn line_threshold(&self) -> Option<u64> {
        self.line_threshold
    }

    pub fn is_disabled(&self) -> bool {
        self.size_threshold_mb.is_none() && self.line_threshold.is_none()
    }

    /// Decide whether `snapshot` exceeds any threshold, without side effects.
    pub fn check(&self, snapshot: &LogSnapshot) -> Option<RotationTrigger> {
        let size_exceeded = self
            .size_threshold_mb
            .is_some_and(|limit| snapshot.size_megabytes() > limit);
        let lines_exceeded = self
            .line_threshold
            .is_some_and(|limit| snapshot.line_count() > limit);

        RotationTrigger::from_flags(size_exceeded, lines_exceeded)
    }

    /// Rotate `handle` into its default backup slot if a threshold is exceeded.
    ///
    /// The backup is written before the original is truncated; if the backup
    /// fails the original is left untouched and the error is returned as is.
    pub fn evaluate_and_rotate(&self, handle: &LogHandle) -> Result<RotationOutcome> {
        self.evaluate_and_rotate_to(handle, None)
    }

    /// Like [`evaluate_and_rotate`](Self::evaluate_and_rotate) but writing the
    /// backup to `backup` when given.
    pub fn evaluate_and_rotate_to(
        &self,
        handle: &LogHandle,
        backup: Option<&Path>,
    ) -> Result<RotationOutcome> {
        let snapshot = handle.snapshot();
        let Some(trigger) = self.check(&snapshot) else {
            debug!(
                path = %handle.path().display(),
                size_bytes = snapshot.size_bytes(),
                line_count = snapshot.line_count(),
                "Log within thresholds"
            );
            return Ok(RotationOutcome::Skipped);
        };

        let backup = handle.clone_to_backup(backup)?;
        handle.clear_original_file()?;

        info!(
            path = %handle.path().display(),
            backup = %backup.display(),
            ?trigger,
            "Rotated log"
        );
        Ok(RotationOutcome::Rotated { trigger, backup })
    }
}
