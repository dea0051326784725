//! Threshold-based log rotation for a single file.
//!
//! A rotation copies the log into a single backup slot and then truncates the
//! original in place. The file is never unlinked or renamed, so a process that
//! keeps the log open for appending continues writing into the emptied file.
//!
//! - [`LogHandle`] validates the target and captures a [`LogSnapshot`] of its
//!   size and line count at construction time.
//! - [`RotationPolicy`] holds optional size and line thresholds and performs
//!   backup-then-clear when either is strictly exceeded.
//!
//! # Examples
//!
//! ```no_run
//! use logkeep_core::{LogHandle, RotationPolicy};
//!
//! let handle = LogHandle::open("/var/log/app.log")?;
//! let policy = RotationPolicy::new(Some(10.0), Some(50_000));
//! let outcome = policy.evaluate_and_rotate(&handle)?;
//! println!("{outcome:?}");
//! # Ok::<(), logkeep_core::LogError>(())
//! ```

pub mod error;
pub mod handle;
pub mod policy;
pub mod snapshot;

pub use error::{LogError, Result};
pub use handle::LogHandle;
pub use policy::{RotationOutcome, RotationPolicy, RotationTrigger};
pub use snapshot::{LogSnapshot, count_lines};

/// Number of bytes in a (decimal) megabyte.
pub const BYTES_IN_MEGABYTE: u64 = 1_000_000;

/// Extension appended to the log path to form the default backup slot.
pub const DEFAULT_BACKUP_EXTENSION: &str = ".prev";
