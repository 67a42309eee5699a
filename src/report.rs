//! Result publication for the firmware export.
//!
//! The emulator cannot see Rust return values beyond `r0`, so every call also
//! leaves its outcome in three byte-sized statics it can read by symbol.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::checksum::Checksum;
use crate::error::ChecksumError;
use crate::input::Input;

/// `status` value after a successful call.
pub const STATUS_OK: u8 = 0;

/// Three cells the last outcome is written to.
pub struct Report<'a> {
    /// Checksum of the last accepted input.
    pub checksum: &'a AtomicU8,
    /// `Branch` discriminant of the last accepted input.
    pub branch: &'a AtomicU8,
    /// [`STATUS_OK`] or `ChecksumError::status_code` of the last call.
    pub status: &'a AtomicU8,
}

impl Report<'_> {
    /// Publishes `outcome` and returns the byte handed back to the caller.
    ///
    /// A rejected input returns 0 and only touches `status`, so `checksum`
    /// and `branch` keep describing the last accepted input.
    pub fn record(&self, outcome: Result<Checksum, ChecksumError>) -> u8 {
        match outcome {
            Ok(result) => {
                self.branch.store(result.branch as u8, Ordering::Relaxed);
                self.checksum.store(result.value, Ordering::Relaxed);
                self.status.store(STATUS_OK, Ordering::Relaxed);
                result.value
            }
            Err(err) => {
                self.status.store(err.status_code(), Ordering::Relaxed);
                0
            }
        }
    }

    /// Validates `data`/`length`, runs the checksum and records the outcome.
    ///
    /// # Safety
    ///
    /// Same contract as [`Input::from_raw_parts`].
    pub unsafe fn record_raw(&self, data: *const u8, length: u32) -> u8 {
        let outcome =
            unsafe { Input::from_raw_parts(data, length) }.map(Input::checksum_with_branch);
        self.record(outcome)
    }
}
