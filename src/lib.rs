//! Checksum routine for the emulation fuzzing target.
//!
//! The same code runs inside the Cortex-M image (see `main.rs`) and on the
//! host, where it serves as the reference the emulated result is compared
//! against.

#![no_std]

mod checksum;
mod error;
mod input;
mod report;

pub use checksum::{
    checksum_with_branch, compute_checksum, Branch, Checksum, MAGIC_VALUE_1, MAGIC_VALUE_2,
};
pub use error::ChecksumError;
pub use input::Input;
pub use report::{Report, STATUS_OK};
