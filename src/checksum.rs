//! Branch-sensitive single byte checksum.
//!
//! The first two bytes of the input pick one of three formulas. Every path is
//! plain `u8` arithmetic, so overflow wraps modulo 256 on all targets.

use crate::error::ChecksumError;
use crate::input::Input;

/// First byte that selects the truncated sum path.
pub const MAGIC_VALUE_1: u8 = 0xDE;
/// Second byte that selects the XOR path.
pub const MAGIC_VALUE_2: u8 = 0xAD;

/// Bytes summed on the [`Branch::MagicHeader`] path.
const MAGIC_HEADER_SPAN: usize = 4;

/// Formula chosen for an input. The discriminant is what the firmware
/// publishes in `LAST_BRANCH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Branch {
    /// No magic value found; wrapping sum of every byte.
    Default = 0,
    /// `data[0] == MAGIC_VALUE_1`; sum of at most four bytes plus `0x10`.
    MagicHeader = 1,
    /// `data[1] == MAGIC_VALUE_2`; XOR of every byte plus `0x20`.
    MagicSecond = 2,
}

impl Branch {
    /// Picks the branch for `bytes`. The header check always wins over the
    /// second-byte check.
    pub fn select(bytes: &[u8]) -> Self {
        match bytes {
            [MAGIC_VALUE_1, ..] => Self::MagicHeader,
            [_, MAGIC_VALUE_2, ..] => Self::MagicSecond,
            _ => Self::Default,
        }
    }

    /// Constant added after the branch's sum or XOR.
    pub const fn offset(self) -> u8 {
        match self {
            Self::Default => 0x00,
            Self::MagicHeader => 0x10,
            Self::MagicSecond => 0x20,
        }
    }

    /// Short name used in host output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::MagicHeader => "magic-header",
            Self::MagicSecond => "magic-second",
        }
    }
}

impl core::fmt::Display for Branch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one checksum run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    /// Branch that executed.
    pub branch: Branch,
    /// Checksum byte.
    pub value: u8,
}

fn wrapping_sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &byte| acc.wrapping_add(byte))
}

fn xor_all(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &byte| acc ^ byte)
}

/// Runs exactly one branch over the bytes covered by `input`.
pub fn checksum_with_branch(input: Input<'_>) -> Checksum {
    let bytes = input.as_bytes();
    let branch = Branch::select(bytes);

    let body = match branch {
        Branch::MagicHeader => wrapping_sum(&bytes[..bytes.len().min(MAGIC_HEADER_SPAN)]),
        Branch::MagicSecond => xor_all(bytes),
        Branch::Default => wrapping_sum(bytes),
    };

    Checksum {
        branch,
        value: body.wrapping_add(branch.offset()),
    }
}

/// Checksum of the first `length` bytes of `data`.
///
/// Fails with [`ChecksumError::InvalidLength`] instead of reading past the
/// end of `data` when `length` is larger than the slice.
pub fn compute_checksum(data: &[u8], length: u32) -> Result<u8, ChecksumError> {
    let input = Input::with_length(data, length)?;
    Ok(checksum_with_branch(input).value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_header_sums_first_four_bytes() {
        assert_eq!(compute_checksum(&[0xDE, 0x01, 0x02, 0x03], 4), Ok(0xF4));
    }

    #[test]
    fn magic_header_ignores_bytes_past_four() {
        let data = [0xDE, 0x01, 0x02, 0x03, 0x7F, 0x80];
        assert_eq!(compute_checksum(&data, 6), Ok(0xF4));
    }

    #[test]
    fn magic_header_single_byte() {
        assert_eq!(compute_checksum(&[0xDE], 1), Ok(0xEE));
    }

    #[test]
    fn magic_header_wraps() {
        // 0xDE + 3 * 0xFF = 0x3DB, truncated to 0xDB, plus 0x10.
        assert_eq!(compute_checksum(&[0xDE, 0xFF, 0xFF, 0xFF], 4), Ok(0xEB));
    }

    #[test]
    fn magic_second_xors_everything() {
        // 0x00 ^ 0xAD ^ 0x01 ^ 0x02 = 0xAE
        assert_eq!(compute_checksum(&[0x00, 0xAD, 0x01, 0x02], 4), Ok(0xCE));
        assert_eq!(compute_checksum(&[0xFF, 0xAD], 2), Ok(0x72));
    }

    #[test]
    fn magic_second_offset_wraps() {
        // XOR is 0xF0, plus 0x20 wraps to 0x10.
        assert_eq!(compute_checksum(&[0x5D, 0xAD], 2), Ok(0x10));
    }

    #[test]
    fn header_check_takes_priority() {
        let result = checksum_with_branch(Input::from(&[0xDE, 0xAD][..]));
        assert_eq!(result.branch, Branch::MagicHeader);
        assert_eq!(result.value, 0xDEu8.wrapping_add(0xAD).wrapping_add(0x10));
    }

    #[test]
    fn second_magic_needs_two_bytes() {
        let result = checksum_with_branch(Input::from(&[0xAD][..]));
        assert_eq!(result.branch, Branch::Default);
        assert_eq!(result.value, 0xAD);
    }

    #[test]
    fn default_sums_all_bytes() {
        assert_eq!(compute_checksum(&[0x01, 0x02, 0x03], 3), Ok(0x06));
        assert_eq!(compute_checksum(&[0xFF, 0xFF], 2), Ok(0xFE));
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(compute_checksum(&[], 0), Ok(0));
        assert_eq!(compute_checksum(&[0xDE, 0xAD], 0), Ok(0));
    }

    #[test]
    fn length_limits_branch_selection() {
        // Only the first byte is in range, so the 0xAD never counts.
        let result = checksum_with_branch(Input::new(&[0x01, 0xAD, 0x02], 1).unwrap());
        assert_eq!(result.branch, Branch::Default);
        assert_eq!(result.value, 0x01);
    }

    #[test]
    fn rejects_length_past_end() {
        assert_eq!(
            compute_checksum(&[0x01, 0x02], 3),
            Err(ChecksumError::InvalidLength {
                length: 3,
                capacity: 2
            })
        );
    }
}
