use crate::checksum::{self, Checksum};
use crate::error::ChecksumError;

/// Largest object the platform can address; the capacity reported when a
/// C-side length cannot even be represented as `usize`.
const MAX_CAPACITY: usize = isize::MAX as usize;

/// Widens a C-side length. A value that does not fit saturates, so it still
/// fails every bounds check instead of wrapping to a small length.
fn widen(length: u32) -> usize {
    usize::try_from(length).unwrap_or(usize::MAX)
}

/// Bytes the checksum is allowed to read.
///
/// The length is fixed at construction and can never exceed the storage it
/// borrows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    bytes: &'a [u8],
}

impl<'a> Input<'a> {
    /// Views the first `length` bytes of `buffer`.
    pub fn new(buffer: &'a [u8], length: usize) -> Result<Self, ChecksumError> {
        match buffer.get(..length) {
            Some(bytes) => Ok(Self { bytes }),
            None => Err(ChecksumError::InvalidLength {
                length,
                capacity: buffer.len(),
            }),
        }
    }

    /// Same as [`Input::new`] for a 32-bit length as passed across the C ABI.
    pub fn with_length(buffer: &'a [u8], length: u32) -> Result<Self, ChecksumError> {
        Self::new(buffer, widen(length))
    }

    /// Views `length` bytes starting at `data`.
    ///
    /// A null `data` is accepted only when `length` is zero.
    ///
    /// # Safety
    ///
    /// When `data` is non-null it must point to `length` initialized bytes
    /// that stay valid and unmodified for `'a`.
    pub unsafe fn from_raw_parts(data: *const u8, length: u32) -> Result<Self, ChecksumError> {
        let length = usize::try_from(length).map_err(|_| ChecksumError::InvalidLength {
            length: usize::MAX,
            capacity: MAX_CAPACITY,
        })?;

        if data.is_null() {
            return if length == 0 {
                Ok(Self { bytes: &[] })
            } else {
                Err(ChecksumError::NullData { length })
            };
        }

        // SAFETY: non-null, and the caller vouches for `length` readable bytes.
        let bytes = unsafe { core::slice::from_raw_parts(data, length) };
        Ok(Self { bytes })
    }

    /// The viewed bytes, exactly `len()` of them.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of bytes the checksum reads.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-length view.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Checksum value only.
    pub fn checksum(self) -> u8 {
        checksum::checksum_with_branch(self).value
    }

    /// Checksum value and the branch that produced it.
    pub fn checksum_with_branch(self) -> Checksum {
        checksum::checksum_with_branch(self)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}
