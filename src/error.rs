use thiserror::Error;

/// Reasons an input is refused before any byte is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// `length` is larger than the storage behind it.
    #[error("length {length} exceeds the {capacity} bytes available")]
    InvalidLength { length: usize, capacity: usize },
    /// Null pointer paired with a non-zero length.
    #[error("null data pointer with length {length}")]
    NullData { length: usize },
}

impl ChecksumError {
    /// Code reported through the firmware's `LAST_STATUS` static. Zero is
    /// reserved for success.
    pub const fn status_code(&self) -> u8 {
        match self {
            Self::InvalidLength { .. } => 1,
            Self::NullData { .. } => 2,
        }
    }
}
