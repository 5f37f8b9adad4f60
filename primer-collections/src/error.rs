//! Error taxonomy shared by every container in the crate.
//!
//! All conditions are recoverable and deterministic. A failed operation
//! leaves the container exactly as it was before the call.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Failure conditions reported by container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A fixed-capacity structure is full on insert.
    #[error("capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// Maximum number of live elements.
        capacity: usize,
    },

    /// A push or enqueue found no free slot.
    #[error("overflow: all {capacity} slots are in use")]
    Overflow {
        /// Number of slots in the structure.
        capacity: usize,
    },

    /// A read or removal was attempted on a structure with no elements.
    #[error("structure is empty")]
    Empty,

    /// A pop or dequeue was attempted with nothing to remove.
    #[error("underflow: nothing to remove")]
    Underflow,

    /// A supplied position is outside the valid range for the operation.
    #[error("index {index} out of range for length {len}")]
    InvalidIndex {
        /// The rejected position.
        index: usize,
        /// Exclusive upper bound the position was checked against.
        len: usize,
    },

    /// A search or keyed lookup found no matching element.
    #[error("no matching element")]
    NotFound,
}

/// Error returned by [`Storage::try_insert`](crate::Storage::try_insert) when
/// storage refuses a value. The value is handed back untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("storage is full")]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::CapacityExceeded { capacity: 4 }.to_string(),
            "capacity of 4 exceeded"
        );
        assert_eq!(
            Error::InvalidIndex { index: 7, len: 3 }.to_string(),
            "index 7 out of range for length 3"
        );
        assert_eq!(Error::Underflow.to_string(), "underflow: nothing to remove");
        assert_eq!(Full(5u8).to_string(), "storage is full");
    }

    #[test]
    fn full_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Full(3u32));
        assert_eq!(err.to_string(), "storage is full");
        assert!(err.source().is_none());
    }

    #[test]
    fn full_returns_value() {
        let err = Full(String::from("rejected"));
        assert_eq!(err.into_inner(), "rejected");
    }
}
