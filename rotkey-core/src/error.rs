use thiserror::Error;

/// Errors surfaced at the cipher core's API boundary.
///
/// The transforms themselves are pure arithmetic over fixed-width integers
/// and cannot fail; the only error surface is length validation on the
/// bounded buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// A length was outside the valid range `[0, capacity]`.
    #[error("invalid length {length}: buffer capacity is {capacity}")]
    InvalidLength {
        /// The offending length.
        length: usize,
        /// The fixed capacity of the buffer.
        capacity: usize,
    },
}
