//! Error types for transforms and coefficient conversion.

/// Errors produced by the FFT engine and the polynomial multiplier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// The input violates a precondition, such as a non power-of-two length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A rounded coefficient does not fit in the target integer type.
    #[error("overflow: {0}")]
    Overflow(String),
}
