//! # polyfft-fft
//!
//! Radix-2 complex FFT and FFT-based multiplication of integer polynomials.

pub mod complex;
pub mod error;
pub mod fft;
pub mod fft_cache;
pub mod fft_core;
pub mod fft_poly;
pub mod fft_recursion;

// Re-exports
pub use complex::Complex;
pub use error::FftError;
pub use fft::{
    forward_transform, forward_transform_with, inverse_transform, inverse_transform_with,
    multiply, multiply_i32, multiply_with, square, square_with, TransformStrategy,
};
pub use fft_poly::{trim_trailing_zeros, Coefficient};
