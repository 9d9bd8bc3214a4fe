//! Complex number arithmetic for FFT.
//!
//! `Complex` is a plain `Copy` value: every operation returns a new value
//! and nothing is cached. Operators and named methods are interchangeable.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{NumCast, PrimInt};

use crate::error::FftError;

/// A complex number with `f64` components.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

#[allow(clippy::should_implement_trait)]
impl Complex {
    /// Zero.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    /// One (real unit).
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    /// Square root of -1.
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    #[inline]
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a complex number with zero imaginary part.
    #[inline]
    #[must_use]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Construct from polar coordinates: `(r cos θ, r sin θ)`.
    #[inline]
    #[must_use]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            re: r * cos,
            im: r * sin,
        }
    }

    #[inline]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    #[inline]
    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    /// `(x + yi)(u + vi) = (xu - yv) + (xv + yu)i`
    #[inline]
    #[must_use]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// `(x + yi) / (u + vi) = ((xu + yv) + (yu - xv)i) / (u² + v²)`
    ///
    /// Dividing by zero yields NaN or infinite components.
    #[inline]
    #[must_use]
    pub fn div(self, other: Self) -> Self {
        let denom = other.norm_sqr();
        Self {
            re: self.re * other.re + self.im * other.im,
            im: self.im * other.re - self.re * other.im,
        }
        .div_scalar(denom)
    }

    /// Scale both components by `1 / s`.
    #[inline]
    #[must_use]
    pub fn div_scalar(self, s: f64) -> Self {
        Self {
            re: self.re / s,
            im: self.im / s,
        }
    }

    /// Scale both components by `s`.
    #[inline]
    #[must_use]
    pub fn scale(self, s: f64) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }

    /// `z²` computed as `(re² - im², 2·re·im)`.
    #[inline]
    #[must_use]
    pub fn square(self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }

    #[inline]
    #[must_use]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Squared magnitude `re² + im²`.
    #[inline]
    #[must_use]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude `sqrt(re² + im²)`.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Phase angle in radians, in `(-π, π]`.
    #[inline]
    #[must_use]
    pub fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Round the real part half-up (`floor(re + 0.5)`) into an integer type.
    ///
    /// The imaginary part is discarded. Non-finite values and values outside
    /// the range of `T` are reported as [`FftError::Overflow`].
    pub fn round_to<T: PrimInt>(self) -> Result<T, FftError> {
        let rounded = (self.re + 0.5).floor();
        <T as NumCast>::from(rounded).ok_or_else(|| {
            FftError::Overflow(format!(
                "{rounded} does not fit in a {}-bit integer",
                T::zero().count_zeros()
            ))
        })
    }

    /// Round half-up into an `i64`.
    pub fn round_to_i64(self) -> Result<i64, FftError> {
        self.round_to()
    }

    /// Round half-up into an `i32`.
    pub fn round_to_i32(self) -> Result<i32, FftError> {
        self.round_to()
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}i", self.re, self.im)
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::add(*self, rhs);
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::sub(self, rhs)
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::sub(*self, rhs);
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::mul(self, rhs)
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = Self::mul(*self, rhs);
    }
}

impl Div for Complex {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::div(self, rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        self.div_scalar(rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}
