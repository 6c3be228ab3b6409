//! Discrete Fourier transforms for small targets.
//!
//! Two transforms over split real/imaginary `f64` channels, both working in place:
//!
//! - [`fft()`]: iterative radix-2 Cooley-Tukey (decimation in time), O(N log N). The length
//!   must be a power of two; anything else is rejected before the channels are touched.
//! - [`dft()`]: direct O(N²) summation. Accepts every length and serves as the reference the
//!   fast transform is checked against.
//!
//! [`transform()`] picks between the two based on the length, and [`Signal`] bundles an owned
//! pair of channels.
//!
//! # Normalization
//!
//! Forward transforms are unnormalized. Inverse transforms scale every output by `1/N`, so a
//! forward + inverse round trip returns the original samples.
//!
//! # Features
//!
//! - `no_std`: builds without the standard library. Needs `alloc` and pulls in `libm` for
//!   the trigonometric functions.
#![cfg_attr(feature = "no_std", no_std)]

extern crate alloc;

mod dft;
mod error;
pub mod fft;
mod signal;
mod transform;

pub use dft::dft;
pub use error::TransformError;
pub use fft::fft;
pub use signal::Signal;
pub use transform::{Algorithm, transform};

/// Direction of a transform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Time domain to frequency domain. No scaling applied.
    #[default]
    Forward,
    /// Frequency domain to time domain. Every output is scaled by `1/N`.
    Inverse,
}

impl Direction {
    /// Sign of the exponent in `exp(s·2πi·k·n/N)`: `-1` forward, `+1` inverse.
    #[inline(always)]
    pub const fn exponent_sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }

    /// Returns the opposite direction.
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Inverse,
            Direction::Inverse => Direction::Forward,
        }
    }
}

/// Converts the signed integer convention (`1` forward, `-1` inverse).
///
/// Only the sign is looked at: every negative value is [`Direction::Inverse`], everything
/// else is [`Direction::Forward`]. That includes `0`, which is accepted as forward for
/// compatibility even though it is most likely a caller mistake, so it gets a warning.
impl From<i32> for Direction {
    fn from(value: i32) -> Self {
        if value != 1 && value != -1 {
            log::warn!("direction value {value} is neither 1 nor -1, dispatching on its sign");
        }

        if value < 0 {
            Direction::Inverse
        } else {
            Direction::Forward
        }
    }
}

impl From<Direction> for i32 {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Forward => 1,
            Direction::Inverse => -1,
        }
    }
}
