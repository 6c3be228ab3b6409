//! Radix-2 fast Fourier transform and its building blocks.

mod bit_reverse;
mod cooley_tukey;
mod twiddle;

pub use bit_reverse::bit_reverse_permute;
pub use twiddle::TwiddleRecurrence;

use crate::{Direction, TransformError};

/// In-place radix-2 FFT over split real/imaginary channels.
///
/// The length is taken from `reals`. It must be a power of two and `imags` must have the
/// same length. If either condition fails an error is returned and neither channel is
/// modified.
///
/// A length of one is the identity transform. Inverse transforms are scaled by `1/N`.
///
/// ```
/// use chipfft::{Direction, fft};
///
/// let mut reals = [8.0, 4.0, 8.0, 0.0];
/// let mut imags = [0.0; 4];
///
/// fft(&mut reals, &mut imags, Direction::Forward).unwrap();
///
/// let expected = [(20.0, 0.0), (0.0, -4.0), (12.0, 0.0), (0.0, 4.0)];
/// for (i, (re, im)) in expected.into_iter().enumerate() {
///     assert!((reals[i] - re).abs() < 1e-12);
///     assert!((imags[i] - im).abs() < 1e-12);
/// }
/// ```
pub fn fft(
    reals: &mut [f64],
    imags: &mut [f64],
    direction: Direction,
) -> Result<(), TransformError> {
    validate(reals, imags).inspect_err(|error| {
        log::debug!("rejected {direction:?} FFT: {error}");
    })?;

    cooley_tukey::cooley_tukey_radix_2(reals, imags, direction);

    Ok(())
}

/// Checks the preconditions of [`fft`] without touching the channels.
pub(crate) fn validate(reals: &[f64], imags: &[f64]) -> Result<(), TransformError> {
    let len = reals.len();

    if imags.len() != len {
        return Err(TransformError::ChannelMismatch {
            reals: len,
            imags: imags.len(),
        });
    }

    if !len.is_power_of_two() {
        return Err(TransformError::NotPowerOfTwo { len });
    }

    Ok(())
}
