use crate::{Direction, TransformError, dft, fft};

/// Algorithm [`transform`] runs for a given length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Radix-2 FFT, O(N log N).
    Fast,
    /// Direct DFT, O(N²).
    BruteForce,
}

impl Algorithm {
    /// Powers of two take the fast path. Everything else, zero included, uses the direct sum.
    pub const fn for_len(len: usize) -> Self {
        if len.is_power_of_two() {
            Algorithm::Fast
        } else {
            Algorithm::BruteForce
        }
    }
}

/// Transforms the channels in place with the fastest algorithm available for their length.
///
/// Only fails if the channel lengths differ, in which case nothing is modified.
pub fn transform(
    reals: &mut [f64],
    imags: &mut [f64],
    direction: Direction,
) -> Result<Algorithm, TransformError> {
    if reals.len() != imags.len() {
        return Err(TransformError::ChannelMismatch {
            reals: reals.len(),
            imags: imags.len(),
        });
    }

    let algorithm = Algorithm::for_len(reals.len());
    log::trace!("{direction:?} transform of {} samples using {algorithm:?}", reals.len());

    match algorithm {
        Algorithm::Fast => fft(reals, imags, direction)?,
        Algorithm::BruteForce => dft(reals, imags, direction),
    }

    Ok(algorithm)
}
