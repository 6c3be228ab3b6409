use alloc::{vec, vec::Vec};

use crate::{Algorithm, Direction, TransformError, dft, fft, transform};

/// An owned sequence of complex samples, stored as separate real and imaginary channels.
///
/// Both channels always have the same length. Transforms run in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signal {
    reals: Vec<f64>,
    imags: Vec<f64>,
}

impl Signal {
    /// Creates a signal from its two channels, which must have the same length.
    pub fn new(reals: Vec<f64>, imags: Vec<f64>) -> Result<Self, TransformError> {
        if reals.len() != imags.len() {
            return Err(TransformError::ChannelMismatch {
                reals: reals.len(),
                imags: imags.len(),
            });
        }

        Ok(Self { reals, imags })
    }

    /// Creates a signal from real samples. The imaginary channel is zero.
    pub fn from_reals(reals: Vec<f64>) -> Self {
        let imags = vec![0.0; reals.len()];
        Self { reals, imags }
    }

    /// Creates a signal of `len` zero samples.
    pub fn zeroed(len: usize) -> Self {
        Self {
            reals: vec![0.0; len],
            imags: vec![0.0; len],
        }
    }

    /// Number of complex samples.
    pub fn len(&self) -> usize {
        self.reals.len()
    }

    /// Returns `true` if the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.reals.is_empty()
    }

    /// The real channel.
    pub fn reals(&self) -> &[f64] {
        &self.reals
    }

    /// The imaginary channel.
    pub fn imags(&self) -> &[f64] {
        &self.imags
    }

    /// Consumes the signal and returns `(reals, imags)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.reals, self.imags)
    }

    /// Radix-2 FFT in place. Fails, leaving the signal untouched, if the length is not a
    /// power of two.
    pub fn fft(&mut self, direction: Direction) -> Result<(), TransformError> {
        fft(&mut self.reals, &mut self.imags, direction)
    }

    /// Direct DFT in place. Works for every length.
    pub fn dft(&mut self, direction: Direction) {
        dft(&mut self.reals, &mut self.imags, direction);
    }

    /// FFT for power-of-two lengths, DFT otherwise. Returns the algorithm used.
    pub fn transform(&mut self, direction: Direction) -> Algorithm {
        match transform(&mut self.reals, &mut self.imags, direction) {
            Ok(algorithm) => algorithm,
            Err(error) => unreachable!("signal channels always have the same length: {error}"),
        }
    }

    /// Magnitude `sqrt(re² + im²)` of every sample.
    pub fn magnitudes(&self) -> Vec<f64> {
        self.reals
            .iter()
            .zip(self.imags.iter())
            .map(|(&re, &im)| {
                #[cfg(not(feature = "no_std"))]
                let magnitude = re.hypot(im);
                #[cfg(feature = "no_std")]
                let magnitude = libm::hypot(re, im);
                magnitude
            })
            .collect()
    }

    /// Returns a copy extended with zero samples up to `len`. Nothing is truncated when
    /// `len` is not larger than the current length.
    pub fn zero_padded(&self, len: usize) -> Self {
        let len = len.max(self.len());
        let mut reals = self.reals.clone();
        let mut imags = self.imags.clone();
        reals.resize(len, 0.0);
        imags.resize(len, 0.0);
        Self { reals, imags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_new_rejects_mismatch() {
        assert_eq!(
            Signal::new(vec![1.0, 2.0], vec![0.0]),
            Err(TransformError::ChannelMismatch { reals: 2, imags: 1 })
        );
        assert!(Signal::new(vec![1.0], vec![0.0]).is_ok());
    }

    #[test]
    fn test_from_reals() {
        let signal = Signal::from_reals(vec![1.0, 2.0, 3.0]);
        assert_eq!(signal.len(), 3);
        assert_eq!(signal.imags(), [0.0; 3]);
        assert!(!signal.is_empty());
        assert!(Signal::zeroed(0).is_empty());
    }

    #[test]
    fn test_fft_round_trip() {
        let original = Signal::new(vec![8.0, 4.0, 8.0, 0.0], vec![1.0, -1.0, 0.5, 0.0]).unwrap();
        let mut signal = original.clone();

        signal.fft(Direction::Forward).unwrap();
        signal.fft(Direction::Inverse).unwrap();

        for i in 0..signal.len() {
            assert!((signal.reals()[i] - original.reals()[i]).abs() < EPSILON);
            assert!((signal.imags()[i] - original.imags()[i]).abs() < EPSILON);
        }
    }

    #[test]
    fn test_fft_rejects_odd_length() {
        let original = Signal::from_reals(vec![1.0, 2.0, 3.0]);
        let mut signal = original.clone();

        assert_eq!(
            signal.fft(Direction::Forward),
            Err(TransformError::NotPowerOfTwo { len: 3 })
        );
        assert_eq!(signal, original);
    }

    #[test]
    fn test_transform_falls_back_to_dft() {
        let mut signal = Signal::from_reals(vec![1.0, 1.0, 1.0]);
        assert_eq!(signal.transform(Direction::Forward), Algorithm::BruteForce);
        assert!((signal.reals()[0] - 3.0).abs() < EPSILON);

        let mut signal = Signal::from_reals(vec![1.0; 4]);
        assert_eq!(signal.transform(Direction::Forward), Algorithm::Fast);
        assert!((signal.reals()[0] - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_dft_matches_fft() {
        let mut fast = Signal::from_reals((0..16).map(|i| (i % 5) as f64).collect());
        let mut direct = fast.clone();

        fast.fft(Direction::Forward).unwrap();
        direct.dft(Direction::Forward);

        for i in 0..16 {
            assert!((fast.reals()[i] - direct.reals()[i]).abs() < 1e-9);
            assert!((fast.imags()[i] - direct.imags()[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_magnitudes() {
        let signal = Signal::new(vec![3.0, 0.0, -1.0], vec![4.0, -2.0, 0.0]).unwrap();
        assert_eq!(signal.magnitudes(), [5.0, 2.0, 1.0]);
    }

    #[test]
    fn test_zero_padded() {
        let signal = Signal::new(vec![1.0, 2.0, 3.0], vec![-1.0, -2.0, -3.0]).unwrap();

        let padded = signal.zero_padded(4);
        assert_eq!(padded.reals(), [1.0, 2.0, 3.0, 0.0]);
        assert_eq!(padded.imags(), [-1.0, -2.0, -3.0, 0.0]);

        let unchanged = signal.zero_padded(2);
        assert_eq!(unchanged, signal);

        let (reals, imags) = padded.into_parts();
        assert_eq!(reals.len(), imags.len());
    }
}
