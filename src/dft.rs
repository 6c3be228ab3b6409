use alloc::vec;
use core::f64::consts::PI;

use crate::Direction;

/// In-place discrete Fourier transform by direct summation.
///
/// Works for every length, including zero (no-op), at O(N²) cost with one `sin` and one `cos`
/// evaluation per term. Meant as a reference for [`fft`](crate::fft()) and as the fallback for
/// lengths that are not a power of two.
///
/// The result is accumulated in scratch buffers and copied back once the full pass is done,
/// since every output bin depends on every input sample.
///
/// # Panics
///
/// If `reals` and `imags` differ in length.
pub fn dft(reals: &mut [f64], imags: &mut [f64], direction: Direction) {
    let n = reals.len();
    assert_eq!(n, imags.len(), "Channels must have the same length");

    if n == 0 {
        return;
    }

    let mut output_reals = vec![0.0f64; n];
    let mut output_imags = vec![0.0f64; n];

    for (i, (out_re, out_im)) in output_reals
        .iter_mut()
        .zip(output_imags.iter_mut())
        .enumerate()
    {
        let base_angle = direction.exponent_sign() * 2.0 * PI * i as f64 / n as f64;

        for (k, (&re, &im)) in reals.iter().zip(imags.iter()).enumerate() {
            let angle = k as f64 * base_angle;

            #[cfg(not(feature = "no_std"))]
            let (w_sin, w_cos) = angle.sin_cos();
            #[cfg(feature = "no_std")]
            let (w_sin, w_cos) = libm::sincos(angle);

            *out_re += re * w_cos - im * w_sin;
            *out_im += re * w_sin + im * w_cos;
        }
    }

    if direction == Direction::Inverse {
        let scale = 1.0 / n as f64;
        output_reals.iter_mut().for_each(|x| *x *= scale);
        output_imags.iter_mut().for_each(|x| *x *= scale);
    }

    reals.copy_from_slice(&output_reals);
    imags.copy_from_slice(&output_imags);
}
