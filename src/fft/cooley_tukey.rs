use super::{bit_reverse::bit_reverse_permute, twiddle::TwiddleRecurrence};
use crate::Direction;

/// Performs an in-place pure radix-2 FFT using the Cooley-Tukey DIT algorithm.
///
/// Callers validate the input: equal channel lengths, power-of-two length.
pub(crate) fn cooley_tukey_radix_2(reals: &mut [f64], imags: &mut [f64], direction: Direction) {
    let n = reals.len();
    assert!(n.is_power_of_two() && n > 0);
    assert_eq!(n, imags.len());

    bit_reverse_permute(reals, imags);

    let mut half_stage = 1;

    while half_stage < n {
        let stage_size = half_stage << 1;
        let twiddles = TwiddleRecurrence::new(stage_size, direction);

        for (offset, (w_re, w_im)) in twiddles.enumerate() {
            for top in (offset..n).step_by(stage_size) {
                butterfly_2(reals, imags, top, top + half_stage, w_re, w_im);
            }
        }

        half_stage = stage_size;
    }

    if direction == Direction::Inverse {
        let scale = 1.0 / n as f64;
        reals.iter_mut().for_each(|x| *x *= scale);
        imags.iter_mut().for_each(|x| *x *= scale);
    }
}

/// Danielson-Lanczos butterfly: `(a, b) -> (a + w·b, a - w·b)`.
#[inline(always)]
fn butterfly_2(
    reals: &mut [f64],
    imags: &mut [f64],
    top: usize,
    bottom: usize,
    w_re: f64,
    w_im: f64,
) {
    let b_re = reals[bottom];
    let b_im = imags[bottom];

    let t_re = w_re * b_re - w_im * b_im;
    let t_im = w_re * b_im + w_im * b_re;

    reals[bottom] = reals[top] - t_re;
    imags[bottom] = imags[top] - t_im;
    reals[top] += t_re;
    imags[top] += t_im;
}
