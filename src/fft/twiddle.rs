use core::f64::consts::PI;

use crate::Direction;

/// Twiddle factors of one radix-2 stage, generated by trigonometric recurrence.
///
/// For a stage combining sub-transforms into blocks of `depth` samples this yields the
/// `depth / 2` factors `w_m = exp(s·2πi·m/depth)` as `(re, im)` pairs, with `s = -1` for
/// the forward and `s = +1` for the inverse direction.
///
/// Only two transcendental functions are evaluated per stage. Every further factor is
/// derived from the previous one by the angle-addition identity, written as an increment
/// (`w += w·(cos δ - 1) + i·w·sin δ` with `cos δ - 1 = -2·sin²(δ/2)`) so the rounding error
/// stays proportional to the step instead of to `w`.
#[derive(Debug, Clone)]
pub struct TwiddleRecurrence {
    re: f64,
    im: f64,
    re_factor: f64,
    im_factor: f64,
    remaining: usize,
}

impl TwiddleRecurrence {
    /// Creates the recurrence for a stage of the given `depth`, which must be a power of
    /// two of at least 2.
    pub fn new(depth: usize, direction: Direction) -> Self {
        debug_assert!(depth >= 2 && depth.is_power_of_two());

        let half_angle = PI / depth as f64;

        #[cfg(not(feature = "no_std"))]
        let (half_sin, step_sin) = (half_angle.sin(), (2.0 * half_angle).sin());
        #[cfg(feature = "no_std")]
        let (half_sin, step_sin) = (libm::sin(half_angle), libm::sin(2.0 * half_angle));

        Self {
            re: 1.0,
            im: 0.0,
            re_factor: -2.0 * half_sin * half_sin,
            im_factor: direction.exponent_sign() * step_sin,
            remaining: depth / 2,
        }
    }
}

impl Iterator for TwiddleRecurrence {
    type Item = (f64, f64);

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = (self.re, self.im);

        let re = self.re;
        self.re += re * self.re_factor - self.im * self.im_factor;
        self.im += self.im * self.re_factor + re * self.im_factor;

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for TwiddleRecurrence {}
