/// Performs the bit-reversal permutation on a pair of channels using Gold and Rader's method.
///
/// The sample at index `i` ends up at the index whose `log2(N)` low bits are those of `i` in
/// reverse order. Both channels are permuted identically. The permutation is its own inverse.
///
/// # Panics
///
/// If the channels differ in length or the length is not a power of two. Lengths zero and
/// one are left as is. Use [`fft`](crate::fft()) to get these reported as errors instead.
pub fn bit_reverse_permute(reals: &mut [f64], imags: &mut [f64]) {
    let n = reals.len();
    assert_eq!(n, imags.len(), "Channels must have the same length");
    assert!(n <= 1 || n.is_power_of_two(), "Length must be a power of two");

    if n < 2 {
        return;
    }

    let half = n >> 1;
    let mut reversed = 0usize;

    for index in 0..(n - 1) {
        // Only swap if index < reversed to avoid double-swapping.
        if index < reversed {
            reals.swap(index, reversed);
            imags.swap(index, reversed);
        }

        // Increment the reversed counter: clear set bits from the top down,
        // then set the first clear one.
        let mut bit = half;
        while bit <= reversed {
            reversed -= bit;
            bit >>= 1;
        }
        reversed += bit;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn reverse_bits(value: usize, bits: u32) -> usize {
        if bits == 0 {
            return 0;
        }
        value.reverse_bits() >> (usize::BITS - bits)
    }

    #[test]
    fn test_length_eight() {
        let mut reals: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let mut imags: Vec<f64> = (0..8).map(|i| -(i as f64)).collect();

        bit_reverse_permute(&mut reals, &mut imags);

        assert_eq!(reals, [0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);
        assert_eq!(imags, [-0.0, -4.0, -2.0, -6.0, -1.0, -5.0, -3.0, -7.0]);
    }

    #[test]
    fn test_matches_reversed_indices() {
        for log_size in 0..12 {
            let size = 1usize << log_size;
            let mut reals: Vec<f64> = (0..size).map(|i| i as f64).collect();
            let mut imags: Vec<f64> = (0..size).map(|i| (size - i) as f64).collect();

            bit_reverse_permute(&mut reals, &mut imags);

            for i in 0..size {
                let source = reverse_bits(i, log_size);
                assert_eq!(reals[i], source as f64, "Size {size}: index {i}");
                assert_eq!(imags[i], (size - source) as f64, "Size {size}: index {i}");
            }
        }
    }

    #[test]
    fn test_involution() {
        for log_size in 0..11 {
            let size = 1usize << log_size;
            let original_reals: Vec<f64> = (0..size).map(|i| (i as f64 * 0.37).sin()).collect();
            let original_imags: Vec<f64> = (0..size).map(|i| (i as f64 * 1.13).cos()).collect();
            let mut reals = original_reals.clone();
            let mut imags = original_imags.clone();

            bit_reverse_permute(&mut reals, &mut imags);
            bit_reverse_permute(&mut reals, &mut imags);

            assert_eq!(reals, original_reals, "Size {size}");
            assert_eq!(imags, original_imags, "Size {size}");
        }
    }

    #[test]
    fn test_empty() {
        let mut reals: [f64; 0] = [];
        let mut imags: [f64; 0] = [];
        bit_reverse_permute(&mut reals, &mut imags);
    }

    #[test]
    #[should_panic(expected = "Length must be a power of two")]
    fn test_rejects_length_three() {
        let mut reals = [0.0, 1.0, 2.0];
        let mut imags = [0.0; 3];
        bit_reverse_permute(&mut reals, &mut imags);
    }

    #[test]
    #[should_panic(expected = "Length must be a power of two")]
    fn test_rejects_length_twelve() {
        let mut reals = [0.0; 12];
        let mut imags = [0.0; 12];
        bit_reverse_permute(&mut reals, &mut imags);
    }

    #[test]
    #[should_panic(expected = "Channels must have the same length")]
    fn test_rejects_channel_mismatch() {
        let mut reals = [0.0; 4];
        let mut imags = [0.0; 2];
        bit_reverse_permute(&mut reals, &mut imags);
    }
}
