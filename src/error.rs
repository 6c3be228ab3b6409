/// Errors the fast transform reports instead of touching its input.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransformError {
    /// The length is not a power of two (zero included).
    NotPowerOfTwo {
        /// Length of the rejected signal.
        len: usize,
    },
    /// The imaginary channel does not have the same length as the real channel.
    ChannelMismatch {
        /// Length of the real channel.
        reals: usize,
        /// Length of the imaginary channel.
        imags: usize,
    },
}

impl TransformError {
    /// Integer status of the C-style interface: `0` is success, every failure is `1`.
    pub const fn status(&self) -> i32 {
        1
    }
}

impl core::fmt::Display for TransformError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotPowerOfTwo { len } => {
                write!(f, "Signal length {len} is not a power of two")
            }
            Self::ChannelMismatch { reals, imags } => write!(
                f,
                "Channel lengths differ: {reals} real samples, {imags} imaginary samples"
            ),
        }
    }
}

impl core::fmt::Debug for TransformError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

#[cfg(not(feature = "no_std"))]
impl std::error::Error for TransformError {}
