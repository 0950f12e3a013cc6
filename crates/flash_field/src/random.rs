//! Draw helpers over an injected [`RngCore`].
//!
//! Every stochastic operation in the crate takes its entropy source as an
//! argument; these helpers turn raw `u32` draws into the uniform floats and
//! small integer ranges the walk needs.
use rand::RngCore;

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    f64::from(rng.next_u32()) / (f64::from(u32::MAX) + 1.0)
}

/// Uniform integer in the closed range `[lo, hi]`.
#[inline]
pub(crate) fn rand_int_inclusive(rng: &mut dyn RngCore, lo: i64, hi: i64) -> i64 {
    debug_assert!(lo <= hi, "empty integer range");
    let span = (hi - lo + 1) as f64;
    let offset = (rand01(rng) * span).floor() as i64;
    lo + offset.min(hi - lo)
}

/// Uniform index into a non-empty slice of length `len`.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0, "cannot pick from an empty sequence");
    ((rand01(rng) * len as f64) as usize).min(len - 1)
}

#[cfg(test)]
pub(crate) mod testing {
    use rand::RngCore;

    /// Returns the same `u32` on every draw.
    pub(crate) struct FixedRng {
        pub value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    /// Cycles through a fixed list of `u32` draws.
    pub(crate) struct SeqRng {
        values: Vec<u32>,
        cursor: usize,
    }

    impl SeqRng {
        pub(crate) fn new(values: Vec<u32>) -> Self {
            assert!(!values.is_empty());
            Self { values, cursor: 0 }
        }
    }

    impl RngCore for SeqRng {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            v
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    /// Raw draw that makes [`super::rand01`] return exactly `fraction`
    /// for fractions representable in 32 bits.
    pub(crate) fn draw_for(fraction: f64) -> u32 {
        (fraction * (f64::from(u32::MAX) + 1.0)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{draw_for, FixedRng, SeqRng};
    use super::*;

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one_for_max_input() {
        let mut rng = FixedRng { value: u32::MAX };
        let result = rand01(&mut rng);
        assert!(result < 1.0);
        assert!(result > 0.999_999);
    }

    #[test]
    fn rand01_half() {
        let mut rng = FixedRng {
            value: draw_for(0.5),
        };
        assert_eq!(rand01(&mut rng), 0.5);
    }

    #[test]
    fn rand_int_inclusive_covers_both_ends() {
        let mut low = FixedRng { value: 0 };
        let mut high = FixedRng { value: u32::MAX };
        assert_eq!(rand_int_inclusive(&mut low, 1, 10), 1);
        assert_eq!(rand_int_inclusive(&mut high, 1, 10), 10);
        assert_eq!(rand_int_inclusive(&mut low, -1, 1), -1);
        assert_eq!(rand_int_inclusive(&mut high, -1, 1), 1);
    }

    #[test]
    fn rand_int_inclusive_middle_of_sign_range_is_zero() {
        let mut rng = FixedRng {
            value: draw_for(0.5),
        };
        assert_eq!(rand_int_inclusive(&mut rng, -1, 1), 0);
    }

    #[test]
    fn rand_index_never_overflows() {
        let mut rng = SeqRng::new(vec![0, u32::MAX / 3, u32::MAX]);
        for _ in 0..3 {
            assert!(rand_index(&mut rng, 7) < 7);
        }
        let mut max = FixedRng { value: u32::MAX };
        assert_eq!(rand_index(&mut max, 1), 0);
    }
}
