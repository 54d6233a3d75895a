//! Accumulated-cost arithmetic used by the searches

use std::fmt::Debug;
use std::ops::Add;

/// A totally ordered, additive path cost with a zero
///
/// Step costs handed to the searches must be `>= Cost::zero()`; the
/// optimality guarantees rely on it.
pub trait Cost: Copy + Ord + Add<Output = Self> + Debug {
    /// The cost of the empty path
    fn zero() -> Self;
}

macro_rules! impl_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
