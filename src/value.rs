use std::fmt;

/// Tolerance used when comparing floating-point values
pub const EPSILON: f64 = 1e-9;

/// A value the puzzle engine can carry through operations and display.
///
/// Equivalence is deliberately separate from `PartialEq`: wrapping types may
/// compare as "the same tile value" without being structurally equal.
pub trait Representable: Clone + fmt::Debug {
    /// Plain-text form used by text renderers and log messages
    fn as_text(&self) -> String;

    /// Whether two values count as the same value for matching and validation
    fn is_equivalent_to(&self, other: &Self) -> bool;
}

macro_rules! impl_representable_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Representable for $ty {
                fn as_text(&self) -> String {
                    self.to_string()
                }

                fn is_equivalent_to(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_representable_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Representable for f64 {
    fn as_text(&self) -> String {
        // Integral values print without a trailing ".0"
        if self.fract() == 0.0 && self.is_finite() && self.abs() < 1e15 {
            format!("{}", self.trunc() as i64)
        } else {
            format!("{}", self)
        }
    }

    fn is_equivalent_to(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

/// Index of the first value in `values` equivalent to `target`
pub(crate) fn position_of<T: Representable>(values: &[T], target: &T) -> Option<usize> {
    values.iter().position(|v| v.is_equivalent_to(target))
}
