use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Sub;

/// Scalar coordinate type for a fixed-dimension point.
///
/// Every element carries an associated `Mean` type: the floating
/// representation used for centroid arithmetic. Integer elements promote to
/// `f64` so that mean computation never loses fractional precision; floating
/// elements keep their own width. The mapping is resolved once per element
/// type at compile time, never by a runtime branch.
pub trait Element: Copy + PartialEq + Send + Sync + std::fmt::Debug + 'static {
    /// Floating representation used for centroid coordinates.
    type Mean: Accumulate;
    /// Widens a coordinate into the centroid representation.
    fn promote(self) -> Self::Mean;
}

/// Floating scalar used to accumulate sums, means, and distances.
///
/// Distances between points of mixed representation (raw input vs promoted
/// centroid) are accumulated in this type, which sidesteps the narrowing
/// and overflow hazards of accumulating in the raw element type.
pub trait Accumulate:
    Element<Mean = Self>
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Converts a positive member count into a divisor.
    fn count(n: usize) -> Self;
    /// Square root, for RMS reporting.
    fn sqrt(self) -> Self;
}

impl Element for f32 {
    type Mean = f32;
    fn promote(self) -> f32 {
        self
    }
}

impl Element for f64 {
    type Mean = f64;
    fn promote(self) -> f64 {
        self
    }
}

impl Accumulate for f32 {
    const ZERO: Self = 0.0;
    fn count(n: usize) -> Self {
        n as f32
    }
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl Accumulate for f64 {
    const ZERO: Self = 0.0;
    fn count(n: usize) -> Self {
        n as f64
    }
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}

/// Integer coordinates promote to double precision.
macro_rules! promote_integers {
    ($($int:ty)*) => {$(
        impl Element for $int {
            type Mean = f64;
            fn promote(self) -> f64 {
                self as f64
            }
        }
    )*};
}

promote_integers!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);
