use super::*;
use std::ops::Add;
use std::ops::Div;

/// A fixed-dimension numeric tuple representing one data sample.
///
/// Dimensionality is a compile-time constant; the coordinate scalar is any
/// [`Element`]. Points are immutable and `Copy`. Arithmetic (element-wise
/// addition, division by a member count) is only defined for promoted
/// points, i.e. `Point<T::Mean, D>`, since it only ever happens during
/// centroid mean computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T, const D: usize>([T; D]);

impl<T: Element, const D: usize> Point<T, D> {
    /// Coordinates in declaration order.
    pub fn coords(&self) -> &[T; D] {
        &self.0
    }
    /// Widens every coordinate into the centroid representation.
    pub fn promote(&self) -> Point<T::Mean, D> {
        Point(std::array::from_fn(|i| self.0[i].promote()))
    }
}

impl<M: Accumulate, const D: usize> Point<M, D> {
    /// Additive identity for centroid accumulation.
    pub fn zero() -> Self {
        Self([M::ZERO; D])
    }
}

impl<T, const D: usize> From<[T; D]> for Point<T, D> {
    fn from(coords: [T; D]) -> Self {
        Self(coords)
    }
}

impl<M: Accumulate, const D: usize> Add for Point<M, D> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

/// Division by a positive member count, coordinate-wise.
impl<M: Accumulate, const D: usize> Div<usize> for Point<M, D> {
    type Output = Self;
    fn div(self, count: usize) -> Self {
        debug_assert!(count > 0);
        Self(std::array::from_fn(|i| self.0[i] / M::count(count)))
    }
}
