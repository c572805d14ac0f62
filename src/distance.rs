use super::*;

/// Squared Euclidean distance between two points of equal dimension.
///
/// The two points may use different scalar representations (raw input vs
/// promoted centroid) as long as they promote to the same floating type.
/// Coordinates are widened before subtraction and the sum is accumulated in
/// the promoted type, so integer inputs never narrow or overflow mid-sum.
pub fn sqr_distance<T, U, const D: usize>(p: &Point<T, D>, q: &Point<U, D>) -> T::Mean
where
    T: Element,
    U: Element<Mean = T::Mean>,
{
    p.coords()
        .iter()
        .zip(q.coords().iter())
        .map(|(&a, &b)| a.promote() - b.promote())
        .map(|d| d * d)
        .fold(T::Mean::ZERO, |sum, d| sum + d)
}

/// Orders candidate points by squared distance to a fixed reference point.
///
/// A stateless value-type comparator; the only consumer is the nearest
/// centroid scan, where it implements strict "first minimum wins" semantics.
pub struct DistanceFrom<'a, T: Element, const D: usize> {
    reference: &'a Point<T, D>,
}

impl<'a, T: Element, const D: usize> From<&'a Point<T, D>> for DistanceFrom<'a, T, D> {
    fn from(reference: &'a Point<T, D>) -> Self {
        Self { reference }
    }
}

impl<T: Element, const D: usize> DistanceFrom<'_, T, D> {
    /// True iff `a` is strictly closer to the reference than `b`.
    pub fn nearer<U>(&self, a: &Point<U, D>, b: &Point<U, D>) -> bool
    where
        U: Element<Mean = T::Mean>,
    {
        sqr_distance(self.reference, a) < sqr_distance(self.reference, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_non_negative() {
        let p = Point::from([-3i32, 7]);
        let q = Point::from([5i32, -2]);
        assert!(sqr_distance(&p, &q) >= 0.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point::from([1.25f64, -0.5, 3.0]);
        assert_eq!(sqr_distance(&p, &p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let p = Point::from([0i64, 0]);
        let q = Point::from([3i64, 4]);
        assert_eq!(sqr_distance(&p, &q), sqr_distance(&q, &p));
        assert_eq!(sqr_distance(&p, &q), 25.0);
    }

    #[test]
    fn mixed_representation_distance() {
        let raw = Point::from([0i32, 1]);
        let mean = Point::from([0.0f64, 0.5]);
        assert_eq!(sqr_distance(&raw, &mean), 0.25);
    }

    #[test]
    fn comparator_is_strict() {
        let origin = Point::from([0i32, 0]);
        let from = DistanceFrom::from(&origin);
        let near = Point::from([1.0f64, 0.0]);
        let far = Point::from([2.0f64, 0.0]);
        assert!(from.nearer(&near, &far));
        assert!(!from.nearer(&far, &near));
        assert!(!from.nearer(&near, &near));
    }
}
