use super::*;

/// A cluster centroid paired with its identifier.
///
/// Identifiers are dense in 1..=k and assigned once at initialization, in
/// sampling order; only the mean is ever overwritten afterward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid<T: Element, const D: usize> {
    /// Cluster identifier in 1..=k. Immutable after initialization.
    id: usize,
    /// Current (promoted) centroid position.
    mean: Point<T::Mean, D>,
}

impl<T: Element, const D: usize> Centroid<T, D> {
    /// Cluster identifier in 1..=k.
    pub fn id(&self) -> usize {
        self.id
    }
    /// Current centroid position.
    pub fn mean(&self) -> &Point<T::Mean, D> {
        &self.mean
    }
    /// Overwrites the centroid position, leaving the identifier unchanged.
    pub(crate) fn shift(&mut self, mean: Point<T::Mean, D>) {
        self.mean = mean;
    }
    /// Surrenders the centroid position for the final result vector.
    pub(crate) fn into_mean(self) -> Point<T::Mean, D> {
        self.mean
    }
}

/// Seeds k centroids from a sample of the input points.
///
/// Draws k distinct points without replacement, widens their coordinates
/// into the promoted representation, and pairs them with identifiers 1..=k
/// in the order the sampler produced them.
pub fn init_centroids<T: Element, const D: usize>(
    points: &[Point<T, D>],
    k: usize,
    sampler: &mut impl Sampler,
) -> Vec<Centroid<T, D>> {
    sampler
        .draw(points.len(), k)
        .into_iter()
        .map(|i| points[i].promote())
        .zip(1..=k)
        .map(|(mean, id)| Centroid { id, mean })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_sampling_order() {
        let points = vec![
            Point::from([0i32, 0]),
            Point::from([1i32, 1]),
            Point::from([2i32, 2]),
        ];
        let ref mut sampler = FixedSampler(vec![2, 0]);
        let centroids = init_centroids(&points, 2, sampler);
        assert_eq!(centroids.len(), 2);
        assert_eq!(centroids[0].id(), 1);
        assert_eq!(centroids[0].mean(), &Point::from([2.0f64, 2.0]));
        assert_eq!(centroids[1].id(), 2);
        assert_eq!(centroids[1].mean(), &Point::from([0.0f64, 0.0]));
    }

    #[test]
    fn floating_points_keep_their_width() {
        let points = vec![Point::from([0.5f32]), Point::from([1.5f32])];
        let ref mut sampler = FixedSampler(vec![1, 0]);
        let centroids = init_centroids(&points, 2, sampler);
        assert_eq!(centroids[0].mean(), &Point::from([1.5f32]));
    }
}
