use super::*;

/// Final clustering state: centroids, cluster sizes, and a grouping view.
///
/// Borrows the caller's points and assignment slice rather than owning them;
/// the borrow checker enforces that the view is consumed before either goes
/// out of scope. Grouping is lazy: each traversal of [`KMeans::clusters`]
/// re-scans the (assignment, point) pairs, which suits the one-shot
/// reporting this view exists for.
pub struct KMeans<'a, T: Element, const D: usize> {
    /// Final centroid positions, indexed by identifier minus one.
    centroids: Vec<Point<T::Mean, D>>,
    /// Member counts per cluster, indexed by identifier minus one.
    sizes: Vec<usize>,
    /// The unmodified input points.
    points: &'a [Point<T, D>],
    /// The final per-point cluster identifiers.
    assignments: &'a [usize],
}

impl<'a, T: Element, const D: usize> KMeans<'a, T, D> {
    pub(crate) fn new(
        points: &'a [Point<T, D>],
        assignments: &'a [usize],
        centroids: Vec<Centroid<T, D>>,
    ) -> Self {
        let sizes = (1..=centroids.len())
            .map(|id| assignments.iter().filter(|a| **a == id).count())
            .collect();
        let centroids = centroids.into_iter().map(Centroid::into_mean).collect();
        Self {
            centroids,
            sizes,
            points,
            assignments,
        }
    }

    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
    /// Final centroid positions, in identifier order.
    pub fn centroids(&self) -> &[Point<T::Mean, D>] {
        &self.centroids
    }
    /// Member counts per cluster, in identifier order. Sums to |points|.
    pub fn cluster_sizes(&self) -> &[usize] {
        &self.sizes
    }
    /// The input points, untouched.
    pub fn points(&self) -> &'a [Point<T, D>] {
        self.points
    }
    /// Per-point cluster identifiers, each in 1..=k.
    pub fn assignments(&self) -> &'a [usize] {
        self.assignments
    }

    /// Lazy traversal of the k clusters in identifier order.
    ///
    /// Forward-only and restartable; each restart re-scans the full
    /// points/assignment pair.
    pub fn clusters(&self) -> Clusters<'_, 'a, T, D> {
        Clusters {
            result: self,
            index: 0,
        }
    }

    /// Root-mean-square distance from each point to its assigned centroid.
    pub fn rms(&self) -> T::Mean {
        let sum = self
            .assignments
            .iter()
            .zip(self.points.iter())
            .map(|(id, point)| sqr_distance(point, &self.centroids[id - 1]))
            .fold(T::Mean::ZERO, |sum, d| sum + d);
        (sum / T::Mean::count(self.points.len())).sqrt()
    }
}

impl<'s, 'a, T: Element, const D: usize> IntoIterator for &'s KMeans<'a, T, D> {
    type Item = Cluster<'s, 'a, T, D>;
    type IntoIter = Clusters<'s, 'a, T, D>;
    fn into_iter(self) -> Self::IntoIter {
        self.clusters()
    }
}

/// Iterator over the k clusters of a [`KMeans`] result.
pub struct Clusters<'s, 'a, T: Element, const D: usize> {
    result: &'s KMeans<'a, T, D>,
    index: usize,
}

impl<'s, 'a, T: Element, const D: usize> Iterator for Clusters<'s, 'a, T, D> {
    type Item = Cluster<'s, 'a, T, D>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.result.k() {
            None
        } else {
            self.index += 1;
            Some(Cluster {
                id: self.index,
                centroid: &self.result.centroids[self.index - 1],
                points: self.result.points,
                assignments: self.result.assignments,
            })
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.result.k() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: Element, const D: usize> ExactSizeIterator for Clusters<'_, '_, T, D> {}

/// One cluster: its centroid and a lazy view of its member points.
pub struct Cluster<'s, 'a, T: Element, const D: usize> {
    id: usize,
    centroid: &'s Point<T::Mean, D>,
    points: &'a [Point<T, D>],
    assignments: &'a [usize],
}

impl<'a, T: Element, const D: usize> Cluster<'_, 'a, T, D> {
    /// Cluster identifier in 1..=k.
    pub fn id(&self) -> usize {
        self.id
    }
    /// Final centroid position for this cluster.
    pub fn centroid(&self) -> &Point<T::Mean, D> {
        self.centroid
    }
    /// Member points in input order, filtered lazily on each traversal.
    pub fn members(&self) -> impl Iterator<Item = &'a Point<T, D>> {
        let id = self.id;
        self.assignments
            .iter()
            .zip(self.points.iter())
            .filter(move |(assigned, _)| **assigned == id)
            .map(|(_, point)| point)
    }
}
