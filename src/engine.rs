use super::*;
use rayon::prelude::*;

/// Runs the single-assignment clustering scheme.
///
/// Seeds k centroids from a sample of the points, assigns every point to its
/// nearest centroid exactly once, then recomputes centroid means n times
/// against that fixed assignment. There is no re-assignment between updates,
/// so every update past the first leaves the centroids stationary; see
/// [`cluster_lloyd`] for the alternating scheme.
///
/// Preconditions, each reported as a typed [`Error`] before any write to
/// `assignments`: k >= 2, |points| >= k, |assignments| == |points|.
/// Valid for n = 0, in which case the centroids equal the promoted sample
/// and the assignment reflects one nearest-centroid pass. Never mutates the
/// points.
pub fn cluster<'a, T: Element, const D: usize>(
    points: &'a [Point<T, D>],
    assignments: &'a mut [usize],
    k: usize,
    n: usize,
    sampler: &mut impl Sampler,
) -> Result<KMeans<'a, T, D>, Error> {
    preconditions(points.len(), assignments.len(), k)?;
    log::debug!("{:<32}{:<32}", "kmeans initializing", k);
    let mut centroids = init_centroids(points, k, sampler);
    log::debug!("{:<32}{:<32}", "kmeans assigning", points.len());
    assign(points, &centroids, assignments);
    log::debug!("{:<32}{:<32}", "kmeans iterating", n);
    for _ in 0..n {
        update(points, assignments, &mut centroids);
    }
    Ok(KMeans::new(points, assignments, centroids))
}

/// Runs full alternating k-means (Lloyd's scheme).
///
/// Same contract as [`cluster`], but each of the n rounds recomputes the
/// centroid means and then re-assigns every point to its now-nearest
/// centroid, so the final assignment is always consistent with the final
/// centroids. With n = 0 the two schemes coincide.
pub fn cluster_lloyd<'a, T: Element, const D: usize>(
    points: &'a [Point<T, D>],
    assignments: &'a mut [usize],
    k: usize,
    n: usize,
    sampler: &mut impl Sampler,
) -> Result<KMeans<'a, T, D>, Error> {
    preconditions(points.len(), assignments.len(), k)?;
    log::debug!("{:<32}{:<32}", "lloyd initializing", k);
    let mut centroids = init_centroids(points, k, sampler);
    assign(points, &centroids, assignments);
    log::debug!("{:<32}{:<32}", "lloyd iterating", n);
    for _ in 0..n {
        update(points, assignments, &mut centroids);
        assign(points, &centroids, assignments);
    }
    Ok(KMeans::new(points, assignments, centroids))
}

/// Rejects invalid inputs before anything is sampled or written.
///
/// Point counts are slice lengths and therefore always fit the engine's
/// indexing type, so no separate representability check is needed.
fn preconditions(points: usize, slots: usize, k: usize) -> Result<(), Error> {
    if k < 2 {
        Err(Error::InvalidClusterCount { k })
    } else if points < k {
        Err(Error::InsufficientPoints { points, k })
    } else if points != slots {
        Err(Error::SizeMismatch { points, slots })
    } else {
        Ok(())
    }
}

/// Writes the nearest centroid's identifier into every assignment slot.
///
/// Each point is evaluated independently over read-only centroids with
/// write-disjoint output slots, so the scan parallelizes without changing
/// the sequential semantics. O(N * k) distance evaluations.
pub(crate) fn assign<T: Element, const D: usize>(
    points: &[Point<T, D>],
    centroids: &[Centroid<T, D>],
    slots: &mut [usize],
) {
    slots
        .par_iter_mut()
        .zip(points.par_iter())
        .for_each(|(slot, point)| *slot = nearest(point, centroids));
}

/// Identifier of the centroid nearest to a point.
///
/// Ties break to the centroid encountered first in iteration order, which
/// is why this is a strict-improvement fold rather than `Iterator::min_by`
/// (the latter keeps the last of several equal minima).
fn nearest<T: Element, const D: usize>(
    point: &Point<T, D>,
    centroids: &[Centroid<T, D>],
) -> usize {
    let from = DistanceFrom::from(point);
    centroids
        .iter()
        .fold(None::<&Centroid<T, D>>, |best, next| match best {
            Some(best) if !from.nearer(next.mean(), best.mean()) => Some(best),
            _ => Some(next),
        })
        .map(Centroid::id)
        .expect("k >= 2 centroids")
}

/// Recomputes every centroid as the mean of its currently assigned points.
///
/// Identifiers are never touched. A centroid with no assigned points keeps
/// its previous position and a warning is logged; the run continues and
/// still produces a result. Cluster means are independent of one another,
/// so they are computed in parallel against the fixed assignment.
pub(crate) fn update<T: Element, const D: usize>(
    points: &[Point<T, D>],
    assignments: &[usize],
    centroids: &mut [Centroid<T, D>],
) {
    let means = centroids
        .par_iter()
        .map(|centroid| mean_of(points, assignments, centroid.id()))
        .collect::<Vec<_>>();
    for (centroid, mean) in centroids.iter_mut().zip(means) {
        match mean {
            Some(mean) => centroid.shift(mean),
            None => log::warn!("{:<32}{:<32}", "empty cluster unchanged", centroid.id()),
        }
    }
}

/// Mean of all points carrying the given identifier, or None if there are
/// none and the mean would be a division by zero.
fn mean_of<T: Element, const D: usize>(
    points: &[Point<T, D>],
    assignments: &[usize],
    id: usize,
) -> Option<Point<T::Mean, D>> {
    let (sum, count) = assignments
        .iter()
        .zip(points.iter())
        .filter(|(assigned, _)| **assigned == id)
        .map(|(_, point)| point.promote())
        .fold((Point::zero(), 0), |(sum, count), point| {
            (sum + point, count + 1)
        });
    match count {
        0 => None,
        count => Some(sum / count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_minimum_wins_on_ties() {
        let points = vec![Point::from([0i32, 0]), Point::from([0i32, 0])];
        let ref mut sampler = FixedSampler(vec![0, 1]);
        let centroids = init_centroids(&points, 2, sampler);
        let probe = Point::from([5i32, 5]);
        assert_eq!(nearest(&probe, &centroids), 1);
    }

    #[test]
    fn assignment_overwrites_every_slot() {
        let points = vec![
            Point::from([0i32]),
            Point::from([9i32]),
            Point::from([1i32]),
        ];
        let ref mut sampler = FixedSampler(vec![0, 1]);
        let centroids = init_centroids(&points, 2, sampler);
        let mut slots = vec![usize::MAX; 3];
        assign(&points, &centroids, &mut slots);
        assert_eq!(slots, vec![1, 2, 1]);
    }

    #[test]
    fn update_preserves_identifiers() {
        let points = vec![Point::from([0i32]), Point::from([4i32])];
        let ref mut sampler = FixedSampler(vec![1, 0]);
        let mut centroids = init_centroids(&points, 2, sampler);
        let assignments = vec![2, 1];
        update(&points, &assignments, &mut centroids);
        assert_eq!(centroids[0].id(), 1);
        assert_eq!(centroids[1].id(), 2);
        assert_eq!(centroids[0].mean(), &Point::from([4.0f64]));
        assert_eq!(centroids[1].mean(), &Point::from([0.0f64]));
    }

    #[test]
    fn mean_of_empty_group_is_none() {
        let points = vec![Point::from([1i32]), Point::from([3i32])];
        let assignments = vec![1, 1];
        assert_eq!(mean_of(&points, &assignments, 2), None);
        assert_eq!(mean_of(&points, &assignments, 1), Some(Point::from([2.0f64])));
    }
}
