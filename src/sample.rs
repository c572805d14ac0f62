/// Draws k distinct indices without replacement from a collection of n.
///
/// The engine needs exactly one primitive from its randomness source: an
/// unordered sample of k distinct points. Centroid identifiers 1..=k are
/// handed out in the order the sampler produces indices, so a deterministic
/// sampler makes the whole clustering run reproducible.
pub trait Sampler {
    /// Returns k distinct indices in [0, n), in sampling order.
    ///
    /// Callers uphold k <= n; the engine checks this precondition before
    /// sampling is ever attempted.
    fn draw(&mut self, n: usize, k: usize) -> Vec<usize>;
}

/// Adapts any RNG into a [`Sampler`] via rand's without-replacement
/// index sampling.
#[derive(Debug, Clone)]
pub struct RngSampler<R>(pub R);

impl<R: rand::Rng> Sampler for RngSampler<R> {
    fn draw(&mut self, n: usize, k: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, n, k).into_vec()
    }
}

/// Replays a fixed list of indices.
///
/// Useful for reproducing a clustering run from a known seed sample, and for
/// tests that pin the initial centroids.
#[derive(Debug, Clone)]
pub struct FixedSampler(pub Vec<usize>);

impl Sampler for FixedSampler {
    fn draw(&mut self, n: usize, k: usize) -> Vec<usize> {
        debug_assert!(self.0.len() == k);
        debug_assert!(self.0.iter().all(|i| *i < n));
        self.0.clone()
    }
}
