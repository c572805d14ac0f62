/// Precondition failures reported by the clustering entry points.
///
/// Errors are values checked before any write to the caller's assignment
/// slice; a failed call performs no partial writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer than two clusters were requested.
    InvalidClusterCount { k: usize },
    /// Fewer points than requested clusters.
    InsufficientPoints { points: usize, k: usize },
    /// Assignment slice length differs from the point count.
    SizeMismatch { points: usize, slots: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClusterCount { k } => {
                write!(f, "invalid cluster count: k = {} but k >= 2 required", k)
            }
            Self::InsufficientPoints { points, k } => {
                write!(f, "insufficient points: {} points for k = {} clusters", points, k)
            }
            Self::SizeMismatch { points, slots } => {
                write!(f, "size mismatch: {} points but {} assignment slots", points, slots)
            }
        }
    }
}

impl std::error::Error for Error {}
