use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Fit the model (if needed) and return one cluster label per input point.
    ///
    /// Labels are dense: `0..k` for `k` clusters, assigned in the order
    /// clusters are emitted.
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>>;

    /// The configured number of clusters (if applicable).
    ///
    /// For algorithms that discover the number of clusters dynamically (e.g.
    /// friends-of-friends), this returns 0.
    fn n_clusters(&self) -> usize;
}
