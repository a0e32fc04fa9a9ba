//! Friends-of-friends: connected components under a distance threshold.
//!
//! # The Algorithm (Davis et al., 1985)
//!
//! Friends-of-friends (FoF) links two points whenever their distance is
//! strictly below a threshold, the *linking length*, and defines clusters as
//! the connected components of that relation. It is the standard halo finder
//! for N-body simulations (Davis, Efstathiou, Frenk & White 1985), and is
//! equivalent to single-linkage clustering cut at a fixed height, or to
//! DBSCAN with `min_pts = 1` and no noise class.
//!
//! ## Core Concepts
//!
//! - **Linking length (b)**: strict distance threshold for direct adjacency.
//!   Two points exactly at distance `b` are *not* linked.
//! - **Cluster**: a maximal set in which every member is reachable from every
//!   other through a chain of direct links. Pairs inside a cluster may be far
//!   apart; only the chain matters.
//! - **Periodic box**: optional per-axis domain extents. Distances then follow
//!   the minimum-image convention, so clusters can wrap around the domain.
//!
//! ## Engines
//!
//! - **Tree** (1–4 dimensions): an R-tree holds the remaining points; each
//!   cluster grows by range queries of half-width `b` around its frontier,
//!   and found points are removed so no point is ever visited twice. Roughly
//!   O(n log n) for clouds whose clusters are small against the domain.
//! - **Brute force** (any dimension): exhaustive O(n²) scanning over an
//!   unused-point list. Also the correctness oracle for the tree engine.
//!
//! The output is identical for both engines: a partition of `0..n` into
//! clusters, each cluster sorted ascending, clusters ordered by their
//! smallest member.
//!
//! ## When to Use
//!
//! - Grouping simulation particles into halos
//! - Percolation-style analysis of any static point cloud
//! - Any "transitive closure under a radius" grouping
//!
//! ## References
//!
//! Davis, Efstathiou, Frenk & White (1985). "The evolution of large-scale
//! structure in a universe dominated by cold dark matter." ApJ 292.

use super::brute;
use super::metric::Metric;
use super::traits::Clustering;
use super::tree;
use crate::error::{Error, Result};

/// Highest dimension the indexed engine is instantiated for.
const MAX_TREE_DIM: usize = 4;

/// Engine selection for [`FriendsOfFriends`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Engine {
    /// Indexed engine where the dimension supports it, brute force otherwise.
    #[default]
    Auto,
    /// Always the R-tree engine; erroring on dimensions above 4.
    Tree,
    /// Always the O(n²) engine.
    BruteForce,
}

/// Friends-of-friends clusterer.
///
/// ```rust
/// use fof::FriendsOfFriends;
///
/// let data = vec![
///     vec![0.0, 0.0],
///     vec![0.3, 0.0],
///     vec![9.0, 9.0],
/// ];
///
/// let clusters = FriendsOfFriends::new(0.5).fit(&data).unwrap();
/// assert_eq!(clusters, vec![vec![0, 1], vec![2]]);
/// ```
#[derive(Clone, Debug)]
pub struct FriendsOfFriends {
    /// Strict distance threshold for direct links.
    linking_length: f64,
    /// Per-axis periodic domain extents; `None` for plain Euclidean space.
    periodic_box: Option<Vec<f64>>,
    /// Engine selection.
    engine: Engine,
}

impl FriendsOfFriends {
    /// Create a new clusterer with the given linking length.
    ///
    /// # Arguments
    ///
    /// * `linking_length` - Strict distance threshold for direct adjacency.
    ///
    /// # Typical Values
    ///
    /// For halo finding, ~0.2 times the mean inter-particle separation is the
    /// conventional choice.
    pub fn new(linking_length: f64) -> Self {
        Self {
            linking_length,
            periodic_box: None,
            engine: Engine::Auto,
        }
    }

    /// Enable periodic boundary conditions with the given per-axis extents.
    ///
    /// Coordinates are expected in `[0, box)` along each axis.
    pub fn with_periodic_box(mut self, box_size: Vec<f64>) -> Self {
        self.periodic_box = Some(box_size);
        self
    }

    /// Select the engine explicitly (default: [`Engine::Auto`]).
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Cluster a point cloud given as one coordinate row per point.
    ///
    /// Returns the clusters as sets of indices into `data`: pairwise disjoint,
    /// jointly covering `0..data.len()`. Each cluster is sorted ascending and
    /// clusters are ordered by their smallest member. An empty cloud yields an
    /// empty result.
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<Vec<Vec<usize>>> {
        if !self.linking_length.is_finite() || self.linking_length <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "linking_length",
                message: "must be positive and finite",
            });
        }

        if data.is_empty() {
            return Ok(Vec::new());
        }

        let ndim = data[0].len();
        if ndim == 0 {
            return Err(Error::InvalidParameter {
                name: "data",
                message: "points must have at least one coordinate",
            });
        }
        for row in data {
            if row.len() != ndim {
                return Err(Error::DimensionMismatch {
                    expected: ndim,
                    found: row.len(),
                });
            }
        }

        let metric = match &self.periodic_box {
            None => Metric::Euclidean,
            Some(box_size) => {
                if box_size.len() != ndim {
                    return Err(Error::DimensionMismatch {
                        expected: ndim,
                        found: box_size.len(),
                    });
                }
                if box_size.iter().any(|side| !side.is_finite() || *side <= 0.0) {
                    return Err(Error::InvalidParameter {
                        name: "periodic_box",
                        message: "extents must be positive and finite",
                    });
                }
                Metric::Periodic {
                    box_size: box_size.clone(),
                }
            }
        };

        self.run(data, ndim, &metric)
    }

    /// Cluster a flat row-major coordinate array of `ndim` columns.
    ///
    /// Convenience entry for callers holding one contiguous buffer; behaves
    /// exactly like [`fit`](Self::fit) on the reshaped data.
    pub fn fit_flat(&self, data: &[f64], ndim: usize) -> Result<Vec<Vec<usize>>> {
        if ndim == 0 {
            return Err(Error::InvalidParameter {
                name: "ndim",
                message: "must be at least 1",
            });
        }
        if data.len() % ndim != 0 {
            return Err(Error::RaggedInput {
                len: data.len(),
                ndim,
            });
        }
        let rows: Vec<Vec<f64>> = data.chunks_exact(ndim).map(|row| row.to_vec()).collect();
        self.fit(&rows)
    }

    /// Dispatch to an engine and normalize the output ordering.
    fn run(&self, data: &[Vec<f64>], ndim: usize, metric: &Metric) -> Result<Vec<Vec<usize>>> {
        let use_tree = match self.engine {
            Engine::BruteForce => false,
            Engine::Auto => ndim <= MAX_TREE_DIM,
            Engine::Tree => {
                if ndim > MAX_TREE_DIM {
                    return Err(Error::InvalidParameter {
                        name: "engine",
                        message: "tree engine supports at most 4 dimensions",
                    });
                }
                true
            }
        };

        let ll = self.linking_length;
        let mut clusters = match (use_tree, ndim) {
            (true, 1) => tree::cluster::<1>(data, ll, metric),
            (true, 2) => tree::cluster::<2>(data, ll, metric),
            (true, 3) => tree::cluster::<3>(data, ll, metric),
            (true, 4) => tree::cluster::<4>(data, ll, metric),
            _ => brute::cluster(data, ll, metric),
        };

        // Engines sort within each cluster; order clusters by smallest member
        // so results are reproducible across engines and runs.
        clusters.sort_by_key(|c| c[0]);
        Ok(clusters)
    }
}

impl Clustering for FriendsOfFriends {
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        let clusters = self.fit(data)?;
        let mut labels = vec![0usize; data.len()];
        for (cluster_id, cluster) in clusters.iter().enumerate() {
            for &idx in cluster {
                labels[idx] = cluster_id;
            }
        }
        Ok(labels)
    }

    /// FoF discovers clusters dynamically, so this returns 0.
    fn n_clusters(&self) -> usize {
        0
    }
}
