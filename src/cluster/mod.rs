//! Friends-of-friends clustering of static point clouds.
//!
//! ## The adjacency relation
//!
//! Two points are *friends* when their distance is **strictly** less than the
//! linking length; a cluster is everything reachable through chains of
//! friendships (connected components, i.e. friends of friends). Note what
//! this does *not* promise: members of one cluster need not all be within the
//! linking length of each other. A long chain of closely spaced points is one
//! cluster however far its ends are apart.
//!
//! ## Metrics
//!
//! Plain Euclidean distance by default. With a periodic box, distances follow
//! the minimum-image convention per axis (`min(|d|, box - |d|)`), so clusters
//! may wrap around the domain edges, the usual setting for simulation
//! snapshots.
//!
//! ## Engines
//!
//! [`FriendsOfFriends`] picks between two engines with identical output:
//!
//! | Engine | Dimensions | Cost |
//! |--------|------------|------|
//! | R-tree accelerated | 1–4 | ~O(n log n) for well-separated clusters |
//! | Brute force | any | O(n²) distance evaluations |
//!
//! ## Usage
//!
//! ```rust
//! use fof::{Clustering, FriendsOfFriends};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.2, 0.1],
//!     vec![5.0, 5.0],
//!     vec![5.1, 5.0],
//! ];
//!
//! // Clusters as index sets.
//! let clusters = FriendsOfFriends::new(0.5).fit(&data).unwrap();
//! assert_eq!(clusters, vec![vec![0, 1], vec![2, 3]]);
//!
//! // Or one label per point.
//! let labels = FriendsOfFriends::new(0.5).fit_predict(&data).unwrap();
//! assert_eq!(labels, vec![0, 0, 1, 1]);
//! ```

mod brute;
mod fof;
mod index;
mod metric;
mod traits;
mod tree;

pub use fof::{Engine, FriendsOfFriends};
pub use traits::Clustering;
