//! Friends-of-friends clustering.
//!
//! `fof` groups a cloud of D-dimensional points into connected components under
//! a distance threshold (the "linking length"): two points are directly linked
//! when their distance is strictly below the threshold, and clusters are the
//! transitive closure of that relation. This is the classic halo-finding
//! primitive from cosmological simulations, but the crate clusters arbitrary
//! point sets.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`cluster::FriendsOfFriends`]: the single entry point (R-tree accelerated
//!   for 1–4 dimensions, brute force otherwise)
//! - optional periodic (minimum-image) boundary conditions

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{Clustering, Engine, FriendsOfFriends};
pub use error::{Error, Result};
