use std::collections::BTreeSet;

use fof::cluster::{Engine, FriendsOfFriends};
use proptest::prelude::*;

/// Partition as a canonical set of sets, for order-insensitive comparison.
fn as_sets(clusters: &[Vec<usize>]) -> BTreeSet<BTreeSet<usize>> {
    clusters
        .iter()
        .map(|c| c.iter().copied().collect())
        .collect()
}

fn assert_is_partition(clusters: &[Vec<usize>], n: usize) {
    let mut seen = vec![false; n];
    for cluster in clusters {
        assert!(!cluster.is_empty());
        for &idx in cluster {
            assert!(idx < n, "index {idx} out of range");
            assert!(!seen[idx], "index {idx} appears twice");
            seen[idx] = true;
        }
    }
    assert!(seen.iter().all(|&s| s), "some index missing from partition");
}

proptest! {
    #[test]
    fn prop_result_is_partition(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 3), 0..40),
        ll in 0.1f64..5.0
    ) {
        let clusters = FriendsOfFriends::new(ll).fit(&data).unwrap();
        assert_is_partition(&clusters, data.len());
    }

    #[test]
    fn prop_engines_agree_2d(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..40),
        ll in 0.1f64..5.0
    ) {
        let tree = FriendsOfFriends::new(ll).with_engine(Engine::Tree).fit(&data).unwrap();
        let brute = FriendsOfFriends::new(ll).with_engine(Engine::BruteForce).fit(&data).unwrap();
        prop_assert_eq!(as_sets(&tree), as_sets(&brute));
    }

    #[test]
    fn prop_engines_agree_3d(
        data in prop::collection::vec(prop::collection::vec(-5.0f64..5.0, 3), 1..30),
        ll in 0.1f64..3.0
    ) {
        let tree = FriendsOfFriends::new(ll).with_engine(Engine::Tree).fit(&data).unwrap();
        let brute = FriendsOfFriends::new(ll).with_engine(Engine::BruteForce).fit(&data).unwrap();
        prop_assert_eq!(as_sets(&tree), as_sets(&brute));
    }

    #[test]
    fn prop_engines_agree_periodic(
        data in prop::collection::vec(prop::collection::vec(0.0f64..10.0, 2), 1..30),
        ll in 0.1f64..2.0
    ) {
        let tree = FriendsOfFriends::new(ll)
            .with_periodic_box(vec![10.0, 10.0])
            .with_engine(Engine::Tree)
            .fit(&data)
            .unwrap();
        let brute = FriendsOfFriends::new(ll)
            .with_periodic_box(vec![10.0, 10.0])
            .with_engine(Engine::BruteForce)
            .fit(&data)
            .unwrap();
        prop_assert_eq!(as_sets(&tree), as_sets(&brute));
    }

    #[test]
    fn prop_high_dim_falls_back_to_brute(
        data in prop::collection::vec(prop::collection::vec(-3.0f64..3.0, 6), 1..20),
        ll in 0.1f64..2.0
    ) {
        let auto = FriendsOfFriends::new(ll).fit(&data).unwrap();
        let brute = FriendsOfFriends::new(ll).with_engine(Engine::BruteForce).fit(&data).unwrap();
        prop_assert_eq!(&auto, &brute);
        assert_is_partition(&auto, data.len());
    }
}

#[test]
fn periodic_partition_is_valid_near_edges() {
    // Points piled against opposite faces of the box.
    let mut data = Vec::new();
    for i in 0..10 {
        data.push(vec![0.05, i as f64]);
        data.push(vec![9.95, i as f64]);
    }
    let clusters = FriendsOfFriends::new(0.2)
        .with_periodic_box(vec![10.0, 10.0])
        .fit(&data)
        .unwrap();
    assert_is_partition(&clusters, data.len());
    // Each facing pair wraps into one cluster of two.
    assert_eq!(clusters.len(), 10);
    assert!(clusters.iter().all(|c| c.len() == 2));
}
