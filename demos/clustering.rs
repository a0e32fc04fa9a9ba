//! Friends-of-friends on a small 3D dataset, with and without periodic
//! boundaries.

use fof::{Engine, FriendsOfFriends};

fn main() {
    let data: Vec<Vec<f64>> = vec![
        vec![0.0, 0.0, 0.0],
        vec![1.0, 1.0, 1.0],
        vec![2.0, 2.0, 2.0],
        vec![5.0, 5.0, 5.0],
        vec![0.5, 0.0, 0.0],
    ];

    // --- Plain Euclidean, linking length 1.8 ---
    let fof = FriendsOfFriends::new(1.8);
    let clusters = fof.fit(&data).unwrap();
    println!("=== FoF (linking length 1.8) ===");
    for (id, cluster) in clusters.iter().enumerate() {
        println!("  cluster {id}: {cluster:?}");
    }

    // --- Same cloud in a periodic 6^3 box ---
    // Point 3 at (5,5,5) now wraps to within 1.8 of point 0 at the origin.
    let fof = FriendsOfFriends::new(1.8).with_periodic_box(vec![6.0, 6.0, 6.0]);
    let clusters = fof.fit(&data).unwrap();
    println!("\n=== FoF (periodic box 6.0, linking length 1.8) ===");
    for (id, cluster) in clusters.iter().enumerate() {
        println!("  cluster {id}: {cluster:?}");
    }

    // --- Brute-force engine, explicitly ---
    let fof = FriendsOfFriends::new(1.8).with_engine(Engine::BruteForce);
    let clusters = fof.fit(&data).unwrap();
    println!("\n=== FoF (brute force) ===");
    for (id, cluster) in clusters.iter().enumerate() {
        println!("  cluster {id}: {cluster:?}");
    }
}
