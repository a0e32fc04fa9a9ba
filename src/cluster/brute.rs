//! Brute-force friends-of-friends engine.
//!
//! O(n²) in distance evaluations, no spatial index: keep a list of
//! not-yet-grouped points, seed a cluster from the last one, and grow it with
//! a stack. For each stack point the entire remaining unused list is scanned;
//! matches are marked first and the list compacted afterwards, so the scan
//! never mutates the list it is iterating.
//!
//! Serves any dimensionality, and doubles as an independently implemented
//! oracle for the indexed engine in tests.

use super::metric::Metric;

/// Cluster `data` by exhaustive pairwise scanning. Caller guarantees
/// consistent row dimensionality and `linking_length > 0`.
pub(crate) fn cluster(data: &[Vec<f64>], linking_length: f64, metric: &Metric) -> Vec<Vec<usize>> {
    let mut unused: Vec<usize> = (0..data.len()).collect();
    let mut clusters = Vec::new();

    while let Some(seed) = unused.pop() {
        let mut cluster = Vec::new();
        let mut stack = vec![seed];

        while let Some(current) = stack.pop() {
            cluster.push(current);

            // Mark, then compact: no removal while scanning.
            let mut matched = vec![false; unused.len()];
            for (slot, &candidate) in unused.iter().enumerate() {
                if metric.distance(&data[current], &data[candidate]) < linking_length {
                    matched[slot] = true;
                    stack.push(candidate);
                }
            }
            let mut slot = 0;
            unused.retain(|_| {
                let keep = !matched[slot];
                slot += 1;
                keep
            });
        }

        cluster.sort_unstable();
        clusters.push(cluster);
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_clusters(mut clusters: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
        clusters.sort_by_key(|c| c[0]);
        clusters
    }

    #[test]
    fn test_two_groups() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.2, 0.0],
            vec![0.4, 0.0],
            vec![9.0, 9.0],
            vec![9.2, 9.0],
        ];
        let clusters = sort_clusters(cluster(&data, 0.3, &Metric::Euclidean));
        assert_eq!(clusters, vec![vec![0, 1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_high_dimensional_input() {
        // 6-D, beyond what the indexed engine supports.
        let data = vec![
            vec![0.0; 6],
            vec![0.1, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![3.0; 6],
        ];
        let clusters = sort_clusters(cluster(&data, 0.5, &Metric::Euclidean));
        assert_eq!(clusters, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let data = vec![vec![0.0], vec![2.0]];
        assert_eq!(cluster(&data, 2.0, &Metric::Euclidean).len(), 2);
        assert_eq!(cluster(&data, 2.0 + 1e-9, &Metric::Euclidean).len(), 1);
    }

    #[test]
    fn test_periodic_wraparound() {
        let metric = Metric::Periodic {
            box_size: vec![10.0],
        };
        let data = vec![vec![0.01], vec![9.99], vec![5.0]];
        let clusters = sort_clusters(cluster(&data, 0.1, &metric));
        assert_eq!(clusters, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_cluster_indices_are_sorted() {
        let data = vec![vec![0.0], vec![10.0], vec![0.1], vec![0.2]];
        let clusters = cluster(&data, 0.15, &Metric::Euclidean);
        for c in &clusters {
            assert!(c.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
