//! R-tree accelerated friends-of-friends engine.
//!
//! One cluster at a time: pop an arbitrary seed from the index, then expand a
//! frontier by range-querying a box of half-width `linking_length` around each
//! frontier point, keeping candidates whose exact metric distance is strictly
//! below the linking length, and removing kept candidates from the index in
//! one batch. Removal is what guarantees termination: every point leaves the
//! index exactly once across the whole run, so the loop performs exactly `n`
//! removals regardless of traversal order.
//!
//! Under the periodic metric the query window is built in the unwrapped local
//! frame; on every axis where it crosses a domain boundary the window is also
//! queried shifted by one box length, so wraparound neighbors near the edges
//! are found. Candidates from the image queries are deduplicated by point
//! index before the exact-distance filter runs.

use std::collections::HashSet;

use super::index::{IndexedPoint, PointIndex};
use super::metric::Metric;

/// Cluster `data` with the indexed engine. Caller guarantees every row has
/// exactly `D` coordinates and `linking_length > 0`.
pub(crate) fn cluster<const D: usize>(
    data: &[Vec<f64>],
    linking_length: f64,
    metric: &Metric,
) -> Vec<Vec<usize>> {
    let points: Vec<IndexedPoint<D>> = data
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut pos = [0.0; D];
            pos.copy_from_slice(row);
            IndexedPoint { pos, idx }
        })
        .collect();
    let mut index = PointIndex::<D>::bulk_build(points);

    let mut clusters = Vec::new();
    while let Some(seed) = index.pop_arbitrary() {
        // members[cursor..] is the frontier: found but not yet expanded.
        let mut members = vec![seed];
        let mut cursor = 0;
        while cursor < members.len() {
            let current = members[cursor].clone();
            cursor += 1;

            let candidates = query_window(&index, &current.pos, linking_length, metric);
            let kept: Vec<IndexedPoint<D>> = candidates
                .into_iter()
                .filter(|cand| metric.distance(&current.pos, &cand.pos) < linking_length)
                .collect();

            // Batch removal before expansion: a removed point can never be
            // returned by a later query, so no point joins two clusters.
            index.remove_batch(&kept);
            members.extend(kept);
        }

        let mut cluster: Vec<usize> = members.into_iter().map(|p| p.idx).collect();
        cluster.sort_unstable();
        clusters.push(cluster);
    }
    clusters
}

/// Collect every still-indexed candidate whose position falls in the query
/// window around `center` (or, under the periodic metric, in one of its
/// boundary-crossing images).
fn query_window<const D: usize>(
    index: &PointIndex<D>,
    center: &[f64; D],
    linking_length: f64,
    metric: &Metric,
) -> Vec<IndexedPoint<D>> {
    let mut lower = *center;
    let mut upper = *center;
    for d in 0..D {
        lower[d] -= linking_length;
        upper[d] += linking_length;
    }

    let box_size = match metric {
        Metric::Euclidean => return index.range_query(lower, upper),
        Metric::Periodic { box_size } => box_size,
    };

    // Per axis: the unshifted window, plus one image for each domain boundary
    // the window crosses.
    let mut axis_shifts: Vec<Vec<f64>> = Vec::with_capacity(D);
    for d in 0..D {
        let mut shifts = vec![0.0];
        if lower[d] < 0.0 {
            shifts.push(box_size[d]);
        }
        if upper[d] > box_size[d] {
            shifts.push(-box_size[d]);
        }
        axis_shifts.push(shifts);
    }

    let mut seen: HashSet<usize> = HashSet::new();
    let mut out = Vec::new();
    let mut combo = vec![0usize; D];
    'combos: loop {
        let mut lo = lower;
        let mut hi = upper;
        for d in 0..D {
            let shift = axis_shifts[d][combo[d]];
            lo[d] += shift;
            hi[d] += shift;
        }
        for cand in index.range_query(lo, hi) {
            if seen.insert(cand.idx) {
                out.push(cand);
            }
        }

        // Mixed-radix increment over the per-axis shift choices.
        let mut d = 0;
        loop {
            if d == D {
                break 'combos;
            }
            combo[d] += 1;
            if combo[d] < axis_shifts[d].len() {
                break;
            }
            combo[d] = 0;
            d += 1;
        }
    }
    out
}
