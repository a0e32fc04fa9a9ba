//! Spatial index adapter.
//!
//! Wraps an [`rstar`] R-tree behind the small capability surface the
//! tree-accelerated engine needs: bulk construction, axis-aligned range
//! queries, removal of previously returned entries, and popping an arbitrary
//! seed point. The engine re-filters query results by exact metric distance,
//! so `range_query` only has to return a superset (everything whose envelope
//! intersects the box).

use rstar::{RTree, RTreeObject, AABB};

/// An input point paired with its stable index into the original cloud.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct IndexedPoint<const D: usize> {
    pub(crate) pos: [f64; D],
    pub(crate) idx: usize,
}

impl<const D: usize> RTreeObject for IndexedPoint<D> {
    type Envelope = AABB<[f64; D]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.pos)
    }
}

/// Mutable R-tree over one run's point cloud.
///
/// The clustering engine owns this exclusively for the duration of a call and
/// drains it to empty; every point is removed exactly once.
pub(crate) struct PointIndex<const D: usize> {
    tree: RTree<IndexedPoint<D>>,
}

impl<const D: usize> PointIndex<D> {
    /// Build the index over all points in one bulk-load pass.
    pub(crate) fn bulk_build(points: Vec<IndexedPoint<D>>) -> Self {
        Self {
            tree: RTree::bulk_load(points),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Remove and return an arbitrary remaining point, if any.
    pub(crate) fn pop_arbitrary(&mut self) -> Option<IndexedPoint<D>> {
        let seed = self.tree.iter().next().cloned()?;
        self.tree.remove(&seed)
    }

    /// All points whose position lies inside the axis-aligned box
    /// `[lower, upper]`. No ordering guarantee.
    pub(crate) fn range_query(&self, lower: [f64; D], upper: [f64; D]) -> Vec<IndexedPoint<D>> {
        let envelope = AABB::from_corners(lower, upper);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .cloned()
            .collect()
    }

    /// Remove a batch of entries returned by a preceding query.
    pub(crate) fn remove_batch(&mut self, batch: &[IndexedPoint<D>]) {
        for point in batch {
            self.tree.remove(point);
        }
    }
}
