//! Distance metrics.
//!
//! Two variants: plain Euclidean distance and the periodic minimum-image
//! Euclidean distance over a rectangular domain. Both operate on `f64`
//! coordinates; near-threshold comparisons are sensitive to roundoff, so the
//! whole crate stays in double precision.

/// Distance metric used by both clustering engines.
#[derive(Clone, Debug)]
pub(crate) enum Metric {
    /// Plain Euclidean norm of the coordinate-wise difference.
    Euclidean,
    /// Minimum-image Euclidean distance over a periodic rectangular domain.
    ///
    /// Per axis, the separation is `min(|a - b|, box - |a - b|)`, so the
    /// distance along any axis never exceeds half the box extent. Coordinates
    /// are expected to lie in `[0, box)` on each axis.
    Periodic {
        /// Domain extent per axis; one entry per dimension.
        box_size: Vec<f64>,
    },
}

impl Metric {
    /// Distance between two coordinate vectors of equal length.
    pub(crate) fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        match self {
            Metric::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| {
                    let d = x - y;
                    d * d
                })
                .sum::<f64>()
                .sqrt(),
            Metric::Periodic { box_size } => {
                debug_assert_eq!(a.len(), box_size.len());
                a.iter()
                    .zip(b.iter())
                    .zip(box_size.iter())
                    .map(|((x, y), side)| {
                        let d = (x - y).abs();
                        let d = d.min(side - d);
                        d * d
                    })
                    .sum::<f64>()
                    .sqrt()
            }
        }
    }
}
