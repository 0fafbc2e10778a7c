//! Exact nearest-neighbour search under squared Euclidean distance.

use crate::error::{ApiError, Result};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// A search hit: row position in the indexed matrix and its squared
/// Euclidean distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub position: usize,
    pub distance: f32,
}

/// Brute-force index comparing each query against every stored vector.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    vectors: Array2<f32>,
}

impl FlatIndex {
    pub fn build(vectors: ArrayView2<f32>) -> Self {
        Self {
            vectors: vectors.to_owned(),
        }
    }

    pub fn len(&self) -> usize {
        self.vectors.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dimension(&self) -> usize {
        self.vectors.ncols()
    }

    /// Return the `min(k, len)` closest vectors, nearest first.
    ///
    /// Equal distances keep insertion order.
    pub fn search(&self, query: ArrayView1<f32>, k: usize) -> Result<Vec<Neighbor>> {
        if query.len() != self.dimension() {
            return Err(ApiError::DimensionMismatch {
                expected: self.dimension(),
                got: query.len(),
            });
        }

        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .rows()
            .into_iter()
            .enumerate()
            .map(|(position, row)| Neighbor {
                position,
                distance: squared_euclidean(row, query),
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.position.cmp(&b.position))
        });
        neighbors.truncate(k.min(self.len()));

        Ok(neighbors)
    }
}

#[inline]
fn squared_euclidean(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
