//! Turns restaurant attributes into fixed-length `f32` feature vectors.
//!
//! Each vector is a one-hot block over the category vocabulary (sorted by
//! label) followed by a single min-max scaled price column. The vocabulary
//! and price bounds live in a [`FeatureSchema`], which is fitted on a
//! restaurant set and can then transform any restaurant against it.

use crate::{
    error::{ApiError, Result},
    models::Restaurant,
};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type FeatureVector = Array1<f32>;

/// Fitted vocabulary and price bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    vocabulary: Vec<String>,
    price_min: f64,
    price_max: f64,
}

/// Vectors aligned row-for-row with the encoded restaurants, plus the
/// schema that produced them.
#[derive(Debug, Clone)]
pub struct Encoding {
    pub vectors: Array2<f32>,
    pub schema: FeatureSchema,
}

impl Encoding {
    pub fn vocabulary(&self) -> &[String] {
        self.schema.vocabulary()
    }
}

impl FeatureSchema {
    /// Derive the vocabulary and price bounds from `restaurants`.
    pub fn fit(restaurants: &[Restaurant]) -> Result<Self> {
        if restaurants.is_empty() {
            return Err(ApiError::EmptyInput(
                "cannot fit features on an empty restaurant set".to_string(),
            ));
        }

        let vocabulary = restaurants
            .iter()
            .map(|r| r.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let (price_min, price_max) = restaurants.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), r| (lo.min(r.average_price), hi.max(r.average_price)),
        );

        Ok(Self {
            vocabulary,
            price_min,
            price_max,
        })
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn price_bounds(&self) -> (f64, f64) {
        (self.price_min, self.price_max)
    }

    /// Category columns plus the price column
    pub fn dimension(&self) -> usize {
        self.vocabulary.len() + 1
    }

    pub fn transform(&self, restaurant: &Restaurant) -> FeatureVector {
        let mut vector = Array1::zeros(self.dimension());
        self.fill(restaurant, vector.view_mut());
        vector
    }

    pub fn transform_all(&self, restaurants: &[Restaurant]) -> Array2<f32> {
        let mut vectors = Array2::zeros((restaurants.len(), self.dimension()));
        for (restaurant, row) in restaurants.iter().zip(vectors.rows_mut()) {
            self.fill(restaurant, row);
        }
        vectors
    }

    fn fill(&self, restaurant: &Restaurant, mut row: ndarray::ArrayViewMut1<f32>) {
        // Unknown categories leave the one-hot block at zero.
        if let Ok(column) = self
            .vocabulary
            .binary_search_by(|label| label.as_str().cmp(restaurant.category.as_str()))
        {
            row[column] = 1.0;
        }
        row[self.vocabulary.len()] = self.scale_price(restaurant.average_price);
    }

    fn scale_price(&self, price: f64) -> f32 {
        let range = self.price_max - self.price_min;
        if range == 0.0 {
            return 0.0;
        }
        ((price - self.price_min) / range) as f32
    }
}

/// Fit a schema on `restaurants` and transform the same set with it.
pub fn encode(restaurants: &[Restaurant]) -> Result<Encoding> {
    let schema = FeatureSchema::fit(restaurants)?;
    let vectors = schema.transform_all(restaurants);
    Ok(Encoding { vectors, schema })
}
