//! Linear price regression over one-hot encoded categories

use data_validator::{CarRecord, Field};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::InferenceError;

/// One-hot encoding of a categorical column folded into its regression weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalEncoder {
    /// Column being encoded
    pub field: Field,
    /// Vocabulary seen during training
    pub categories: Vec<String>,
    /// Coefficient for each category, same order as `categories`
    pub weights: Vec<f64>,
}

impl CategoricalEncoder {
    fn weight_for(&self, value: &str) -> Option<f64> {
        self.categories
            .iter()
            .position(|c| c == value)
            .and_then(|i| self.weights.get(i).copied())
    }
}

/// Linear coefficient on an integer column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericTerm {
    pub field: Field,
    pub weight: f64,
}

/// Pre-trained price model: intercept + numeric terms + encoded categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePipeline {
    pub intercept: f64,
    pub numeric: Vec<NumericTerm>,
    pub categorical: Vec<CategoricalEncoder>,
}

impl PricePipeline {
    /// Create a pipeline with only an intercept
    pub fn new(intercept: f64) -> Self {
        Self {
            intercept,
            numeric: Vec::new(),
            categorical: Vec::new(),
        }
    }

    /// Add a numeric coefficient
    pub fn with_numeric(mut self, field: Field, weight: f64) -> Self {
        self.numeric.push(NumericTerm { field, weight });
        self
    }

    /// Add an encoded categorical column
    pub fn with_categories(mut self, field: Field, entries: &[(&str, f64)]) -> Self {
        self.categorical.push(CategoricalEncoder {
            field,
            categories: entries.iter().map(|(c, _)| c.to_string()).collect(),
            weights: entries.iter().map(|(_, w)| *w).collect(),
        });
        self
    }

    /// Check structural consistency of the coefficients
    pub fn validate(&self) -> Result<(), InferenceError> {
        let inconsistent =
            |msg: String| -> Result<(), InferenceError> { Err(InferenceError::InconsistentModel(msg)) };

        if !self.intercept.is_finite() {
            return inconsistent("intercept is not finite".into());
        }

        let mut seen = HashSet::new();
        for term in &self.numeric {
            if !term.field.is_numeric() {
                return inconsistent(format!("{} is not a numeric column", term.field));
            }
            if !seen.insert(term.field) {
                return inconsistent(format!("{} appears more than once", term.field));
            }
            if !term.weight.is_finite() {
                return inconsistent(format!("weight for {} is not finite", term.field));
            }
        }

        for encoder in &self.categorical {
            if encoder.field.is_numeric() {
                return inconsistent(format!("{} is not a categorical column", encoder.field));
            }
            if !seen.insert(encoder.field) {
                return inconsistent(format!("{} appears more than once", encoder.field));
            }
            if encoder.categories.len() != encoder.weights.len() {
                return inconsistent(format!(
                    "{} has {} categories but {} weights",
                    encoder.field,
                    encoder.categories.len(),
                    encoder.weights.len()
                ));
            }
            let unique: HashSet<_> = encoder.categories.iter().collect();
            if unique.len() != encoder.categories.len() {
                return inconsistent(format!("{} has duplicate categories", encoder.field));
            }
            if encoder.weights.iter().any(|w| !w.is_finite()) {
                return inconsistent(format!("{} has a non-finite weight", encoder.field));
            }
        }

        Ok(())
    }

    /// Predict the price for one record
    pub fn predict_record(&self, record: &CarRecord) -> Result<f64, InferenceError> {
        let mut price = self.intercept;

        for term in &self.numeric {
            let value = record.numeric(term.field).ok_or_else(|| {
                InferenceError::InconsistentModel(format!("{} is not a numeric column", term.field))
            })?;
            price += term.weight * value as f64;
        }

        for encoder in &self.categorical {
            let value = record.categorical(encoder.field).ok_or_else(|| {
                InferenceError::InconsistentModel(format!(
                    "{} is not a categorical column",
                    encoder.field
                ))
            })?;
            price += encoder
                .weight_for(value)
                .ok_or_else(|| InferenceError::UnknownCategory {
                    field: encoder.field,
                    value: value.to_string(),
                })?;
        }

        if price.is_finite() {
            Ok(price)
        } else {
            Err(InferenceError::NonFinite)
        }
    }
}
