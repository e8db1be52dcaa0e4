//! Binary linear scoring model, loaded from a persisted `model.json`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ModelError;

/// Fitted binary linear classifier over tf-idf features.
///
/// Follows the usual binary linear-model convention: a non-negative decision
/// value selects `classes[1]`, a negative one selects `classes[0]`.
#[derive(Debug, Deserialize)]
pub struct LinearModel {
    coefficients: Vec<f32>,
    intercept: f32,
    classes: [String; 2],
}

impl LinearModel {
    /// Load and structurally validate a persisted model.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::ArtifactNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let model: Self = serde_json::from_str(&raw)?;
        model.check_shape()?;
        debug!(
            dim = model.dim(),
            classes = ?model.classes,
            path = %path.display(),
            "loaded model"
        );
        Ok(model)
    }

    /// Build directly from parts. Used by tests and embedded artifacts.
    pub fn from_parts(
        coefficients: Vec<f32>,
        intercept: f32,
        classes: [String; 2],
    ) -> Result<Self, ModelError> {
        let model = Self {
            coefficients,
            intercept,
            classes,
        };
        model.check_shape()?;
        Ok(model)
    }

    fn check_shape(&self) -> Result<(), ModelError> {
        if self.coefficients.is_empty() {
            return Err(ModelError::MalformedArtifact(
                "model has no coefficients".to_string(),
            ));
        }
        if self.classes[0] == self.classes[1] {
            return Err(ModelError::MalformedArtifact(format!(
                "model declares duplicate class {:?}",
                self.classes[0]
            )));
        }
        Ok(())
    }

    /// Expected feature dimensionality.
    pub fn dim(&self) -> usize {
        self.coefficients.len()
    }

    /// Raw class labels this model emits.
    pub fn classes(&self) -> &[String; 2] {
        &self.classes
    }

    /// Score a feature vector, returning the raw class label.
    pub fn predict(&self, features: &[f32]) -> Result<&str, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::MalformedOutput(format!(
                "feature vector has {} dimensions, model expects {}",
                features.len(),
                self.coefficients.len()
            )));
        }

        let decision: f32 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(c, f)| c * f)
            .sum::<f32>()
            + self.intercept;

        if decision >= 0.0 {
            Ok(&self.classes[1])
        } else {
            Ok(&self.classes[0])
        }
    }
}
