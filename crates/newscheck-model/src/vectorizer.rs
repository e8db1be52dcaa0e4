//! TF-IDF feature vectorizer, loaded from a persisted `vectorizer.json`.
//!
//! Mirrors the fitted vectorizer the model was trained against: a term
//! vocabulary mapping each token to a feature index, plus per-term inverse
//! document frequencies. Tokens outside the vocabulary contribute nothing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ModelError;

/// Fitted TF-IDF vectorizer: vocabulary plus idf weights.
///
/// Expects input text that has already been through the normaliser, so
/// tokenisation is a plain whitespace split.
#[derive(Debug, Deserialize)]
pub struct TfidfVectorizer {
    /// term → feature index
    vocabulary: HashMap<String, usize>,
    /// feature index → inverse document frequency
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Load and structurally validate a persisted vectorizer.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::ArtifactNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let vectorizer: Self = serde_json::from_str(&raw)?;
        vectorizer.check_shape()?;
        debug!(terms = vectorizer.dim(), path = %path.display(), "loaded vectorizer");
        Ok(vectorizer)
    }

    /// Build directly from parts. Used by tests and embedded artifacts.
    pub fn from_parts(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f32>,
    ) -> Result<Self, ModelError> {
        let vectorizer = Self { vocabulary, idf };
        vectorizer.check_shape()?;
        Ok(vectorizer)
    }

    fn check_shape(&self) -> Result<(), ModelError> {
        if self.vocabulary.len() != self.idf.len() {
            return Err(ModelError::MalformedArtifact(format!(
                "vocabulary has {} terms but idf has {} weights",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        if let Some((term, &index)) = self
            .vocabulary
            .iter()
            .find(|&(_, &index)| index >= self.idf.len())
        {
            return Err(ModelError::MalformedArtifact(format!(
                "term {term:?} maps to index {index}, out of range for {} features",
                self.idf.len()
            )));
        }
        Ok(())
    }

    /// Feature dimensionality.
    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Transform cleaned text into an L2-normalised tf-idf feature vector.
    pub fn transform(&self, clean_text: &str) -> Vec<f32> {
        let mut features = vec![0.0f32; self.dim()];

        // Term frequency over the known vocabulary.
        for token in clean_text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                features[index] += 1.0;
            }
        }

        // Weight by idf, then normalise to unit length.
        for (value, &idf) in features.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        normalize(&mut features);
        features
    }
}

/// L2-normalize a vector in place.
fn normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
