//! Domain verdict and the raw-label mapping table.
//!
//! Binary ecosystems disagree on how a credibility model names its classes:
//! some artifacts emit string labels (`"REAL"`/`"FAKE"`), others numeric
//! class tokens serialised as `"1"`/`"0"`. The mapping from raw label to
//! [`Verdict`] is therefore a single declared table, validated once against
//! the artifact's class set at load time rather than inferred per call.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary classification result. Produced per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Real,
    Fake,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "REAL",
            Self::Fake => "FAKE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelMapError {
    #[error("label map declares the same raw value {0:?} for both verdicts")]
    DuplicateRawValue(String),

    #[error("artifact classes {found:?} do not match declared label map {expected:?}")]
    ClassSetMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// Declared mapping from an artifact's raw labels to domain verdicts.
///
/// The default convention is upper-case string labels
/// ([`LabelMap::real_fake_strings`]); numeric artifacts use
/// [`LabelMap::zero_one`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMap {
    real: String,
    fake: String,
}

impl LabelMap {
    /// Declare a mapping with explicit raw values for each verdict.
    pub fn new(real: impl Into<String>, fake: impl Into<String>) -> Result<Self, LabelMapError> {
        let real = real.into();
        let fake = fake.into();
        if real == fake {
            return Err(LabelMapError::DuplicateRawValue(real));
        }
        Ok(Self { real, fake })
    }

    /// String-labelled artifacts: `"REAL"` means real, `"FAKE"` means fake.
    pub fn real_fake_strings() -> Self {
        Self {
            real: "REAL".to_string(),
            fake: "FAKE".to_string(),
        }
    }

    /// Numeric artifacts: class `"1"` means real, class `"0"` means fake.
    pub fn zero_one() -> Self {
        Self {
            real: "1".to_string(),
            fake: "0".to_string(),
        }
    }

    /// Raw value the artifact emits for a real article.
    pub fn real_label(&self) -> &str {
        &self.real
    }

    /// Raw value the artifact emits for a fake article.
    pub fn fake_label(&self) -> &str {
        &self.fake
    }

    /// Check that `classes` is exactly the set of raw values this map covers.
    ///
    /// Run once when the artifact is loaded, not per classification.
    pub fn validate(&self, classes: &[String]) -> Result<(), LabelMapError> {
        let covered = classes.len() == 2
            && classes.iter().any(|c| c == &self.real)
            && classes.iter().any(|c| c == &self.fake);
        if covered {
            Ok(())
        } else {
            Err(LabelMapError::ClassSetMismatch {
                expected: vec![self.real.clone(), self.fake.clone()],
                found: classes.to_vec(),
            })
        }
    }

    /// Map a raw label to a verdict. `None` means the label is outside the
    /// declared table; the caller treats that as a failure, never a guess.
    pub fn verdict_for(&self, raw: &str) -> Option<Verdict> {
        if raw == self.real {
            Some(Verdict::Real)
        } else if raw == self.fake {
            Some(Verdict::Fake)
        } else {
            None
        }
    }
}

impl Default for LabelMap {
    fn default() -> Self {
        Self::real_fake_strings()
    }
}
