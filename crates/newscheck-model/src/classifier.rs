//! Classification adapter over the persisted scoring artifact.
//!
//! The adapter is an explicit two-variant capability: callers always know
//! whether they hold a real artifact ([`Classifier::Ready`]) or nothing
//! ([`Classifier::Unavailable`]). An unavailable classifier refuses to
//! classify; it never substitutes a keyword rule or a fixed verdict.

use std::path::Path;

use newscheck_core::{LabelMap, Verdict, normalize};
use tracing::{info, warn};

use crate::error::ModelError;
use crate::model::LinearModel;
use crate::vectorizer::TfidfVectorizer;

const VECTORIZER_FILE: &str = "vectorizer.json";
const MODEL_FILE: &str = "model.json";

/// The loaded vectorizer/model pair plus its declared label map.
///
/// Constructed once at process start; immutable and read-only thereafter,
/// safe to share across threads.
#[derive(Debug)]
pub struct ScoringArtifact {
    vectorizer: TfidfVectorizer,
    model: LinearModel,
    label_map: LabelMap,
}

impl ScoringArtifact {
    /// Load the artifact pair from a directory containing `vectorizer.json`
    /// and `model.json`.
    ///
    /// Cross-checks are done here, not per call: vectorizer dimensionality
    /// must match the model's coefficients, and `label_map` must cover the
    /// model's declared class set exactly.
    pub fn load(dir: &Path, label_map: LabelMap) -> Result<Self, ModelError> {
        let vectorizer = TfidfVectorizer::load(&dir.join(VECTORIZER_FILE))?;
        let model = LinearModel::load(&dir.join(MODEL_FILE))?;
        let artifact = Self::from_parts(vectorizer, model, label_map)?;
        info!(
            dim = artifact.vectorizer.dim(),
            real = artifact.label_map.real_label(),
            fake = artifact.label_map.fake_label(),
            dir = %dir.display(),
            "loaded scoring artifact"
        );
        Ok(artifact)
    }

    /// Assemble an artifact from already-constructed parts.
    pub fn from_parts(
        vectorizer: TfidfVectorizer,
        model: LinearModel,
        label_map: LabelMap,
    ) -> Result<Self, ModelError> {
        if vectorizer.dim() != model.dim() {
            return Err(ModelError::MalformedArtifact(format!(
                "vectorizer produces {} features but model expects {}",
                vectorizer.dim(),
                model.dim()
            )));
        }
        label_map.validate(model.classes())?;
        Ok(Self {
            vectorizer,
            model,
            label_map,
        })
    }

    /// Normalise, vectorize, score, and map the raw label to a verdict.
    pub fn classify(&self, text: &str) -> Result<Verdict, ModelError> {
        let clean = normalize(text);
        let features = self.vectorizer.transform(&clean);
        let raw = self.model.predict(&features)?;
        self.label_map.verdict_for(raw).ok_or_else(|| {
            ModelError::MalformedOutput(format!("model emitted undeclared label {raw:?}"))
        })
    }
}

/// Explicit two-variant classification capability.
#[derive(Debug)]
pub enum Classifier {
    /// A real artifact was loaded; classification runs the full pipeline.
    Ready(ScoringArtifact),
    /// No artifact could be loaded. A valid permanent state: classify
    /// requests fail with [`ModelError::ArtifactUnavailable`], no retry.
    Unavailable,
}

impl Classifier {
    /// Load the artifact from `dir`, treating missing files as the
    /// [`Classifier::Unavailable`] state rather than an error.
    ///
    /// Structurally malformed files are still errors: a present-but-broken
    /// artifact is a deployment fault, not a valid absent state.
    pub fn load(dir: &Path, label_map: LabelMap) -> Result<Self, ModelError> {
        match ScoringArtifact::load(dir, label_map) {
            Ok(artifact) => Ok(Self::Ready(artifact)),
            Err(ModelError::ArtifactNotFound(path)) => {
                warn!(path = %path.display(), "scoring artifact missing, classifier unavailable");
                Ok(Self::Unavailable)
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Classify raw article text.
    ///
    /// The caller is expected to have applied its minimum-length gate
    /// already; this layer does not second-guess input size.
    pub fn classify(&self, text: &str) -> Result<Verdict, ModelError> {
        match self {
            Self::Ready(artifact) => artifact.classify(text),
            Self::Unavailable => Err(ModelError::ArtifactUnavailable(
                "no scoring artifact loaded".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    /// A tiny sentiment-shaped artifact: "research" and "analysts" pull the
    /// decision positive (REAL), "shocking" and "secret" pull it negative.
    fn test_artifact(label_map: LabelMap, classes: [String; 2]) -> ScoringArtifact {
        let mut vocabulary = HashMap::new();
        vocabulary.insert("research".to_string(), 0);
        vocabulary.insert("analysts".to_string(), 1);
        vocabulary.insert("shocking".to_string(), 2);
        vocabulary.insert("secret".to_string(), 3);
        let vectorizer =
            TfidfVectorizer::from_parts(vocabulary, vec![1.0, 1.0, 1.0, 1.0]).unwrap();
        let model =
            LinearModel::from_parts(vec![1.0, 1.0, -1.0, -1.0], 0.0, classes).unwrap();
        ScoringArtifact::from_parts(vectorizer, model, label_map).unwrap()
    }

    fn string_artifact() -> ScoringArtifact {
        test_artifact(
            LabelMap::real_fake_strings(),
            ["FAKE".to_string(), "REAL".to_string()],
        )
    }

    #[test]
    fn classifies_real_text() {
        let clf = Classifier::Ready(string_artifact());
        let verdict = clf
            .classify("Economic research from analysts projects steady growth.")
            .unwrap();
        assert_eq!(verdict, Verdict::Real);
    }

    #[test]
    fn classifies_fake_text() {
        let clf = Classifier::Ready(string_artifact());
        let verdict = clf
            .classify("SHOCKING secret they do not want you to know!")
            .unwrap();
        assert_eq!(verdict, Verdict::Fake);
    }

    #[test]
    fn input_is_normalised_before_scoring() {
        let clf = Classifier::Ready(string_artifact());
        // Mixed case, HTML, and a URL around the signal words.
        let verdict = clf
            .classify("<p>RESEARCH by ANALYSTS</p> via http://example.com")
            .unwrap();
        assert_eq!(verdict, Verdict::Real);
    }

    #[test]
    fn numeric_convention_maps_to_same_verdicts() {
        let clf = Classifier::Ready(test_artifact(
            LabelMap::zero_one(),
            ["0".to_string(), "1".to_string()],
        ));
        assert_eq!(
            clf.classify("research analysts").unwrap(),
            Verdict::Real
        );
        assert_eq!(
            clf.classify("shocking secret").unwrap(),
            Verdict::Fake
        );
    }

    #[test]
    fn unavailable_never_guesses() {
        let clf = Classifier::Unavailable;
        let err = clf.classify("any text at all").unwrap_err();
        assert!(matches!(err, ModelError::ArtifactUnavailable(_)));
        assert!(!clf.is_ready());
    }

    #[test]
    fn dimension_mismatch_rejected_at_assembly() {
        let mut vocabulary = HashMap::new();
        vocabulary.insert("a".to_string(), 0);
        let vectorizer = TfidfVectorizer::from_parts(vocabulary, vec![1.0]).unwrap();
        let model = LinearModel::from_parts(
            vec![1.0, 2.0],
            0.0,
            ["FAKE".to_string(), "REAL".to_string()],
        )
        .unwrap();

        let err = ScoringArtifact::from_parts(vectorizer, model, LabelMap::real_fake_strings())
            .unwrap_err();
        assert!(matches!(err, ModelError::MalformedArtifact(_)));
    }

    #[test]
    fn label_map_validated_at_assembly() {
        let mut vocabulary = HashMap::new();
        vocabulary.insert("a".to_string(), 0);
        let vectorizer = TfidfVectorizer::from_parts(vocabulary, vec![1.0]).unwrap();
        // Model speaks numeric classes; the string map cannot cover them.
        let model =
            LinearModel::from_parts(vec![1.0], 0.0, ["0".to_string(), "1".to_string()]).unwrap();

        let err = ScoringArtifact::from_parts(vectorizer, model, LabelMap::real_fake_strings())
            .unwrap_err();
        assert!(matches!(err, ModelError::LabelMap(_)));
    }

    // ── Load-from-directory tests ──

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("newscheck-tests")
            .join(format!("{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_artifact_files(dir: &PathBuf) {
        fs::write(
            dir.join(VECTORIZER_FILE),
            r#"{"vocabulary": {"research": 0, "shocking": 1}, "idf": [1.0, 1.0]}"#,
        )
        .unwrap();
        fs::write(
            dir.join(MODEL_FILE),
            r#"{"coefficients": [1.0, -1.0], "intercept": 0.0, "classes": ["FAKE", "REAL"]}"#,
        )
        .unwrap();
    }

    #[test]
    fn load_round_trip() {
        let dir = scratch_dir("load-round-trip");
        write_artifact_files(&dir);

        let clf = Classifier::load(&dir, LabelMap::real_fake_strings()).unwrap();
        assert!(clf.is_ready());
        assert_eq!(clf.classify("research findings").unwrap(), Verdict::Real);
        assert_eq!(clf.classify("shocking claims").unwrap(), Verdict::Fake);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_missing_dir_is_unavailable() {
        let dir = scratch_dir("load-missing").join("does-not-exist");
        let clf = Classifier::load(&dir, LabelMap::real_fake_strings()).unwrap();
        assert!(!clf.is_ready());
    }

    #[test]
    fn load_corrupt_file_is_an_error() {
        let dir = scratch_dir("load-corrupt");
        write_artifact_files(&dir);
        fs::write(dir.join(MODEL_FILE), "not json at all").unwrap();

        let err = Classifier::load(&dir, LabelMap::real_fake_strings()).unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));

        fs::remove_dir_all(&dir).ok();
    }
}
