//! Scoring artifact layer: the persisted vectorizer/model pair and the
//! classification adapter that maps its raw output to a domain verdict.

mod classifier;
mod error;
mod model;
mod vectorizer;

pub use classifier::{Classifier, ScoringArtifact};
pub use error::ModelError;
pub use model::LinearModel;
pub use vectorizer::TfidfVectorizer;
