pub mod normalize;
pub mod verdict;

pub use normalize::{Normalizer, normalize};
pub use verdict::{LabelMap, LabelMapError, Verdict};
