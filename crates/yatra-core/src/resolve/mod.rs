//! Dictionary-backed resolvers, tried in this order by the pipeline:
//! exact match, phrase overlap, word decomposition.
//!
//! Each returns `Err(Miss)` when it has no answer. A miss is not a failure,
//! the pipeline just moves to the next stage.

pub mod exact;
pub mod overlap;
pub mod words;

pub use exact::try_exact;
pub use overlap::{MatchCandidate, try_phrase_overlap};
pub use words::try_word_by_word;

/// "No answer from this stage"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Miss;

pub type Resolution = Result<String, Miss>;
