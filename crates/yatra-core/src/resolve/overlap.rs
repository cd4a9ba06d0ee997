use yatra_config::pipeline::PipelineConfig;
use yatra_dictionary::{PairKey, PairTable, PhraseDictionary, fold_case};

use super::{Miss, Resolution};

/// A dictionary phrase found inside the input. Lengths and positions are
/// counted in chars of the case-folded input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate<'a> {
    pub phrase: &'a str,
    pub translation: &'a str,
    pub length: usize,
    /// First occurrence in the folded input
    pub position: usize,
}

/// Every phrase of the table contained in `folded`, in table order
pub fn find_candidates<'a>(table: &'a PairTable, folded: &str) -> Vec<MatchCandidate<'a>> {
    table
        .entries()
        .iter()
        .filter_map(|entry| {
            let byte_pos = folded.find(entry.phrase.as_str())?;
            Some(MatchCandidate {
                phrase: &entry.phrase,
                translation: &entry.translation,
                length: entry.phrase.chars().count(),
                position: folded[..byte_pos].chars().count(),
            })
        })
        .collect()
}

/// Match dictionary phrases contained in the input.
///
/// The longest phrase answers alone when it covers more than
/// `single_phrase_threshold` of the input. Otherwise all candidates, in
/// reading order, are joined when their summed length covers more than
/// `composite_threshold`. Overlapping candidates are all counted.
pub fn try_phrase_overlap(
    dictionary: &PhraseDictionary,
    text: &str,
    key: &PairKey,
    config: &PipelineConfig,
) -> Resolution {
    let table = dictionary.table(key).ok_or(Miss)?;
    let folded = fold_case(text);
    let input_length = folded.chars().count();
    if input_length == 0 {
        return Err(Miss);
    }

    let mut candidates = find_candidates(table, &folded);
    if candidates.is_empty() {
        return Err(Miss);
    }

    // Stable sorts: ties keep table order
    candidates.sort_by(|a, b| b.length.cmp(&a.length));
    let best = &candidates[0];

    if coverage(best.length, input_length) > config.single_phrase_threshold {
        tracing::debug!("Phrase '{}' covers most of the input", best.phrase);
        return Ok(best.translation.to_string());
    }

    candidates.sort_by_key(|c| c.position);
    let covered_length: usize = candidates.iter().map(|c| c.length).sum();

    if coverage(covered_length, input_length) > config.composite_threshold {
        tracing::debug!("Combining {} phrase matches", candidates.len());
        let joined = candidates
            .iter()
            .map(|c| c.translation)
            .collect::<Vec<_>>()
            .join(" ");
        return Ok(joined);
    }

    Err(Miss)
}

fn coverage(length: usize, input_length: usize) -> f64 {
    length as f64 / input_length as f64
}
