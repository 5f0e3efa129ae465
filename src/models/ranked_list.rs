use crate::types::{Word, WordFrequency, WordFrequencyMap};
use crate::utils::{compare_ignore_case, sort_results};
use crate::Error;
use log::debug;

/// A word paired with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: Word,
    pub count: WordFrequency,
}

/// The `n` most frequent words of a document, ordered alphabetically (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedList {
    entries: Vec<RankedEntry>,
    max_count: WordFrequency,
}

impl RankedList {
    /// Selects the `n` highest-count words and re-orders them alphabetically.
    ///
    /// Words are first ranked by count (descending), with equal counts ordered by word
    /// ascending (case-sensitive), and the first `n` are kept. Those are then stably sorted
    /// by word ignoring case, so words which only differ by case keep their rank order.
    ///
    /// The frequency map is consumed.
    ///
    /// # Errors
    /// * `InvalidArgument` if `n` is zero or exceeds the number of distinct words.
    /// * `EmptyInput` if the map holds no words at all.
    pub fn select_top_n(frequencies: WordFrequencyMap, n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "the tag cloud must contain at least 1 word".to_string(),
            ));
        }

        if frequencies.is_empty() {
            return Err(Error::EmptyInput(format!(
                "no words were found, but {} were requested",
                n
            )));
        }

        let total_words = frequencies.len();
        if n > total_words {
            return Err(Error::InvalidArgument(format!(
                "{} words were requested, but only {} distinct words were found",
                n, total_words
            )));
        }

        let by_count = sort_results(frequencies);

        // The first word by count anchors the font scale
        let max_count = by_count
            .first()
            .map(|(_, count)| *count)
            .ok_or_else(|| Error::EmptyInput("no words were found".to_string()))?;

        let mut entries: Vec<RankedEntry> = by_count
            .into_iter()
            .take(n)
            .map(|(word, count)| RankedEntry { word, count })
            .collect();

        // `sort_by` is stable
        entries.sort_by(|a, b| compare_ignore_case(&a.word, &b.word));

        debug!(
            "Selected {} of {} words, max count {}",
            entries.len(),
            total_words,
            max_count
        );

        Ok(RankedList { entries, max_count })
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.entries
    }

    /// The highest count of the whole document, which is also the highest count in the list.
    pub fn max_count(&self) -> WordFrequency {
        self.max_count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }
}
