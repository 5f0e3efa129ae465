use crate::config::TagCloudConfig;
use crate::models::{RankedList, TagCloud, Tokenizer};
use crate::types::WordFrequencyMap;
use crate::utils::{count_word_frequencies, count_word_frequencies_in_text};
use crate::Error;

use log::info;
use std::io;

/// Runs the full pipeline: lines → tokens → frequency table → ranked list → tag cloud.
pub struct TagCloudGenerator {
    tokenizer: Tokenizer,
}

impl TagCloudGenerator {
    /// Creates a new `TagCloudGenerator` with the given configuration.
    pub fn new(config: &TagCloudConfig) -> Self {
        TagCloudGenerator {
            tokenizer: Tokenizer::from_config(config),
        }
    }

    /// Builds a tag cloud of `n` words from the lines of a document.
    ///
    /// # Arguments
    /// * `lines` - The document lines, in order, line endings stripped.
    /// * `source_name` - Name of the document, used in titles.
    /// * `n` - Number of words in the cloud.
    ///
    /// # Errors
    /// Returns an `IoError` from the line source, or `InvalidArgument` / `EmptyInput` when
    /// `n` cannot be satisfied.
    pub fn generate<I>(&self, lines: I, source_name: &str, n: usize) -> Result<TagCloud, Error>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        info!("Counting words...");
        let frequencies = count_word_frequencies(lines, &self.tokenizer)?;

        self.generate_from_frequencies(frequencies, source_name, n)
    }

    /// Same as [`TagCloudGenerator::generate`], for a document already held in memory.
    pub fn generate_from_text(
        &self,
        text: &str,
        source_name: &str,
        n: usize,
    ) -> Result<TagCloud, Error> {
        info!("Counting words...");
        let frequencies = count_word_frequencies_in_text(text, &self.tokenizer);

        self.generate_from_frequencies(frequencies, source_name, n)
    }

    fn generate_from_frequencies(
        &self,
        frequencies: WordFrequencyMap,
        source_name: &str,
        n: usize,
    ) -> Result<TagCloud, Error> {
        info!("Selecting top {} of {} words...", n, frequencies.len());
        let ranked_list = RankedList::select_top_n(frequencies, n)?;

        info!("Assigning font classes...");
        Ok(TagCloud::from_ranked_list(ranked_list, source_name))
    }
}
