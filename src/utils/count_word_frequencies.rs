use crate::types::WordFrequencyMap;
use crate::{Error, Tokenizer};
use log::debug;
use std::io;

/// Counts the occurrences of every word across the given lines.
///
/// Each line is scanned independently, so a word never spans a line boundary. Separator
/// tokens are discarded and word case is preserved (`"The"` and `"the"` are counted apart).
///
/// # Arguments
/// * `lines` - The lines of the document, in order, without their trailing newline.
/// * `tokenizer` - The tokenizer holding the separator set.
///
/// # Errors
/// The first I/O error produced by `lines` aborts the count and is returned unchanged.
///
/// # Example
/// ```
/// use tag_cloud_generator::{count_word_frequencies, Tokenizer};
///
/// let lines = vec![Ok("The cat sat.".to_string()), Ok("The dog ran.".to_string())];
/// let frequencies = count_word_frequencies(lines, &Tokenizer::default()).unwrap();
/// assert_eq!(frequencies.get("The"), Some(&2));
/// assert_eq!(frequencies.get("dog"), Some(&1));
/// ```
pub fn count_word_frequencies<I>(lines: I, tokenizer: &Tokenizer) -> Result<WordFrequencyMap, Error>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut frequencies = WordFrequencyMap::new();
    let mut total_lines = 0usize;

    for line in lines {
        let line = line?;
        total_lines += 1;

        for word in tokenizer.words(&line) {
            // Avoid allocating a key for words which were already seen
            match frequencies.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    frequencies.insert(word.to_string(), 1);
                }
            }
        }
    }

    debug!(
        "Scanned {} lines, found {} distinct words",
        total_lines,
        frequencies.len()
    );

    Ok(frequencies)
}

/// Counts the words of an in-memory document, splitting it on line breaks first.
pub fn count_word_frequencies_in_text(text: &str, tokenizer: &Tokenizer) -> WordFrequencyMap {
    let mut frequencies = WordFrequencyMap::new();

    for line in text.lines() {
        for word in tokenizer.words(line) {
            *frequencies.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    frequencies
}
