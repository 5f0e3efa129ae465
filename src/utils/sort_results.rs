use crate::types::{Word, WordFrequency, WordFrequencyMap};

/// Sorts a mapping of words to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two words have the same frequency, sorts by word in ascending
///   (case-sensitive, byte-wise) order for deterministic ordering.
///
/// The map is consumed; nothing refers back to it afterwards.
///
/// ### Example:
/// ```rust
/// use std::collections::HashMap;
/// use tag_cloud_generator::sort_results;
///
/// let mut results = HashMap::new();
/// results.insert("cat".to_string(), 10);
/// results.insert("The".to_string(), 15);
/// results.insert("ant".to_string(), 10);
///
/// let sorted = sort_results(results);
/// assert_eq!(sorted, vec![
///     ("The".to_string(), 15),
///     ("ant".to_string(), 10),
///     ("cat".to_string(), 10)
/// ]);
/// ```
pub fn sort_results(results: WordFrequencyMap) -> Vec<(Word, WordFrequency)> {
    let mut sorted_results: Vec<(Word, WordFrequency)> = results.into_iter().collect();

    sorted_results.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by word (ascending)
    });

    sorted_results
}
