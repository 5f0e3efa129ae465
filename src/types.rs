use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a word token as an owned `String`. Case is preserved, so `"The"` and `"the"`
/// are distinct words.
pub type Word = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a word within a text document.
pub type WordFrequency = usize;

/// Represents a map of words to their occurrence counts within a text document.
/// The key is the `Word`, and the value is the `WordFrequency`.
pub type WordFrequencyMap = HashMap<Word, WordFrequency>;

/// A discrete visual size bucket, always within `MIN_FONT_CLASS..=MAX_FONT_CLASS`.
pub type FontClass = u32;
