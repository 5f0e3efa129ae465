use crate::constants::DEFAULT_SEPARATORS;
use std::collections::HashSet;

/// The immutable set of characters which can never be part of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Builds a set containing exactly the distinct characters of `chars`.
    ///
    /// Duplicates are harmless. An empty string is accepted, although every line then scans
    /// as a single word.
    pub fn new(chars: &str) -> Self {
        SeparatorSet {
            chars: chars.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct separator characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        SeparatorSet::new(DEFAULT_SEPARATORS)
    }
}
