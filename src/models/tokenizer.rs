use crate::config::TagCloudConfig;
use crate::models::SeparatorSet;
use crate::types::TokenRef;

/// Structural kind of a token, derived from its first character.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// Splits text into maximal runs of word characters and maximal runs of separator characters.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    separators: SeparatorSet,
}

impl Tokenizer {
    pub fn new(separators: SeparatorSet) -> Self {
        Self { separators }
    }

    /// Builds the separator set from `config.separators`.
    pub fn from_config(config: &TagCloudConfig) -> Self {
        Self::new(SeparatorSet::new(config.separators))
    }

    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    /// Returns the maximal token of `text` which starts at byte offset `position`.
    ///
    /// Every character of the returned token has the same separator classification as
    /// `text[position]`, and the token stops right before the first character of the opposite
    /// classification (or at the end of the text). The token is never empty.
    ///
    /// Returns `None` when `position` is out of bounds or does not fall on a char boundary.
    ///
    /// Note: This explicitly does not modify the case of the text.
    pub fn next_token<'a>(&self, text: &'a str, position: usize) -> Option<&'a TokenRef> {
        let rest = text.get(position..)?;
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let is_separator = self.separators.contains(first);

        let end = chars
            .find(|&(_, c)| self.separators.contains(c) != is_separator)
            .map_or(rest.len(), |(offset, _)| offset);

        Some(&rest[..end])
    }

    /// Classifies a token by its first character. Empty tokens have no kind.
    pub fn classify(&self, token: &TokenRef) -> Option<TokenKind> {
        token.chars().next().map(|c| {
            if self.separators.contains(c) {
                TokenKind::Separator
            } else {
                TokenKind::Word
            }
        })
    }

    pub fn is_word(&self, token: &TokenRef) -> bool {
        self.classify(token) == Some(TokenKind::Word)
    }

    /// Iterates over every token of `line`, starting from offset 0.
    ///
    /// Concatenating the yielded tokens reproduces `line` exactly.
    pub fn tokens<'t, 'a>(&'t self, line: &'a str) -> Tokens<'t, 'a> {
        Tokens {
            tokenizer: self,
            line,
            position: 0,
        }
    }

    /// Collects only the word tokens of `line`, preserving order and case.
    pub fn words<'a>(&self, line: &'a str) -> Vec<&'a TokenRef> {
        self.tokens(line)
            .filter(|token| self.is_word(token))
            .collect()
    }
}

/// Iterator returned by [`Tokenizer::tokens`].
pub struct Tokens<'t, 'a> {
    tokenizer: &'t Tokenizer,
    line: &'a str,
    position: usize,
}

impl<'t, 'a> Iterator for Tokens<'t, 'a> {
    type Item = &'a TokenRef;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokenizer.next_token(self.line, self.position)?;
        self.position += token.len();
        Some(token)
    }
}
