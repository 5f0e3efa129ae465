/// Settings which control how a text document is turned into a tag cloud.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TagCloudConfig {
    /// Every character which is not allowed to be part of a word.
    pub separators: &'static str,
}
