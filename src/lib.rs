mod config;
pub use config::TagCloudConfig;
mod constants;
pub use constants::{
    DEFAULT_SEPARATORS, DEFAULT_TAG_CLOUD_CONFIG, MAX_FONT_CLASS, MIN_FONT_CLASS,
};
pub mod models;
pub use models::{
    CsvRenderer, Error, HtmlRenderer, OutputFormat, RankedEntry, RankedList, SeparatorSet,
    TagCloud, TagCloudGenerator, TagCloudItem, TagCloudRenderer, TokenKind, Tokenizer,
};
pub mod types;
mod utils;
pub use types::{FontClass, TokenRef, Word, WordFrequency, WordFrequencyMap};
pub use utils::{
    compare_ignore_case, count_word_frequencies, count_word_frequencies_in_text, css_class,
    font_class, read_lines, sort_results, write_tag_cloud, LineSource,
};

use log::info;
use std::path::Path;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Builds a tag cloud of the `n` most frequent words of `text`, using the default separators.
pub fn generate_tag_cloud(text: &str, source_name: &str, n: usize) -> Result<TagCloud, Error> {
    let tag_cloud =
        generate_tag_cloud_with_custom_config(&DEFAULT_TAG_CLOUD_CONFIG, text, source_name, n)?;

    Ok(tag_cloud)
}

pub fn generate_tag_cloud_with_custom_config(
    config: &TagCloudConfig,
    text: &str,
    source_name: &str,
    n: usize,
) -> Result<TagCloud, Error> {
    let generator = TagCloudGenerator::new(config);

    generator.generate_from_text(text, source_name, n)
}

/// Reads `input_path`, builds a cloud of `n` words and writes it to `output_path`.
///
/// The output file is only created once the whole cloud has been computed and rendered.
pub fn generate_tag_cloud_file<P, Q>(
    config: &TagCloudConfig,
    input_path: P,
    output_path: Q,
    n: usize,
) -> Result<TagCloud, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input_path = input_path.as_ref();

    if n == 0 {
        return Err(Error::InvalidArgument(
            "the tag cloud must contain at least 1 word".to_string(),
        ));
    }

    let lines = read_lines(input_path)?;
    let source_name = input_path.to_string_lossy();

    let tag_cloud = TagCloudGenerator::new(config).generate(lines, &source_name, n)?;
    write_tag_cloud(&tag_cloud, output_path)?;

    info!("Generated a tag cloud of {} words", tag_cloud.len());

    Ok(tag_cloud)
}
