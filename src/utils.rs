pub mod compare_ignore_case;
pub mod count_word_frequencies;
pub mod font_class;
pub mod read_lines;
pub mod sort_results;
pub mod write_tag_cloud;

pub use compare_ignore_case::compare_ignore_case;
pub use count_word_frequencies::{count_word_frequencies, count_word_frequencies_in_text};
pub use font_class::{css_class, font_class};
pub use read_lines::{read_lines, LineSource};
pub use sort_results::sort_results;
pub use write_tag_cloud::write_tag_cloud;
