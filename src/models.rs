pub mod error;
pub use error::Error;

pub mod separator_set;
pub use separator_set::SeparatorSet;

pub mod tokenizer;
pub use tokenizer::{TokenKind, Tokenizer, Tokens};

pub mod ranked_list;
pub use ranked_list::{RankedEntry, RankedList};

pub mod tag_cloud;
pub use tag_cloud::{TagCloud, TagCloudItem};

pub mod tag_cloud_generator;
pub use tag_cloud_generator::TagCloudGenerator;

pub mod renderer;
pub use renderer::{OutputFormat, TagCloudRenderer};

pub mod html_renderer;
pub use html_renderer::HtmlRenderer;

pub mod csv_renderer;
pub use csv_renderer::CsvRenderer;
