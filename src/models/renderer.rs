use crate::models::{CsvRenderer, HtmlRenderer, TagCloud};
use crate::Error;
use std::io::Write;
use std::path::Path;

/// Turns a finished tag cloud into markup.
pub trait TagCloudRenderer {
    fn render(&self, cloud: &TagCloud, out: &mut dyn Write) -> Result<(), Error>;

    /// Renders into memory, so that nothing is written anywhere unless rendering succeeds.
    fn render_to_bytes(&self, cloud: &TagCloud) -> Result<Vec<u8>, Error> {
        let mut buffer = Vec::new();
        self.render(cloud, &mut buffer)?;
        Ok(buffer)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Csv,
}

impl OutputFormat {
    /// `.csv` files get CSV; everything else gets the HTML page.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension() {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => OutputFormat::Csv,
            _ => OutputFormat::Html,
        }
    }

    pub fn renderer(self) -> Box<dyn TagCloudRenderer> {
        match self {
            OutputFormat::Html => Box::new(HtmlRenderer),
            OutputFormat::Csv => Box::new(CsvRenderer),
        }
    }
}
