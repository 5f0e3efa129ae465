use crate::models::{TagCloud, TagCloudRenderer};
use crate::Error;
use std::io::Write;

/// Renders the tag cloud as `word,count,font_class` records, in cloud order.
#[derive(Debug, Copy, Clone, Default)]
pub struct CsvRenderer;

impl TagCloudRenderer for CsvRenderer {
    fn render(&self, cloud: &TagCloud, out: &mut dyn Write) -> Result<(), Error> {
        let mut writer = csv::Writer::from_writer(out);

        writer.write_record(["word", "count", "font_class"])?;
        for item in &cloud.items {
            let count = item.count.to_string();
            let font_class = item.font_class.to_string();
            writer.write_record([item.word.as_str(), count.as_str(), font_class.as_str()])?;
        }

        writer.flush()?;

        Ok(())
    }
}
