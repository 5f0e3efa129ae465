use crate::constants::{LOCAL_STYLESHEET_PATH, REMOTE_STYLESHEET_URL};
use crate::models::{TagCloud, TagCloudRenderer};
use crate::utils::css_class;
use crate::Error;
use std::io::Write;

/// Renders the tag cloud as a standalone HTML page styled by `tagcloud.css`.
#[derive(Debug, Copy, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn write_header(&self, cloud: &TagCloud, out: &mut dyn Write) -> Result<(), Error> {
        let heading = format!(
            "Top {} words in {}",
            cloud.requested_size,
            escape_html(&cloud.source_name)
        );

        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<title>{}</title>", heading)?;
        writeln!(
            out,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            REMOTE_STYLESHEET_URL
        )?;
        writeln!(
            out,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            LOCAL_STYLESHEET_PATH
        )?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h2>{}</h2>", heading)?;
        writeln!(out, "<hr>")?;
        writeln!(out, "<div class=\"cdiv\">")?;
        writeln!(out, "<p class=\"cbox\">")?;

        Ok(())
    }

    fn write_footer(&self, out: &mut dyn Write) -> Result<(), Error> {
        writeln!(out, "</p>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;

        Ok(())
    }
}

impl TagCloudRenderer for HtmlRenderer {
    fn render(&self, cloud: &TagCloud, out: &mut dyn Write) -> Result<(), Error> {
        self.write_header(cloud, out)?;

        for item in &cloud.items {
            writeln!(
                out,
                "<span style=\"cursor:default\" class=\"{}\" title=\"count: {}\">{}</span>",
                css_class(item.font_class),
                item.count,
                escape_html(&item.word)
            )?;
        }

        self.write_footer(out)
    }
}

/// Escapes the characters which would otherwise be read as markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
