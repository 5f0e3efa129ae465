use crate::models::RankedList;
use crate::types::{FontClass, Word, WordFrequency};
use crate::utils::font_class;

/// A single word of the cloud, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCloudItem {
    pub word: Word,
    pub count: WordFrequency,
    pub font_class: FontClass,
}

/// Everything a renderer needs: the alphabetically ordered items plus the values used for
/// titles and scaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCloud {
    /// Name of the document the words were taken from, used in titles.
    pub source_name: String,
    pub requested_size: usize,
    pub max_count: WordFrequency,
    pub items: Vec<TagCloudItem>,
}

impl TagCloud {
    pub fn from_ranked_list(ranked_list: RankedList, source_name: &str) -> Self {
        let max_count = ranked_list.max_count();

        let items: Vec<TagCloudItem> = ranked_list
            .into_entries()
            .into_iter()
            .map(|entry| TagCloudItem {
                font_class: font_class(entry.count, max_count),
                word: entry.word,
                count: entry.count,
            })
            .collect();

        TagCloud {
            source_name: source_name.to_string(),
            requested_size: items.len(),
            max_count,
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
