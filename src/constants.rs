use crate::config::TagCloudConfig;

/// Whitespace plus the fixed punctuation set which splits words apart.
pub const DEFAULT_SEPARATORS: &str = " \t\n\r,-.!?[]';:/()\"*`";

pub const DEFAULT_TAG_CLOUD_CONFIG: TagCloudConfig = TagCloudConfig {
    separators: DEFAULT_SEPARATORS,
};

/// The font class counter starts here and is always incremented at least once.
pub const FONT_CLASS_BASE: u32 = 10;

/// Number of equally sized ratio steps between the smallest and largest class (48 - 11).
pub const FONT_CLASS_STEPS: u64 = 37;

pub const MIN_FONT_CLASS: u32 = 11;
pub const MAX_FONT_CLASS: u32 = 48;

pub const REMOTE_STYLESHEET_URL: &str = "http://www.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";
pub const LOCAL_STYLESHEET_PATH: &str = "tagcloud.css";
