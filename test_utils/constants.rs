use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub const COMMENT_PREFIX: &str = "COMMENT:";
pub const CLOUD_SIZE_PREFIX: &str = "CLOUD_SIZE:";
pub const EXPECTED_COUNT_PREFIX: &str = "EXPECTED_COUNT:";
pub const EXPECTED_CLOUD_PREFIX: &str = "EXPECTED_CLOUD:";
pub const EXPECTED_FAILURE_PREFIX: &str = "EXPECTED_FAILURE:";
