pub mod constants;
pub use constants::TEST_FILES_DIRECTORY;

use constants::{
    CLOUD_SIZE_PREFIX, COMMENT_PREFIX, EXPECTED_CLOUD_PREFIX, EXPECTED_COUNT_PREFIX,
    EXPECTED_FAILURE_PREFIX,
};
use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::{fs, process};

/// A tag cloud item as written in a fixture: `word:count:font_class`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedCloudItem {
    pub word: String,
    pub count: usize,
    pub font_class: u32,
}

/// A text fixture, split into its directive header and the document body.
#[derive(Debug, Clone)]
pub struct TestFixture {
    pub path: PathBuf,
    /// The document with every directive line removed.
    pub text: String,
    pub cloud_size: Option<usize>,
    /// The complete word table, when any `EXPECTED_COUNT:` lines are present.
    pub expected_counts: HashMap<String, usize>,
    pub expected_cloud: Vec<ExpectedCloudItem>,
    /// Name of the error kind the run must fail with.
    pub expected_failure: Option<String>,
}

fn parse_directive<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.trim_start()
        .strip_prefix(prefix)
        .map(|value| value.trim())
}

fn parse_cloud_item(raw: &str) -> Result<ExpectedCloudItem, Box<dyn Error>> {
    // The word itself may contain ':' so split from the right
    let mut parts = raw.rsplitn(3, ':');
    let font_class = parts.next().ok_or("missing font class")?.parse()?;
    let count = parts.next().ok_or("missing count")?.parse()?;
    let word = parts.next().ok_or("missing word")?.to_string();

    Ok(ExpectedCloudItem {
        word,
        count,
        font_class,
    })
}

/// Utility to load a fixture from the test files directory.
pub fn load_test_fixture<P: AsRef<Path>>(file_path: P) -> Result<TestFixture, Box<dyn Error>> {
    let file_path = file_path.as_ref();
    let raw_text = fs::read_to_string(file_path)?;

    let mut fixture = TestFixture {
        path: file_path.to_path_buf(),
        text: String::new(),
        cloud_size: None,
        expected_counts: HashMap::new(),
        expected_cloud: Vec::new(),
        expected_failure: None,
    };

    let mut body = Vec::new();

    for line in raw_text.lines() {
        if parse_directive(line, COMMENT_PREFIX).is_some() {
            continue;
        } else if let Some(value) = parse_directive(line, CLOUD_SIZE_PREFIX) {
            fixture.cloud_size = Some(value.parse()?);
        } else if let Some(value) = parse_directive(line, EXPECTED_COUNT_PREFIX) {
            let (word, count) = value
                .rsplit_once('=')
                .ok_or_else(|| format!("invalid count line: {}", line))?;
            fixture
                .expected_counts
                .insert(word.to_string(), count.trim().parse()?);
        } else if let Some(value) = parse_directive(line, EXPECTED_CLOUD_PREFIX) {
            for raw in value.split_whitespace() {
                fixture.expected_cloud.push(parse_cloud_item(raw)?);
            }
        } else if let Some(value) = parse_directive(line, EXPECTED_FAILURE_PREFIX) {
            fixture.expected_failure = Some(value.to_string());
        } else {
            body.push(line);
        }
    }

    fixture.text = body.join("\n");

    Ok(fixture)
}

/// Every `.txt` fixture in the test files directory, sorted by name.
pub fn get_test_files() -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(&*TEST_FILES_DIRECTORY)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .collect();

    paths.sort();

    Ok(paths)
}

/// Writes `contents` to a file in the system temp directory which no other test run shares.
pub fn write_temp_file(name: &str, contents: &[u8]) -> Result<PathBuf, Box<dyn Error>> {
    let path = temp_path(name);
    fs::write(&path, contents)?;

    Ok(path)
}

/// A path in the system temp directory, unique to this process.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tag-cloud-test-{}-{}", process::id(), name))
}
