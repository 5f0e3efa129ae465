use crate::models::{OutputFormat, TagCloud};
use crate::Error;
use log::info;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Renders `cloud` in the format implied by `path` and writes it there.
///
/// The whole document is rendered in memory, written to a hidden sibling file and only then
/// renamed onto `path`, so a failure never leaves a partial file behind.
pub fn write_tag_cloud<P: AsRef<Path>>(cloud: &TagCloud, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path);

    let rendered = format.renderer().render_to_bytes(cloud)?;
    let temp_path = sibling_temp_path(path)?;

    info!("Writing {:?} tag cloud to {:?}", format, path);
    if let Err(err) = write_synced(&temp_path, &rendered) {
        // Best effort, the write error is the one worth reporting
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }

    Ok(())
}

/// `dir/cloud.html` becomes `dir/.cloud.html.tmp`.
fn sibling_temp_path(path: &Path) -> Result<PathBuf, Error> {
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::InvalidArgument(format!("{:?} is not a file path", path)))?;

    let mut temp_name = OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");

    Ok(path.with_file_name(temp_name))
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
