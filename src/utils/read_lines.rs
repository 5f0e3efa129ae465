use crate::Error;
use flate2::read::MultiGzDecoder;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A lazy, non-restartable sequence of lines with their line endings stripped.
pub type LineSource = Box<dyn Iterator<Item = io::Result<String>>>;

/// Opens `path` and yields its lines in file order.
///
/// Files with a `.gz` extension are decompressed on the fly, including every member of a
/// multi-member (concatenated) gzip file.
///
/// # Errors
/// Returns an `IoError` if the file cannot be opened. Read failures surface later, from the
/// iterator itself.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<LineSource, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let is_gzip = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("gz"));

    if is_gzip {
        info!("Reading gzip-compressed input {:?}", path);
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file)).lines()))
    } else {
        info!("Reading input {:?}", path);
        Ok(Box::new(BufReader::new(file).lines()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tag-cloud-read-lines-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_read_plain_lines() {
        let path = temp_path("plain.txt");
        fs::write(&path, "first line\r\nsecond line\nthird").unwrap();

        let lines: Vec<String> = read_lines(&path).unwrap().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["first line", "second line", "third"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_gzip_lines() {
        let path = temp_path("compressed.txt.gz");
        {
            let file = File::create(&path).unwrap();
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(b"The cat sat.\nThe dog ran.\n").unwrap();
            encoder.finish().unwrap();
        }

        let lines: Vec<String> = read_lines(&path).unwrap().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["The cat sat.", "The dog ran."]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_every_gzip_member() {
        let path = temp_path("multi-member.txt.gz");
        {
            let mut file = File::create(&path).unwrap();
            for member in [&b"alpha beta\n"[..], &b"gamma gamma\n"[..]] {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(member).unwrap();
                file.write_all(&encoder.finish().unwrap()).unwrap();
            }
        }

        let lines: Vec<String> = read_lines(&path).unwrap().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["alpha beta", "gamma gamma"]);

        let frequencies = crate::count_word_frequencies(
            read_lines(&path).unwrap(),
            &crate::Tokenizer::default(),
        )
        .unwrap();
        assert_eq!(frequencies.get("alpha"), Some(&1));
        assert_eq!(frequencies.get("gamma"), Some(&2));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_lines(temp_path("does-not-exist.txt"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
