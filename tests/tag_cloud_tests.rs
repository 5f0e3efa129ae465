use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use tag_cloud_generator::{
    count_word_frequencies, count_word_frequencies_in_text, generate_tag_cloud,
    generate_tag_cloud_file, read_lines, Error, TagCloud, Tokenizer, DEFAULT_TAG_CLOUD_CONFIG,
};
use test_utils::{get_test_files, load_test_fixture, temp_path, write_temp_file, TestFixture};

fn error_kind(err: &Error) -> &'static str {
    match err {
        Error::InvalidArgument(_) => "InvalidArgument",
        Error::EmptyInput(_) => "EmptyInput",
        Error::IoError(_) => "IoError",
        Error::CsvError(_) => "CsvError",
    }
}

fn assert_cloud_matches(fixture: &TestFixture, cloud: &TagCloud) {
    let actual: Vec<(&str, usize, u32)> = cloud
        .items
        .iter()
        .map(|item| (item.word.as_str(), item.count, item.font_class))
        .collect();

    let expected: Vec<(&str, usize, u32)> = fixture
        .expected_cloud
        .iter()
        .map(|item| (item.word.as_str(), item.count, item.font_class))
        .collect();

    assert_eq!(actual, expected, "cloud mismatch in {:?}", fixture.path);
}

#[cfg(test)]
mod fixture_tests {
    use super::*;

    #[test]
    fn test_fixture_word_counts() {
        let test_files = get_test_files().expect("Failed to list test files");
        assert!(!test_files.is_empty());

        for test_file in test_files {
            let fixture = load_test_fixture(&test_file).expect("Failed to load test fixture");
            let frequencies =
                count_word_frequencies_in_text(&fixture.text, &Tokenizer::default());

            if fixture.expected_counts.is_empty() && fixture.expected_failure.is_some() {
                continue;
            }

            assert_eq!(
                frequencies, fixture.expected_counts,
                "word counts mismatch in {:?}",
                test_file
            );
        }
    }

    #[test]
    fn test_fixture_clouds() {
        for test_file in get_test_files().expect("Failed to list test files") {
            let fixture = load_test_fixture(&test_file).expect("Failed to load test fixture");
            let cloud_size = fixture.cloud_size.expect("Fixture is missing CLOUD_SIZE");

            let result = generate_tag_cloud(&fixture.text, "fixture", cloud_size);

            match (&fixture.expected_failure, result) {
                (Some(expected), Err(err)) => assert_eq!(
                    error_kind(&err),
                    expected,
                    "unexpected error in {:?}: {}",
                    test_file,
                    err
                ),
                (Some(expected), Ok(cloud)) => panic!(
                    "expected {} in {:?}, got {:?}",
                    expected, test_file, cloud
                ),
                (None, Err(err)) => panic!("unexpected error in {:?}: {}", test_file, err),
                (None, Ok(cloud)) => {
                    assert_eq!(cloud.len(), cloud_size);
                    assert_cloud_matches(&fixture, &cloud);
                }
            }
        }
    }

    #[test]
    fn test_fixture_files_through_line_source() {
        for test_file in get_test_files().expect("Failed to list test files") {
            let fixture = load_test_fixture(&test_file).expect("Failed to load test fixture");
            let path = write_temp_file(
                &format!("lines-{}", test_file.file_name().unwrap().to_string_lossy()),
                fixture.text.as_bytes(),
            )
            .unwrap();

            let from_file =
                count_word_frequencies(read_lines(&path).unwrap(), &Tokenizer::default()).unwrap();
            let from_text = count_word_frequencies_in_text(&fixture.text, &Tokenizer::default());

            assert_eq!(from_file, from_text);

            fs::remove_file(&path).unwrap();
        }
    }
}

#[cfg(test)]
mod file_pipeline_tests {
    use super::*;

    #[test]
    fn test_generate_html_file() {
        let input = write_temp_file("pipeline-input.txt", b"The cat sat.\nThe dog ran.\n").unwrap();
        let output = temp_path("pipeline-output.html");

        let cloud = generate_tag_cloud_file(&DEFAULT_TAG_CLOUD_CONFIG, &input, &output, 3).unwrap();
        assert_eq!(cloud.max_count, 2);

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("<title>Top 3 words in "));
        assert!(html.contains(
            "<span style=\"cursor:default\" class=\"f48\" title=\"count: 2\">The</span>"
        ));

        let cat = html.find(">cat<").unwrap();
        let dog = html.find(">dog<").unwrap();
        let the = html.find(">The<").unwrap();
        assert!(cat < dog && dog < the);

        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_generate_csv_file_from_gzip() {
        let input = temp_path("pipeline-input.txt.gz");
        {
            let file = fs::File::create(&input).unwrap();
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(b"b a b\nc b a\n").unwrap();
            encoder.finish().unwrap();
        }
        let output = temp_path("pipeline-output.csv");

        generate_tag_cloud_file(&DEFAULT_TAG_CLOUD_CONFIG, &input, &output, 2).unwrap();

        let csv = fs::read_to_string(&output).unwrap();
        assert_eq!(csv, "word,count,font_class\na,2,35\nb,3,48\n");

        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_failed_run_creates_no_output() {
        let input = write_temp_file("empty-input.txt", b"  ...  \n").unwrap();
        let output = temp_path("never-written.html");

        let result = generate_tag_cloud_file(&DEFAULT_TAG_CLOUD_CONFIG, &input, &output, 1);
        assert!(matches!(result, Err(Error::EmptyInput(_))));
        assert!(!output.exists());

        let result = generate_tag_cloud_file(&DEFAULT_TAG_CLOUD_CONFIG, &input, &output, 0);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(!output.exists());

        fs::remove_file(&input).unwrap();
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let output = temp_path("missing-input.html");
        let result = generate_tag_cloud_file(
            &DEFAULT_TAG_CLOUD_CONFIG,
            temp_path("does-not-exist.txt"),
            &output,
            1,
        );

        assert!(matches!(result, Err(Error::IoError(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let input = write_temp_file(
            "idempotent-input.txt",
            b"one two three two three three four four four four\nfive five five five five",
        )
        .unwrap();
        let first = temp_path("idempotent-1.html");
        let second = temp_path("idempotent-2.html");

        generate_tag_cloud_file(&DEFAULT_TAG_CLOUD_CONFIG, &input, &first, 3).unwrap();
        generate_tag_cloud_file(&DEFAULT_TAG_CLOUD_CONFIG, &input, &second, 3).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

        for path in [&input, &first, &second] {
            fs::remove_file(path).unwrap();
        }
    }
}
