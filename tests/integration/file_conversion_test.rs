//! Integration tests for the per-file conversion workflow

#[cfg(test)]
mod file_conversion_tests {
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    use textconv::conversion::{convert_file, output_path};
    use textconv::Settings;

    fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_round_trip_scenario() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "text.txt", "10\n\n2 hello\n");

        convert_file(&input, &Settings::new("en-US", false)).unwrap();

        let output = fs::read_to_string(output_path(&input)).unwrap();
        assert_eq!(output, "2 10\n1 l\n1 2\n");
    }

    #[test]
    fn test_output_line_count_is_kept_lines_plus_one() {
        let dir = tempdir().unwrap();
        let input = write_input(
            dir.path(),
            "mixed.txt",
            "1\n\n2\n\n\n3\nnot anything\n   \n",
        );

        convert_file(&input, &Settings::new("en-US", false)).unwrap();

        let output = fs::read_to_string(output_path(&input)).unwrap();
        // 4 kept lines plus the trailing count line.
        assert_eq!(output.lines().count(), 5);
        assert!(output.ends_with("1 4\n"));
    }

    #[test]
    fn test_declared_lengths_match_values() {
        let dir = tempdir().unwrap();
        let input = write_input(
            dir.path(),
            "lengths.txt",
            "3,14\n15.03.2024\n2 hello\n5 hi\n",
        );

        convert_file(&input, &Settings::new("ru-RU", false)).unwrap();

        let output = fs::read_to_string(output_path(&input)).unwrap();
        for line in output.lines() {
            let (length, value) = line.split_once(' ').unwrap();
            let length: usize = length.parse().unwrap();
            assert_eq!(length, value.chars().count(), "line {:?}", line);
        }
    }

    #[test]
    fn test_comma_decimal_culture() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "pi.txt", "3,14\n");

        convert_file(&input, &Settings::new("ru-RU", false)).unwrap();

        let output = fs::read_to_string(output_path(&input)).unwrap();
        assert_eq!(output, "4 3.14\n1 1\n");
    }

    #[test]
    fn test_dates_render_in_invariant_form() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "dates.txt", "15.03.2024\n15.03.2024 10:30:00\n");

        convert_file(&input, &Settings::new("de-DE", false)).unwrap();

        let output = fs::read_to_string(output_path(&input)).unwrap();
        assert_eq!(
            output,
            "19 03/15/2024 00:00:00\n19 03/15/2024 10:30:00\n1 2\n"
        );
    }

    #[test]
    fn test_char_index_misses_render_as_empty_placeholder() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "misses.txt", "5 hi\nabc def\n");

        convert_file(&input, &Settings::new("en-US", false)).unwrap();

        let output = fs::read_to_string(output_path(&input)).unwrap();
        assert_eq!(output, "0 \n0 \n1 2\n");
    }

    #[test]
    fn test_missing_input_leaves_no_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("nope.txt");

        assert!(convert_file(&input, &Settings::default()).is_err());
        assert!(!output_path(&input).exists());
    }

    #[test]
    fn test_reconversion_replaces_output() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "text.txt", "1\n2\n3\n");

        convert_file(&input, &Settings::default()).unwrap();
        fs::write(&input, "9\n").unwrap();
        convert_file(&input, &Settings::default()).unwrap();

        let output = fs::read_to_string(output_path(&input)).unwrap();
        assert_eq!(output, "1 9\n1 1\n");
    }
}
