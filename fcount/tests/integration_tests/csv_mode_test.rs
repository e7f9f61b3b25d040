// tests/integration_tests/csv_mode_test.rs
use super::common::{create_test_file, csv_settings, plain_settings, run_capture};
use anyhow::Result;
use fcount::{Mode, Settings};
use tempfile::TempDir;

const QUOTED: &str = "name,comment\n\"Smith, J\",\"said \"\"hi\"\"\"\n\"Doe\",\"line one\nline two\"\n";

#[test]
fn test_csv_mode_is_quote_aware() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(temp_dir.path(), "quoted.csv", QUOTED)?;

    let (summary, output) = run_capture(&csv_settings(), &[file.clone()])?;

    assert_eq!(output, format!("2\t3\t{file}\n"));
    assert!(!summary.inconsistent);
    Ok(())
}

#[test]
fn test_plain_mode_splits_inside_quotes() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(temp_dir.path(), "quoted.csv", QUOTED)?;

    let (summary, _) = run_capture(&plain_settings(","), &[file])?;

    assert!(
        summary.inconsistent,
        "Plain mode counts the comma inside quotes and the quoted newline"
    );
    Ok(())
}

#[test]
fn test_csv_custom_quote_and_separator() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(temp_dir.path(), "data.ssv", "'a;b';c\nd;e\n")?;
    let settings = Settings {
        mode: Mode::Csv {
            delimiter: b';',
            quote: b'\'',
        },
        ..Settings::default()
    };

    let (_, output) = run_capture(&settings, &[file.clone()])?;
    assert_eq!(output, format!("2\t2\t{file}\n"));
    Ok(())
}

#[test]
fn test_csv_last_row_without_newline() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(temp_dir.path(), "tail.csv", "a,b\nc,d,e")?;

    let (_, output) = run_capture(&csv_settings(), &[file.clone()])?;
    assert_eq!(output, format!("2\t1\t{file}\n3\t1\t{file}\n"));
    Ok(())
}
