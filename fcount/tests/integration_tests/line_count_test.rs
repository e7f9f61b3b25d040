// tests/integration_tests/line_count_test.rs
use super::common::{create_test_file, csv_settings, plain_settings, run_capture};
use anyhow::Result;
use fcount::Settings;
use tempfile::TempDir;

#[test]
fn test_line_count_mode() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let first = create_test_file(temp_dir.path(), "a.txt", "x\ny,z\nw")?;
    let second = create_test_file(temp_dir.path(), "b.txt", "")?;
    let settings = Settings {
        line_count: true,
        header: true,
        ..plain_settings(",")
    };

    let (summary, output) = run_capture(&settings, &[first.clone(), second.clone()])?;

    assert_eq!(output, format!("records\tfile\n3\t{first}\n0\t{second}\n"));
    assert!(!summary.inconsistent, "Line counting never flags inconsistency");
    Ok(())
}

#[test]
fn test_line_count_uses_csv_rows() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(temp_dir.path(), "rows.csv", "\"a\nb\",c\nd,e\n")?;
    let settings = Settings {
        line_count: true,
        ..csv_settings()
    };

    let (_, output) = run_capture(&settings, &[file.clone()])?;
    assert_eq!(output, format!("2\t{file}\n"));
    Ok(())
}
