// tests/integration_tests/consistency_test.rs
use super::common::{create_test_file, plain_settings, run_capture};
use anyhow::Result;
use fcount::{EXIT_INCONSISTENT, Settings};
use tempfile::TempDir;

#[test]
fn test_mixed_field_counts_report_each_count() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(temp_dir.path(), "mixed.csv", "a,b,c\na,b,c,d\na,b\n")?;

    let (summary, output) = run_capture(&plain_settings(","), &[file.clone()])?;

    assert_eq!(
        output,
        format!("3\t1\t{file}\n4\t1\t{file}\n2\t1\t{file}\n"),
        "Tied entries should stay in first-seen order"
    );
    assert!(summary.inconsistent);
    assert_eq!(summary.exit_status(false), 0, "Inconsistency does not fail loud mode");
    Ok(())
}

#[test]
fn test_quiet_mode_inconsistent_exits_two() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(temp_dir.path(), "mixed.csv", "a,b,c\na,b,c,d\na,b\n")?;
    let settings = Settings {
        quiet: true,
        ..plain_settings(",")
    };

    let (summary, output) = run_capture(&settings, &[file])?;

    assert!(output.is_empty(), "Quiet mode prints nothing");
    assert_eq!(summary.exit_status(true), EXIT_INCONSISTENT);
    Ok(())
}

#[test]
fn test_quiet_mode_consistent_exits_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(
        temp_dir.path(),
        "four.tsv",
        "a\tb\tc\td\n1\t2\t3\t4\n\t\t\t\n",
    )?;
    let settings = Settings {
        quiet: true,
        ..plain_settings("\t")
    };

    let (summary, output) = run_capture(&settings, &[file])?;

    assert!(output.is_empty());
    assert!(!summary.inconsistent);
    assert_eq!(summary.exit_status(true), 0);
    Ok(())
}

#[test]
fn test_majority_count_listed_first() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(temp_dir.path(), "data.txt", "a|b\nc\nd|e\nf|g\nh\n")?;

    let (_, output) = run_capture(&plain_settings("|"), &[file.clone()])?;

    assert_eq!(output, format!("2\t3\t{file}\n1\t2\t{file}\n"));
    Ok(())
}

#[test]
fn test_header_line() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(temp_dir.path(), "data.txt", "a,b\n")?;
    let settings = Settings {
        header: true,
        ..plain_settings(",")
    };

    let (_, output) = run_capture(&settings, &[file.clone()])?;
    assert_eq!(output, format!("field_count\trecords\tfile\n2\t1\t{file}\n"));

    let quiet = Settings {
        quiet: true,
        ..settings
    };
    let (_, output) = run_capture(&quiet, &[file])?;
    assert!(output.is_empty(), "Quiet mode suppresses the header too");
    Ok(())
}

#[test]
fn test_empty_file_has_no_entries() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = create_test_file(temp_dir.path(), "empty.txt", "")?;

    let (summary, output) = run_capture(&plain_settings(","), &[file])?;
    assert!(output.is_empty());
    assert!(!summary.inconsistent);
    Ok(())
}
