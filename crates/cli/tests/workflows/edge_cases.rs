//! Failure reporting and unusual inputs

use crate::common::TestProject;
use crate::ft;
use anyhow::Result;

#[test]
fn test_missing_version_fails() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("only")?;
    ft!(dir, "add").assert_success()?;

    let result = ft!(dir, "load", "42").assert_failure()?;
    assert!(result.contains_stderr("No version found with number 42"));
    assert_eq!(project.read_tracked()?, "only");

    let result = ft!(dir, "remove", "42").assert_failure()?;
    assert!(result.contains_stderr("No version found with number 42"));

    let result = ft!(dir, "compare", "7", "8").assert_failure()?;
    assert!(result.contains_stderr("No version found with number 7, 8"));

    // A failed command still leaves the history intact
    assert_eq!(ft!(dir, "log").assert_success()?.listed_versions(), vec![1]);
    Ok(())
}

#[test]
fn test_add_without_tracked_file_fails() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    let result = ft!(dir, "add").assert_failure()?;
    assert!(result.contains_stderr("Failed to read tracked file"));
    Ok(())
}

#[test]
fn test_empty_file_is_a_version() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("")?;
    let result = ft!(dir, "add").assert_success()?;
    assert!(result.contains_stdout("Version 1 added."));

    let result = ft!(dir, "compare", "1", "1").assert_success()?;
    assert!(result.contains_stdout("Both versions are empty."));
    Ok(())
}

#[test]
fn test_compare_same_version_is_identical() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("x\ny\n")?;
    ft!(dir, "add").assert_success()?;

    let result = ft!(dir, "compare", "1", "1").assert_success()?;
    assert_eq!(
        result.stdout.lines().collect::<Vec<_>>(),
        vec!["Line 1: <Identical>", "Line 2: <Identical>"]
    );
    Ok(())
}

#[test]
fn test_non_numeric_version_rejected_by_parser() -> Result<()> {
    let project = TestProject::new()?;
    let result = ft!(project.path(), "load", "abc").assert_failure()?;
    assert!(result.contains_stderr("invalid value"));
    Ok(())
}

#[test]
fn test_database_same_as_tracked_file_rejected() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("data")?;
    let result = ft!(dir, "--db", "file.txt", "add").assert_failure()?;
    assert!(result.contains_stderr("Invalid configuration"));
    assert_eq!(project.read_tracked()?, "data");
    Ok(())
}

#[test]
fn test_log_json() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("first")?;
    ft!(dir, "add").assert_success()?;
    project.write_tracked("second")?;
    ft!(dir, "add").assert_success()?;

    let result = ft!(dir, "log", "--json").assert_success()?;
    let entries: serde_json::Value = serde_json::from_str(&result.stdout)?;
    let entries = entries.as_array().cloned().unwrap_or_default();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["version"], 1);
    assert_eq!(entries[0]["current"], false);
    assert_eq!(entries[0]["content"], "first");
    assert_eq!(entries[1]["version"], 2);
    assert_eq!(entries[1]["current"], true);
    assert_eq!(entries[1]["size"], 6);
    assert_eq!(entries[1]["hash"].as_str().map(str::len), Some(64));
    Ok(())
}

#[test]
fn test_config_example() -> Result<()> {
    let project = TestProject::new()?;
    let result = ft!(project.path(), "config", "--example").assert_success()?;
    assert!(result.contains_stdout("tracked_file = \"file.txt\""));
    assert!(result.contains_stdout("persist = true"));

    let result = ft!(project.path(), "config").assert_success()?;
    assert!(result.contains_stdout("(defaults)"));
    assert!(result.contains_stdout("database = versions.db"));
    Ok(())
}

#[test]
fn test_malformed_config_fails() -> Result<()> {
    let project = TestProject::new()?;
    project.write_file("ft.toml", "persist = \"sometimes\"\n")?;

    let result = ft!(project.path(), "log").assert_failure()?;
    assert!(result.contains_stderr("Failed to parse config file"));
    Ok(())
}
