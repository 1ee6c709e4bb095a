//! Add, load, compare, search and remove across separate invocations

use crate::common::TestProject;
use crate::ft;
use anyhow::Result;

#[test]
fn test_full_history_lifecycle() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("A")?;
    let result = ft!(dir, "add").assert_success()?;
    assert!(result.contains_stdout("Version 1 added."));
    assert_eq!(project.read_tracked()?, "A");

    let result = ft!(dir, "add").assert_success()?;
    assert!(result.contains_stdout("did not detect any change"));
    assert_eq!(ft!(dir, "log").assert_success()?.listed_versions(), vec![1]);

    project.write_tracked("B")?;
    let result = ft!(dir, "add").assert_success()?;
    assert!(result.contains_stdout("Version 2 added."));

    let result = ft!(dir, "load", "1").assert_success()?;
    assert!(result.contains_stdout("Version 1 loaded successfully"));
    assert_eq!(project.read_tracked()?, "A");

    let result = ft!(dir, "compare", "1", "2").assert_success()?;
    assert_eq!(result.stdout.trim_end(), "Line 1: A <<>> B");

    let result = ft!(dir, "remove", "2").assert_success()?;
    assert!(result.contains_stdout("Version 2 deleted successfully."));
    assert_eq!(project.read_tracked()?, "A");

    let result = ft!(dir, "log").assert_success()?;
    assert!(result.contains_stdout("Number of versions: 1"));
    assert_eq!(result.listed_versions(), vec![1]);
    assert!(result.contains_stdout("Content: A"));
    Ok(())
}

#[test]
fn test_version_numbers_not_reused_within_history() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("one")?;
    ft!(dir, "add").assert_success()?;
    project.write_tracked("two")?;
    ft!(dir, "add").assert_success()?;
    project.write_tracked("three")?;
    ft!(dir, "add").assert_success()?;

    ft!(dir, "remove", "2").assert_success()?;

    project.write_tracked("four")?;
    let result = ft!(dir, "add").assert_success()?;
    assert!(result.contains_stdout("Version 4 added."));
    assert_eq!(ft!(dir, "log").assert_success()?.listed_versions(), vec![1, 3, 4]);
    Ok(())
}

#[test]
fn test_multiline_compare() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("title\n\nbody\n")?;
    ft!(dir, "add").assert_success()?;
    project.write_tracked("title\nintro\nbody\nfooter\n")?;
    ft!(dir, "add").assert_success()?;

    let result = ft!(dir, "compare", "1", "2").assert_success()?;
    let lines: Vec<_> = result.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Line 1: <Identical>",
            "Line 2: <Empty line> <<>> intro",
            "Line 3: <Identical>",
            "Line 4: <Empty line> <<>> footer",
        ]
    );

    let swapped = ft!(dir, "compare", "2", "1").assert_success()?;
    assert!(swapped.contains_stdout("Line 2: intro <<>> <Empty line>"));
    assert!(swapped.contains_stdout("Line 4: footer <<>> <Empty line>"));
    Ok(())
}

#[test]
fn test_search_lists_matching_versions() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("fn main() {}")?;
    ft!(dir, "add").assert_success()?;
    project.write_tracked("fn helper() {}")?;
    ft!(dir, "add").assert_success()?;
    project.write_tracked("fn main() { helper(); }")?;
    ft!(dir, "add").assert_success()?;

    let result = ft!(dir, "search", "main").assert_success()?;
    assert!(result.contains_stdout("The keyword 'main' has been found in the following versions:"));
    assert_eq!(result.listed_versions(), vec![1, 3]);

    let result = ft!(dir, "search", "struct").assert_success()?;
    assert!(result.contains_stdout("Your keyword 'struct' was not found in any version."));
    Ok(())
}

#[test]
fn test_remove_last_version_keeps_tracked_file() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("solo")?;
    ft!(dir, "add").assert_success()?;

    let result = ft!(dir, "remove", "1").assert_success()?;
    assert!(result.contains_stdout("No versions remain"));
    assert_eq!(project.read_tracked()?, "solo");

    let result = ft!(dir, "log").assert_success()?;
    assert!(result.contains_stdout("Number of versions: 0"));
    Ok(())
}

#[test]
fn test_load_already_current_version() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("v1")?;
    ft!(dir, "add").assert_success()?;
    project.write_tracked("v2")?;
    ft!(dir, "add").assert_success()?;

    // The version matching the tracked file is current after reopening
    let result = ft!(dir, "load", "2").assert_success()?;
    assert!(result.contains_stdout("Version 2 is already the currently loaded version."));
    Ok(())
}

#[test]
fn test_loaded_version_stays_current_between_runs() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("A")?;
    ft!(dir, "add").assert_success()?;
    project.write_tracked("B")?;
    ft!(dir, "add").assert_success()?;

    let result = ft!(dir, "load", "1").assert_success()?;
    assert!(result.contains_stdout("Version 1 loaded successfully"));
    assert_eq!(project.read_tracked()?, "A");

    let result = ft!(dir, "load", "2").assert_success()?;
    assert!(result.contains_stdout("Version 2 loaded successfully"));
    assert_eq!(project.read_tracked()?, "B");

    let result = ft!(dir, "add").assert_success()?;
    assert!(result.contains_stdout("did not detect any change"));
    assert_eq!(ft!(dir, "log").assert_success()?.listed_versions(), vec![1, 2]);

    ft!(dir, "load", "1").assert_success()?;
    let result = ft!(dir, "remove", "1").assert_success()?;
    assert!(result.contains_stdout("Version 2 is now the currently loaded version."));
    assert_eq!(project.read_tracked()?, "B");
    Ok(())
}

#[test]
fn test_hand_edited_file_compares_against_latest() -> Result<()> {
    let project = TestProject::new()?;
    let dir = project.path();

    project.write_tracked("A")?;
    ft!(dir, "add").assert_success()?;
    project.write_tracked("B")?;
    ft!(dir, "add").assert_success()?;
    ft!(dir, "load", "1").assert_success()?;

    project.write_tracked("B")?;
    // The edit matches version 2, so nothing new is recorded
    let result = ft!(dir, "add").assert_success()?;
    assert!(result.contains_stdout("did not detect any change"));

    project.write_tracked("C")?;
    let result = ft!(dir, "add").assert_success()?;
    assert!(result.contains_stdout("Version 3 added."));
    Ok(())
}
