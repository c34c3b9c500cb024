//! Configuration Tests
//!
//! Verifies that config.toml in the data directory sets view and
//! user defaults, and that flags still win.

use anyhow::Result;
use todoview_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_config_sets_default_page_size_and_sort() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("[view]\npage_size = 4\nsort = \"oldest_first\"\n")?;
    let script = world.write_script("tasks.toml", &fixtures::numbered_tasks(10))?;
    let script = script.to_string_lossy();

    let result = world.run_json(&["todo", "run", &script])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_item_ids(&json, &[1, 2, 3, 4])?;
    assertions::assert_pagination(&json, 3, 10)?;
    Ok(())
}

#[test]
fn test_flags_override_config() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("[view]\npage_size = 4\nsort = \"oldest_first\"\n")?;
    let script = world.write_script("tasks.toml", &fixtures::numbered_tasks(10))?;
    let script = script.to_string_lossy();

    let result = world.run_json(&[
        "todo",
        "run",
        &script,
        "--page-size",
        "10",
        "--sort",
        "newest_first",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_pagination(&json, 1, 10)?;
    assert_eq!(json["content"]["items"][0]["id"], 10);
    Ok(())
}

#[test]
fn test_config_sets_user_count() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("[users]\ncount = 12\n")?;

    let result = world.run(&["users", "list"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Showing 12 of 12 users"));
    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("[view]\npage_size = 0\n")?;

    let result = world.run(&["users", "list"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Invalid config"));
    Ok(())
}

#[test]
fn test_env_var_selects_data_dir() -> Result<()> {
    let world = TestWorld::new();
    let other = world.temp_dir().join("elsewhere");
    std::fs::create_dir_all(&other)?;
    std::fs::write(other.join("config.toml"), "[users]\ncount = 3\n")?;

    // --data-dir from the world takes precedence over the env var
    let world = world.with_env("TODOVIEW_PATH", other.to_string_lossy());
    let result = world.run(&["users", "list"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("of 1000 users"));
    Ok(())
}

#[test]
fn test_no_command_prints_guidance() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[])?;

    assert!(result.success());
    assert!(result.stdout().contains("Quick commands:"));
    assert!(result.stdout().contains("No config found; defaults apply"));
    Ok(())
}
