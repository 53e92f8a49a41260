use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["sourceLocale"], "en-US");
    assert_eq!(parsed["outdir"], ".");
    assert_eq!(parsed["format"], "json");
    assert_eq!(parsed["factory"], "i18n.MustTfunc");

    // 2-space indentation
    assert!(
        content.contains("\n  \"sourceLocale\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.init_command().output()?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Created .siftmergerc.json"));

    let content = test.read_file(".siftmergerc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".siftmergerc.json", "{}")?;

    let output = test.init_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains(".siftmergerc.json already exists"));
    assert_eq!(test.read_file(".siftmergerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.init_command().output()?;
    test.write_file("en-US.json", "[]")?;

    let output = test.merge_command().arg("en-US.json").output()?;
    assert!(
        output.status.success(),
        "Merge should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("en-US.all.json").exists());

    Ok(())
}
