use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .transl8rc.json

    ----- stderr -----
    ");

    let content = test.read_file(".transl8rc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["translationFilePath"], "./locales/en.json");
    assert_eq!(parsed["sourceCodePath"], "./src");
    assert_eq!(parsed["functionNames"][0], "t");
    assert!(content.contains("\n  \"functionNames\""));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transl8rc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .transl8rc.json already exists
    ");

    assert_eq!(test.read_file(".transl8rc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file("src/app.ts", "export const title = t('app.title');")?;
    test.write_file("locales/en.json", r#"{"app": {"title": ["My App"]}}"#)?;

    let output = test.command().arg("check").output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
