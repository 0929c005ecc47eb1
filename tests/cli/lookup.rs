use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const TRANSLATIONS: &str = r#"{
  "nav": {
    "home": ["Home", "Top bar label"],
    "about": ["About"]
  },
  "title": ["Welcome"]
}"#;

#[test]
fn test_lookup_shows_value_and_context() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/app.tsx", "<a>{t('nav.home')}</a>")?;

    let output = test
        .command()
        .args(["lookup", "src/app.tsx", "1", "9"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "nav.home\n  value:   Home\n  context: Top bar label\n"
    );

    Ok(())
}

#[test]
fn test_lookup_at_closing_quote() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/app.tsx", "<a>{t('nav.home')}</a>")?;

    let output = test
        .command()
        .args(["lookup", "src/app.tsx", "1", "16"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("nav.home\n"));

    Ok(())
}

#[test]
fn test_lookup_ignores_non_source_files() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/notes.txt", "t('nav.home')")?;

    let output = test
        .command()
        .args(["lookup", "src/notes.txt", "1", "5"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("No translation key at src/notes.txt:1:5"));

    Ok(())
}

#[test]
fn test_lookup_markdown() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/app.ts", "t('nav.about')")?;

    let output = test
        .command()
        .args(["lookup", "src/app.ts", "1", "4", "--markdown"])
        .output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("`nav.about`&nbsp;"), "{}", out);
    assert!(out.contains("| **Value** | About |"), "{}", out);
    assert!(out.contains("| **Context** | _No comment provided._ |"), "{}", out);
    assert!(out.ends_with("\n---\nEdit Translation\n"), "{}", out);

    Ok(())
}

#[test]
fn test_lookup_missing_translation_fails() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/app.ts", "t('nav.contact')")?;

    let output = test
        .command()
        .args(["lookup", "src/app.ts", "1", "5"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "nav.contact\n  No translation found for this key.\n"
    );

    Ok(())
}

#[test]
fn test_lookup_outside_key_fails() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/app.ts", "t('nav.home')")?;

    let output = test
        .command()
        .args(["lookup", "src/app.ts", "1", "1"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("No translation key at src/app.ts:1:1"));

    Ok(())
}

#[test]
fn test_keys_lists_in_file_order() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;

    let output = test.command().arg("keys").output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "nav.home = Home  # Top bar label\nnav.about = About\ntitle = Welcome\n"
    );

    let output = test.command().args(["keys", "--prefix", "nav."]).output()?;
    assert_eq!(
        stdout(&output),
        "nav.home = Home  # Top bar label\nnav.about = About\n"
    );

    Ok(())
}

#[test]
fn test_usages_lists_locations() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/a.ts", "const x = t('title');\n")?;
    test.write_file("src/b/c.vue", "<p>{{ t(\"title\") }}</p>\n<p>{{ t('nav.home') }}</p>")?;

    let output = test.command().args(["usages", "title"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        concat!(
            "src/a.ts:1:14  const x = t('title');\n",
            "src/b/c.vue:1:10  <p>{{ t(\"title\") }}</p>\n",
            "Found 2 usages of \"title\"\n",
        )
    );

    Ok(())
}

#[test]
fn test_usages_none_found() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/a.ts", "t('nav.home')")?;

    let output = test.command().args(["usages", "title"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "No usages of \"title\" found in 1 source file\n"
    );

    Ok(())
}

#[test]
fn test_workspace_flag_from_other_directory() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("other/.keep", "")?;

    let output = test
        .command()
        .current_dir(test.root().join("other"))
        .args(["--workspace", "..", "keys", "--prefix", "title"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "title = Welcome\n");

    Ok(())
}
