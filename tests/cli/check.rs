use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_reports_missing_key() -> Result<()> {
    let test = CliTest::with_translations(r#"{"nav": {"home": ["Home"]}}"#)?;
    test.write_file(
        "src/app.ts",
        "const a = t('nav.home');\nconst b = t('nav.about');\n",
    )?;

    assert_cmd_snapshot!(test.command().arg("check"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: No translation found for key: "nav.about"  no-translation
      --> src/app.ts:2:14
      |
    2 | const b = t('nav.about');
      |              ^^^^^^^^^

    ✘ 1 missing translation in 1 file

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_translations(r#"{"nav": {"home": ["Home", "Top bar"]}}"#)?;
    test.write_file("src/app.tsx", "<a>{t(\"nav.home\")}</a>")?;
    test.write_file("src/util.js", "export const x = 1;")?;

    assert_cmd_snapshot!(test.command().arg("check"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 source files - no missing translations

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_ignores_unsupported_and_outside_files() -> Result<()> {
    let test = CliTest::with_translations("{}")?;
    test.write_file("src/readme.md", "t('a')")?;
    test.write_file("scripts/build.ts", "t('b')")?;
    test.write_file("src/node_modules/lib/index.js", "t('c')")?;

    let output = test.command().arg("check").output()?;

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).contains("Checked 0 source files"));

    Ok(())
}

#[test]
fn test_check_with_path_option() -> Result<()> {
    let test = CliTest::with_translations("{}")?;
    test.write_file("scripts/build.ts", "t('build.title')")?;

    let output = test
        .command()
        .args(["check", "--path", "scripts"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("--> scripts/build.ts:1:4"));

    Ok(())
}

#[test]
fn test_check_multiple_function_names() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transl8rc.json",
        r#"{"translationFilePath": "en.json", "sourceCodePath": "src", "functionNames": ["t", "i18n.t"]}"#,
    )?;
    test.write_file("en.json", r#"{"a": ["A"]}"#)?;
    test.write_file(
        "src/app.vue",
        "{{ i18n.t('a') }} {{ t('b') }} {{ format('c') }}",
    )?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("\"b\""), "{}", out);
    assert!(!out.contains("\"c\""), "{}", out);
    assert!(out.contains("1 missing translation"), "{}", out);

    Ok(())
}

#[test]
fn test_check_malformed_translation_file() -> Result<()> {
    let test = CliTest::with_translations("{ not json")?;
    test.write_file("src/app.ts", "t('a')")?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("warning:"), "{}", stderr(&output));
    assert!(stdout(&output).contains("\"a\""));

    Ok(())
}

#[test]
fn test_check_without_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.ts", "t('a')")?;
    test.write_file(".git/HEAD", "")?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"), "{}", stderr(&output));

    Ok(())
}

#[test]
fn test_check_without_function_names_warns() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transl8rc.json",
        r#"{"translationFilePath": "en.json", "sourceCodePath": "src"}"#,
    )?;
    test.write_file("en.json", "{}")?;
    test.write_file("src/app.ts", "t('a')")?;

    let output = test.command().arg("check").output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("No function names configured."));

    Ok(())
}
