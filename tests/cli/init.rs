use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["defaultLanguage"], "en");
    assert_eq!(parsed["languages"]["en"], "./locales/en.json");
    assert_eq!(parsed["ignores"][0], "**/node_modules/**");
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created .honolaterc.json\n");
    assert!(test.root().join(".honolaterc.json").exists());

    let content = test.read_file(".honolaterc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".honolaterc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".honolaterc.json already exists"));
    assert_eq!(test.read_file(".honolaterc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.tsx", "export const App = () => <p>{t`Hello!`}</p>;\n")?;

    let output = test.extract_command().output()?;
    assert_eq!(
        output.status.code(),
        Some(1),
        "stderr: {}",
        stderr(&output)
    );

    let en: Value = serde_json::from_str(&test.read_file("locales/en.json")?)?;
    assert_eq!(en, serde_json::json!({ "Hello!": "Hello!" }));

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    Ok(())
}
