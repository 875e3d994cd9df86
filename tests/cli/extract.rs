use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

const CONFIG: &str = r#"{
  "defaultLanguage": "en",
  "languages": {
    "en": "./locales/en.json",
    "de": "./locales/de.json"
  }
}"#;

fn setup_project() -> Result<CliTest> {
    let test = CliTest::with_file(".honolaterc.json", CONFIG)?;
    test.write_file(
        "src/index.ts",
        "export const title = t`Welcome`;\n\
         export const greet = (name: string) => t`Hello ${name}!`;\n",
    )?;
    test.write_file(
        "src/components/Greeting.tsx",
        "export const Greeting = ({ name }: { name: string }) => (\n  \
         <h1>{t`Hello ${name}!`}</h1>\n\
         );\n",
    )?;
    Ok(test)
}

fn read_json(test: &CliTest, path: &str) -> Result<Value> {
    Ok(serde_json::from_str(&test.read_file(path)?)?)
}

#[test]
fn test_extract_creates_language_files() -> Result<()> {
    let test = setup_project()?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Running i18n extraction...
Found 2 source file(s):
 - src/components/Greeting.tsx
 - src/index.ts
Extracted 2 localized string(s).
 - Hello {0}!
    at src/components/Greeting.tsx:2
    at src/index.ts:2
 - Welcome
    at src/index.ts:1
Issues were found during extraction:
 - Missing key in de: Hello {0}!
 - Missing key in de: Welcome
 - Missing key in en: Hello {0}!
 - Missing key in en: Welcome
These issues have been fixed automatically.
"
    );

    assert_eq!(
        test.read_file("locales/en.json")?,
        "{\n  \"Hello {0}!\": \"Hello {0}!\",\n  \"Welcome\": \"Welcome\"\n}\n"
    );
    assert_eq!(
        read_json(&test, "locales/de.json")?,
        json!({ "Hello {0}!": "", "Welcome": "" })
    );

    Ok(())
}

#[test]
fn test_extract_second_run_is_clean() -> Result<()> {
    let test = setup_project()?;
    test.extract_command().output()?;
    let before = test.read_file("locales/de.json")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).ends_with(
        "\u{2713} i18n extraction completed successfully. No changes were necessary.\n"
    ));
    assert_eq!(test.read_file("locales/de.json")?, before);

    Ok(())
}

#[test]
fn test_extract_keeps_translations_and_removes_superfluous_keys() -> Result<()> {
    let test = setup_project()?;
    test.write_file(
        "locales/de.json",
        r#"{ "Welcome": "Willkommen", "Goodbye": "Auf Wiedersehen" }"#,
    )?;
    test.write_file(
        "locales/en.json",
        r#"{ "Welcome": "Welcome", "Hello {0}!": "Hello {0}!" }"#,
    )?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains(" - Missing key in de: Hello {0}!\n"));
    assert!(out.contains(" - Superfluous key in de: Goodbye\n"));
    assert!(!out.contains("in en:"));

    assert_eq!(
        read_json(&test, "locales/de.json")?,
        json!({ "Welcome": "Willkommen", "Hello {0}!": "" })
    );

    Ok(())
}

#[test]
fn test_extract_read_only_reports_without_writing() -> Result<()> {
    let test = setup_project()?;
    test.write_file("locales/de.json", r#"{ "Goodbye": "Auf Wiedersehen" }"#)?;

    let output = test.extract_command().arg("--read-only").output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains(" - Superfluous key in de: Goodbye\n"));
    assert!(out.contains(" - Missing key in en: Welcome\n"));
    assert!(out.ends_with("Run without --read-only to fix these issues automatically.\n"));

    assert_eq!(
        test.read_file("locales/de.json")?,
        r#"{ "Goodbye": "Auf Wiedersehen" }"#
    );
    assert!(!test.root().join("locales/en.json").exists());

    Ok(())
}

#[test]
fn test_extract_escapes_literal_braces_and_nested_templates() -> Result<()> {
    let test = CliTest::with_file(".honolaterc.json", CONFIG)?;
    test.write_file(
        "src/page.tsx",
        "export const Page = () => (\n  \
         <p>{t`Use {name} in ${lt`the ${kind} field`}`}</p>\n\
         );\n",
    )?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert_eq!(
        read_json(&test, "locales/en.json")?,
        json!({
            r"Use \{name} in {0}": r"Use \{name} in {0}",
            "the {0} field": "the {0} field",
        })
    );

    Ok(())
}

#[test]
fn test_extract_pattern_flag_overrides_config() -> Result<()> {
    let test = setup_project()?;
    test.write_file("legacy/old.js", "export const x = t`Legacy`;\n")?;

    let output = test
        .extract_command()
        .args(["--pattern", "legacy/**/*.js"])
        .output()?;

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Found 1 source file(s):\n - legacy/old.js\n"));
    assert_eq!(
        read_json(&test, "locales/en.json")?,
        json!({ "Legacy": "Legacy" })
    );

    Ok(())
}

#[test]
fn test_extract_config_pattern_and_ignores() -> Result<()> {
    let test = CliTest::with_file(
        ".honolaterc.json",
        r#"{
  "languages": { "en": "i18n/en.json" },
  "pattern": "src/**/*.{ts,tsx}",
  "ignores": ["**/*.test.ts"]
}"#,
    )?;
    test.write_file("src/a.ts", "t`Kept`;\n")?;
    test.write_file("src/a.test.ts", "t`Test only`;\n")?;
    test.write_file("scripts/build.ts", "t`Outside`;\n")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert_eq!(read_json(&test, "i18n/en.json")?, json!({ "Kept": "Kept" }));

    Ok(())
}

#[test]
fn test_extract_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/.honolaterc.json", CONFIG)?;
    test.write_file("app/src/main.ts", "t`From app`;\n")?;
    test.write_file("other/main.ts", "t`Not scanned`;\n")?;

    let output = test.extract_command().args(["--root", "app"]).output()?;

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(" - src/main.ts\n"));
    assert_eq!(
        read_json(&test, "app/locales/en.json")?,
        json!({ "From app": "From app" })
    );

    Ok(())
}

#[test]
fn test_extract_without_config_uses_defaults() -> Result<()> {
    let test = CliTest::with_file("index.ts", "t`Default`;\n")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert_eq!(
        read_json(&test, "locales/en.json")?,
        json!({ "Default": "Default" })
    );

    Ok(())
}

#[test]
fn test_extract_parse_error_is_fatal() -> Result<()> {
    let test = setup_project()?;
    test.write_file("src/broken.ts", "export const = t`oops`;\n")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse src/broken.ts"));
    assert!(!test.root().join("locales/en.json").exists());

    Ok(())
}

#[test]
fn test_extract_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file(
        ".honolaterc.json",
        r#"{ "defaultLanguage": "fr", "languages": { "en": "en.json" } }"#,
    )?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("defaultLanguage"));

    Ok(())
}

#[test]
fn test_extract_corrupt_language_file_is_regenerated() -> Result<()> {
    let test = setup_project()?;
    test.write_file("locales/en.json", "{ not json")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        read_json(&test, "locales/en.json")?,
        json!({ "Hello {0}!": "Hello {0}!", "Welcome": "Welcome" })
    );

    Ok(())
}
