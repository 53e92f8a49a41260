use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

const MAIN_GO: &str = r#"package main

import "github.com/nicksnyder/go-i18n/i18n"

func main() {
	T := i18n.MustTfunc("en-US")
	println(T("hello.world"))
	println(T(`program.greeting`, map[string]interface{}{"Name": "Bob"}))
}
"#;

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_merge_backfills_untranslated_from_source() -> Result<()> {
    let test = CliTest::with_file(
        "en-US.json",
        r#"[{"id": "greeting", "translation": "Hi"}]"#,
    )?;
    test.write_file("fr.json", "[]")?;

    let output = test
        .merge_command()
        .args(["en-US.json", "fr.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_json("fr.all.json")?,
        json!([{"id": "greeting", "translation": ""}])
    );
    assert_eq!(
        test.read_json("fr.untranslated.json")?,
        json!([{"id": "greeting", "translation": "Hi"}])
    );
    assert_eq!(
        test.read_json("en-US.all.json")?,
        json!([{"id": "greeting", "translation": "Hi"}])
    );
    assert_eq!(test.read_json("en-US.untranslated.json")?, json!([]));

    let out = stdout(&output);
    assert!(out.contains("Loaded 2 catalog files"));
    assert!(out.contains("en-US (source): 1 entry, 0 untranslated"));
    assert!(out.contains("fr: 1 entry, 1 untranslated"));

    Ok(())
}

#[test]
fn test_merge_sift_discovers_message_ids() -> Result<()> {
    let test = CliTest::with_file("cmd/main.go", MAIN_GO)?;
    test.write_file("en-US.json", "[]")?;
    test.write_file(
        "de.json",
        r#"[{"id": "hello.world", "translation": "Hallo Welt"}]"#,
    )?;

    let output = test
        .merge_command()
        .args(["en-US.json", "de.json", "--sift", "cmd", "--outdir", "out"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_json("out/en-US.all.json")?,
        json!([
            {"id": "hello.world", "translation": ""},
            {"id": "program.greeting", "translation": ""}
        ])
    );
    assert_eq!(
        test.read_json("out/de.all.json")?,
        json!([
            {"id": "hello.world", "translation": "Hallo Welt"},
            {"id": "program.greeting", "translation": ""}
        ])
    );
    assert!(stdout(&output).contains("Sifted 1 Go file, collected 2 message ids via T (2 new)"));

    Ok(())
}

#[test]
fn test_merge_keeps_plural_entries() -> Result<()> {
    let test = CliTest::with_file(
        "en-US.json",
        r#"[{"id": "items", "translation": {"one": "{{.Count}} item", "other": "{{.Count}} items"}}]"#,
    )?;
    test.write_file("pl.json", "[]")?;

    let output = test
        .merge_command()
        .args(["en-US.json", "pl.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_json("pl.all.json")?,
        json!([{
            "id": "items",
            "translation": {"one": "", "few": "", "many": "", "other": ""}
        }])
    );
    assert_eq!(
        test.read_json("pl.untranslated.json")?,
        json!([{
            "id": "items",
            "translation": {
                "one": "{{.Count}} item",
                "few": "{{.Count}} items",
                "many": "{{.Count}} items",
                "other": "{{.Count}} items"
            }
        }])
    );

    Ok(())
}

#[test]
fn test_merge_without_alias_warns() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        "package main\n\nfunc main() {\n\tprintln(\"hi\")\n}\n",
    )?;
    test.write_file("en-US.json", "[]")?;

    let output = test
        .merge_command()
        .args(["en-US.json", "--sift", "main.go"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(
        stderr(&output)
            .contains("warning: no call to i18n.MustTfunc found in 1 file(s); skipping extraction")
    );
    assert_eq!(test.read_json("en-US.all.json")?, json!([]));

    Ok(())
}

#[test]
fn test_merge_unsupported_format_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("en-US.json", "[]")?;

    let output = test
        .merge_command()
        .args(["en-US.json", "--format", "xml"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unsupported format: xml"));
    assert!(!test.root().join("en-US.all.json").exists());

    Ok(())
}

#[test]
fn test_merge_requires_translation_files() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.merge_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("need at least one translation file to parse"));

    Ok(())
}

#[test]
fn test_merge_go_syntax_error_aborts() -> Result<()> {
    let test = CliTest::with_file(
        "broken.go",
        "package main\n\nfunc main() {\n\tT := i18n.MustTfunc(\"en-US\"\n}\n",
    )?;
    test.write_file("en-US.json", "[]")?;

    let output = test
        .merge_command()
        .args(["en-US.json", "--sift", "broken.go"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--> "));
    assert!(stderr(&output).contains("broken.go:"));
    assert!(!test.root().join("en-US.all.json").exists());

    Ok(())
}

#[test]
fn test_merge_fail_on_untranslated() -> Result<()> {
    let test = CliTest::with_file(
        "en-US.json",
        r#"[{"id": "greeting", "translation": "Hi"}]"#,
    )?;
    test.write_file("fr.json", r#"[{"id": "greeting", "translation": "Salut"}]"#)?;
    test.write_file("es.json", "[]")?;

    let clean = test
        .merge_command()
        .args(["en-US.json", "fr.json", "--fail-on-untranslated"])
        .output()?;
    assert_eq!(clean.status.code(), Some(0));

    let incomplete = test
        .merge_command()
        .args(["en-US.json", "es.json", "--fail-on-untranslated"])
        .output()?;
    assert_eq!(incomplete.status.code(), Some(1));
    assert!(test.root().join("es.untranslated.json").exists());

    Ok(())
}

#[test]
fn test_merge_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".siftmergerc.json",
        r#"{ "sourceLocale": "fr", "outdir": "build", "factory": "tr.MustTfunc" }"#,
    )?;
    test.write_file("fr.json", "[]")?;
    test.write_file(
        "main.go",
        "package main\n\nfunc main() {\n\tt := tr.MustTfunc(\"fr\")\n\tt(\"bonjour\")\n}\n",
    )?;

    let output = test
        .merge_command()
        .args(["fr.json", "--sift", "main.go"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("build/fr.untranslated.json")?,
        json!([{"id": "bonjour", "translation": ""}])
    );

    Ok(())
}

#[test]
fn test_merge_finds_config_in_parent_directory() -> Result<()> {
    let test = CliTest::with_file(
        ".siftmergerc.json",
        r#"{ "sourceLocale": "fr", "outdir": "build" }"#,
    )?;
    test.write_file("fr.json", r#"[{"id": "greeting", "translation": "Salut"}]"#)?;
    test.write_file("cmd/server/main.go", "package main\n")?;

    let output = test
        .merge_command()
        .current_dir(test.root().join("cmd/server"))
        .arg("../../fr.json")
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_json("build/fr.all.json")?,
        json!([{"id": "greeting", "translation": "Salut"}])
    );
    assert!(!test.root().join("cmd/server/en-US.all.json").exists());
    assert!(!test.root().join("build/en-US.all.json").exists());

    Ok(())
}
