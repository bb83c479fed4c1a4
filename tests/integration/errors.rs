use i18n_typegen::test_utils::TestProject;
use predicates::prelude::*;

use super::typegen;

#[test]
fn test_missing_config() {
    let project = TestProject::new().unwrap();

    typegen()
        .current_dir(project.path())
        .arg("generate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn test_config_without_sources() {
    let project = TestProject::new().unwrap();
    project.write_file("typegen.toml", "namespace = \"App\"\n").unwrap();

    typegen()
        .current_dir(project.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No locale sources configured"));
}

#[test]
fn test_missing_source_directory_writes_nothing() {
    let project = TestProject::new()
        .unwrap()
        .with_locale("locales/app", "en.json", r#"{"a": "A"}"#)
        .unwrap()
        .with_config(&["locales/app", "locales/gone"])
        .unwrap();

    typegen()
        .current_dir(project.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Locale source not found"));

    assert!(!project.output_path().exists());
}

#[test]
fn test_malformed_locale_file_keeps_previous_output() {
    let project = TestProject::new()
        .unwrap()
        .with_locale("locales", "en.json", r#"{"a": "A"}"#)
        .unwrap()
        .with_config(&["locales"])
        .unwrap();

    typegen().current_dir(project.path()).arg("generate").assert().success();
    let before = project.read_file("i18n.d.ts").unwrap();

    project.write_file("locales/en.json", r#"{"a": "#).unwrap();
    typegen()
        .current_dir(project.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse locale file"));

    assert_eq!(project.read_file("i18n.d.ts").unwrap(), before);
}

#[test]
fn test_empty_source_directory() {
    let project = TestProject::new()
        .unwrap()
        .with_locale("locales", "README.md", "# not a locale")
        .unwrap()
        .with_config(&["locales"])
        .unwrap();

    typegen()
        .current_dir(project.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No locale files found"));
}
