use i18n_typegen::test_utils::TestProject;
use predicates::prelude::*;

use super::typegen;

fn project() -> TestProject {
    TestProject::new()
        .unwrap()
        .with_locale("locales", "en.json", r#"{"greet": "Hi {0:name}"}"#)
        .unwrap()
        .with_config(&["locales"])
        .unwrap()
}

#[test]
fn test_check_passes_after_generate() {
    let project = project();
    typegen().current_dir(project.path()).arg("generate").assert().success();

    typegen()
        .current_dir(project.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Up to date"));
}

#[test]
fn test_check_fails_when_output_missing() {
    let project = project();

    typegen()
        .current_dir(project.path())
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("out of date"));
}

#[test]
fn test_check_fails_after_locale_change() {
    let project = project();
    typegen().current_dir(project.path()).arg("generate").assert().success();

    project.write_file("locales/en.json", r#"{"greet": "Hi {0:name} {1:title}"}"#).unwrap();

    typegen()
        .current_dir(project.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"))
        .stderr(predicate::str::contains("i18n-typegen generate"));
}
