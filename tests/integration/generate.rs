use i18n_typegen::test_utils::TestProject;
use predicates::prelude::*;

use super::typegen;

fn two_client_project() -> TestProject {
    TestProject::new()
        .unwrap()
        .with_locale("locales/app", "en.json", r#"{"greet": "Hello {0:name}", "bye": "Bye"}"#)
        .unwrap()
        .with_locale("locales/app", "de.json", r#"{"bye": "Tschüss", "extra": "{0} / {1}"}"#)
        .unwrap()
        .with_locale("locales/admin", "en.yaml", "panel:\n  title: Admin\n")
        .unwrap()
        .with_config(&["locales/app", "locales/admin"])
        .unwrap()
}

#[test]
fn test_generate_writes_default_output() {
    let project = two_client_project();

    typegen()
        .current_dir(project.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"));

    let output = project.read_file("i18n.d.ts").unwrap();
    assert!(output.starts_with("// client 1\ndeclare global {\n"));
    assert!(output.contains("      greet: (name: string) => string;"));
    assert!(output.contains("      extra: (_0: string, _1: string) => string;"));
    assert!(output.contains("}\n\n// client 2\ndeclare global {\n"));
    assert!(output.contains("      panel: {\n        title: () => string;\n      };"));
    assert!(output.ends_with("}\n\nexport {};\n"));
}

#[test]
fn test_generate_twice_reports_up_to_date() {
    let project = two_client_project();

    typegen().current_dir(project.path()).arg("generate").assert().success();
    let first = project.read_file("i18n.d.ts").unwrap();

    typegen()
        .current_dir(project.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Up to date"));
    assert_eq!(project.read_file("i18n.d.ts").unwrap(), first);
}

#[test]
fn test_generate_stdout_does_not_write() {
    let project = two_client_project();

    typegen()
        .current_dir(project.path())
        .args(["generate", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("// client 1\ndeclare global {"))
        .stdout(predicate::str::ends_with("export {};\n"));

    assert!(!project.output_path().exists());
}

#[test]
fn test_generate_out_and_config_flags() {
    let project = two_client_project();
    let nested = project.path().join("nested");
    std::fs::create_dir_all(&nested).unwrap();

    typegen()
        .current_dir(&nested)
        .args(["--quiet", "--config"])
        .arg(project.config_path())
        .args(["generate", "--out"])
        .arg(project.path().join("types/messages.d.ts"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(project.path().join("types/messages.d.ts").exists());
}

#[test]
fn test_generate_finds_config_in_parent_directory() {
    let project = two_client_project();
    let nested = project.path().join("src/components");
    std::fs::create_dir_all(&nested).unwrap();

    typegen().current_dir(&nested).arg("generate").assert().success();
    assert!(project.output_path().exists());
}

#[test]
fn test_single_source_is_untagged_with_custom_names() {
    let project = TestProject::new()
        .unwrap()
        .with_locale("locales", "en.json", r#"{"a": "A"}"#)
        .unwrap();
    project
        .write_file(
            "typegen.toml",
            "out = \"gen/i18n.d.ts\"\nnamespace = \"App\"\ninterface = \"Strings\"\n\n[[sources]]\npath = \"locales\"\n",
        )
        .unwrap();

    typegen().current_dir(project.path()).arg("generate").assert().success();

    let output = project.read_file("gen/i18n.d.ts").unwrap();
    assert_eq!(
        output,
        "declare global {\n  namespace App {\n    interface Strings {\n      a: () => string;\n    }\n  }\n}\n\nexport {};\n"
    );
}
