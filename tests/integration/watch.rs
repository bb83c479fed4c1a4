use i18n_typegen::test_utils::TestProject;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// Kills the watcher when the test ends, including on assertion failure.
struct Watcher(Child);

impl Watcher {
    fn spawn(project: &TestProject) -> Self {
        let child = Command::new(assert_cmd::cargo::cargo_bin("i18n-typegen"))
            .args(["generate", "--watch", "--interval-ms", "50"])
            .current_dir(project.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("I18N_TYPEGEN_CONFIG")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();
        Self(child)
    }

    fn is_running(&mut self) -> bool {
        self.0.try_wait().unwrap().is_none()
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn wait_for_output(project: &TestProject, needle: &str) -> String {
    let deadline = Instant::now() + Duration::from_secs(15);
    loop {
        if let Ok(output) = project.read_file("i18n.d.ts") {
            if output.contains(needle) {
                return output;
            }
        }
        assert!(Instant::now() < deadline, "Timed out waiting for output containing {needle:?}");
        std::thread::sleep(Duration::from_millis(25));
    }
}

#[test]
fn test_watch_regenerates_and_survives_bad_input() {
    let project = TestProject::new()
        .unwrap()
        .with_locale("locales", "en.json", r#"{"a": "A"}"#)
        .unwrap()
        .with_config(&["locales"])
        .unwrap();

    let mut watcher = Watcher::spawn(&project);
    wait_for_output(&project, "a: () => string;");

    project.write_file("locales/en.json", r#"{"a": "{0:x}"}"#).unwrap();
    let before = wait_for_output(&project, "a: (x: string) => string;");

    project.write_file("locales/en.json", r#"{"a": "#).unwrap();
    std::thread::sleep(Duration::from_millis(400));
    assert!(watcher.is_running(), "watcher exited after a malformed locale file");
    assert_eq!(project.read_file("i18n.d.ts").unwrap(), before);

    project.write_file("locales/en.json", r#"{"a": "{0:x}", "b": "B"}"#).unwrap();
    wait_for_output(&project, "b: () => string;");
    assert!(watcher.is_running());
}
