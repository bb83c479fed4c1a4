use i18n_typegen::cache::SourceCache;
use i18n_typegen::core::TypegenError;
use i18n_typegen::generator::Generator;
use i18n_typegen::source::{Content, DirectorySource, LocaleSource, StaticSource};
use i18n_typegen::test_utils::{TestProject, init_test_logging};
use std::sync::Arc;

fn catalog(id: &str, key: &str) -> StaticSource {
    StaticSource::new(id).with_entry("en", Content::namespace([(key, Content::template("{0:n}"))]))
}

#[test]
fn test_single_source_has_one_untagged_block() {
    let app = catalog("app", "a");
    let out = Generator::default().generate(&[&app]).unwrap();

    assert_eq!(out.matches("declare global {").count(), 1);
    assert!(!out.contains("// client"));
    assert!(out.ends_with("}\n\nexport {};\n"));
}

#[test]
fn test_blocks_follow_source_order() {
    let sources = [catalog("one", "first"), catalog("two", "second"), catalog("three", "third")];
    let refs: Vec<&dyn LocaleSource> = sources.iter().map(|s| s as &dyn LocaleSource).collect();
    let out = Generator::default().generate(&refs).unwrap();

    assert_eq!(out.matches("declare global {").count(), 3);
    let positions: Vec<usize> = ["// client 1", "first:", "// client 2", "second:", "// client 3", "third:"]
        .iter()
        .map(|needle| out.find(needle).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(out.contains("}\n\n// client 2\ndeclare global {"));
}

#[test]
fn test_resolved_callables_fall_back_to_indexed_parameters() {
    let source = StaticSource::new("app").with_entry(
        "en",
        Content::namespace([("notify", Content::Resolved { arity: 2 }), ("ping", Content::Resolved { arity: 0 })]),
    );
    let out = Generator::default().generate(&[&source]).unwrap();

    assert!(out.contains("notify: (_0: string, _1: string) => string;"));
    assert!(out.contains("ping: () => string;"));
}

#[test]
fn test_directory_source_end_to_end_is_idempotent() {
    init_test_logging(None);
    let project = TestProject::new()
        .unwrap()
        .with_locale("app", "en.json", r#"{"title": "Title", "auth": {"login": "Hi {0:user}"}}"#)
        .unwrap()
        .with_locale("app", "de.yaml", "title: Titel\nauth:\n  logout: Tschüss\n")
        .unwrap()
        .with_locale("app", "fr/errors.toml", "not_found = \"{0:path} introuvable\"\n")
        .unwrap();

    let source = DirectorySource::new(project.path().join("app"));
    let generator = Generator::default();
    let first = generator.generate(&[&source]).unwrap();
    let second = generator.generate(&[&source]).unwrap();
    assert_eq!(first, second);

    assert!(first.contains("      title: () => string;"));
    assert!(first.contains("        login: (user: string) => string;"));
    assert!(first.contains("        logout: () => string;"));
    assert!(first.contains("        not_found: (path: string) => string;"));
}

#[test]
fn test_missing_source_aborts_whole_run() {
    let project = TestProject::new()
        .unwrap()
        .with_locale("app", "en.json", r#"{"a": "A"}"#)
        .unwrap();
    let good = DirectorySource::new(project.path().join("app"));
    let missing = DirectorySource::new(project.path().join("nope"));

    let err = Generator::default().generate(&[&good, &missing]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TypegenError>(),
        Some(TypegenError::SourceNotFound { .. })
    ));
}

#[test]
fn test_cached_generation_picks_up_changes_after_refresh() {
    let project = TestProject::new()
        .unwrap()
        .with_locale("app", "en.json", r#"{"a": "A"}"#)
        .unwrap();
    let sources = vec![DirectorySource::new(project.path().join("app"))];
    let refs: Vec<&dyn LocaleSource> = sources.iter().map(|s| s as &dyn LocaleSource).collect();
    let generator = Generator::default();
    let mut cache = SourceCache::new();

    cache.refresh(&sources).unwrap();
    let before = generator.generate_cached(&refs, &mut cache).unwrap();
    assert!(before.contains("a: () => string;"));

    project.write_file("app/en.json", r#"{"a": "{0:x}"}"#).unwrap();
    assert_eq!(generator.generate_cached(&refs, &mut cache).unwrap(), before);

    assert_eq!(cache.refresh(&sources).unwrap().len(), 1);
    let after = generator.generate_cached(&refs, &mut cache).unwrap();
    assert!(after.contains("a: (x: string) => string;"));
}

#[tokio::test]
async fn test_concurrent_matches_sequential() {
    let a = catalog("a", "alpha");
    let b = catalog("b", "beta");
    let sequential = Generator::default().generate(&[&a, &b]).unwrap();

    let sources: Vec<Arc<dyn LocaleSource>> = vec![Arc::new(a), Arc::new(b)];
    let concurrent = Generator::default().generate_concurrent(sources).await.unwrap();
    assert_eq!(concurrent, sequential);
}

#[test]
fn test_scalar_keys_and_datetimes_render_as_members() {
    let project = TestProject::new()
        .unwrap()
        .with_locale("app", "en.yaml", "errors:\n  404: Not found {0:path}\n  500: Boom\n")
        .unwrap()
        .with_locale("app", "fr.toml", "released = 2024-01-01\n")
        .unwrap();

    let source = DirectorySource::new(project.path().join("app"));
    let out = Generator::default().generate(&[&source]).unwrap();

    assert!(out.contains("        \"404\": (path: string) => string;"));
    assert!(out.contains("        \"500\": () => string;"));
    assert!(out.contains("      released: () => string;"));
    assert!(!out.contains("toml"));
}
