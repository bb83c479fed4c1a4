use i18n_typegen::emit::DeclarationEmitter;
use i18n_typegen::merge::{merge_all, merge_with_report};
use i18n_typegen::placeholder::parse_parameters;
use i18n_typegen::shape::ShapeNode;
use i18n_typegen::signature::render_signature;

fn signature_of(template: &str) -> String {
    render_signature(&parse_parameters(template))
}

#[test]
fn test_templates_without_placeholders_are_thunks() {
    for template in ["", "Hello", "{name}", "{}", "{0", "0}", "{:label}", "{-1}"] {
        assert_eq!(signature_of(template), "() => string", "template {template:?}");
    }
}

#[test]
fn test_indexed_placeholders() {
    let params = parse_parameters("{0} is now a {1}");
    let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["_0", "_1"]);
    assert_eq!(render_signature(&params), "(_0: string, _1: string) => string");
}

#[test]
fn test_labelled_placeholders() {
    assert_eq!(
        signature_of("{0:user} is now a {1:role}"),
        "(user: string, role: string) => string"
    );
}

#[test]
fn test_repeated_label_yields_one_parameter() {
    let params = parse_parameters("{0:user} greets {1:user}");
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].name, "user");
}

#[test]
fn test_first_seen_order_not_index_order() {
    assert_eq!(signature_of("{2} then {0}"), "(_2: string, _0: string) => string");
}

#[test]
fn test_later_leaf_replaces_branch() {
    let first = ShapeNode::branch([("auth", ShapeNode::branch([("login", ShapeNode::leaf("L"))]))]);
    let second = ShapeNode::branch([("auth", ShapeNode::leaf("Auth"))]);

    let (merged, report) = merge_with_report([&first, &second]);
    assert_eq!(merged.get_path("auth"), Some(&ShapeNode::leaf("Auth")));
    assert_eq!(report.overwritten, ["auth"]);
}

#[test]
fn test_later_branch_replaces_leaf() {
    let first = ShapeNode::branch([("auth", ShapeNode::leaf("Auth"))]);
    let second = ShapeNode::branch([("auth", ShapeNode::branch([("login", ShapeNode::leaf("L"))]))]);

    let merged = merge_all([&first, &second]);
    assert_eq!(merged.get_path("auth.login"), Some(&ShapeNode::leaf("L")));
}

#[test]
fn test_first_seen_key_order_with_last_value() {
    let first = ShapeNode::branch([("a", ShapeNode::leaf("A")), ("b", ShapeNode::leaf("B1"))]);
    let second = ShapeNode::branch([("c", ShapeNode::leaf("C")), ("b", ShapeNode::leaf("{0}"))]);

    let merged = merge_all([&first, &second]);
    let keys: Vec<_> = merged.as_branch().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b", "c"]);
    assert_eq!(merged.get_path("b"), Some(&ShapeNode::leaf("{0}")));
}

#[test]
fn test_merge_keeps_keys_missing_from_incoming() {
    let first = ShapeNode::branch([(
        "errors",
        ShapeNode::branch([("a", ShapeNode::leaf("A")), ("b", ShapeNode::leaf("B"))]),
    )]);
    let second = ShapeNode::branch([("errors", ShapeNode::branch([("c", ShapeNode::leaf("C"))]))]);

    let merged = merge_all([&first, &second]);
    assert_eq!(merged.leaf_count(), 3);
}

#[test]
fn test_emitted_block_layout() {
    let tree = ShapeNode::branch([
        ("greet", ShapeNode::leaf("Hello {0:name}")),
        ("auth", ShapeNode::branch([("logout", ShapeNode::leaf("Bye"))])),
        ("not-an-ident", ShapeNode::leaf("x")),
    ]);

    let block = DeclarationEmitter::default().render_block(&tree, None);
    let expected = "\
declare global {
  namespace Localization {
    interface Messages {
      greet: (name: string) => string;
      auth: {
        logout: () => string;
      };
      \"not-an-ident\": () => string;
    }
  }
}";
    assert_eq!(block, expected);
}

#[test]
fn test_unsafe_labels_are_sanitized() {
    assert_eq!(
        signature_of("{0:first name} {1:class} {2:first-name}"),
        "(first_name: string, _class: string, first_name_2: string) => string"
    );
}
