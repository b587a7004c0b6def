//! Structural guards on the dispatcher.
//!
//! These tests read the crate's own source and manifest. They fail if the
//! dispatcher starts branching on operand identity or grows a dependency on
//! a concrete operand crate.

const SOURCE: &str = include_str!("../src/lib.rs");
const MANIFEST: &str = include_str!("../Cargo.toml");

/// Tokens that indicate inspection of an operand's concrete type
const FORBIDDEN: &[&str] = &[
    "if",
    "else",
    "match",
    "matches",
    "Any",
    "TypeId",
    "type_id",
    "downcast",
    "downcast_ref",
    "type_name",
];

/// Identifier tokens in the non-test, non-comment part of the source
fn code_tokens(source: &str) -> Vec<&str> {
    let code = source.split("#[cfg(test)]").next().unwrap_or_default();
    code.lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .flat_map(|line| line.split(|c: char| !(c.is_alphanumeric() || c == '_')))
        .filter(|token| !token.is_empty())
        .collect()
}

#[test]
fn tokenizer_sees_code() {
    let tokens = code_tokens(SOURCE);
    assert!(tokens.contains(&"increment"));
    assert!(tokens.contains(&"combine"));
}

#[test]
fn tokenizer_skips_comments() {
    let tokens = code_tokens("// if match\nfn f() {}\n");
    assert_eq!(tokens, vec!["fn", "f"]);
}

#[test]
fn dispatcher_has_no_identity_branches() {
    let tokens = code_tokens(SOURCE);
    for forbidden in FORBIDDEN {
        assert!(
            !tokens.contains(forbidden),
            "dispatcher source contains `{forbidden}`"
        );
    }
}

#[test]
fn dispatcher_depends_only_on_capability() {
    let manifest: toml::Table = toml::from_str(MANIFEST).unwrap();
    let deps = manifest
        .get("dependencies")
        .and_then(toml::Value::as_table)
        .unwrap();

    let names: Vec<&str> = deps.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["opd-capability"]);
}
