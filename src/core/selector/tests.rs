use super::resolve;
use crate::error::PkgrmError;
use std::collections::HashSet;

fn installed() -> Vec<String> {
    vec![
        "Alpha".to_string(),
        "Beta".to_string(),
        "Gamma".to_string(),
    ]
}

fn tokens(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn literal_names_pass_through_unchecked() {
    // "Zeta" is not installed; the selector keeps it anyway so the
    // backend can report it by name instead of a silent no-op.
    let out = resolve(&tokens(&["Zeta"]), false, false, &installed()).unwrap();
    assert_eq!(out, tokens(&["Zeta"]));
}

#[test]
fn literal_order_is_first_occurrence() {
    let out = resolve(&tokens(&["c", "a", "c", "b"]), false, false, &[]).unwrap();
    assert_eq!(out, tokens(&["c", "a", "b"]));
}

#[test]
fn single_pattern_selects_matching_installed() {
    let out = resolve(&tokens(&["^A.*"]), true, false, &installed()).unwrap();
    assert_eq!(out, tokens(&["Alpha"]));
}

#[test]
fn patterns_union_across_all_supplied() {
    // Any-match semantics: a package selected by one pattern stays
    // selected no matter what the others say.
    let out = resolve(&tokens(&["^A", "ma$"]), true, false, &installed()).unwrap();
    assert_eq!(out, tokens(&["Alpha", "Gamma"]));
}

#[test]
fn patterns_never_select_outside_installed() {
    let out = resolve(&tokens(&["^Z"]), true, false, &installed()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn pattern_tokens_are_not_kept_as_literals() {
    let out = resolve(&tokens(&["Alpha|Zeta"]), true, false, &installed()).unwrap();
    assert_eq!(out, tokens(&["Alpha"]));
}

#[test]
fn malformed_pattern_fails_whole_resolve() {
    let err = resolve(&tokens(&["^A", "["]), true, false, &installed()).unwrap_err();
    assert!(matches!(err, PkgrmError::InvalidRegex(_)));
}

#[test]
fn all_mode_alone_equals_installed_snapshot() {
    let out = resolve(&[], false, true, &installed()).unwrap();
    assert_eq!(out, installed());
}

#[test]
fn all_mode_keeps_installed_order_after_literals() {
    let out = resolve(&tokens(&["Beta"]), false, true, &installed()).unwrap();
    assert_eq!(out, tokens(&["Beta", "Alpha", "Gamma"]));

    let as_set: HashSet<&String> = out.iter().collect();
    let snapshot = installed();
    assert_eq!(as_set, snapshot.iter().collect());
}

#[test]
fn all_mode_combines_with_patterns() {
    let out = resolve(&tokens(&["^A"]), true, true, &installed()).unwrap();
    assert_eq!(out, tokens(&["Alpha", "Beta", "Gamma"]));
}

#[test]
fn duplicate_literals_resolve_once() {
    let out = resolve(&tokens(&["Beta", "Beta"]), false, false, &installed()).unwrap();
    assert_eq!(out, tokens(&["Beta"]));
}

#[test]
fn overlap_between_modes_resolves_once() {
    // ".*" matches everything and --all re-adds everything; each name
    // must still appear exactly once.
    let out = resolve(&tokens(&[".*"]), true, true, &installed()).unwrap();
    assert_eq!(out, installed());
}

#[test]
fn resolution_is_idempotent() {
    let request = tokens(&["^A", "Gamma"]);
    let first = resolve(&request, true, true, &installed()).unwrap();
    let second = resolve(&request, true, true, &installed()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_selection_is_ok_not_error() {
    let out = resolve(&[], false, false, &installed()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn empty_token_is_rejected() {
    let err = resolve(&tokens(&[""]), false, false, &installed()).unwrap_err();
    assert!(matches!(err, PkgrmError::Other(_)));
}
