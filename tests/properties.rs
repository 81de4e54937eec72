//! Property tests over naming and rendering

use std::collections::BTreeMap;

use proptest::prelude::*;
use rustructurizr::{identifier, render, Workspace};

// =================
// Strategies
// =================

/// Any printable text, including non-ASCII letters and digits
fn display_name_strategy() -> impl Strategy<Value = String> {
    "\\PC{0,24}"
}

fn property_pairs_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z]{1,8}", "[a-z ]{0,8}"), 0..8)
}

fn tag_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z ]{0,10}", 0..6)
}

/// Element count plus relationships between them, by index
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..8).prop_flat_map(|count| {
        (
            Just(count),
            prop::collection::vec((0..count, 0..count), 0..12),
        )
    })
}

// =================
// Checks
// =================

fn check_identifier_is_a_token(name: &str) -> Result<(), TestCaseError> {
    let token = identifier(name);
    prop_assert!(!token.is_empty(), "empty token for `{name}`");
    prop_assert!(token.is_ascii(), "token `{token}` for `{name}` is not ASCII");
    prop_assert!(
        token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
        "token `{token}` for `{name}` has a separator"
    );
    prop_assert!(
        !token.starts_with(|c: char| c.is_ascii_digit()),
        "token `{token}` for `{name}` starts with a digit"
    );
    prop_assert_eq!(token, identifier(name));
    Ok(())
}

fn check_tags_keep_call_order(tags: &[String]) -> Result<(), TestCaseError> {
    let mut workspace = Workspace::new("", "");
    let model = workspace.model_mut();
    let user = model.add_person("User", "");
    for tag in tags {
        model[user].with_tag(tag.as_str());
    }

    let stored: Vec<&str> = workspace.model()[user].tags().iter().collect();
    let expected: Vec<&str> = tags.iter().map(String::as_str).collect();
    prop_assert_eq!(stored, expected);

    let dsl = render(&workspace).map_err(|e| TestCaseError::fail(e.to_string()))?;
    if !tags.is_empty() {
        let line = format!("tags \"{}\"", tags.join(", "));
        prop_assert!(dsl.contains(&line), "missing `{line}` in\n{dsl}");
    }
    Ok(())
}

fn check_render_is_repeatable(count: usize, edges: &[(usize, usize)]) -> Result<(), TestCaseError> {
    let mut workspace = Workspace::new("Graph", "");
    let model = workspace.model_mut();
    let people: Vec<_> = (0..count)
        .map(|i| model.add_person(format!("Person {}", (b'a' + i as u8) as char), ""))
        .collect();
    for &(from, to) in edges {
        model.uses(people[from], people[to], "");
    }

    let first = render(&workspace).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let second = render(&workspace).map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(&first, &second);
    prop_assert_eq!(first.lines().filter(|l| l.contains(" -> ")).count(), edges.len());
    prop_assert_eq!(
        first.lines().filter(|l| l.contains(" = person ")).count(),
        count
    );
    Ok(())
}

fn check_properties_sorted(pairs: &[(String, String)]) -> Result<(), TestCaseError> {
    let mut workspace = Workspace::new("", "");
    let model = workspace.model_mut();
    for (key, value) in pairs {
        model.with_property(key.as_str(), value.as_str());
    }
    let expected: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let dsl = render(&workspace).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let lines: Vec<String> = dsl
        .lines()
        .skip_while(|l| l.trim() != "properties {")
        .skip(1)
        .take_while(|l| l.trim() != "}")
        .map(|l| l.trim().to_string())
        .collect();
    let wanted: Vec<String> = expected
        .iter()
        .map(|(k, v)| format!("{k} \"{v}\""))
        .collect();
    prop_assert_eq!(lines, wanted);
    Ok(())
}

// =================
// Proptest Wrappers
// =================

proptest! {
    #[test]
    fn identifiers_are_tokens(name in display_name_strategy()) {
        check_identifier_is_a_token(&name)?;
    }

    #[test]
    fn tags_keep_call_order(tags in tag_list_strategy()) {
        check_tags_keep_call_order(&tags)?;
    }

    #[test]
    fn render_is_repeatable((count, edges) in graph_strategy()) {
        check_render_is_repeatable(count, &edges)?;
    }

    #[test]
    fn properties_render_sorted(pairs in property_pairs_strategy()) {
        check_properties_sorted(&pairs)?;
    }
}
