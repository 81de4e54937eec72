//! The `tags` line and `properties` block shared by most entities

use std::fmt;

use super::writer::{quote, DslWriter};
use crate::model::{Properties, Tags};

/// `tags "a, b, c"`, nothing when there are no tags
pub(crate) fn write_tags(w: &mut DslWriter<'_>, tags: &Tags) -> fmt::Result {
    if tags.is_empty() {
        return Ok(());
    }
    w.line(&format!("tags {}", quote(&tags.joined())))
}

/// `properties { key "value" ... }` in key order, nothing when empty
pub(crate) fn write_properties(w: &mut DslWriter<'_>, properties: &Properties) -> fmt::Result {
    if properties.is_empty() {
        return Ok(());
    }
    w.open("properties")?;
    for (key, value) in properties.iter() {
        w.line(&format!("{} {}", property_key(key), quote(value)))?;
    }
    w.close()
}

/// Keys are bare words unless they contain whitespace or quotes
fn property_key(key: &str) -> String {
    if key.is_empty() || key.chars().any(|c| c.is_whitespace() || c == '"') {
        quote(key)
    } else {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RenderConfig;

    fn render(f: impl FnOnce(&mut DslWriter<'_>) -> fmt::Result) -> String {
        let mut out = String::new();
        let config = RenderConfig::default();
        f(&mut DslWriter::new(&mut out, &config)).unwrap();
        out
    }

    #[test]
    fn test_tags_line() {
        let tags: Tags = ["A", "A", "B"].into_iter().collect();
        assert_eq!(render(|w| write_tags(w, &tags)), "tags \"A, A, B\"\n");
        assert_eq!(render(|w| write_tags(w, &Tags::new())), "");
    }

    #[test]
    fn test_properties_block_sorted() {
        let props: Properties = [("zone", "b"), ("arch", "say \"x86\""), ("cost centre", "42")]
            .into_iter()
            .collect();
        assert_eq!(
            render(|w| write_properties(w, &props)),
            "properties {\n    arch \"say \\\"x86\\\"\"\n    \"cost centre\" \"42\"\n    zone \"b\"\n}\n"
        );
        assert_eq!(render(|w| write_properties(w, &Properties::new())), "");
    }
}
