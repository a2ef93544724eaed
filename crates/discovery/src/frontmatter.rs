//! YAML frontmatter: the `---`-delimited metadata block at the top of a
//! markdown content file.
//!
//! Parsing never fails. Text without a well-formed block comes back as
//! empty metadata plus the original text as body, so callers decide what a
//! missing block means for them.

use serde_yaml::{Mapping, Value};

use crate::error::Result;

/// Frontmatter key/value pairs, in file order.
pub type Metadata = Mapping;

const DELIMITER: &str = "---";

/// A content file split into metadata and body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub metadata: Metadata,
    pub body: String,
}

impl Document {
    fn unparsed(content: &str) -> Self {
        Self {
            metadata: Metadata::new(),
            body: content.to_string(),
        }
    }

    /// A string-valued field, if present.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        get_str(&self.metadata, key)
    }
}

/// Split `content` into frontmatter and body.
pub fn parse(content: &str) -> Document {
    let Some((block, body)) = split(content) else {
        return Document::unparsed(content);
    };
    match parse_block(block) {
        Some(metadata) => Document {
            metadata,
            body: body.to_string(),
        },
        None => Document::unparsed(content),
    }
}

/// Serialize metadata and body back into a content file.
///
/// Empty metadata renders the body alone, without an empty block.
pub fn render(metadata: &Metadata, body: &str) -> Result<String> {
    if metadata.is_empty() {
        return Ok(body.to_string());
    }
    let yaml = serde_yaml::to_string(metadata)?;
    Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n\n{body}"))
}

/// A string-valued field, if present. Non-string values count as absent.
pub fn get_str<'a>(metadata: &'a Metadata, key: &str) -> Option<&'a str> {
    metadata.get(key).and_then(Value::as_str)
}

/// Insert or replace a string field, keeping its position if it existed.
pub fn set_str(metadata: &mut Metadata, key: &str, value: impl Into<String>) {
    metadata.insert(Value::String(key.to_string()), Value::String(value.into()));
}

/// Whether the block could be located at all: an opening delimiter line
/// followed somewhere by a closing one.
pub fn has_block(content: &str) -> bool {
    split(content).is_some()
}

/// Whether `content` opens with a delimiter line.
pub fn starts_with_delimiter(content: &str) -> bool {
    content
        .split_inclusive('\n')
        .next()
        .is_some_and(|line| line.trim_end() == DELIMITER)
}

/// Locate the block between the opening and closing delimiter lines.
/// Returns `(block, body)` with leading blank lines stripped from the body.
fn split(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let block = &content[block_start..offset];
            let body = &content[offset + line.len()..];
            return Some((block, body.trim_start_matches(['\r', '\n'])));
        }
        offset += line.len();
    }
    None
}

fn parse_block(block: &str) -> Option<Metadata> {
    if block.trim().is_empty() {
        return Some(Metadata::new());
    }
    match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Mapping(mapping)) => Some(mapping),
        Ok(Value::Null) => Some(Metadata::new()),
        Ok(_) => {
            tracing::debug!("frontmatter is not a mapping, ignoring it");
            None
        },
        Err(e) => {
            tracing::debug!(%e, "invalid frontmatter yaml, ignoring it");
            None
        },
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[test]
    fn parses_name_and_description() {
        let doc = parse("---\nname: analyst\ndescription: Research specialist\n---\n\n# Analyst\n");
        assert_eq!(doc.get_str("name"), Some("analyst"));
        assert_eq!(doc.get_str("description"), Some("Research specialist"));
        assert_eq!(doc.body, "# Analyst\n");
    }

    #[test]
    fn keeps_list_values() {
        let doc = parse("---\ntools:\n  - read\n  - edit\n---\nbody");
        let tools = doc.metadata.get("tools").unwrap().as_sequence().unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(doc.get_str("tools"), None);
    }

    #[test]
    fn empty_file() {
        assert_eq!(parse(""), Document::default());
    }

    #[test]
    fn empty_block_keeps_body() {
        let doc = parse("---\n---\nJust the body.\n");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "Just the body.\n");
    }

    #[rstest]
    #[case("# No frontmatter\nJust markdown.")]
    #[case("---\nname: test\nno closing\n")]
    #[case("---\nname: [unclosed\n---\nbody\n")]
    #[case("---\n- a\n- b\n---\nlist, not a mapping\n")]
    #[case("---")]
    #[case("----\nname: x\n----\n")]
    #[case("\n---\nname: late\n---\n")]
    fn malformed_or_missing_block_is_body(#[case] content: &str) {
        let doc = parse(content);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn crlf_line_endings() {
        let doc = parse("---\r\nname: win\r\n---\r\n\r\nbody\r\n");
        assert_eq!(doc.get_str("name"), Some("win"));
        assert_eq!(doc.body, "body\r\n");
    }

    #[test]
    fn horizontal_rule_in_body_is_not_a_delimiter() {
        let doc = parse("---\nname: x\n---\nintro\n\n---\n\nmore\n");
        assert_eq!(doc.get_str("name"), Some("x"));
        assert_eq!(doc.body, "intro\n\n---\n\nmore\n");
    }

    #[test]
    fn render_round_trips_through_parse() {
        let doc = parse("---\nname: test\ndescription: Test agent\n---\n\n# Body\n");
        let rendered = render(&doc.metadata, &doc.body).unwrap();
        assert!(rendered.starts_with("---\nname: test\n"));
        assert!(rendered.contains("---\n\n# Body\n"));
        assert_eq!(parse(&rendered), doc);
    }

    #[test]
    fn render_without_metadata_is_body() {
        assert_eq!(render(&Metadata::new(), "# Body").unwrap(), "# Body");
    }

    #[test]
    fn set_str_replaces_in_place() {
        let mut doc = parse("---\nname: a\nmodel: sonnet\n---\n");
        set_str(&mut doc.metadata, "name", "b");
        let keys: Vec<_> = doc
            .metadata
            .iter()
            .map(|(k, _)| k.as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["name", "model"]);
        assert_eq!(doc.get_str("name"), Some("b"));
    }

    #[test]
    fn block_detection() {
        assert!(has_block("---\nname: x\n---\n"));
        assert!(!has_block("---\nname: x\n"));
        assert!(starts_with_delimiter("---\nname: x\n"));
        assert!(!starts_with_delimiter("name: x\n"));
    }
}
