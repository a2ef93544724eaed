//! Check that a content file is installable on a platform.

use {
    skillport_discovery::frontmatter,
    skillport_platforms::{Platform, PlatformRegistry},
};

/// Problems that would stop `content` from loading on `platform`. Empty
/// when the file is fine.
pub fn validate_for_platform(content: &str, platform: Platform) -> Vec<String> {
    if !frontmatter::starts_with_delimiter(content) {
        return vec!["Content must have YAML frontmatter".to_string()];
    }
    if !frontmatter::has_block(content) {
        return vec!["Invalid frontmatter: missing closing ---".to_string()];
    }

    let doc = frontmatter::parse(content);
    if doc.metadata.is_empty() && !content_has_empty_block(content) {
        return vec!["Invalid frontmatter: not a YAML mapping".to_string()];
    }

    PlatformRegistry::builtin()
        .schema(platform)
        .required_fields
        .iter()
        .filter(|field| {
            doc.metadata
                .get(**field)
                .is_none_or(serde_yaml::Value::is_null)
        })
        .map(|field| format!("Frontmatter must include '{field}' field"))
        .collect()
}

/// `---` immediately followed by `---` (possibly with blank lines between).
fn content_has_empty_block(content: &str) -> bool {
    content
        .lines()
        .skip(1)
        .take_while(|line| line.trim_end() != "---")
        .all(|line| line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[test]
    fn valid_claude_agent() {
        let content = "---\nname: a\ndescription: d\n---\nbody";
        assert!(validate_for_platform(content, Platform::Claude).is_empty());
    }

    #[rstest]
    #[case("no frontmatter", "Content must have YAML frontmatter")]
    #[case("---\nname: a\n", "Invalid frontmatter: missing closing ---")]
    #[case("---\n- a\n---\n", "Invalid frontmatter: not a YAML mapping")]
    fn structural_errors(#[case] content: &str, #[case] expected: &str) {
        assert_eq!(validate_for_platform(content, Platform::Claude), vec![expected]);
    }

    #[test]
    fn reports_each_missing_field() {
        assert_eq!(validate_for_platform("---\n---\n", Platform::Copilot), vec![
            "Frontmatter must include 'name' field",
            "Frontmatter must include 'tools' field",
        ]);
        assert_eq!(
            validate_for_platform("---\nname: a\ndescription: ~\n---\n", Platform::Claude),
            vec!["Frontmatter must include 'description' field"]
        );
    }

    #[test]
    fn vscode_needs_only_tools() {
        assert!(validate_for_platform("---\ntools: []\n---\n", Platform::VsCode).is_empty());
    }
}
