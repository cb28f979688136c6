//! Restricted frontmatter parser for `SKILL.md` manifests.
//!
//! This is deliberately not YAML. A line matching `key: value` (key pattern
//! `[a-z][a-z0-9-]*`) starts a new entry; any other non-blank line continues
//! the previous entry's value. Lists, nesting, and quoting are kept as plain
//! text.

use once_cell::sync::Lazy;
use regex::Regex;
use skillkit_types::Frontmatter;

use crate::error::ValidationError;

/// The `---` delimited block at the very start of the document.
static BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^---\r?\n(.*?)\r?\n---").expect("frontmatter block regex"));

static KEY_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z][a-z0-9-]*):\s*(.*)$").expect("frontmatter key regex"));

/// Extract and parse the frontmatter block of a manifest.
///
/// Fails with [`ValidationError::MissingFrontmatter`] when the document does not
/// open with `---`, and [`ValidationError::MalformedFrontmatter`] when no
/// closing delimiter follows. A leading UTF-8 byte-order mark is ignored.
pub fn parse_frontmatter(content: &str) -> Result<Frontmatter, ValidationError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    if !content.starts_with("---") {
        return Err(ValidationError::MissingFrontmatter);
    }

    let block = BLOCK_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .ok_or(ValidationError::MalformedFrontmatter)?;

    Ok(parse_block(block.as_str()))
}

/// Scan the inside of a frontmatter block into key/value pairs.
fn parse_block(block: &str) -> Frontmatter {
    let mut frontmatter = Frontmatter::new();
    let mut current: Option<(String, Vec<String>)> = None;

    for line in block.split('\n') {
        let line = line.trim_end_matches('\r');

        if let Some(caps) = KEY_LINE_RE.captures(line) {
            if let Some((key, parts)) = current.take() {
                frontmatter.insert(key, join_parts(&parts));
            }
            current = Some((caps[1].to_string(), vec![caps[2].trim().to_string()]));
        } else if let Some((_, parts)) = current.as_mut() {
            if !line.trim().is_empty() {
                parts.push(line.trim().to_string());
            }
        }
    }

    if let Some((key, parts)) = current {
        frontmatter.insert(key, join_parts(&parts));
    }

    frontmatter
}

fn join_parts(parts: &[String]) -> String {
    parts.join(" ").trim().to_string()
}
