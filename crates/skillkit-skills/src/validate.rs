//! Manifest validation shared by `quick-validate` and `package-skill`.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use skillkit_types::{
    Frontmatter, MANIFEST_FILE, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, REQUIRED_KEYS,
    ValidationReport,
};

use crate::error::ValidationError;
use crate::frontmatter::parse_frontmatter;

static NAME_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("skill name regex"));

/// Validate the skill bundle rooted at `skill_path`.
///
/// Checks run in a fixed order and the first failure is returned. On success
/// the parsed frontmatter is handed back to the caller.
pub fn validate_skill(skill_path: &Path) -> Result<Frontmatter, ValidationError> {
    let manifest = skill_path.join(MANIFEST_FILE);
    if !manifest.is_file() {
        return Err(ValidationError::MissingManifest);
    }

    let content = std::fs::read_to_string(&manifest).map_err(ValidationError::ReadManifest)?;
    let frontmatter = parse_frontmatter(&content)?;
    check_frontmatter(&frontmatter)?;

    tracing::debug!(
        path = %skill_path.display(),
        keys = frontmatter.len(),
        "Skill manifest is valid"
    );
    Ok(frontmatter)
}

/// Validate a skill bundle and fold the outcome into a report.
pub fn quick_validate(skill_path: &Path) -> ValidationReport {
    match validate_skill(skill_path) {
        Ok(_) => ValidationReport::valid(),
        Err(e) => ValidationReport::invalid(e.to_string()),
    }
}

/// Check parsed frontmatter against the manifest schema.
pub fn check_frontmatter(frontmatter: &Frontmatter) -> Result<(), ValidationError> {
    let unknown = frontmatter.unknown_keys();
    if !unknown.is_empty() {
        return Err(ValidationError::UnknownKey(
            unknown.into_iter().map(str::to_string).collect(),
        ));
    }

    for &key in REQUIRED_KEYS {
        if !frontmatter.contains_key(key) {
            return Err(ValidationError::MissingRequiredKey(key));
        }
    }

    let name = frontmatter.name().unwrap_or_default().trim();
    if !name.is_empty() {
        check_name(name)?;
    }

    let description = frontmatter.description().unwrap_or_default().trim();
    if !description.is_empty() {
        check_description(description)?;
    }

    Ok(())
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if !NAME_CHARSET_RE.is_match(name) {
        return Err(ValidationError::InvalidNameCharset(name.to_string()));
    }
    if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        return Err(ValidationError::InvalidNameHyphenation(name.to_string()));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong(len));
    }
    Ok(())
}

fn check_description(description: &str) -> Result<(), ValidationError> {
    if description.contains(['<', '>']) {
        return Err(ValidationError::DescriptionHasAngleBrackets);
    }
    // UTF-16 code units, so astral characters count twice.
    let len = description.encode_utf16().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong(len));
    }
    Ok(())
}
