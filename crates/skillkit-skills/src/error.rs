use std::path::PathBuf;

use skillkit_types::{ALLOWED_KEYS, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use thiserror::Error;

/// Reasons a skill bundle fails validation.
///
/// Variants are listed in the order the checks run. `Display` yields the
/// message shown to the user.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("SKILL.md not found")]
    MissingManifest,
    #[error("Failed to read SKILL.md: {0}")]
    ReadManifest(#[source] std::io::Error),
    #[error("No YAML frontmatter found")]
    MissingFrontmatter,
    #[error("Invalid frontmatter format")]
    MalformedFrontmatter,
    #[error(
        "Unexpected key(s) in SKILL.md frontmatter: {}. Allowed properties are: {}",
        .0.join(", "),
        ALLOWED_KEYS.join(", ")
    )]
    UnknownKey(Vec<String>),
    #[error("Missing '{0}' in frontmatter")]
    MissingRequiredKey(&'static str),
    #[error("Name '{0}' should be hyphen-case (lowercase letters, digits, and hyphens only)")]
    InvalidNameCharset(String),
    #[error("Name '{0}' cannot start/end with hyphen or contain consecutive hyphens")]
    InvalidNameHyphenation(String),
    #[error("Name is too long ({} characters). Maximum is {} characters.", .0, MAX_NAME_LEN)]
    NameTooLong(usize),
    #[error("Description cannot contain angle brackets (< or >)")]
    DescriptionHasAngleBrackets,
    #[error(
        "Description is too long ({} characters). Maximum is {} characters.",
        .0,
        MAX_DESCRIPTION_LEN
    )]
    DescriptionTooLong(usize),
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("Skill directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("Error resolving skill directory: {0}")]
    ResolvePath(#[source] std::io::Error),
    #[error("Error creating directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error creating {file}: {source}")]
    WriteFile {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Skill folder not found: {}", .0.display())]
    SkillNotFound(PathBuf),
    #[error("Skill folder has no name: {}", .0.display())]
    InvalidSkillPath(PathBuf),
    #[error("SKILL.md not found in {}", .0.display())]
    MissingManifest(PathBuf),
    #[error("Validation failed: {0}")]
    ValidationFailed(#[source] ValidationError),
    #[error("Error creating .skill file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error creating .skill file: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Error creating .skill file: {0}")]
    Archive(#[from] zip::result::ZipError),
}
