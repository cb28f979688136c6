//! skillkit-types: Data model shared by the skill tooling crates.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ──────────────────── Manifest Constants ────────────────────

/// File name of the skill manifest inside a skill bundle.
pub const MANIFEST_FILE: &str = "SKILL.md";

/// File extension of packaged skill archives.
pub const ARCHIVE_EXTENSION: &str = "skill";

/// Frontmatter keys a manifest may declare, in ascending order.
pub const ALLOWED_KEYS: &[&str] = &["allowed-tools", "description", "license", "metadata", "name"];

/// Frontmatter keys every manifest must declare, in check order.
pub const REQUIRED_KEYS: &[&str] = &["name", "description"];

/// Maximum length of a skill name, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Maximum length of a skill description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// Message reported for a skill that passes every check.
pub const VALID_MESSAGE: &str = "Skill is valid!";

// ──────────────────── Frontmatter ────────────────────

/// Key/value pairs parsed from the `---` block at the top of `SKILL.md`.
///
/// Keys iterate in ascending order. A key declared twice keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter {
    fields: BTreeMap<String, String>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Skill name, if declared.
    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    /// Skill description, if declared.
    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    /// All declared keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Declared keys outside [`ALLOWED_KEYS`], in ascending order.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.keys().filter(|k| !ALLOWED_KEYS.contains(k)).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ──────────────────── Validation Report ────────────────────

/// Outcome of validating a skill bundle: a verdict plus a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub message: String,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: VALID_MESSAGE.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

// ──────────────────── Template Options ────────────────────

/// Language of the example script written into `scripts/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptKind {
    #[default]
    #[serde(rename = "sh")]
    Shell,
    #[serde(rename = "py")]
    Python,
    #[serde(rename = "cs")]
    CSharp,
}

impl ScriptKind {
    /// File extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ScriptKind::Shell => "sh",
            ScriptKind::Python => "py",
            ScriptKind::CSharp => "cs",
        }
    }

    /// File name of the example script, e.g. `Example.sh`.
    pub fn file_name(self) -> String {
        format!("Example.{}", self.extension())
    }

    /// Whether the written script should carry the executable bit.
    pub fn is_executable(self) -> bool {
        matches!(self, ScriptKind::Shell | ScriptKind::Python)
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ScriptKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sh" | "shell" | "bash" => Ok(ScriptKind::Shell),
            "py" | "python" => Ok(ScriptKind::Python),
            "cs" | "csharp" | "dotnet" => Ok(ScriptKind::CSharp),
            other => Err(format!("unknown script kind '{other}' (expected sh, py or cs)")),
        }
    }
}

/// Language of the placeholder text in generated files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateLocale {
    #[default]
    En,
    Ko,
}

impl fmt::Display for TemplateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateLocale::En => f.write_str("en"),
            TemplateLocale::Ko => f.write_str("ko"),
        }
    }
}

impl FromStr for TemplateLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(TemplateLocale::En),
            "ko" => Ok(TemplateLocale::Ko),
            other => Err(format!("unknown locale '{other}' (expected en or ko)")),
        }
    }
}
