//! Progress lines printed by the binaries.

use std::path::Path;

use skillkit_skills::{InitError, InitStep, PackageError, PackageStep};

pub const OK: &str = "✅";
pub const FAIL: &str = "❌";

pub fn init_step_line(step: &InitStep) -> String {
    match step {
        InitStep::CreatedDirectory(path) => {
            format!("{OK} Created skill directory: {}", path.display())
        }
        InitStep::CreatedFile(file) => format!("{OK} Created {file}"),
    }
}

pub fn package_step_line(step: &PackageStep) -> String {
    match step {
        PackageStep::Validating => "🔍 Validating skill...".to_string(),
        PackageStep::Validated(message) => format!("{OK} {message}\n"),
        PackageStep::Added(entry) => format!("  Added: {entry}"),
    }
}

/// Closing block printed after a successful `init-skill`.
pub fn init_summary(skill_name: &str, skill_dir: &Path) -> String {
    format!(
        "\n{OK} Skill '{skill_name}' initialized successfully at {}\n\
         \n\
         Next steps:\n\
         1. Edit SKILL.md to complete the TODO items and update the description\n\
         2. Customize or delete the example files in scripts/, references/, and assets/\n\
         3. Run quick-validate when ready to check the skill structure",
        skill_dir.display()
    )
}

/// Failure line for `init-skill`.
pub fn init_error_line(err: &InitError) -> String {
    match err {
        InitError::AlreadyExists(_) => format!("{FAIL} Error: {err}"),
        // These messages already open with "Error ...".
        InitError::ResolvePath(_) | InitError::CreateDir { .. } | InitError::WriteFile { .. } => {
            format!("{FAIL} {err}")
        }
    }
}

/// Failure lines for `package-skill`.
pub fn package_error_line(err: &PackageError) -> String {
    match err {
        PackageError::SkillNotFound(_)
        | PackageError::InvalidSkillPath(_)
        | PackageError::MissingManifest(_) => format!("{FAIL} Error: {err}"),
        PackageError::ValidationFailed(e) => format!(
            "{FAIL} Validation failed: {e}\n   Please fix the validation errors before packaging."
        ),
        PackageError::Io(_) | PackageError::Walk(_) | PackageError::Archive(_) => {
            format!("{FAIL} {err}")
        }
    }
}
