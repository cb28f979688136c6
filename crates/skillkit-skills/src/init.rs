//! Skill scaffolding from the fixed templates.

use std::fs;
use std::path::{Path, PathBuf};

use skillkit_types::{MANIFEST_FILE, ScriptKind, TemplateLocale};

use crate::error::InitError;
use crate::paths;
use crate::templates::{self, EXAMPLE_ASSET, EXAMPLE_REFERENCE};

/// Template choices for a new skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitOptions {
    pub locale: TemplateLocale,
    pub script: ScriptKind,
}

/// A single artifact created by [`init_skill`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitStep {
    /// The skill directory itself (absolute path).
    CreatedDirectory(PathBuf),
    /// A file, relative to the skill directory with `/` separators.
    CreatedFile(String),
}

/// Create `<path>/<skill_name>/` populated from the templates.
///
/// Each artifact is reported to `on_step` right after it is written. Nothing
/// is rolled back on failure: files written before the failing step stay on
/// disk. The skill name is not validated here.
pub fn init_skill(
    skill_name: &str,
    path: &Path,
    options: &InitOptions,
    mut on_step: impl FnMut(&InitStep),
) -> Result<PathBuf, InitError> {
    let skill_dir = paths::absolute(&path.join(skill_name)).map_err(InitError::ResolvePath)?;

    if skill_dir.is_dir() {
        return Err(InitError::AlreadyExists(skill_dir));
    }

    create_dir(&skill_dir)?;
    tracing::debug!(path = %skill_dir.display(), "Created skill directory");
    on_step(&InitStep::CreatedDirectory(skill_dir.clone()));

    let skill_title = templates::title_case(skill_name);
    let render = |template: &str| templates::render(template, skill_name, &skill_title);

    let script_file = format!("scripts/{}", options.script.file_name());
    let files = [
        (
            MANIFEST_FILE.to_string(),
            render(templates::skill_manifest(options.locale)),
        ),
        (script_file.clone(), render(templates::example_script(options.script))),
        (
            "references/api_reference.md".to_string(),
            render(EXAMPLE_REFERENCE),
        ),
        ("assets/example_asset.txt".to_string(), EXAMPLE_ASSET.to_string()),
    ];

    for (relative, content) in files {
        let target = skill_dir.join(&relative);
        if let Some(parent) = target.parent() {
            create_dir(parent)?;
        }
        fs::write(&target, content).map_err(|source| InitError::WriteFile {
            file: relative.clone(),
            source,
        })?;

        if relative == script_file && options.script.is_executable() {
            mark_executable(&target).map_err(|source| InitError::WriteFile {
                file: relative.clone(),
                source,
            })?;
        }

        tracing::debug!(file = %relative, "Created skill file");
        on_step(&InitStep::CreatedFile(relative));
    }

    Ok(skill_dir)
}

fn create_dir(path: &Path) -> Result<(), InitError> {
    fs::create_dir_all(path).map_err(|source| InitError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
