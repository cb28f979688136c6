//! Packaging of a validated skill directory into a `.skill` zip archive.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use skillkit_types::{ARCHIVE_EXTENSION, MANIFEST_FILE, VALID_MESSAGE};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::PackageError;
use crate::paths;
use crate::validate::validate_skill;

/// Progress reported by [`package_skill`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageStep {
    /// Pre-checks passed and validation is about to run.
    Validating,
    /// Validation passed; carries the validator's message.
    Validated(String),
    /// A file was added under this archive entry name.
    Added(String),
}

/// Validate the skill at `skill_path` and zip it into `<dir-name>.skill`.
///
/// The archive goes to `output_dir` (created if missing) or the current
/// directory. An existing archive with the same name is replaced. Entries are
/// rooted at the skill directory name and always use `/` separators.
///
/// On an I/O or archive failure the partially written archive is left in place.
pub fn package_skill(
    skill_path: &Path,
    output_dir: Option<&Path>,
    mut on_step: impl FnMut(&PackageStep),
) -> Result<PathBuf, PackageError> {
    let skill_dir = paths::absolute(skill_path)?;

    if !skill_dir.is_dir() {
        return Err(PackageError::SkillNotFound(skill_dir));
    }
    if !skill_dir.join(MANIFEST_FILE).is_file() {
        return Err(PackageError::MissingManifest(skill_dir));
    }

    on_step(&PackageStep::Validating);
    validate_skill(&skill_dir).map_err(PackageError::ValidationFailed)?;
    on_step(&PackageStep::Validated(VALID_MESSAGE.to_string()));

    let (Some(skill_name), Some(parent)) = (skill_dir.file_name(), skill_dir.parent()) else {
        return Err(PackageError::InvalidSkillPath(skill_dir));
    };

    let output_dir = match output_dir {
        Some(dir) => {
            let dir = paths::absolute(dir)?;
            fs::create_dir_all(&dir)?;
            dir
        }
        None => std::env::current_dir()?,
    };

    let mut archive_name = skill_name.to_os_string();
    archive_name.push(".");
    archive_name.push(ARCHIVE_EXTENSION);
    let archive_path = output_dir.join(archive_name);

    if archive_path.is_file() {
        tracing::debug!(path = %archive_path.display(), "Replacing existing archive");
        fs::remove_file(&archive_path)?;
    }

    let mut writer = ZipWriter::new(File::create(&archive_path)?);

    for entry in WalkDir::new(&skill_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path == archive_path {
            continue;
        }
        let Ok(relative) = path.strip_prefix(parent) else {
            continue;
        };
        let entry_name = paths::to_slash(relative);

        writer.start_file(entry_name.as_str(), file_options(path)?)?;
        let mut source = File::open(path)?;
        std::io::copy(&mut source, &mut writer)?;

        tracing::debug!(entry = %entry_name, "Added file to archive");
        on_step(&PackageStep::Added(entry_name));
    }

    writer.finish()?;
    tracing::debug!(path = %archive_path.display(), "Wrote skill archive");
    Ok(archive_path)
}

/// Deflate every entry; on unix keep the file's permission bits.
fn file_options(path: &Path) -> std::io::Result<SimpleFileOptions> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mode = fs::metadata(path)?.permissions().mode();
        Ok(options.unix_permissions(mode))
    }

    #[cfg(not(unix))]
    {
        let _ = path;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::io::Read;

    use super::*;
    use crate::error::ValidationError;
    use crate::init::{InitOptions, init_skill};

    const MANIFEST: &str = "---\nname: my-tool\ndescription: Packs things\n---\n# My Tool\n";

    fn write_skill(root: &Path, name: &str, manifest: &str) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(dir.join("scripts")).unwrap();
        fs::create_dir_all(dir.join("assets/img")).unwrap();
        fs::write(dir.join(MANIFEST_FILE), manifest).unwrap();
        fs::write(dir.join("scripts/run.sh"), "echo hi\n").unwrap();
        fs::write(dir.join("assets/img/logo.bin"), [0u8, 159, 146, 150, 255]).unwrap();
        dir
    }

    fn read_archive(path: &Path) -> BTreeMap<String, Vec<u8>> {
        let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut entries = BTreeMap::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i).unwrap();
            let mut buf = Vec::new();
            file.read_to_end(&mut buf).unwrap();
            entries.insert(file.name().to_string(), buf);
        }
        entries
    }

    fn package_collecting(
        skill: &Path,
        out: Option<&Path>,
    ) -> (Result<PathBuf, PackageError>, Vec<PackageStep>) {
        let mut steps = Vec::new();
        let result = package_skill(skill, out, |s| steps.push(s.clone()));
        (result, steps)
    }

    #[test]
    fn test_package_round_trip() {
        let root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let skill = write_skill(root.path(), "my-tool", MANIFEST);

        let (result, steps) = package_collecting(&skill, Some(out.path()));
        let archive = result.unwrap();
        assert_eq!(archive, out.path().join("my-tool.skill"));

        let entries = read_archive(&archive);
        let mut expected = BTreeMap::new();
        expected.insert("my-tool/SKILL.md".to_string(), MANIFEST.as_bytes().to_vec());
        expected.insert("my-tool/scripts/run.sh".to_string(), b"echo hi\n".to_vec());
        expected.insert(
            "my-tool/assets/img/logo.bin".to_string(),
            vec![0u8, 159, 146, 150, 255],
        );
        assert_eq!(entries, expected);

        assert_eq!(steps[0], PackageStep::Validating);
        assert_eq!(steps[1], PackageStep::Validated("Skill is valid!".into()));
        assert_eq!(
            steps[2..].to_vec(),
            vec![
                PackageStep::Added("my-tool/SKILL.md".into()),
                PackageStep::Added("my-tool/assets/img/logo.bin".into()),
                PackageStep::Added("my-tool/scripts/run.sh".into()),
            ]
        );
    }

    #[test]
    fn test_package_initialized_skill() {
        let root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let skill = init_skill("fresh-skill", root.path(), &InitOptions::default(), |_| {}).unwrap();

        let archive = package_skill(&skill, Some(out.path()), |_| {}).unwrap();
        let names: Vec<String> = read_archive(&archive).into_keys().collect();
        assert_eq!(
            names,
            vec![
                "fresh-skill/SKILL.md",
                "fresh-skill/assets/example_asset.txt",
                "fresh-skill/references/api_reference.md",
                "fresh-skill/scripts/Example.sh",
            ]
        );
    }

    #[test]
    fn test_package_invalid_skill_produces_no_archive() {
        let root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let skill = write_skill(root.path(), "bad", "---\nname: Bad\ndescription: x\n---\n");

        let (result, steps) = package_collecting(&skill, Some(out.path()));
        match result {
            Err(PackageError::ValidationFailed(ValidationError::InvalidNameCharset(name))) => {
                assert_eq!(name, "Bad");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(steps, vec![PackageStep::Validating]);
        assert!(!out.path().join("bad.skill").exists());
    }

    #[test]
    fn test_package_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let (result, _) = package_collecting(&root.path().join("ghost"), Some(root.path()));
        assert!(matches!(result, Err(PackageError::SkillNotFound(_))));
    }

    #[test]
    fn test_package_missing_manifest() {
        let root = tempfile::tempdir().unwrap();
        let skill = root.path().join("empty");
        fs::create_dir(&skill).unwrap();
        let (result, _) = package_collecting(&skill, Some(root.path()));
        let err = result.unwrap_err();
        assert!(matches!(err, PackageError::MissingManifest(_)));
        assert!(err.to_string().starts_with("SKILL.md not found in "));
    }

    #[test]
    fn test_package_replaces_existing_archive() {
        let root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let skill = write_skill(root.path(), "my-tool", MANIFEST);
        fs::write(out.path().join("my-tool.skill"), "stale").unwrap();

        let archive = package_skill(&skill, Some(out.path()), |_| {}).unwrap();
        assert_eq!(read_archive(&archive).len(), 3);
    }

    #[test]
    fn test_package_creates_output_directory() {
        let root = tempfile::tempdir().unwrap();
        let skill = write_skill(root.path(), "my-tool", MANIFEST);
        let out = root.path().join("dist/nested");

        let archive = package_skill(&skill, Some(&out), |_| {}).unwrap();
        assert!(out.is_dir());
        assert_eq!(archive, out.join("my-tool.skill"));
    }

    #[test]
    fn test_package_output_inside_skill_skips_itself() {
        let root = tempfile::tempdir().unwrap();
        let skill = write_skill(root.path(), "my-tool", MANIFEST);

        let archive = package_skill(&skill, Some(&skill), |_| {}).unwrap();
        let names: Vec<String> = read_archive(&archive).into_keys().collect();
        assert!(!names.iter().any(|n| n.ends_with(".skill")));
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_package_path_with_dot_segments() {
        let root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_skill(root.path(), "my-tool", MANIFEST);
        let dotted = root.path().join("my-tool/./scripts/..");

        let archive = package_skill(&dotted, Some(out.path()), |_| {}).unwrap();
        assert_eq!(archive, out.path().join("my-tool.skill"));
        assert!(read_archive(&archive).contains_key("my-tool/SKILL.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_package_keeps_unix_permissions() {
        let root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let skill = init_skill("perm-skill", root.path(), &InitOptions::default(), |_| {}).unwrap();

        let archive = package_skill(&skill, Some(out.path()), |_| {}).unwrap();
        let mut zip = zip::ZipArchive::new(File::open(&archive).unwrap()).unwrap();

        let script = zip.by_name("perm-skill/scripts/Example.sh").unwrap();
        assert_ne!(script.unix_mode().unwrap() & 0o111, 0);
        drop(script);

        let asset = zip.by_name("perm-skill/assets/example_asset.txt").unwrap();
        assert_eq!(asset.unix_mode().unwrap() & 0o111, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_package_walk_failure_leaves_partial_archive() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let skill = write_skill(root.path(), "my-tool", MANIFEST);
        let locked = skill.join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("secret.txt"), "x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits are not enforced for root.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let (result, steps) = package_collecting(&skill, Some(out.path()));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(err, PackageError::Walk(_)), "{err:?}");
        assert!(err.to_string().starts_with("Error creating .skill file: "));
        assert!(out.path().join("my-tool.skill").is_file());
        assert!(steps.contains(&PackageStep::Added("my-tool/SKILL.md".into())));
    }
}
