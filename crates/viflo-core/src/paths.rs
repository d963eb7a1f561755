use crate::error::{Result, VifloError};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Target-relative constants
// ---------------------------------------------------------------------------

pub const INSTRUCTIONS_FILE: &str = "CLAUDE.md";

pub const CLAUDE_DIR: &str = ".claude";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const PLANNING_DIR: &str = ".planning";
pub const PROJECT_MD: &str = ".planning/PROJECT.md";
pub const STATE_MD: &str = ".planning/STATE.md";
pub const ROADMAP_MD: &str = ".planning/ROADMAP.md";
pub const PLANNING_CONFIG: &str = ".planning/config.json";

// ---------------------------------------------------------------------------
// Install-relative constants
// ---------------------------------------------------------------------------

pub const SKILLS_DIR: &str = ".agent/skills";
pub const SKILL_FILE: &str = "SKILL.md";

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Root of the viflo installation.
///
/// An installed binary lives at `<root>/viflo` or `<root>/bin/viflo`; when
/// either directory next to the executable holds `.agent/skills`, that
/// directory is the root. Otherwise this falls back to the workspace two
/// levels above this crate's manifest, which is fixed at build time and only
/// meaningful for binaries run from the tree they were built in. Binaries
/// relocated without their skill library need `--skills-root`.
///
/// Never consults the current directory or the home directory.
pub fn resolve_install_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| install_root_near(&exe))
        .unwrap_or_else(build_time_root)
}

/// The first of the executable's directory and its parent that holds a
/// skill library.
fn install_root_near(exe: &Path) -> Option<PathBuf> {
    let dir = exe.parent()?;
    [Some(dir), dir.parent()]
        .into_iter()
        .flatten()
        .find(|candidate| candidate.join(SKILLS_DIR).is_dir())
        .map(Path::to_path_buf)
}

fn build_time_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Join `segments` onto an explicit base directory.
///
/// `base` must be non-empty and absolute; there is no fallback to ambient
/// process state.
pub fn resolve_target_path<I, S>(base: &Path, segments: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    if base.as_os_str().is_empty() {
        return Err(VifloError::InvalidArgument(
            "resolve_target_path: base directory is required".to_string(),
        ));
    }
    if !base.is_absolute() {
        return Err(VifloError::InvalidArgument(format!(
            "resolve_target_path: base directory must be absolute, got '{}'",
            base.display()
        )));
    }
    let mut path = base.to_path_buf();
    for segment in segments {
        path.push(segment);
    }
    Ok(path)
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn instructions_path(root: &Path) -> Result<PathBuf> {
    resolve_target_path(root, [INSTRUCTIONS_FILE])
}

pub fn settings_path(root: &Path) -> Result<PathBuf> {
    resolve_target_path(root, [CLAUDE_DIR, SETTINGS_FILE_NAME])
}

pub fn planning_dir(root: &Path) -> Result<PathBuf> {
    resolve_target_path(root, [PLANNING_DIR])
}

pub fn skills_dir(install_root: &Path) -> Result<PathBuf> {
    resolve_target_path(install_root, [SKILLS_DIR])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_root_is_absolute() {
        assert!(resolve_install_root().is_absolute());
    }

    #[test]
    fn build_time_root_holds_crates() {
        let root = build_time_root();
        assert!(root.is_absolute());
        assert!(root.join("crates").join("viflo-core").is_dir());
    }

    #[test]
    fn install_root_found_next_to_executable() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(SKILLS_DIR)).unwrap();
        let exe = dir.path().join("viflo");
        assert_eq!(install_root_near(&exe), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn install_root_found_above_bin_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(SKILLS_DIR)).unwrap();
        let exe = dir.path().join("bin").join("viflo");
        assert_eq!(install_root_near(&exe), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn install_root_without_skills_is_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let exe = dir.path().join("bin").join("viflo");
        assert_eq!(install_root_near(&exe), None);
    }

    #[test]
    fn joins_segments_onto_base() {
        let result =
            resolve_target_path(Path::new("/tmp/my-project"), [".claude", "settings.json"])
                .unwrap();
        assert_eq!(result, PathBuf::from("/tmp/my-project/.claude/settings.json"));
    }

    #[test]
    fn no_segments_returns_base() {
        let result = resolve_target_path(Path::new("/tmp/my-project"), [] as [&str; 0]).unwrap();
        assert_eq!(result, PathBuf::from("/tmp/my-project"));
    }

    #[test]
    fn empty_base_is_rejected() {
        let err = resolve_target_path(Path::new(""), ["foo"]).unwrap_err();
        assert!(matches!(err, VifloError::InvalidArgument(_)));
        assert!(err.to_string().contains("base directory is required"));
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = resolve_target_path(Path::new("my-project"), ["foo"]).unwrap_err();
        assert!(matches!(err, VifloError::InvalidArgument(_)));
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            instructions_path(root).unwrap(),
            PathBuf::from("/tmp/proj/CLAUDE.md")
        );
        assert_eq!(
            settings_path(root).unwrap(),
            PathBuf::from("/tmp/proj/.claude/settings.json")
        );
        assert_eq!(
            planning_dir(root).unwrap(),
            PathBuf::from("/tmp/proj/.planning")
        );
        assert_eq!(
            skills_dir(root).unwrap(),
            PathBuf::from("/tmp/proj/.agent/skills")
        );
    }
}
