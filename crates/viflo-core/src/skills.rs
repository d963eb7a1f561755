use crate::error::Result;
use crate::paths;
use std::io;
use std::path::Path;

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Source of directory listings for the skill scanner.
pub trait SkillListing {
    /// Immediate children of `dir`, or `None` when `dir` does not exist.
    fn list(&self, dir: &Path) -> io::Result<Option<Vec<DirEntryInfo>>>;
}

/// Lists directories on the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsListing;

impl SkillListing for FsListing {
    fn list(&self, dir: &Path) -> io::Result<Option<Vec<DirEntryInfo>>> {
        let read_dir = match std::fs::read_dir(dir) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry?;
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type()?.is_dir(),
            });
        }
        Ok(Some(entries))
    }
}

/// Build `@<install_root>/.agent/skills/<name>/SKILL.md` reference lines, one
/// per skill directory, sorted lexicographically.
///
/// A missing skills directory is an empty skill set, not an error.
pub fn scan_skills(install_root: &Path, listing: &impl SkillListing) -> Result<Vec<String>> {
    let skills_dir = paths::skills_dir(install_root)?;
    let Some(entries) = listing.list(&skills_dir)? else {
        return Ok(Vec::new());
    };

    let mut lines: Vec<String> = entries
        .into_iter()
        .filter(|e| e.is_dir)
        .map(|e| {
            let skill_file = skills_dir.join(&e.name).join(paths::SKILL_FILE);
            format!("@{}", skill_file.display())
        })
        .collect();
    lines.sort();
    Ok(lines)
}

/// Join reference lines into the body of the sentinel block.
pub fn render_references(lines: &[String]) -> String {
    lines.join("\n")
}
