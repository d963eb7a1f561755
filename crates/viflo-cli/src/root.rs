use std::path::{Component, Path, PathBuf};
use viflo_core::paths;

/// Resolve the directory `viflo init` operates on.
///
/// Priority:
/// 1. The positional path, joined onto `cwd` when relative
/// 2. `cwd`
///
/// `cwd` is captured once by `main` and passed in; nothing here reads
/// process state. `.` components are dropped so reported paths stay clean.
pub fn resolve_target(cwd: &Path, explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    let joined = match explicit {
        Some(p) => paths::resolve_target_path(cwd, [p])?,
        None => paths::resolve_target_path(cwd, [] as [&Path; 0])?,
    };
    Ok(joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}
