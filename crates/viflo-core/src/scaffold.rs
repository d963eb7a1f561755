use crate::config::PlanningConfig;
use crate::error::Result;
use crate::io::{self, WriteOutcome, WriteStatus};
use crate::paths;
use std::path::Path;

const PROJECT_MD_CONTENT: &str =
    "# Project\n\n## Goals\n\n## Stack\n\n## Architecture\n\n## Conventions\n";

const STATE_MD_CONTENT: &str = "\
# Project State

## Project Reference

See: .planning/PROJECT.md

## Current Position

Phase: \u{2014}
Plan: \u{2014}
Status: Not started

## Accumulated Context

### Key Decisions (summary)

### Pending Todos

### Blockers/Concerns

None.

## Session Continuity

Last session: \u{2014}
Stopped at: \u{2014}
Resume with: /gsd:new-project to plan your first phase
";

const ROADMAP_MD_CONTENT: &str = "\
# Roadmap

## Milestones

### \u{1F4CB} v1.0 MVP

## Phases

<!-- Example phase entry \u{2014} fill in your own below:
### Phase 1: Feature Name
**Goal**: What this phase achieves
**Depends on**: Phase 0
**Requirements**: REQ-01, REQ-02
**Plans**: TBD
-->

## Progress

| Phase | Plans Complete | Status | Completed |
|-------|----------------|--------|-----------|
";

/// Target-relative paths of the planning stubs, in report order.
pub const PLANNING_STUBS: [&str; 4] = [
    paths::PROJECT_MD,
    paths::STATE_MD,
    paths::ROADMAP_MD,
    paths::PLANNING_CONFIG,
];

/// Default body for one of [`PLANNING_STUBS`].
pub fn stub_content(rel_path: &str) -> Result<String> {
    let content = match rel_path {
        paths::PROJECT_MD => PROJECT_MD_CONTENT.to_string(),
        paths::STATE_MD => STATE_MD_CONTENT.to_string(),
        paths::ROADMAP_MD => ROADMAP_MD_CONTENT.to_string(),
        paths::PLANNING_CONFIG => PlanningConfig::default().to_json()?,
        other => {
            return Err(crate::VifloError::InvalidArgument(format!(
                "unknown planning stub: {other}"
            )))
        }
    };
    Ok(content)
}

/// Create any missing planning stubs under `<root>/.planning/`.
///
/// Existence alone decides: a stub that is already there is reported as
/// skipped without being read, whatever it contains.
pub fn write_scaffold(root: &Path) -> Result<Vec<WriteOutcome>> {
    io::ensure_dir(&paths::planning_dir(root)?)?;

    let mut outcomes = Vec::with_capacity(PLANNING_STUBS.len());
    for rel_path in PLANNING_STUBS {
        let path = paths::resolve_target_path(root, [rel_path])?;
        if path.exists() {
            outcomes.push(WriteOutcome::new(WriteStatus::Skipped, path));
            continue;
        }
        outcomes.push(io::write_if_changed(&path, &stub_content(rel_path)?)?);
    }
    Ok(outcomes)
}
