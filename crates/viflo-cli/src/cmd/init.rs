use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};
use viflo_core::{
    instructions, paths, scaffold,
    settings::{self, default_settings},
    skills::{self, FsListing},
    VifloError, WriteOutcome, WriteStatus,
};

use crate::output;

const LABEL_WIDTH: usize = 8;
const DRY_RUN_LABEL_WIDTH: usize = 20;

pub const NEXT_HINT: &str =
    "Next: edit .planning/PROJECT.md and run /gsd:new-project to plan your first milestone.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitMode {
    Minimal,
    Full,
}

pub struct InitOptions {
    pub mode: InitMode,
    pub dry_run: bool,
    pub json: bool,
    /// Where skills are discovered. Defaults to the viflo installation root.
    pub skills_root: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Created,
    Merged,
    Updated,
    Skipped,
    WouldCreate,
    WouldMerge,
    WouldUpdate,
    WouldSkip,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Created => "created",
            Label::Merged => "merged",
            Label::Updated => "updated",
            Label::Skipped => "skipped",
            Label::WouldCreate => "[dry-run] would create",
            Label::WouldMerge => "[dry-run] would merge",
            Label::WouldUpdate => "[dry-run] would update",
            Label::WouldSkip => "[dry-run] would skip",
        }
    }

    fn is_dry_run(self) -> bool {
        matches!(
            self,
            Label::WouldCreate | Label::WouldMerge | Label::WouldUpdate | Label::WouldSkip
        )
    }

    /// Instructions are merged, not overwritten, so an update reads as `merged`.
    fn for_instructions(status: WriteStatus) -> Self {
        match status {
            WriteStatus::Created => Label::Created,
            WriteStatus::Updated => Label::Merged,
            WriteStatus::Skipped => Label::Skipped,
        }
    }
}

impl From<WriteStatus> for Label {
    fn from(status: WriteStatus) -> Self {
        match status {
            WriteStatus::Created => Label::Created,
            WriteStatus::Updated => Label::Updated,
            WriteStatus::Skipped => Label::Skipped,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub label: Label,
    pub path: PathBuf,
}

impl ReportEntry {
    fn new(label: Label, path: PathBuf) -> Self {
        Self { label, path }
    }

    fn line(&self) -> String {
        let width = if self.label.is_dry_run() {
            DRY_RUN_LABEL_WIDTH
        } else {
            LABEL_WIDTH
        };
        output::status_line(self.label.as_str(), width, &self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub created: usize,
    pub skipped: usize,
}

impl Summary {
    fn tally(entries: &[ReportEntry]) -> Self {
        let skipped = entries
            .iter()
            .filter(|e| e.label == Label::Skipped)
            .count();
        Self {
            created: entries.len() - skipped,
            skipped,
        }
    }

    /// Every artifact was written fresh in this run.
    pub fn first_run(&self) -> bool {
        self.skipped == 0
    }

    pub fn line(&self) -> String {
        format!(
            "Done. {} created, {} skipped.",
            output::plural(self.created, "file"),
            self.skipped
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InitReport {
    pub target: PathBuf,
    pub mode: InitMode,
    pub dry_run: bool,
    pub entries: Vec<ReportEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl InitReport {
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.entries.iter().map(ReportEntry::line).collect();
        if let Some(summary) = &self.summary {
            lines.push(String::new());
            lines.push(summary.line());
            if summary.first_run() {
                lines.push(String::new());
                lines.push(NEXT_HINT.to_string());
            }
        }
        lines
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// `viflo init`: merge viflo scaffolding into `target`.
///
/// The target must already be a directory; that check precedes all other
/// work in both dry and real runs.
pub fn run(target: &Path, opts: &InitOptions) -> anyhow::Result<()> {
    if !target.is_dir() {
        return Err(VifloError::DirectoryNotFound(target.to_path_buf()).into());
    }

    tracing::info!(dir = %target.display(), mode = ?opts.mode, dry_run = opts.dry_run, "viflo init");

    let report = if opts.dry_run {
        plan(target, opts.mode)?
    } else {
        let skills_root = opts
            .skills_root
            .clone()
            .unwrap_or_else(paths::resolve_install_root);
        apply(target, opts.mode, &skills_root)?
    };

    if opts.json {
        output::print_json(&report)?;
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }
    Ok(())
}

/// Label every artifact by existence check only. Reads and writes nothing.
pub fn plan(target: &Path, mode: InitMode) -> anyhow::Result<InitReport> {
    let instructions_path = paths::instructions_path(target)?;
    let settings_path = paths::settings_path(target)?;

    let mut entries = vec![
        ReportEntry::new(
            if instructions_path.exists() {
                Label::WouldMerge
            } else {
                Label::WouldCreate
            },
            instructions_path,
        ),
        ReportEntry::new(
            if settings_path.exists() {
                Label::WouldUpdate
            } else {
                Label::WouldCreate
            },
            settings_path,
        ),
    ];

    if mode == InitMode::Full {
        for rel_path in scaffold::PLANNING_STUBS {
            let path = paths::resolve_target_path(target, [rel_path])?;
            let label = if path.exists() {
                Label::WouldSkip
            } else {
                Label::WouldCreate
            };
            entries.push(ReportEntry::new(label, path));
        }
    }

    Ok(InitReport {
        target: target.to_path_buf(),
        mode,
        dry_run: true,
        entries,
        summary: None,
    })
}

/// Write or merge every artifact for `mode` and collect the outcomes.
pub fn apply(target: &Path, mode: InitMode, skills_root: &Path) -> anyhow::Result<InitReport> {
    let references = skills::scan_skills(skills_root, &FsListing)
        .with_context(|| format!("failed to scan skills under {}", skills_root.display()))?;
    tracing::debug!(count = references.len(), "discovered skills");
    let inner = skills::render_references(&references);

    let instructions = match mode {
        InitMode::Minimal => instructions::write_instructions(target, &inner)?,
        InitMode::Full => instructions::write_instructions_template(target, &inner)?,
    };
    let settings = settings::write_settings(target, &default_settings())?;

    let mut entries = vec![
        entry(Label::for_instructions(instructions.status), instructions),
        entry(Label::from(settings.status), settings),
    ];

    let summary = if mode == InitMode::Full {
        for outcome in scaffold::write_scaffold(target)? {
            entries.push(entry(Label::from(outcome.status), outcome));
        }
        Some(Summary::tally(&entries))
    } else {
        None
    };

    Ok(InitReport {
        target: target.to_path_buf(),
        mode,
        dry_run: false,
        entries,
        summary,
    })
}

fn entry(label: Label, outcome: WriteOutcome) -> ReportEntry {
    tracing::debug!(status = %outcome.status, path = %outcome.path.display(), "artifact");
    ReportEntry::new(label, outcome.path)
}
