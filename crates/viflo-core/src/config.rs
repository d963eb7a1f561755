use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Planning mode / depth / profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningMode {
    #[default]
    Interactive,
    Yolo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningDepth {
    Quick,
    #[default]
    Standard,
    Comprehensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelProfile {
    Quality,
    #[default]
    Balanced,
    Budget,
}

// ---------------------------------------------------------------------------
// WorkflowConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    #[serde(default)]
    pub research: bool,
    #[serde(default = "default_true")]
    pub plan_check: bool,
    #[serde(default = "default_true")]
    pub verifier: bool,
    #[serde(default)]
    pub auto_advance: bool,
}

fn default_true() -> bool {
    true
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            research: false,
            plan_check: true,
            verifier: true,
            auto_advance: false,
        }
    }
}

// ---------------------------------------------------------------------------
// ParallelizationConfig / GitConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelizationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ParallelizationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchingStrategy {
    #[default]
    None,
    Phase,
    Milestone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    #[serde(default = "default_true")]
    pub commit_docs: bool,
    #[serde(default)]
    pub branching_strategy: BranchingStrategy,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            commit_docs: true,
            branching_strategy: BranchingStrategy::None,
        }
    }
}

// ---------------------------------------------------------------------------
// PlanningConfig (top-level `.planning/config.json`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    #[serde(default)]
    pub mode: PlanningMode,
    #[serde(default)]
    pub depth: PlanningDepth,
    #[serde(default)]
    pub profile: ModelProfile,
    #[serde(default)]
    pub workflow: WorkflowConfig,
    #[serde(default)]
    pub parallelization: ParallelizationConfig,
    #[serde(default)]
    pub git: GitConfig,
}

impl PlanningConfig {
    /// Stub body written to `.planning/config.json`.
    pub fn to_json(&self) -> Result<String> {
        crate::settings::to_pretty_json(self)
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::resolve_target_path(root, [paths::PLANNING_CONFIG])?;
        let data = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
