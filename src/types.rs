//! Skilldock - Type Definitions
//!
//! Shared types for the install planner: scopes, targets, skills, actions,
//! and the plans the planner emits.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ─── Scope ───────────────────────────────────────────────────────

/// Where a skill gets installed: shared across projects (rooted at the
/// user's home directory) or local to the current working directory.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    User,
    Project,
}

// ─── Actions ─────────────────────────────────────────────────────

/// Requested per-skill action. `Skip` and `Keep` never produce an
/// operation: `Skip` means "do nothing", `Keep` means "leave the existing
/// install untouched".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillAction {
    Skip,
    Keep,
    Install,
    Update,
    Uninstall,
}

/// Look up the requested action for a skill directory name.
///
/// A missing entry means `Skip`: no entry, no operation.
pub fn action_for(actions: &HashMap<String, SkillAction>, dir_name: &str) -> SkillAction {
    actions.get(dir_name).copied().unwrap_or(SkillAction::Skip)
}

// ─── Targets ─────────────────────────────────────────────────────

/// One CLI tool's skill-integration convention: where skills live at user
/// and project scope, expressed as path templates with a `{skill}`
/// placeholder.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CLITarget {
    pub name: String,
    /// Home-relative install template. Empty means the tool has no
    /// per-user install location.
    #[serde(default)]
    pub user_path_tpl: String,
    /// Cwd-relative install template.
    pub project_path_tpl: String,
    /// The tool has no meaningful per-user installation location.
    #[serde(default)]
    pub project_only: bool,
    /// Directory name whose presence marks the tool as set up.
    pub detect_dir: String,
}

// ─── Skills ──────────────────────────────────────────────────────

/// A discovered skill package, identified by the directory it lives in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillInfo {
    pub dir_name: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// ─── Plans ───────────────────────────────────────────────────────

/// One pending filesystem operation: apply `action` for `skill` at the
/// resolved install directory of a (target, scope) pair.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub skill: SkillInfo,
    pub target_name: String,
    pub scope: Scope,
    pub action: SkillAction,
    /// Fully resolved destination directory (`{skill}` already expanded).
    pub dest: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_for_missing_entry_is_skip() {
        let actions = HashMap::new();
        assert_eq!(action_for(&actions, "anything"), SkillAction::Skip);
    }

    #[test]
    fn test_action_for_present_entry() {
        let mut actions = HashMap::new();
        actions.insert("alpha-skill".to_string(), SkillAction::Install);
        assert_eq!(action_for(&actions, "alpha-skill"), SkillAction::Install);
        assert_eq!(action_for(&actions, "other"), SkillAction::Skip);
    }
}
