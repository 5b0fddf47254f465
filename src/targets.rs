//! Target Catalog
//!
//! Built-in CLI tool integrations, optional JSON-defined extras, and the
//! path-template plumbing for resolving a target's install directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::env::Env;
use crate::types::{CLITarget, Scope};

/// Placeholder substituted with the skill's directory name.
pub const SKILL_PLACEHOLDER: &str = "{skill}";

// ---------------------------------------------------------------------------
// Template resolution
// ---------------------------------------------------------------------------

impl CLITarget {
    /// The install path template for `scope`, or `None` if the target
    /// does not support that scope.
    pub fn path_template(&self, scope: Scope) -> Option<&str> {
        let tpl = match scope {
            Scope::User => {
                if self.project_only {
                    return None;
                }
                &self.user_path_tpl
            }
            Scope::Project => &self.project_path_tpl,
        };
        if tpl.is_empty() {
            None
        } else {
            Some(tpl)
        }
    }

    /// The target's install rule for `scope`: the template rooted at home
    /// (user scope) or the working directory (project scope), `{skill}`
    /// left unexpanded.
    ///
    /// `None` when the scope is unsupported or the root directory cannot
    /// be determined.
    pub fn scope_rule(&self, scope: Scope, env: &dyn Env) -> Option<PathBuf> {
        let tpl = self.path_template(scope)?;
        let root = match scope {
            Scope::User => env.home_dir()?,
            Scope::Project => env.cwd()?,
        };
        Some(root.join(tpl))
    }

    /// Fully resolved install directory for one skill at one scope.
    pub fn install_dir(&self, scope: Scope, skill_dir: &str, env: &dyn Env) -> Option<PathBuf> {
        let rule = self.scope_rule(scope, env)?;
        let expanded = rule.to_string_lossy().replace(SKILL_PLACEHOLDER, skill_dir);
        Some(PathBuf::from(expanded))
    }

    /// Whether the tool looks set up on this machine: its `detect_dir`
    /// exists under home or under the current working directory.
    pub fn detected(&self, env: &dyn Env) -> bool {
        let under = |root: Option<PathBuf>| {
            root.map(|r| r.join(&self.detect_dir).is_dir())
                .unwrap_or(false)
        };
        under(env.home_dir()) || under(env.cwd())
    }
}

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

/// The built-in integration catalog.
///
/// Windsurf installs are project-local only; the other tools mirror the
/// same layout under home and under the project directory.
pub fn builtin_targets() -> Vec<CLITarget> {
    vec![
        make(
            "Claude Code",
            ".claude/skills/{skill}",
            ".claude/skills/{skill}",
            false,
            ".claude",
        ),
        make(
            "Codex",
            ".codex/skills/{skill}",
            ".codex/skills/{skill}",
            false,
            ".codex",
        ),
        make(
            "Cursor",
            ".cursor/skills/{skill}",
            ".cursor/skills/{skill}",
            false,
            ".cursor",
        ),
        make(
            "Gemini CLI",
            ".gemini/skills/{skill}",
            ".gemini/skills/{skill}",
            false,
            ".gemini",
        ),
        make("Windsurf", "", ".windsurf/skills/{skill}", true, ".windsurf"),
    ]
}

fn make(
    name: &str,
    user_tpl: &str,
    project_tpl: &str,
    project_only: bool,
    detect_dir: &str,
) -> CLITarget {
    CLITarget {
        name: name.to_string(),
        user_path_tpl: user_tpl.to_string(),
        project_path_tpl: project_tpl.to_string(),
        project_only,
        detect_dir: detect_dir.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Validation & loading
// ---------------------------------------------------------------------------

/// Configuration defect in an externally supplied target definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetConfigError {
    #[error("target has an empty name")]
    EmptyName,
    #[error("target '{target}': {field} must contain exactly one {{skill}} placeholder")]
    BadPlaceholder { target: String, field: &'static str },
    #[error("target '{target}': project_only but no project path template")]
    MissingProjectPath { target: String },
}

/// Check a target definition for configuration defects.
///
/// Each non-empty path template must contain exactly one `{skill}`
/// placeholder, and a `project_only` target must actually have a project
/// path template.
pub fn validate_target(target: &CLITarget) -> Result<(), TargetConfigError> {
    if target.name.is_empty() {
        return Err(TargetConfigError::EmptyName);
    }

    if target.project_only && target.project_path_tpl.is_empty() {
        return Err(TargetConfigError::MissingProjectPath {
            target: target.name.clone(),
        });
    }

    for (field, tpl) in [
        ("userPathTpl", &target.user_path_tpl),
        ("projectPathTpl", &target.project_path_tpl),
    ] {
        if !tpl.is_empty() && tpl.matches(SKILL_PLACEHOLDER).count() != 1 {
            return Err(TargetConfigError::BadPlaceholder {
                target: target.name.clone(),
                field,
            });
        }
    }

    Ok(())
}

/// Load additional target definitions from a JSON file.
///
/// The file holds a JSON array of target objects. Every entry is
/// validated before the list is returned.
pub fn load_targets(path: &Path) -> Result<Vec<CLITarget>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read targets file {}", path.display()))?;

    let targets: Vec<CLITarget> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse targets file {}", path.display()))?;

    for target in &targets {
        validate_target(target)
            .with_context(|| format!("Invalid target definition in {}", path.display()))?;
    }

    debug!(
        "Loaded {} target definitions from {}",
        targets.len(),
        path.display()
    );
    Ok(targets)
}
