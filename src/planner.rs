//! Install Planner
//!
//! The two pure functions at the heart of skilldock: resolve which
//! (target, scope) pairs a run should act on, then turn per-skill action
//! choices into a flat list of filesystem operations for the executor.

use std::collections::HashMap;

use tracing::debug;

use crate::env::Env;
use crate::types::{action_for, CLITarget, Plan, Scope, SkillAction, SkillInfo};

// ---------------------------------------------------------------------------
// Target activation
// ---------------------------------------------------------------------------

/// Resolve which (target, scope) combinations are active for this run.
///
/// User scope requires a user path template and excludes `project_only`
/// targets. Project scope requires a project path template. When the
/// working directory is the home directory and both scopes were
/// requested, a target whose user and project rules resolve to the same
/// path keeps only the user pair, so the same operation is not performed
/// twice under two labels. `project_only` targets are exempt: project is
/// their only scope.
///
/// Output is grouped by scope in the requested order (duplicate scopes
/// ignored), targets in input order within each scope. Never fails;
/// empty inputs yield an empty list.
pub fn get_active_targets<'a>(
    targets: &'a [CLITarget],
    scopes: &[Scope],
    env: &dyn Env,
) -> Vec<(&'a CLITarget, Scope)> {
    let cwd_is_home = match (env.home_dir(), env.cwd()) {
        (Some(home), Some(cwd)) => home == cwd,
        _ => false,
    };
    let user_requested = scopes.contains(&Scope::User);

    let mut seen_scopes: Vec<Scope> = Vec::new();
    let mut pairs: Vec<(&CLITarget, Scope)> = Vec::new();

    for &scope in scopes {
        if seen_scopes.contains(&scope) {
            continue;
        }
        seen_scopes.push(scope);

        for target in targets {
            let rule = match target.scope_rule(scope, env) {
                Some(r) => r,
                None => continue,
            };

            // A project pair whose rule coincides with the user pair's
            // would duplicate the operation under a second label.
            // Compared by resolved value, not by template string.
            if scope == Scope::Project && cwd_is_home && user_requested && !target.project_only {
                if let Some(user_rule) = target.scope_rule(Scope::User, env) {
                    if user_rule == rule {
                        debug!(
                            "Suppressing redundant project scope for '{}' (cwd == home)",
                            target.name
                        );
                        continue;
                    }
                }
            }

            pairs.push((target, scope));
        }
    }

    debug!("{} active target/scope pairs", pairs.len());
    pairs
}

// ---------------------------------------------------------------------------
// Plan building
// ---------------------------------------------------------------------------

/// Build the flat list of operations to perform.
///
/// Active pairs are derived from `targets` and `scopes` via
/// [`get_active_targets`]. Per skill and pair: `Skip`, `Keep`, and
/// skills with no action entry produce nothing; `Install` and `Update`
/// always produce one plan (the caller already decided these should
/// happen); `Uninstall` produces a plan only when the resolved install
/// directory currently exists, so uninstalling something that was never
/// installed is a silent no-op.
///
/// Plans come out in skill input order, then active-pair order. The only
/// filesystem access is the read-only existence check for `Uninstall`.
pub fn build_plans(
    skills: &[SkillInfo],
    actions: &HashMap<String, SkillAction>,
    targets: &[CLITarget],
    scopes: &[Scope],
    env: &dyn Env,
) -> Vec<Plan> {
    let active = get_active_targets(targets, scopes, env);
    let mut plans = Vec::new();

    for skill in skills {
        let action = action_for(actions, &skill.dir_name);
        if matches!(action, SkillAction::Skip | SkillAction::Keep) {
            continue;
        }

        for &(target, scope) in &active {
            let dest = match target.install_dir(scope, &skill.dir_name, env) {
                Some(d) => d,
                None => continue,
            };

            if action == SkillAction::Uninstall && !dest.exists() {
                continue;
            }

            plans.push(Plan {
                skill: skill.clone(),
                target_name: target.name.clone(),
                scope,
                action,
                dest,
            });
        }
    }

    debug!("Built {} plans for {} skills", plans.len(), skills.len());
    plans
}
