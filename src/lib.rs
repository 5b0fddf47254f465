//! Skilldock -- Skill Install Planner
//!
//! Plans installation, update, and removal of skill packages across
//! multiple CLI tool integrations (Claude Code, Codex, Cursor, ...), at
//! either per-user or per-project scope. The planner decides which
//! (target, scope) pairs a run acts on and which filesystem operations
//! are actually needed; executing those operations is the caller's job.

pub mod env;
pub mod planner;
pub mod targets;
pub mod types;
