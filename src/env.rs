//! Environment Access
//!
//! Home-directory and working-directory lookups behind a trait, so the
//! planner can be pointed at a fixed filesystem layout in tests instead
//! of the real process environment.

use std::path::PathBuf;

/// Source of the user's home directory and the current working directory.
///
/// Both lookups are fallible; an unavailable directory makes the
/// corresponding scope ineligible, it is never an error.
pub trait Env {
    fn home_dir(&self) -> Option<PathBuf>;
    fn cwd(&self) -> Option<PathBuf>;
}

/// Production environment backed by the host process.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEnv;

impl Env for SystemEnv {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn cwd(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }
}
