use std::process::Command;

use anyhow::Context;
use colored::*;

use crate::constants::PROBE_TARGET;

/// Run the `ssh -T` connectivity probe and let it print its own output.
///
/// GitHub closes the session with a non-zero status even when authentication
/// succeeds, so the exit status carries no signal and is not inspected.
/// A spawn failure (ssh not installed) is only a warning; the probe is
/// informational everywhere it is used.
pub fn test_connection() {
    if let Err(e) = Command::new("ssh").arg("-T").arg(PROBE_TARGET).status() {
        eprintln!("{} failed to run ssh: {}", "warning:".yellow().bold(), e);
    }
}

/// Set `user.name` and `user.email` in the local git configuration.
pub fn set_identity(name: &str, email: &str) -> anyhow::Result<()> {
    run_git_config(&["user.name", name])?;
    run_git_config(&["user.email", email])?;
    Ok(())
}

/// Print the git configuration with the file each value came from.
pub fn show_config() -> anyhow::Result<()> {
    run_git_config(&["--list", "--show-origin"])
}

fn run_git_config(args: &[&str]) -> anyhow::Result<()> {
    let status = Command::new("git")
        .arg("config")
        .args(args)
        .status()
        .context("failed to run git")?;
    if !status.success() {
        eprintln!(
            "{} git config {} exited with {}",
            "warning:".yellow().bold(),
            args.join(" "),
            status
        );
    }
    Ok(())
}
