use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::*;

use crate::constants::IDENTITY_FILE_PREFIX;

/// Restrict the identity directory to `0o700` and every identity file in it
/// to `0o600`. Individual failures are warnings only; the repair keeps going
/// so one unreadable entry doesn't leave the rest world-readable.
pub fn fix_permissions(ssh_dir: &Path) -> anyhow::Result<()> {
    set_mode(ssh_dir, 0o700);
    let dir = fs::read_dir(ssh_dir)
        .with_context(|| format!("failed to list {}", ssh_dir.display()))?;
    for entry in dir {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.starts_with(IDENTITY_FILE_PREFIX) {
            set_mode(&entry.path(), 0o600);
        }
    }
    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(mode)) {
        eprintln!(
            "{} could not set mode {:o} on {}: {}",
            "warning:".yellow().bold(),
            mode,
            path.display(),
            e
        );
    }
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) {}
