use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use colored::*;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::generated_key_file_name;

/// Strict `localpart@domain.tld` shape. Key generation labels keys with this
/// email as the comment, so it is validated harder than the extraction
/// pattern in `accounts`.
static EMAIL_VALID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

/// Parse a requested identity count. Accepts integers in `[0, 9]` only.
pub fn parse_account_count(input: &str) -> Option<u32> {
    match input.trim().parse::<u32>() {
        Ok(n) if n <= 9 => Some(n),
        _ => None,
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_VALID.is_match(email)
}

/// Run `ssh-keygen` for the account at `index`, labelling the key with
/// `email`. Stdio is inherited so ssh-keygen can prompt for a passphrase.
///
/// Returns the private key path on success, or `None` if ssh-keygen exited
/// non-zero (surfaced as a warning; later indexes are still attempted).
/// Spawn failures propagate as errors.
pub fn generate_key(ssh_dir: &Path, index: u32, email: &str) -> anyhow::Result<Option<PathBuf>> {
    let key_path = ssh_dir.join(generated_key_file_name(index));
    let status = Command::new("ssh-keygen")
        .arg("-t")
        .arg("ed25519")
        .arg("-C")
        .arg(email)
        .arg("-f")
        .arg(&key_path)
        .status()
        .context("failed to run ssh-keygen")?;
    if !status.success() {
        eprintln!(
            "{} ssh-keygen exited with {} for {}",
            "warning:".yellow().bold(),
            status,
            key_path.display()
        );
        return Ok(None);
    }
    Ok(Some(key_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_accepts_zero_through_nine() {
        assert_eq!(parse_account_count("0"), Some(0));
        assert_eq!(parse_account_count("9"), Some(9));
        assert_eq!(parse_account_count(" 3 "), Some(3));
    }

    #[test]
    fn count_rejects_out_of_range_and_garbage() {
        assert_eq!(parse_account_count("10"), None);
        assert_eq!(parse_account_count("-1"), None);
        assert_eq!(parse_account_count("3.5"), None);
        assert_eq!(parse_account_count("abc"), None);
        assert_eq!(parse_account_count(""), None);
    }

    #[test]
    fn email_validation_requires_tld() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(!is_valid_email("alice@workstation"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@example.c"));
    }
}
