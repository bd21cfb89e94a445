use std::fs;
use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{DEFAULT_KEY_FILE_NAME, IDENTITY_FILE_PREFIX};
use crate::types::Account;

/// Loose email-shaped pattern used for extraction. Deliberately has no TLD
/// requirement so the `user@host` comment of any public key matches.
static EMAIL_EXTRACT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9._%+-]+").expect("valid email pattern")
});

/// List identity files in `ssh_dir` and pair each with the first email-shaped
/// substring found in its content. Files without one are skipped.
///
/// Order is whatever the directory iterator yields; no sorting is applied, so
/// the selection numbers a caller presents are only stable for the current
/// run.
pub fn scan_accounts(ssh_dir: &Path) -> anyhow::Result<Vec<Account>> {
    let mut accounts = Vec::new();
    for entry in read_identity_dir(ssh_dir)? {
        let (file_name, path) = entry?;
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if let Some(m) = EMAIL_EXTRACT.find(&content) {
            accounts.push(Account {
                email: m.as_str().to_string(),
                file_name,
            });
        }
    }
    Ok(accounts)
}

/// Extract every email-shaped substring from every identity file in
/// `ssh_dir`, in file order then match order. Used by the listing mode,
/// which prints all labels rather than one per file.
pub fn collect_emails(ssh_dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut emails = Vec::new();
    for entry in read_identity_dir(ssh_dir)? {
        let (_, path) = entry?;
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        for m in EMAIL_EXTRACT.find_iter(&content) {
            emails.push(m.as_str().to_string());
        }
    }
    Ok(emails)
}

/// Copy `file_name` from `ssh_dir` over the default key path, making it the
/// active identity. Overwrites any previous active key without confirmation.
pub fn activate(ssh_dir: &Path, file_name: &str) -> anyhow::Result<()> {
    let src = ssh_dir.join(file_name);
    let dst = ssh_dir.join(DEFAULT_KEY_FILE_NAME);
    fs::copy(&src, &dst)
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;
    Ok(())
}

/// Iterate `ssh_dir`, yielding `(file_name, path)` for entries whose name
/// starts with the identity prefix.
fn read_identity_dir(
    ssh_dir: &Path,
) -> anyhow::Result<impl Iterator<Item = anyhow::Result<(String, std::path::PathBuf)>>> {
    let dir = fs::read_dir(ssh_dir)
        .with_context(|| format!("failed to list {}", ssh_dir.display()))?;
    Ok(dir.filter_map(|entry| match entry {
        Ok(entry) => {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if file_name.starts_with(IDENTITY_FILE_PREFIX) {
                Some(Ok((file_name, entry.path())))
            } else {
                None
            }
        }
        Err(e) => Some(Err(e.into())),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn scan_skips_unrelated_and_email_less_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("id_a"), "key comment alice@example.com").unwrap();
        fs::write(dir.path().join("id_empty"), "no address here").unwrap();
        fs::write(dir.path().join("notes.txt"), "carol@example.com").unwrap();

        let accounts = scan_accounts(dir.path()).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].email, "alice@example.com");
        assert_eq!(accounts[0].file_name, "id_a");
    }

    #[test]
    fn scan_takes_first_email_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("id_multi"), "first@example.com second@example.com").unwrap();

        let accounts = scan_accounts(dir.path()).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].email, "first@example.com");
    }

    #[test]
    fn collect_returns_every_match() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("id_multi"), "first@example.com second@example.com").unwrap();
        fs::write(dir.path().join("id_other"), "third@example.com").unwrap();

        let mut emails = collect_emails(dir.path()).unwrap();
        emails.sort();
        assert_eq!(
            emails,
            vec!["first@example.com", "second@example.com", "third@example.com"]
        );
    }

    #[test]
    fn extraction_matches_host_style_comments() {
        // Public key comments like user@hostname have no TLD.
        assert!(EMAIL_EXTRACT.is_match("ssh-ed25519 AAAA... alice@workstation"));
    }

    #[test]
    fn activate_overwrites_default_key() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("id_b"), b"bob private key bytes").unwrap();
        fs::write(dir.path().join(DEFAULT_KEY_FILE_NAME), b"old content").unwrap();

        activate(dir.path(), "id_b").unwrap();
        let active = fs::read(dir.path().join(DEFAULT_KEY_FILE_NAME)).unwrap();
        assert_eq!(active, b"bob private key bytes");
    }

    #[test]
    fn activate_fails_on_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        assert!(activate(dir.path(), "id_missing").is_err());
    }
}
