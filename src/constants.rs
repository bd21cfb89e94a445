use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "gswitch";

pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the SSH directory in the user's home folder.
pub const SSH_DIR_NAME: &str = ".ssh";

/// Files whose name starts with this prefix are treated as identity files.
pub const IDENTITY_FILE_PREFIX: &str = "id_";

/// The key file the ssh client picks up by default. Whichever identity file
/// was last copied here is the active one.
pub const DEFAULT_KEY_FILE_NAME: &str = "id_ed25519";

/// Where to register newly generated public keys.
pub const SSH_SETTINGS_URL: &str = "https://github.com/settings/ssh/new";

/// Target for the `ssh -T` connectivity probe.
pub const PROBE_TARGET: &str = "git@github.com";

/// Returns the user's SSH directory path (e.g. `$HOME/.ssh`).
/// Returns `None` if the home directory can't be determined.
pub fn ssh_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|d| d.join(SSH_DIR_NAME))
}

/// File name for a generated key, e.g. `id_ed25519_account_0`.
pub fn generated_key_file_name(index: u32) -> String {
    format!("{}_account_{}", DEFAULT_KEY_FILE_NAME, index)
}

/// File name for a fixed-slot key, e.g. `id_ed25519_account1`.
///
/// Note: no underscore before the digit, unlike generated keys. The manual
/// tells users to rename generated keys to this form so the `--account1` and
/// `--account2` shortcuts find them.
pub fn slot_key_file_name(slot: u8) -> String {
    format!("{}_account{}", DEFAULT_KEY_FILE_NAME, slot)
}
