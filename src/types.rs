/// Pairing of an email extracted from an identity file and the file it came
/// from. Built fresh on each enumeration, never persisted; which account is
/// active can only be re-derived from the file at the default key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub file_name: String,
}
