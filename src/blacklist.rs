//! Common-password list management.
//!
//! A small built-in list is always active. A larger list can be loaded
//! from a newline-delimited file; lookups then match against both.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

/// Passwords rejected even when no file has been loaded.
const BUILTIN_COMMON_PASSWORDS: [&str; 4] = ["password", "123456", "qwerty", "admin"];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var("PWD_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}

/// Loads the common-password list from the configured file.
///
/// Set `PWD_BLACKLIST_PATH` to point at a custom file; otherwise the
/// default path is used. Returns the number of entries loaded.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    let path = get_blacklist_path();
    init_blacklist_from_path(&path)
}

/// Loads the common-password list from a specific file path.
///
/// Entries are lowercased and matched case-insensitively. Loading is
/// idempotent: once a list is in place, further calls return its size
/// without touching the filesystem.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_blacklist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = COMMON_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = COMMON_PASSWORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a copy of the file-loaded list, if one is in place.
///
/// The built-in entries are not included; they apply regardless.
pub fn get_blacklist() -> Option<HashSet<String>> {
    let guard = COMMON_PASSWORDS.read().unwrap();
    guard.clone()
}

/// Checks whether a password is a known common password (case-insensitive).
///
/// Matches the built-in list first, then the file-loaded list when one
/// has been initialized.
pub fn is_blacklisted(password: &str) -> bool {
    let candidate = password.to_lowercase();
    if BUILTIN_COMMON_PASSWORDS.contains(&candidate.as_str()) {
        return true;
    }

    let guard = COMMON_PASSWORDS.read().unwrap();
    guard
        .as_ref()
        .map(|list| list.contains(&candidate))
        .unwrap_or(false)
}

/// Resets the file-loaded list for testing purposes.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_default() {
        remove_env("PWD_BLACKLIST_PATH");

        let path = get_blacklist_path();
        assert_eq!(path, PathBuf::from("./assets/common-passwords.txt"));
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_from_env() {
        let custom_path = "/custom/path/common-passwords.txt";
        set_env("PWD_BLACKLIST_PATH", custom_path);

        let path = get_blacklist_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_BLACKLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_blacklist_file_not_found() {
        reset_blacklist_for_testing();
        set_env("PWD_BLACKLIST_PATH", "/nonexistent/path/common-passwords.txt");

        let result = init_blacklist();
        assert!(matches!(result, Err(BlacklistError::FileNotFound(_))));

        remove_env("PWD_BLACKLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_blacklist_empty_file() {
        reset_blacklist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_BLACKLIST_PATH", path);

        let result = init_blacklist();
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));

        remove_env("PWD_BLACKLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_blacklist_success() {
        reset_blacklist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "letmein").expect("Failed to write");
        writeln!(temp_file, "dragon").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_BLACKLIST_PATH", path);

        let result = init_blacklist();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 2);

        remove_env("PWD_BLACKLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_blacklist_is_idempotent() {
        reset_blacklist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "letmein").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_BLACKLIST_PATH", path);

        assert_eq!(init_blacklist().unwrap(), 1);
        // A second call must not reload, even if the env var changes
        set_env("PWD_BLACKLIST_PATH", "/nonexistent/path/common-passwords.txt");
        assert_eq!(init_blacklist().unwrap(), 1);

        remove_env("PWD_BLACKLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_is_blacklisted_from_file() {
        reset_blacklist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "letmein").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_BLACKLIST_PATH", path);

        let _ = init_blacklist();

        assert!(is_blacklisted("letmein"));
        assert!(is_blacklisted("LETMEIN")); // case insensitive

        remove_env("PWD_BLACKLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_builtin_entries_without_init() {
        reset_blacklist_for_testing();
        remove_env("PWD_BLACKLIST_PATH");

        assert!(is_blacklisted("password"));
        assert!(is_blacklisted("123456"));
        assert!(is_blacklisted("QWERTY"));
        assert!(is_blacklisted("admin"));
        assert!(!is_blacklisted("veryuncommonpassword987"));
    }

    #[test]
    #[serial]
    fn test_builtin_entries_survive_file_load() {
        reset_blacklist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "letmein").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_BLACKLIST_PATH", path);

        let _ = init_blacklist();

        // "password" is not in the file but must still match
        assert!(is_blacklisted("password"));

        remove_env("PWD_BLACKLIST_PATH");
    }
}
