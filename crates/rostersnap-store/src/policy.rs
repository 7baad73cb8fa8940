//! Retention policy file loading.
//!
//! The policy is a flat TOML document; every key is optional:
//!
//! ```toml
//! max_snapshots = 20
//! max_deleted_snapshots = 20
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use rostersnap_core::RetentionPolicy;

use crate::errors::{io_error, policy_parse_error, Result};

/// Load the retention policy, falling back to defaults when the file is absent
///
/// # Errors
///
/// - `Io` if the file exists but cannot be read
/// - `InvalidPolicy` if it does not parse or fails validation
pub fn load_policy(path: &Path) -> Result<RetentionPolicy> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no policy file; using defaults");
            return Ok(RetentionPolicy::default());
        }
        Err(e) => return Err(io_error("load_policy", path, e)),
    };

    let policy: RetentionPolicy =
        toml::from_str(&text).map_err(|e| policy_parse_error(path, e))?;
    policy
        .validate()
        .map_err(|e| rostersnap_core::ExError::from(e).with_op("load_policy"))?;
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rostersnap_core::errors::ExErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_missing_policy_is_default() {
        let dir = TempDir::new().unwrap();
        let policy = load_policy(&dir.path().join("policy.toml")).unwrap();
        assert_eq!(policy, RetentionPolicy::default());
    }

    #[test]
    fn test_partial_policy_keeps_other_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("policy.toml");
        fs::write(&path, "max_deleted_snapshots = 3\n").unwrap();

        let policy = load_policy(&path).unwrap();
        assert_eq!(policy.max_deleted_snapshots, 3);
        assert_eq!(policy.max_snapshots, rostersnap_core::MAX_SNAPSHOTS);
    }

    #[test]
    fn test_zero_live_cap_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("policy.toml");
        fs::write(&path, "max_snapshots = 0\n").unwrap();

        let err = load_policy(&path).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidPolicy);
        assert_eq!(err.op(), Some("load_policy"));
    }

    #[test]
    fn test_malformed_policy_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("policy.toml");
        fs::write(&path, "max_snapshots = \"many\"\n").unwrap();

        assert_eq!(
            load_policy(&path).unwrap_err().kind(),
            ExErrorKind::InvalidPolicy
        );
    }
}
