//! `value_parser` functions for arguments clap cannot check on its own.

use std::net::IpAddr;
use std::path::PathBuf;

use crate::models::Category;

/// `--config`: an existing regular file
pub fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    match std::fs::metadata(&path) {
        Ok(meta) if meta.is_file() => Ok(path),
        Ok(_) => Err(format!("'{}' is not a regular file", value)),
        Err(e) => Err(format!("cannot read '{}': {}", value, e)),
    }
}

/// `--category`: a category name, any case
pub fn category(value: &str) -> Result<Category, String> {
    value.parse::<Category>().map_err(|e| e.to_string())
}

/// `--host`: an IP literal or a DNS hostname
pub fn host(value: &str) -> Result<String, String> {
    let host = value.trim();
    if host.parse::<IpAddr>().is_ok() || is_hostname(host) {
        Ok(host.to_string())
    } else {
        Err(format!("'{}' is neither an IP address nor a hostname", value))
    }
}

fn is_hostname(host: &str) -> bool {
    let label_ok = |label: &str| {
        (1..=63).contains(&label.len())
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };
    // All-numeric dotted names are malformed IPv4 addresses.
    let numeric = host.split('.').all(|l| l.chars().all(|c| c.is_ascii_digit()));

    host.len() <= 253 && !numeric && host.split('.').all(label_ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_accepts_addresses_and_names() {
        for value in ["localhost", "0.0.0.0", "127.0.0.1", "::1", "deals.internal", "my-box"] {
            assert!(host(value).is_ok(), "{value} should be accepted");
        }
        assert_eq!(host(" 10.0.0.1 ").unwrap(), "10.0.0.1");
    }

    #[test]
    fn test_host_rejects_garbage() {
        let long = "a".repeat(64);
        for value in ["", "  ", "has space", "999.999.999.999", "-edge", "under_score", long.as_str()] {
            assert!(host(value).is_err(), "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_category_names() {
        assert_eq!(category("unter15"), Ok(Category::Unter15));
        assert_eq!(category("EPIC"), Ok(Category::Epic));
        assert!(category("cheap").is_err());
    }

    #[test]
    fn test_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("deals.toml");
        std::fs::write(&file, "").unwrap();

        assert_eq!(existing_file(file.to_str().unwrap()), Ok(file.clone()));
        assert!(existing_file(dir.path().to_str().unwrap()).is_err());
        assert!(existing_file("/definitely/not/here.toml").is_err());
    }
}
