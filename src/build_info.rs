//! What `jump-runner --version` prints. Values come from `build.rs`.

pub const BUILD_COMMIT: &str = env!("JR_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("JR_BUILD_DATE");

/// `jump-runner 0.1.0 (2026-10-16, commit abc1234)`
pub fn version_line() -> String {
    format!(
        "{} {} ({}, commit {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line_names_binary_and_version() {
        let line = version_line();
        assert!(line.starts_with(&format!("jump-runner {} (", env!("CARGO_PKG_VERSION"))));
        assert!(line.ends_with(&format!("commit {})", BUILD_COMMIT)));
        assert!(line.contains(BUILD_DATE));
    }

    #[test]
    fn test_commit_is_one_word() {
        assert!(
            !BUILD_COMMIT.is_empty() && !BUILD_COMMIT.contains(char::is_whitespace),
            "unexpected commit stamp {:?}",
            BUILD_COMMIT
        );
    }

    #[test]
    fn test_date_is_iso_day() {
        let parts: Vec<&str> = BUILD_DATE.split('-').collect();
        assert_eq!(parts.len(), 3, "unexpected date stamp {:?}", BUILD_DATE);
        assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
        assert_eq!(parts[0].len(), 4);
    }
}
