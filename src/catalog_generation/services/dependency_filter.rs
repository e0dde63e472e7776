use regex::Regex;

use crate::shared::Result;

/// Maximum length of an exclusion pattern (security limit)
const MAX_PATTERN_LENGTH: usize = 512;

/// DependencyFilter - excludes managed dependencies by group or artifact name.
///
/// Patterns are anchored regular expressions: a dependency is excluded when
/// its group id matches the group pattern or its artifact id matches the
/// name pattern in full. Anchoring avoids the surprise of `boot` excluding
/// `org.springframework.boot` by substring.
#[derive(Debug, Default)]
pub struct DependencyFilter {
    group_pattern: Option<Regex>,
    name_pattern: Option<Regex>,
}

impl DependencyFilter {
    /// A filter that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compiles the configured exclusion patterns.
    ///
    /// # Errors
    /// Invalid regex syntax or an over-long pattern fail fast at
    /// configuration time, never mid-traversal.
    pub fn new(exclude_groups: Option<&str>, exclude_names: Option<&str>) -> Result<Self> {
        Ok(Self {
            group_pattern: exclude_groups.map(compile_anchored).transpose()?,
            name_pattern: exclude_names.map(compile_anchored).transpose()?,
        })
    }

    /// Whether a dependency should be dropped from the catalog.
    pub fn is_excluded(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group_matches(group_id) || self.name_matches(artifact_id)
    }

    pub fn group_matches(&self, group_id: &str) -> bool {
        self.group_pattern
            .as_ref()
            .is_some_and(|p| p.is_match(group_id))
    }

    pub fn name_matches(&self, artifact_id: &str) -> bool {
        self.name_pattern
            .as_ref()
            .is_some_and(|p| p.is_match(artifact_id))
    }
}

fn compile_anchored(pattern: &str) -> Result<Regex> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }
    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long ({} chars). Maximum: {} chars",
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    Regex::new(&format!("^(?:{})$", pattern))
        .map_err(|e| anyhow::anyhow!("Invalid exclusion pattern '{}': {}", pattern, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_excludes_nothing() {
        let filter = DependencyFilter::empty();
        assert!(!filter.is_excluded("org.example", "anything"));
    }

    #[test]
    fn test_group_pattern_full_match() {
        let filter = DependencyFilter::new(Some(r"com\.example\..*"), None).unwrap();
        assert!(filter.is_excluded("com.example.internal", "lib"));
        assert!(!filter.is_excluded("org.example", "lib"));
    }

    #[test]
    fn test_group_pattern_is_anchored() {
        let filter = DependencyFilter::new(Some("boot"), None).unwrap();
        assert!(filter.is_excluded("boot", "lib"));
        assert!(!filter.is_excluded("org.springframework.boot", "lib"));
    }

    #[test]
    fn test_name_pattern() {
        let filter = DependencyFilter::new(None, Some(".*-internal")).unwrap();
        assert!(filter.is_excluded("org.example", "metrics-internal"));
        assert!(!filter.is_excluded("org.example", "metrics"));
    }

    #[test]
    fn test_alternation_pattern() {
        let filter = DependencyFilter::new(None, Some("junit|testng")).unwrap();
        assert!(filter.is_excluded("org.junit", "junit"));
        assert!(filter.is_excluded("org.testng", "testng"));
        assert!(!filter.is_excluded("org.junit", "junit-jupiter"));
    }

    #[test]
    fn test_invalid_pattern_fails() {
        let result = DependencyFilter::new(Some("(unclosed"), None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid exclusion pattern"));
    }

    #[test]
    fn test_empty_pattern_fails() {
        let result = DependencyFilter::new(Some(""), None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_too_long_pattern_fails() {
        let pattern = "a".repeat(600);
        let result = DependencyFilter::new(Some(&pattern), None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too long"));
    }
}
