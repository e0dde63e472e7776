use crate::shared::error::CatalogError;
use crate::shared::Result;
use regex::Regex;

/// Alias segments that collide with catalog accessor namespaces and may not
/// open a generated alias.
const RESERVED_PREFIXES: [&str; 3] = ["bundles", "plugins", "versions"];

/// Strategy for deriving a library alias from module coordinates.
///
/// The alias is assembled in two parts: a prefix derived from the group id
/// and a suffix derived from the artifact id, joined with a period. In the
/// original tooling these were free function values on the configuration
/// object; here each policy is a small strategy trait with a default
/// implementation supplied as a named type.
pub trait AliasNaming: Send + Sync {
    /// Derives the alias prefix for a module.
    fn prefix(&self, group_id: &str, artifact_id: &str) -> Result<String>;

    /// Derives the alias suffix, given the already-computed prefix.
    fn suffix(&self, prefix: &str, group_id: &str, artifact_id: &str) -> String;

    /// Assembles the full alias.
    fn alias(&self, group_id: &str, artifact_id: &str) -> Result<String> {
        let prefix = self.prefix(group_id, artifact_id)?;
        let suffix = self.suffix(&prefix, group_id, artifact_id);
        Ok(format!("{}.{}", prefix, suffix))
    }
}

/// Default alias policy: `lastGroupSegment.artifactId`.
///
/// When the last group segment is a reserved word ("bundles", "plugins",
/// "versions") the last two segments are joined with `-` instead; a reserved
/// tail with fewer than two segments is a configuration error.
#[derive(Debug, Default)]
pub struct DefaultAliasNaming;

impl AliasNaming for DefaultAliasNaming {
    fn prefix(&self, group_id: &str, artifact_id: &str) -> Result<String> {
        let segments: Vec<&str> = group_id.split('.').collect();
        let last = segments[segments.len() - 1];

        if RESERVED_PREFIXES.contains(&last) {
            if segments.len() < 2 {
                return Err(CatalogError::ReservedAliasPrefix {
                    group_id: group_id.to_string(),
                    artifact_id: artifact_id.to_string(),
                }
                .into());
            }
            return Ok(format!("{}-{}", segments[segments.len() - 2], last));
        }

        Ok(last.to_string())
    }

    fn suffix(&self, _prefix: &str, _group_id: &str, artifact_id: &str) -> String {
        artifact_id.to_string()
    }
}

/// Strategy for turning a raw property name into a version alias.
pub trait VersionNaming: Send + Sync {
    fn version_alias(&self, token: &str) -> String;
}

/// Default version-name policy: drop every case-insensitive occurrence of
/// "version", collapse runs of periods, and trim leading/trailing periods.
///
/// `activemq.version` -> `activemq`, `jackson.version.modules` ->
/// `jackson.modules`, `devVersion` -> `dev`.
#[derive(Debug)]
pub struct DefaultVersionNaming {
    version_re: Regex,
    dots_re: Regex,
}

impl DefaultVersionNaming {
    pub fn new() -> Self {
        Self {
            version_re: Regex::new("(?i)version").expect("static pattern"),
            dots_re: Regex::new(r"\.{2,}").expect("static pattern"),
        }
    }
}

impl Default for DefaultVersionNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionNaming for DefaultVersionNaming {
    fn version_alias(&self, token: &str) -> String {
        let stripped = self.version_re.replace_all(token, "");
        let collapsed = self.dots_re.replace_all(&stripped, ".");
        collapsed.trim_matches('.').to_string()
    }
}
