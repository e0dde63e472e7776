use crate::shared::error::CatalogError;
use crate::shared::Result;

/// Maximum length for a single coordinate component (security limit)
const MAX_COMPONENT_LENGTH: usize = 255;

/// Module coordinates identifying a BOM or managed dependency:
/// `groupId:artifactId:version`.
///
/// Components are validated on construction so that coordinates can be
/// embedded into repository URLs and filesystem paths without further
/// sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BomCoordinates {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl BomCoordinates {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Result<Self> {
        validate_component(group_id, "group id")?;
        validate_component(artifact_id, "artifact id")?;
        validate_component(version, "version")?;

        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
        })
    }

    /// Parses `group:artifact:version` notation.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() != 3 {
            return Err(CatalogError::InvalidCoordinates {
                input: input.to_string(),
                details: format!("expected two ':' separators, found {}", parts.len() - 1),
            }
            .into());
        }
        Self::new(parts[0], parts[1], parts[2]).map_err(|e| {
            CatalogError::InvalidCoordinates {
                input: input.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The `group:artifact` key used for at-most-once module tracking
    /// across a traversal.
    pub fn module_key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl std::fmt::Display for BomCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

fn validate_component(component: &str, component_type: &str) -> Result<()> {
    if component.is_empty() {
        anyhow::bail!("{} cannot be empty", component_type);
    }

    if component.len() > MAX_COMPONENT_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            component_type,
            component.len(),
            MAX_COMPONENT_LENGTH
        );
    }

    // Whitelist matching Maven coordinate conventions; anything else would
    // need escaping before reaching a URL or path.
    if !component
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '+')
    {
        anyhow::bail!(
            "{} contains invalid characters. Only alphanumeric, hyphens, underscores, dots, and plus signs are allowed.",
            component_type
        );
    }

    if component.contains("..") {
        anyhow::bail!("{} must not contain '..'", component_type);
    }

    Ok(())
}
