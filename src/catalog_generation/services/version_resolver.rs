use crate::catalog_generation::domain::PomModel;
use crate::catalog_generation::policies::VersionNaming;
use crate::shared::Result;

/// The marker Maven uses for a POM's own version.
const PROJECT_VERSION: &str = "project.version";

/// Outcome of resolving a raw version token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedVersion {
    /// A concrete version string, usable as-is.
    Literal(String),
    /// The alias of a property the caller must look up in the accumulated
    /// property table. Resolution stops here on purpose: whether the alias
    /// is known (version reference) or unknown depends on traversal state
    /// the resolver does not own.
    PropertyAlias(String),
}

impl ResolvedVersion {
    /// The token used for version-grouping and property lookups.
    pub fn token(&self) -> &str {
        match self {
            ResolvedVersion::Literal(v) => v,
            ResolvedVersion::PropertyAlias(a) => a,
        }
    }

    pub fn is_property_alias(&self) -> bool {
        matches!(self, ResolvedVersion::PropertyAlias(_))
    }
}

/// Strips a `${...}` wrapper, returning the inner name. Tokens that are not
/// wrapped exactly (prefix text, missing brace) are not references.
pub fn strip_reference(token: &str) -> Option<&str> {
    token
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
}

/// Resolves a raw version token from a managed dependency.
///
/// - `${project.version}` substitutes the owning model's effective version.
/// - `${name}` strips the wrapper and maps the inner name through the
///   version naming policy, yielding a property alias.
/// - Anything else is a literal and passes through trimmed; the naming
///   policy is NOT applied to literals.
pub fn resolve_version(
    raw: &str,
    model: &PomModel,
    naming: &dyn VersionNaming,
) -> Result<ResolvedVersion> {
    let trimmed = raw.trim();

    match strip_reference(trimmed) {
        Some(PROJECT_VERSION) => Ok(ResolvedVersion::Literal(
            model.effective_version()?.to_string(),
        )),
        Some(inner) => Ok(ResolvedVersion::PropertyAlias(naming.version_alias(inner))),
        None => Ok(ResolvedVersion::Literal(trimmed.to_string())),
    }
}
