use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - catalog generated (possibly with recoverable warnings)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (fetch failure, configuration error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for catalog generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Every variant here is fatal for the `generate` invocation that raised it.
/// Recoverable conditions (duplicate property keys, excluded dependencies)
/// are reported as traversal warnings, never as errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unable to fetch BOM model: {group_id}:{artifact_id}:{version}\nDetails: {details}\n\n💡 Hint: Verify the coordinates and that the artifact exists in the configured repositories")]
    ModelNotFound {
        group_id: String,
        artifact_id: String,
        version: String,
        details: String,
    },

    #[error("Failed to parse POM for {coordinates}\nDetails: {details}\n\n💡 Hint: The fetched file may be corrupt or not a POM at all")]
    PomParse {
        coordinates: String,
        details: String,
    },

    #[error("Alias '{alias}' is already registered for {existing_group}:{existing_artifact} and cannot also be used for {group}:{artifact}\n\n💡 Hint: Supply a custom alias naming policy to disambiguate the two modules")]
    AliasCollision {
        alias: String,
        existing_group: String,
        existing_artifact: String,
        group: String,
        artifact: String,
    },

    #[error("Cannot derive an alias prefix for {group_id}:{artifact_id}: the last group segment is a reserved word and no preceding segment exists\n\n💡 Hint: Configure an explicit alias prefix for this group")]
    ReservedAliasPrefix {
        group_id: String,
        artifact_id: String,
    },

    #[error("Cyclic property reference involving '{property}' in BOM {coordinates}\n\n💡 Hint: Break the cycle in the BOM's <properties> section or override the property")]
    CyclicPropertyChain {
        property: String,
        coordinates: String,
    },

    #[error("Invalid property override for '{key}': {details}\n\n💡 Hint: Override values must be a plain string or a {{version-ref: alias}} mapping")]
    InvalidPropertyOverride { key: String, details: String },

    #[error("Catalog entry '{alias}' not found in {path}\n\n💡 Hint: Check the alias spelling against the [libraries] section of the catalog file")]
    CatalogEntryNotFound { alias: String, path: PathBuf },

    #[error("Invalid coordinates '{input}': {details}\n\n💡 Hint: Coordinates must be of the form group:artifact:version, e.g. org.springframework.boot:spring-boot-dependencies:3.2.0")]
    InvalidCoordinates { input: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_model_not_found_display() {
        let error = CatalogError::ModelNotFound {
            group_id: "org.example".to_string(),
            artifact_id: "example-bom".to_string(),
            version: "1.0.0".to_string(),
            details: "HTTP 404".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("org.example:example-bom:1.0.0"));
        assert!(display.contains("HTTP 404"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_alias_collision_names_both_registrations() {
        let error = CatalogError::AliasCollision {
            alias: "ehcache-ehcache".to_string(),
            existing_group: "net.sf.ehcache".to_string(),
            existing_artifact: "ehcache".to_string(),
            group: "org.ehcache".to_string(),
            artifact: "ehcache3".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("ehcache-ehcache"));
        assert!(display.contains("net.sf.ehcache:ehcache"));
        assert!(display.contains("org.ehcache:ehcache3"));
    }

    #[test]
    fn test_cyclic_property_chain_display() {
        let error = CatalogError::CyclicPropertyChain {
            property: "a.version".to_string(),
            coordinates: "org.example:bom:1.0".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("a.version"));
        assert!(display.contains("org.example:bom:1.0"));
    }

    #[test]
    fn test_catalog_entry_not_found_display() {
        let error = CatalogError::CatalogEntryNotFound {
            alias: "boot.spring-boot-starter".to_string(),
            path: PathBuf::from("/test/libs.versions.toml"),
        };
        let display = format!("{}", error);
        assert!(display.contains("boot.spring-boot-starter"));
        assert!(display.contains("/test/libs.versions.toml"));
    }

    #[test]
    fn test_invalid_coordinates_display() {
        let error = CatalogError::InvalidCoordinates {
            input: "not-coordinates".to_string(),
            details: "expected two ':' separators".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("not-coordinates"));
        assert!(display.contains("group:artifact:version"));
    }
}
