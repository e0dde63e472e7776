use std::collections::BTreeMap;

/// Parent reference of a POM. Maven allows a child to omit its own
/// groupId/version and inherit them from here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentRef {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

/// A single entry of a BOM's `<dependencyManagement>` section.
///
/// The version is kept as the raw token from the POM - possibly a
/// `${property}` reference - and is only resolved during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub dep_type: Option<String>,
    pub scope: Option<String>,
}

impl Dependency {
    /// A `type=pom, scope=import` entry: a nested BOM to be queued.
    pub fn is_bom_import(&self) -> bool {
        self.dep_type.as_deref() == Some("pom") && self.scope.as_deref() == Some("import")
    }

    /// A regular managed library: type absent or "jar". Anything else
    /// (test-jar, war, ...) is outside the catalog's scope.
    pub fn is_managed_library(&self) -> bool {
        matches!(self.dep_type.as_deref(), None | Some("jar"))
    }

    pub fn module_key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

/// A fetched BOM's data. Immutable once constructed by a fetcher.
///
/// `group_id` and `version` may be absent on the POM itself; the effective
/// accessors fall back to the parent reference, mirroring Maven's simple
/// group/version inheritance. Full effective-POM computation (profiles,
/// deeper inheritance) is deliberately not modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomModel {
    pub group_id: Option<String>,
    pub artifact_id: String,
    pub version: Option<String>,
    pub parent: Option<ParentRef>,
    pub properties: BTreeMap<String, String>,
    pub managed_dependencies: Vec<Dependency>,
}

impl PomModel {
    pub fn effective_group_id(&self) -> crate::shared::Result<&str> {
        self.group_id
            .as_deref()
            .or_else(|| {
                self.parent
                    .as_ref()
                    .and_then(|p| p.group_id.as_deref())
            })
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "POM for artifact '{}' declares no groupId and has no parent to inherit one from",
                    self.artifact_id
                )
            })
    }

    pub fn effective_version(&self) -> crate::shared::Result<&str> {
        self.version
            .as_deref()
            .or_else(|| {
                self.parent
                    .as_ref()
                    .and_then(|p| p.version.as_deref())
            })
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "POM for artifact '{}' declares no version and has no parent to inherit one from",
                    self.artifact_id
                )
            })
    }

    /// `group:artifact:version` of this model, for diagnostics.
    pub fn coordinates_string(&self) -> String {
        format!(
            "{}:{}:{}",
            self.effective_group_id().unwrap_or("?"),
            self.artifact_id,
            self.effective_version().unwrap_or("?")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_parent() -> PomModel {
        PomModel {
            group_id: None,
            artifact_id: "child-bom".to_string(),
            version: None,
            parent: Some(ParentRef {
                group_id: Some("org.example".to_string()),
                artifact_id: Some("parent-bom".to_string()),
                version: Some("2.0.0".to_string()),
            }),
            properties: BTreeMap::new(),
            managed_dependencies: vec![],
        }
    }

    #[test]
    fn test_effective_group_id_own_value_wins() {
        let mut model = model_with_parent();
        model.group_id = Some("org.child".to_string());
        assert_eq!(model.effective_group_id().unwrap(), "org.child");
    }

    #[test]
    fn test_effective_group_id_inherited_from_parent() {
        let model = model_with_parent();
        assert_eq!(model.effective_group_id().unwrap(), "org.example");
    }

    #[test]
    fn test_effective_version_inherited_from_parent() {
        let model = model_with_parent();
        assert_eq!(model.effective_version().unwrap(), "2.0.0");
    }

    #[test]
    fn test_effective_version_missing_everywhere() {
        let mut model = model_with_parent();
        model.parent = None;
        assert!(model.effective_version().is_err());
    }

    #[test]
    fn test_dependency_is_bom_import() {
        let dep = Dependency {
            group_id: "org.example".to_string(),
            artifact_id: "nested-bom".to_string(),
            version: Some("1.0".to_string()),
            dep_type: Some("pom".to_string()),
            scope: Some("import".to_string()),
        };
        assert!(dep.is_bom_import());
        assert!(!dep.is_managed_library());
    }

    #[test]
    fn test_dependency_pom_without_import_scope_is_not_bom() {
        let dep = Dependency {
            group_id: "org.example".to_string(),
            artifact_id: "nested-bom".to_string(),
            version: Some("1.0".to_string()),
            dep_type: Some("pom".to_string()),
            scope: None,
        };
        assert!(!dep.is_bom_import());
        assert!(!dep.is_managed_library());
    }

    #[test]
    fn test_dependency_default_type_is_managed_library() {
        let dep = Dependency {
            group_id: "org.assertj".to_string(),
            artifact_id: "assertj-core".to_string(),
            version: Some("${assertj.version}".to_string()),
            dep_type: None,
            scope: None,
        };
        assert!(dep.is_managed_library());
        assert_eq!(dep.module_key(), "org.assertj:assertj-core");
    }

    #[test]
    fn test_dependency_other_type_is_ignored() {
        let dep = Dependency {
            group_id: "org.example".to_string(),
            artifact_id: "lib".to_string(),
            version: Some("1.0".to_string()),
            dep_type: Some("test-jar".to_string()),
            scope: None,
        };
        assert!(!dep.is_bom_import());
        assert!(!dep.is_managed_library());
    }
}
