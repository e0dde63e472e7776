use std::collections::BTreeMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::catalog_generation::domain::{Dependency, ParentRef, PomModel};
use crate::shared::Result;

/// Parses pom.xml content into a `PomModel`.
///
/// Only the parts of a POM the traversal cares about are read: project
/// coordinates, the parent reference, `<properties>`, and the entries of
/// `<dependencyManagement><dependencies>`. A top-level `<dependencies>`
/// section, plugins, profiles, and everything else are skipped. XML
/// comments never produce events, so commented-out dependencies are
/// naturally ignored.
pub fn parse_pom(content: &str) -> Result<PomModel> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    // Element path from the document root, e.g.
    // ["project", "dependencyManagement", "dependencies", "dependency"].
    let mut path: Vec<String> = Vec::new();

    let mut group_id: Option<String> = None;
    let mut artifact_id: Option<String> = None;
    let mut version: Option<String> = None;
    let mut parent: Option<ParentRef> = None;
    let mut properties: BTreeMap<String, String> = BTreeMap::new();
    let mut managed_dependencies: Vec<Dependency> = Vec::new();
    let mut current_dep: Option<PartialDependency> = None;

    loop {
        match reader
            .read_event()
            .map_err(|e| anyhow::anyhow!("XML parse error at byte {}: {}", reader.buffer_position(), e))?
        {
            Event::Start(ref e) => {
                let name = local_name(e);
                if name == "parent" && path_is(&path, &["project"]) {
                    parent = Some(ParentRef::default());
                } else if name == "dependency"
                    && path_is(&path, &["project", "dependencyManagement", "dependencies"])
                {
                    current_dep = Some(PartialDependency::default());
                }
                path.push(name);
            }
            Event::Empty(ref e) => {
                // An empty element inside <properties> is an empty value.
                if path_is(&path, &["project", "properties"]) {
                    properties.insert(local_name(e), String::new());
                }
            }
            Event::End(_) => {
                let closed = path.pop();
                if closed.as_deref() == Some("dependency")
                    && path_is(&path, &["project", "dependencyManagement", "dependencies"])
                {
                    if let Some(dep) = current_dep.take().and_then(PartialDependency::build) {
                        managed_dependencies.push(dep);
                    }
                }
            }
            Event::Text(ref e) => {
                let text = e
                    .unescape()
                    .map_err(|err| anyhow::anyhow!("XML unescape error: {}", err))?
                    .to_string();

                if path_is(&path, &["project", "groupId"]) {
                    group_id = Some(text);
                } else if path_is(&path, &["project", "artifactId"]) {
                    artifact_id = Some(text);
                } else if path_is(&path, &["project", "version"]) {
                    version = Some(text);
                } else if path.len() == 3 && path_is(&path[..2], &["project", "parent"]) {
                    if let Some(p) = parent.as_mut() {
                        match path[2].as_str() {
                            "groupId" => p.group_id = Some(text),
                            "artifactId" => p.artifact_id = Some(text),
                            "version" => p.version = Some(text),
                            _ => {}
                        }
                    }
                } else if path.len() == 3 && path_is(&path[..2], &["project", "properties"]) {
                    properties.insert(path[2].clone(), text);
                } else if path.len() == 5
                    && path_is(
                        &path[..4],
                        &["project", "dependencyManagement", "dependencies", "dependency"],
                    )
                {
                    if let Some(dep) = current_dep.as_mut() {
                        match path[4].as_str() {
                            "groupId" => dep.group_id = Some(text),
                            "artifactId" => dep.artifact_id = Some(text),
                            "version" => dep.version = Some(text),
                            "type" => dep.dep_type = Some(text),
                            "scope" => dep.scope = Some(text),
                            _ => {}
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let artifact_id = artifact_id
        .ok_or_else(|| anyhow::anyhow!("POM declares no <artifactId>"))?;

    Ok(PomModel {
        group_id,
        artifact_id,
        version,
        parent,
        properties,
        managed_dependencies,
    })
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_string()
}

fn path_is(path: &[String], expected: &[&str]) -> bool {
    path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a == b)
}

/// Accumulates a `<dependency>` element's children while it is open.
#[derive(Default)]
struct PartialDependency {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    dep_type: Option<String>,
    scope: Option<String>,
}

impl PartialDependency {
    /// Entries missing group or artifact are dropped rather than failing
    /// the whole POM.
    fn build(self) -> Option<Dependency> {
        Some(Dependency {
            group_id: self.group_id?,
            artifact_id: self.artifact_id?,
            version: self.version,
            dep_type: self.dep_type,
            scope: self.scope,
        })
    }
}
