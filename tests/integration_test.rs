/// Integration tests for the application layer
mod test_utilities;

use bom_catalog::prelude::*;
use test_utilities::mocks::*;

const ROOT_BOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <groupId>org.example</groupId>
    <artifactId>platform-bom</artifactId>
    <version>1.0.0</version>
    <packaging>pom</packaging>

    <properties>
        <assertj.version>3.24.2</assertj.version>
        <jackson.version>2.15.2</jackson.version>
        <micro.version>1.1.0</micro.version>
    </properties>

    <dependencyManagement>
        <dependencies>
            <dependency>
                <groupId>org.assertj</groupId>
                <artifactId>assertj-core</artifactId>
                <version>${assertj.version}</version>
            </dependency>
            <dependency>
                <groupId>com.fasterxml.jackson.core</groupId>
                <artifactId>jackson-core</artifactId>
                <version>${jackson.version}</version>
            </dependency>
            <dependency>
                <groupId>com.fasterxml.jackson.core</groupId>
                <artifactId>jackson-databind</artifactId>
                <version>${jackson.version}</version>
            </dependency>
            <dependency>
                <groupId>org.example.micro</groupId>
                <artifactId>micro-bom</artifactId>
                <version>${micro.version}</version>
                <type>pom</type>
                <scope>import</scope>
            </dependency>
        </dependencies>
    </dependencyManagement>
</project>
"#;

const MICRO_BOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <groupId>org.example.micro</groupId>
    <artifactId>micro-bom</artifactId>
    <version>1.1.0</version>
    <packaging>pom</packaging>

    <properties>
        <jackson.version>2.99.0</jackson.version>
        <h2.version>2.2.224</h2.version>
    </properties>

    <dependencyManagement>
        <dependencies>
            <dependency>
                <groupId>com.h2database</groupId>
                <artifactId>h2</artifactId>
                <version>${h2.version}</version>
            </dependency>
            <dependency>
                <groupId>com.fasterxml.jackson.core</groupId>
                <artifactId>jackson-core</artifactId>
                <version>${jackson.version}</version>
            </dependency>
            <dependency>
                <groupId>org.acme</groupId>
                <artifactId>acme-json</artifactId>
                <version>${jackson.version}</version>
            </dependency>
        </dependencies>
    </dependencyManagement>
</project>
"#;

fn fixture_fetcher() -> InMemoryModelFetcher {
    InMemoryModelFetcher::new()
        .with_pom("org.example:platform-bom:1.0.0", ROOT_BOM)
        .with_pom("org.example.micro:micro-bom:1.1.0", MICRO_BOM)
}

fn request(sources: &[&str], config: GeneratorConfig) -> CatalogRequest {
    let coords = sources
        .iter()
        .map(|s| BomCoordinates::parse(s).unwrap())
        .collect();
    CatalogRequest::new(coords, config)
}

#[tokio::test]
async fn test_generate_catalog_happy_path() {
    let use_case =
        GenerateCatalogUseCase::new(fixture_fetcher(), RecordingProgressReporter::new());

    let response = use_case
        .execute(request(
            &["org.example:platform-bom:1.0.0"],
            GeneratorConfig::default(),
        ))
        .await
        .unwrap();

    let catalog = &response.catalog;
    assert_eq!(response.visited_boms, 2);

    // Root properties become version aliases; the nested BOM's h2 property
    // joins them.
    assert_eq!(catalog.get_version("assertj"), Some("3.24.2"));
    assert_eq!(catalog.get_version("jackson"), Some("2.15.2"));
    assert_eq!(catalog.get_version("h2"), Some("2.2.224"));

    // Libraries registered as version references.
    let assertj = catalog.get_library("assertj.assertj-core").unwrap();
    assert_eq!(assertj.version, VersionSpec::reference("assertj"));
    let jackson_core = catalog.get_library("core.jackson-core").unwrap();
    assert_eq!(jackson_core.version, VersionSpec::reference("jackson"));

    // Both jackson modules share one bundle keyed by the version token.
    assert_eq!(
        catalog.bundles().get("jackson").unwrap(),
        &vec![
            "core.jackson-core".to_string(),
            "core.jackson-databind".to_string()
        ]
    );
}

#[tokio::test]
async fn test_duplicate_property_shallow_wins_and_warns() {
    let reporter = RecordingProgressReporter::new();
    let use_case = GenerateCatalogUseCase::new(fixture_fetcher(), reporter);

    let response = use_case
        .execute(request(
            &["org.example:platform-bom:1.0.0"],
            GeneratorConfig::default(),
        ))
        .await
        .unwrap();

    // The nested BOM redeclares jackson.version; the root's value survives.
    assert_eq!(response.catalog.get_version("jackson"), Some("2.15.2"));

    // jackson-core is already registered from the root; acme-json depends on
    // the dropped duplicate and is excluded instead of mis-versioned.
    assert!(response.catalog.get_library("acme.acme-json").is_none());

    assert!(response.warnings.iter().any(|w| matches!(
        w,
        TraversalWarning::DuplicateProperties { aliases, .. } if aliases.contains(&"jackson".to_string())
    )));
    assert!(response.warnings.iter().any(|w| matches!(
        w,
        TraversalWarning::ExcludedDependency {
            reason: ExclusionReason::DroppedProperty(alias),
            ..
        } if alias == "jackson"
    )));
}

#[tokio::test]
async fn test_module_deduplicated_across_boms() {
    let use_case =
        GenerateCatalogUseCase::new(fixture_fetcher(), RecordingProgressReporter::new());

    let response = use_case
        .execute(request(
            &["org.example:platform-bom:1.0.0"],
            GeneratorConfig::default(),
        ))
        .await
        .unwrap();

    // jackson-core appears in both BOMs but lands exactly once, with the
    // root's registration.
    let entry = response.catalog.get_library("core.jackson-core").unwrap();
    assert_eq!(entry.group_id, "com.fasterxml.jackson.core");
    assert_eq!(entry.version, VersionSpec::reference("jackson"));
}

#[tokio::test]
async fn test_exclusion_pattern_drops_dependency() {
    let config = GeneratorConfig::default()
        .with_filter(DependencyFilter::new(Some(r"com\.h2database"), None).unwrap());
    let use_case = GenerateCatalogUseCase::new(fixture_fetcher(), RecordingProgressReporter::new());

    let response = use_case
        .execute(request(&["org.example:platform-bom:1.0.0"], config))
        .await
        .unwrap();

    assert!(response.catalog.get_library("h2database.h2").is_none());
    assert!(response.warnings.iter().any(|w| matches!(
        w,
        TraversalWarning::ExcludedDependency {
            reason: ExclusionReason::GroupPattern,
            ..
        }
    )));
}

#[tokio::test]
async fn test_bom_entry_flag_registers_source_bom() {
    let config = GeneratorConfig::default().with_bom_entry(true);
    let use_case = GenerateCatalogUseCase::new(fixture_fetcher(), RecordingProgressReporter::new());

    let response = use_case
        .execute(request(&["org.example:platform-bom:1.0.0"], config))
        .await
        .unwrap();

    let entry = response.catalog.get_library("example.platform-bom").unwrap();
    assert_eq!(entry.version, VersionSpec::literal("1.0.0"));
}

#[tokio::test]
async fn test_fetch_failure_produces_no_catalog() {
    let fetcher = InMemoryModelFetcher::new().with_pom(
        "org.example:platform-bom:1.0.0",
        // References a nested BOM that is not registered with the fetcher.
        ROOT_BOM,
    );
    let use_case = GenerateCatalogUseCase::new(fetcher, RecordingProgressReporter::new());

    let result = use_case
        .execute(request(
            &["org.example:platform-bom:1.0.0"],
            GeneratorConfig::default(),
        ))
        .await;

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("org.example.micro:micro-bom:1.1.0"));
}

#[tokio::test]
async fn test_traversal_warnings_reach_the_reporter() {
    let reporter = RecordingProgressReporter::new();
    let use_case = GenerateCatalogUseCase::new(fixture_fetcher(), &reporter);

    use_case
        .execute(request(
            &["org.example:platform-bom:1.0.0"],
            GeneratorConfig::default(),
        ))
        .await
        .unwrap();

    let errors = reporter.errors();
    assert!(errors
        .iter()
        .any(|e| e.contains("duplicate version propert")));

    let reports = reporter.reports();
    assert!(reports
        .iter()
        .any(|r| r.contains("org.example:platform-bom:1.0.0")));
}

#[tokio::test]
async fn test_catalog_round_trips_through_toml() {
    let use_case =
        GenerateCatalogUseCase::new(fixture_fetcher(), RecordingProgressReporter::new());

    let response = use_case
        .execute(request(
            &["org.example:platform-bom:1.0.0"],
            GeneratorConfig::default(),
        ))
        .await
        .unwrap();

    let formatter = TomlCatalogFormatter::new();
    let rendered = formatter.format(&response.catalog).unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("libs.versions.toml");
    std::fs::write(&path, &rendered).unwrap();

    let parsed = parse_catalog_file(&path).unwrap();
    assert_eq!(parsed, response.catalog);

    // Every library resolves to the same concrete version after the trip.
    for (alias, entry) in response.catalog.libraries() {
        let original = response.catalog.resolved_library_version(entry).unwrap();
        let reparsed_entry = parsed.get_library(alias).unwrap();
        let reparsed = parsed.resolved_library_version(reparsed_entry).unwrap();
        assert_eq!(original, reparsed, "alias {} changed across round-trip", alias);
    }
}

#[tokio::test]
async fn test_starting_bom_discovery_from_catalog_file() {
    let use_case =
        GenerateCatalogUseCase::new(fixture_fetcher(), RecordingProgressReporter::new());

    let config = GeneratorConfig::default().with_bom_entry(true);
    let response = use_case
        .execute(request(&["org.example:platform-bom:1.0.0"], config))
        .await
        .unwrap();

    let rendered = TomlCatalogFormatter::new().format(&response.catalog).unwrap();
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("libs.versions.toml");
    std::fs::write(&path, rendered).unwrap();

    let catalog = parse_catalog_file(&path).unwrap();
    let coords = find_library_coordinates(&catalog, "example.platform-bom", &path).unwrap();
    assert_eq!(coords.to_string(), "org.example:platform-bom:1.0.0");
}

#[tokio::test]
async fn test_property_override_changes_registered_version() {
    let mut overrides = std::collections::BTreeMap::new();
    overrides.insert(
        "assertj".to_string(),
        PropertyOverride::Literal("3.26.0".to_string()),
    );
    let config = GeneratorConfig::default().with_property_overrides(overrides);
    let use_case = GenerateCatalogUseCase::new(fixture_fetcher(), RecordingProgressReporter::new());

    let response = use_case
        .execute(request(&["org.example:platform-bom:1.0.0"], config))
        .await
        .unwrap();

    assert_eq!(response.catalog.get_version("assertj"), Some("3.26.0"));
    // The library still points at the alias, now carrying the override.
    let entry = response.catalog.get_library("assertj.assertj-core").unwrap();
    assert_eq!(
        response.catalog.resolved_library_version(entry),
        Some("3.26.0")
    );
}
