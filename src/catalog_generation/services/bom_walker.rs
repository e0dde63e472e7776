use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;

use futures::future;

use crate::catalog_generation::domain::{BomCoordinates, Dependency, PomModel, VersionCatalog};
use crate::catalog_generation::policies::GeneratorConfig;
use crate::catalog_generation::services::alias_registry::AliasRegistry;
use crate::catalog_generation::services::property_collector::collect_properties;
use crate::catalog_generation::services::version_resolver::{resolve_version, ResolvedVersion};
use crate::ports::outbound::{CatalogSink, ModelFetcher, ProgressReporter};
use crate::shared::Result;

/// Why a managed dependency was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionReason {
    /// Group id matched the configured exclude-groups pattern.
    GroupPattern,
    /// Artifact id matched the configured exclude-names pattern.
    NamePattern,
    /// The version property was dropped as a duplicate earlier in the
    /// traversal; assigning the surviving value could be wrong.
    DroppedProperty(String),
    /// The version references a property no visited BOM declares.
    UnknownProperty(String),
    /// The dependency declares no version at all.
    MissingVersion,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::GroupPattern => write!(f, "matched the exclude-groups pattern"),
            ExclusionReason::NamePattern => write!(f, "matched the exclude-names pattern"),
            ExclusionReason::DroppedProperty(alias) => write!(
                f,
                "version property '{}' was dropped as a duplicate",
                alias
            ),
            ExclusionReason::UnknownProperty(alias) => {
                write!(f, "references unknown version property '{}'", alias)
            }
            ExclusionReason::MissingVersion => write!(f, "declares no version"),
        }
    }
}

/// A recoverable condition recorded during traversal. Warnings are reported
/// as they happen and returned with the catalog so callers can inspect them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalWarning {
    DuplicateProperties {
        coordinates: BomCoordinates,
        aliases: Vec<String>,
    },
    ExcludedDependency {
        source: BomCoordinates,
        group_id: String,
        artifact_id: String,
        reason: ExclusionReason,
    },
}

impl fmt::Display for TraversalWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalWarning::DuplicateProperties {
                coordinates,
                aliases,
            } => write!(
                f,
                "{} duplicate version propert{} in {} ignored, first-seen values win: {}",
                aliases.len(),
                if aliases.len() == 1 { "y" } else { "ies" },
                coordinates,
                aliases.join(", ")
            ),
            TraversalWarning::ExcludedDependency {
                source,
                group_id,
                artifact_id,
                reason,
            } => write!(
                f,
                "Excluded {}:{} (from {}): {}",
                group_id, artifact_id, source, reason
            ),
        }
    }
}

/// Everything a finished traversal produced.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub catalog: VersionCatalog,
    pub warnings: Vec<TraversalWarning>,
    /// Number of BOMs visited, sources included.
    pub visited_boms: usize,
}

/// Per-traversal mutable state. Created fresh for every `walk` call and
/// discarded when the queue empties; nothing persists across generations.
#[derive(Debug, Default)]
struct TraversalState {
    queue: VecDeque<BomCoordinates>,
    seen_modules: HashSet<String>,
    props: BTreeMap<String, String>,
    excluded_props: HashSet<String>,
}

impl TraversalState {
    /// Returns true when the module had not been seen before.
    fn mark_seen(&mut self, module_key: &str) -> bool {
        self.seen_modules.insert(module_key.to_string())
    }
}

/// BomWalker - the breadth-first traversal engine over BOM imports.
///
/// Dequeues BOM coordinates FIFO, fetches their models, harvests version
/// properties, queues nested BOM imports, and registers regular managed
/// libraries through the alias registry. FIFO order guarantees that a
/// shallower BOM's properties take precedence over a deeper one's when
/// aliases collide.
///
/// Each queue generation is prefetched concurrently (fetch results are pure
/// functions of coordinates) but applied to traversal state strictly in
/// FIFO order, so the observable behavior is identical to a sequential
/// walk. A single failed fetch aborts the whole traversal before anything
/// is presented.
pub struct BomWalker<'a, F: ModelFetcher, P: ProgressReporter> {
    fetcher: &'a F,
    config: &'a GeneratorConfig,
    reporter: &'a P,
}

impl<'a, F: ModelFetcher, P: ProgressReporter> BomWalker<'a, F, P> {
    pub fn new(fetcher: &'a F, config: &'a GeneratorConfig, reporter: &'a P) -> Self {
        Self {
            fetcher,
            config,
            reporter,
        }
    }

    /// Runs the traversal from the given source BOMs until the queue is
    /// empty, returning the accumulated catalog and warnings.
    pub async fn walk(&self, sources: &[BomCoordinates]) -> Result<GenerationOutcome> {
        let mut state = TraversalState::default();
        let mut registry = AliasRegistry::new();
        let mut catalog = VersionCatalog::new();
        let mut warnings = Vec::new();
        let mut visited = 0usize;

        for coords in sources {
            if !state.mark_seen(&coords.module_key()) {
                continue;
            }
            if self.config.generate_bom_entry {
                self.register_bom_entry(coords, &state, &mut registry, &mut catalog)?;
            }
            state.queue.push_back(coords.clone());
        }

        while !state.queue.is_empty() {
            // One queue generation at a time: prefetch concurrently, apply
            // in order. Newly discovered imports land in the next batch.
            let generation: Vec<BomCoordinates> = state.queue.drain(..).collect();
            let fetched =
                future::join_all(generation.iter().map(|c| self.fetcher.fetch(c))).await;

            for (coords, result) in generation.iter().zip(fetched) {
                let model = result?;
                self.reporter
                    .report(&format!("📦 Processing BOM {}", coords));
                visited += 1;
                self.process_bom(
                    coords,
                    &model,
                    &mut state,
                    &mut registry,
                    &mut catalog,
                    &mut warnings,
                )?;
            }
        }

        Ok(GenerationOutcome {
            catalog,
            warnings,
            visited_boms: visited,
        })
    }

    /// Registers a source BOM itself as a catalog library, with its literal
    /// version.
    fn register_bom_entry(
        &self,
        coords: &BomCoordinates,
        state: &TraversalState,
        registry: &mut AliasRegistry,
        sink: &mut dyn CatalogSink,
    ) -> Result<()> {
        let bom_dep = Dependency {
            group_id: coords.group_id().to_string(),
            artifact_id: coords.artifact_id().to_string(),
            version: Some(coords.version().to_string()),
            dep_type: Some("pom".to_string()),
            scope: None,
        };
        let registration = registry.register(
            &bom_dep,
            coords.version(),
            &state.props,
            self.config.alias_naming.as_ref(),
        )?;
        sink.add_library(
            &registration.alias,
            coords.group_id(),
            coords.artifact_id(),
            registration.version,
        )
    }

    fn process_bom(
        &self,
        coords: &BomCoordinates,
        model: &PomModel,
        state: &mut TraversalState,
        registry: &mut AliasRegistry,
        sink: &mut dyn CatalogSink,
        warnings: &mut Vec<TraversalWarning>,
    ) -> Result<()> {
        let collected = collect_properties(
            model,
            self.config.version_naming.as_ref(),
            &self.config.property_overrides,
            &state.props,
        )?;

        if !collected.duplicates.is_empty() {
            state
                .excluded_props
                .extend(collected.duplicates.iter().cloned());
            let warning = TraversalWarning::DuplicateProperties {
                coordinates: coords.clone(),
                aliases: collected.duplicates,
            };
            self.reporter.report_error(&format!("⚠️  Warning: {}", warning));
            warnings.push(warning);
        }

        for (alias, value) in collected.new_props {
            sink.add_version_alias(&alias, &value)?;
            state.props.insert(alias, value);
        }

        // Classify managed dependencies: imports feed the queue, jar-type
        // entries are grouped by resolved version token in encounter order.
        let mut groups: Vec<(String, Vec<Dependency>)> = Vec::new();
        for dep in &model.managed_dependencies {
            if dep.is_bom_import() {
                self.queue_import(coords, dep, model, state, warnings)?;
            } else if dep.is_managed_library() {
                if let Some(token) =
                    self.classify_library(coords, dep, model, state, warnings)?
                {
                    match groups.iter_mut().find(|(t, _)| *t == token) {
                        Some((_, members)) => members.push(dep.clone()),
                        None => groups.push((token, vec![dep.clone()])),
                    }
                }
            }
        }

        for (token, members) in groups {
            let mut bundle_members = Vec::new();
            for dep in &members {
                let registration = registry.register(
                    dep,
                    &token,
                    &state.props,
                    self.config.alias_naming.as_ref(),
                )?;
                sink.add_library(
                    &registration.alias,
                    &dep.group_id,
                    &dep.artifact_id,
                    registration.version,
                )?;
                if registration.is_version_ref {
                    bundle_members.push(registration.alias);
                }
            }
            if !bundle_members.is_empty() {
                sink.add_bundle(&AliasRegistry::bundle_alias(&token), &bundle_members)?;
            }
        }

        Ok(())
    }

    /// Resolves an import-scoped POM dependency to literal coordinates and
    /// enqueues it. A `${...}` version is substituted from the accumulated
    /// property table before enqueuing - an unresolved placeholder never
    /// enters the queue.
    fn queue_import(
        &self,
        source: &BomCoordinates,
        dep: &Dependency,
        model: &PomModel,
        state: &mut TraversalState,
        warnings: &mut Vec<TraversalWarning>,
    ) -> Result<()> {
        if self.config.filter.is_excluded(&dep.group_id, &dep.artifact_id) {
            self.exclude(source, dep, self.pattern_reason(dep), warnings);
            return Ok(());
        }

        let Some(raw) = dep.version.as_deref() else {
            self.exclude(source, dep, ExclusionReason::MissingVersion, warnings);
            return Ok(());
        };

        let literal = match resolve_version(raw, model, self.config.version_naming.as_ref())? {
            ResolvedVersion::Literal(v) => v,
            ResolvedVersion::PropertyAlias(alias) => match state.props.get(&alias) {
                Some(value) => value.clone(),
                None => {
                    let reason = if state.excluded_props.contains(&alias) {
                        ExclusionReason::DroppedProperty(alias)
                    } else {
                        ExclusionReason::UnknownProperty(alias)
                    };
                    self.exclude(source, dep, reason, warnings);
                    return Ok(());
                }
            },
        };

        if !state.mark_seen(&dep.module_key()) {
            return Ok(());
        }

        let coords = BomCoordinates::new(&dep.group_id, &dep.artifact_id, &literal)?;
        state.queue.push_back(coords);
        Ok(())
    }

    /// Applies exclusion policy and resolves the version token for a regular
    /// managed library. Returns the grouping token, or `None` when the
    /// dependency is excluded or already seen.
    fn classify_library(
        &self,
        source: &BomCoordinates,
        dep: &Dependency,
        model: &PomModel,
        state: &mut TraversalState,
        warnings: &mut Vec<TraversalWarning>,
    ) -> Result<Option<String>> {
        if self.config.filter.is_excluded(&dep.group_id, &dep.artifact_id) {
            self.exclude(source, dep, self.pattern_reason(dep), warnings);
            return Ok(None);
        }

        let Some(raw) = dep.version.as_deref() else {
            self.exclude(source, dep, ExclusionReason::MissingVersion, warnings);
            return Ok(None);
        };

        let resolved = resolve_version(raw, model, self.config.version_naming.as_ref())?;
        if let ResolvedVersion::PropertyAlias(alias) = &resolved {
            if state.excluded_props.contains(alias) {
                self.exclude(
                    source,
                    dep,
                    ExclusionReason::DroppedProperty(alias.clone()),
                    warnings,
                );
                return Ok(None);
            }
            if !state.props.contains_key(alias) {
                self.exclude(
                    source,
                    dep,
                    ExclusionReason::UnknownProperty(alias.clone()),
                    warnings,
                );
                return Ok(None);
            }
        }

        if !state.mark_seen(&dep.module_key()) {
            return Ok(None);
        }

        Ok(Some(resolved.token().to_string()))
    }

    fn pattern_reason(&self, dep: &Dependency) -> ExclusionReason {
        if self.config.filter.group_matches(&dep.group_id) {
            ExclusionReason::GroupPattern
        } else {
            ExclusionReason::NamePattern
        }
    }

    fn exclude(
        &self,
        source: &BomCoordinates,
        dep: &Dependency,
        reason: ExclusionReason,
        warnings: &mut Vec<TraversalWarning>,
    ) {
        let warning = TraversalWarning::ExcludedDependency {
            source: source.clone(),
            group_id: dep.group_id.clone(),
            artifact_id: dep.artifact_id.clone(),
            reason,
        };
        self.reporter.report_error(&format!("⚠️  Warning: {}", warning));
        warnings.push(warning);
    }
}
