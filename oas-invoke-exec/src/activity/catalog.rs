use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use oas_invoke_core::{discover_with, DiscoveryOptions, DiscoveryReport, Specification};

use crate::activity::descriptor::{describe, ActivityDescriptor};
use crate::activity::invoke::OpenApiActivity;
use crate::executor::Invoker;
use crate::request::BuildOptions;

/// One registered specification and the descriptor derived from it.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    descriptor: ActivityDescriptor,
    specification: Arc<Specification>,
}

impl ActivityEntry {
    pub fn new(specification: Specification) -> Self {
        Self {
            descriptor: describe(&specification),
            specification: Arc::new(specification),
        }
    }

    pub fn descriptor(&self) -> &ActivityDescriptor {
        &self.descriptor
    }

    pub fn specification(&self) -> &Arc<Specification> {
        &self.specification
    }

    pub fn activity(&self, invoker: Arc<Invoker>, options: BuildOptions) -> OpenApiActivity {
        OpenApiActivity::new(Arc::clone(&self.specification), invoker, options)
    }
}

/// A document that discovery could not turn into an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Immutable set of activities from one discovery pass.
///
/// Every specification gets a descriptor, even when identifiers collide.
/// Lookup by identifier returns the first one registered.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    entries: Vec<ActivityEntry>,
    by_identifier: HashMap<String, usize>,
    failures: Vec<CatalogFailure>,
}

impl ActivityCatalog {
    pub fn from_specifications(specifications: impl IntoIterator<Item = Specification>) -> Self {
        let mut catalog = Self::default();
        for spec in specifications {
            catalog.register(ActivityEntry::new(spec));
        }
        tracing::info!(activities = catalog.entries.len(), "registered OpenAPI activities");
        catalog
    }

    pub fn from_report(report: DiscoveryReport) -> Self {
        let failures = report
            .failures
            .into_iter()
            .map(|f| CatalogFailure {
                message: f.error.to_string(),
                path: f.path,
            })
            .collect();
        let mut catalog = Self::from_specifications(report.specifications);
        catalog.failures = failures;
        catalog
    }

    fn register(&mut self, entry: ActivityEntry) {
        let identifier = entry.descriptor.identifier.clone();
        if let Some(&existing) = self.by_identifier.get(&identifier) {
            tracing::warn!(
                identifier = %identifier,
                kept = ?self.entries[existing].specification.source,
                shadowed = ?entry.specification.source,
                "duplicate OpenAPI activity identifier"
            );
        } else {
            self.by_identifier.insert(identifier, self.entries.len());
        }
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ActivityDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    pub fn get(&self, identifier: &str) -> Option<&ActivityEntry> {
        self.by_identifier.get(identifier).map(|&i| &self.entries[i])
    }

    pub fn failures(&self) -> &[CatalogFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Owns the specifications directory and the current catalog.
///
/// `refresh` re-runs discovery and swaps the catalog. Snapshots handed out earlier stay valid.
pub struct ActivityProvider {
    root: PathBuf,
    options: DiscoveryOptions,
    current: RwLock<Arc<ActivityCatalog>>,
}

impl ActivityProvider {
    pub fn load(root: impl Into<PathBuf>, options: DiscoveryOptions) -> Self {
        let root = root.into();
        let catalog = ActivityCatalog::from_report(discover_with(&root, &options));
        Self {
            root,
            options,
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn snapshot(&self) -> Arc<ActivityCatalog> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn refresh(&self) -> Arc<ActivityCatalog> {
        let catalog = Arc::new(ActivityCatalog::from_report(discover_with(&self.root, &self.options)));
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::clone(&catalog);
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(title: &str) -> Specification {
        Specification::new(title, "1.0")
    }

    #[test]
    fn first_registration_wins_lookup() {
        let mut a = spec("Pets");
        a.description = Some("first".into());
        let mut b = spec("Pets");
        b.description = Some("second".into());

        let catalog = ActivityCatalog::from_specifications([a, b, spec("Other")]);
        assert_eq!(catalog.len(), 3);
        let hit = catalog.get("OpenApi_Pets").unwrap();
        assert_eq!(hit.specification().description.as_deref(), Some("first"));
        assert!(catalog.get("OpenApi_Other").is_some());
        assert!(catalog.get("OpenApi_Missing").is_none());
    }
}
