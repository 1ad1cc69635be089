//! Catalog drift detection
//!
//! The catalog is written ahead of time; the native library can change under
//! it. [`audit`] compares the static catalog for one mode against a manifest
//! harvested from the native library and reports every difference: algorithms
//! on only one side, keys declared on only one side, and category labels that
//! disagree.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::keys::KeyRole;
use crate::manifest::Manifest;
use crate::mode::{Mode, OperatingMode, Standard, Streaming};
use crate::registry::Identifier;

/// Streaming algorithms the native library registers but cannot describe.
/// They are deliberately absent from the catalog.
pub const KNOWN_UNSUPPORTED_STREAMING: &[&str] = &[
    "BarkExtractor",
    "FileOutput",
    "LoudnessEBUR128Filter",
    "RealAccumulator",
    "VectorRealAccumulator",
];

/// Audit configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOptions {
    /// Native names to leave out of the uncatalogued list
    pub ignore: BTreeSet<String>,
    /// Skip [`KNOWN_UNSUPPORTED_STREAMING`] when auditing streaming mode
    pub ignore_known_unsupported: bool,
    pub check_keys: bool,
    pub check_categories: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            ignore: BTreeSet::new(),
            ignore_known_unsupported: true,
            check_keys: true,
            check_categories: true,
        }
    }
}

impl AuditOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignoring(mut self, name: impl Into<String>) -> Self {
        self.ignore.insert(name.into());
        self
    }

    pub fn with_keys(mut self, check: bool) -> Self {
        self.check_keys = check;
        self
    }

    pub fn with_categories(mut self, check: bool) -> Self {
        self.check_categories = check;
        self
    }

    fn ignores(&self, mode: Mode, name: &str) -> bool {
        self.ignore.contains(name)
            || (self.ignore_known_unsupported
                && mode == Mode::Streaming
                && KNOWN_UNSUPPORTED_STREAMING.contains(&name))
    }
}

/// Keys that differ between the catalog and the native library for one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDrift {
    pub algorithm: String,
    pub role: KeyRole,
    /// Declared natively but missing from the catalog
    pub undeclared: Vec<String>,
    /// Catalogued but no longer declared natively
    pub stale: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDrift {
    pub algorithm: String,
    pub catalog: Category,
    /// The native label, verbatim
    pub native: String,
}

/// Differences between the catalog and a native manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub mode: Mode,
    /// Catalogued algorithms the native library does not register
    pub missing: Vec<String>,
    /// Native algorithms with no catalog entry
    pub uncatalogued: Vec<String>,
    /// Native algorithms skipped by configuration
    pub ignored: Vec<String>,
    pub key_drift: Vec<KeyDrift>,
    pub category_drift: Vec<CategoryDrift>,
}

impl AuditReport {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            missing: Vec::new(),
            uncatalogued: Vec::new(),
            ignored: Vec::new(),
            key_drift: Vec::new(),
            category_drift: Vec::new(),
        }
    }

    /// No drift of any kind; ignored names do not count
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
            && self.uncatalogued.is_empty()
            && self.key_drift.is_empty()
            && self.category_drift.is_empty()
    }

    /// Number of drift findings
    pub fn len(&self) -> usize {
        self.missing.len() + self.uncatalogued.len() + self.key_drift.len() + self.category_drift.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }
}

/// Audit `native` against the catalog for `native.mode` with default options
pub fn audit(native: &Manifest) -> AuditReport {
    audit_with(native, &AuditOptions::default())
}

/// Audit `native` against the catalog for `native.mode`
pub fn audit_with(native: &Manifest, options: &AuditOptions) -> AuditReport {
    let report = match native.mode {
        Mode::Standard => audit_mode::<Standard>(native, options),
        Mode::Streaming => audit_mode::<Streaming>(native, options),
    };

    if report.is_clean() {
        tracing::debug!(mode = %report.mode, ignored = report.ignored.len(), "catalog matches native library");
    } else {
        tracing::warn!(
            mode = %report.mode,
            missing = report.missing.len(),
            uncatalogued = report.uncatalogued.len(),
            key_drift = report.key_drift.len(),
            category_drift = report.category_drift.len(),
            "catalog drift detected"
        );
    }
    report
}

fn audit_mode<M: OperatingMode>(native: &Manifest, options: &AuditOptions) -> AuditReport {
    let mode = M::MODE;
    let mut report = AuditReport::new(mode);

    for id in <M::Id as Identifier>::ALL {
        let contract = id.contract();
        let Some(def) = native.get(contract.name()) else {
            tracing::warn!(algorithm = contract.name(), %mode, "catalogued algorithm not registered natively");
            report.missing.push(contract.name().to_string());
            continue;
        };

        if options.check_keys {
            for role in KeyRole::ALL {
                let catalog: BTreeSet<&str> = contract.keys(role).names().collect();
                let declared: BTreeSet<&str> = def.keys(role).iter().map(String::as_str).collect();
                if catalog == declared {
                    continue;
                }
                let drift = KeyDrift {
                    algorithm: contract.name().to_string(),
                    role,
                    undeclared: declared.difference(&catalog).map(|k| k.to_string()).collect(),
                    stale: catalog.difference(&declared).map(|k| k.to_string()).collect(),
                };
                tracing::warn!(
                    algorithm = contract.name(),
                    %role,
                    undeclared = ?drift.undeclared,
                    stale = ?drift.stale,
                    "key drift"
                );
                report.key_drift.push(drift);
            }
        }

        if options.check_categories
            && !def.category.is_empty()
            && def.category != contract.category().label()
        {
            tracing::warn!(
                algorithm = contract.name(),
                catalog = %contract.category(),
                native = %def.category,
                "category drift"
            );
            report.category_drift.push(CategoryDrift {
                algorithm: contract.name().to_string(),
                catalog: contract.category(),
                native: def.category.clone(),
            });
        }
    }

    for name in native.names() {
        if <M::Id as Identifier>::from_name(name).is_some() {
            continue;
        }
        if options.ignores(mode, name) {
            report.ignored.push(name.to_string());
        } else {
            tracing::warn!(algorithm = name, %mode, "native algorithm not catalogued");
            report.uncatalogued.push(name.to_string());
        }
    }

    report
}
