//! Catalog manifests
//!
//! A [`Manifest`] is a plain, serializable listing of the algorithms of one
//! mode and their declared keys. It can be produced from the static catalog
//! or harvested from a live native library, which is what the
//! [`audit`](crate::audit) compares.

use serde::{Deserialize, Serialize};

use crate::contract::Contract;
use crate::keys::KeyRole;
use crate::mode::{Mode, OperatingMode, Standard, Streaming};
use crate::native::{InfoSource, NativeFactory, NativeHandle};
use crate::registry::Identifier;

/// Manifest format version
pub const MANIFEST_VERSION: u32 = 1;

/// Definition of one algorithm in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmDef {
    pub name: String,
    /// Native category label; empty when the native library has no info
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AlgorithmDef {
    pub fn from_contract(contract: &Contract) -> Self {
        let keys = |role| contract.keys(role).names().map(String::from).collect();
        Self {
            name: contract.name().to_string(),
            category: contract.category().label().to_string(),
            inputs: keys(KeyRole::Input),
            outputs: keys(KeyRole::Output),
            parameters: keys(KeyRole::Parameter),
            description: None,
        }
    }

    /// Definition read off a live native handle
    pub fn from_native<H: NativeHandle>(handle: &H) -> Self {
        Self {
            name: handle.name().to_string(),
            category: String::new(),
            inputs: handle.input_names(),
            outputs: handle.output_names(),
            parameters: handle.parameter_names(),
            description: None,
        }
    }

    pub fn keys(&self, role: KeyRole) -> &[String] {
        match role {
            KeyRole::Input => &self.inputs,
            KeyRole::Output => &self.outputs,
            KeyRole::Parameter => &self.parameters,
        }
    }
}

/// Serializable listing of one mode's algorithms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub mode: Mode,
    pub algorithms: Vec<AlgorithmDef>,
}

/// Outcome of harvesting a native library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Harvest {
    pub manifest: Manifest,
    /// Registered names that could not be instantiated
    pub failures: Vec<HarvestFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestFailure {
    pub name: String,
    pub reason: String,
}

impl Manifest {
    pub fn new(mode: Mode) -> Self {
        Self {
            version: MANIFEST_VERSION,
            mode,
            algorithms: Vec::new(),
        }
    }

    /// Manifest of the static catalog for `mode`
    pub fn from_catalog(mode: Mode) -> Self {
        let algorithms = match mode {
            Mode::Standard => catalog_defs::<Standard>(),
            Mode::Streaming => catalog_defs::<Streaming>(),
        };
        Self {
            version: MANIFEST_VERSION,
            mode,
            algorithms,
        }
    }

    /// Build a manifest by instantiating every algorithm the factory registers
    ///
    /// Algorithms that fail to instantiate, or whose handle reports a name
    /// other than the one it was registered under, are collected in
    /// [`Harvest::failures`] instead of aborting the harvest. Category and
    /// description come from `info` when it has an entry.
    pub fn harvest<M, F, S>(factory: &F, info: &S) -> Harvest
    where
        M: OperatingMode,
        F: NativeFactory<M>,
        S: InfoSource + ?Sized,
    {
        let mut manifest = Manifest::new(M::MODE);
        let mut failures = Vec::new();

        let mut names = factory.registered_names();
        names.sort();
        names.dedup();

        for name in names {
            let handle = match factory.create(&name) {
                Ok(handle) => handle,
                Err(e) => {
                    tracing::warn!(algorithm = %name, mode = %M::MODE, error = %e, "failed to instantiate");
                    failures.push(HarvestFailure {
                        name,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if handle.name() != name {
                tracing::warn!(
                    algorithm = %name,
                    actual = handle.name(),
                    mode = %M::MODE,
                    "handle reports a different algorithm"
                );
                failures.push(HarvestFailure {
                    reason: format!("registered as `{name}` but reports `{}`", handle.name()),
                    name,
                });
                continue;
            }

            let mut def = AlgorithmDef::from_native(&handle);
            match info.info(&name, M::MODE) {
                Some(info) => {
                    def.category = info.category;
                    def.description = Some(info.description);
                }
                None => tracing::debug!(algorithm = %name, "no info entry"),
            }
            manifest.algorithms.push(def);
        }

        tracing::debug!(
            mode = %M::MODE,
            algorithms = manifest.algorithms.len(),
            failures = failures.len(),
            "harvested native manifest"
        );
        Harvest { manifest, failures }
    }

    /// Fill in descriptions from an info source
    pub fn describe<S: InfoSource + ?Sized>(mut self, source: &S) -> Self {
        for def in &mut self.algorithms {
            def.description = source.info(&def.name, self.mode).map(|info| info.description);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&AlgorithmDef> {
        self.algorithms.iter().find(|def| def.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut AlgorithmDef> {
        self.algorithms.iter_mut().find(|def| def.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.algorithms.iter().map(|def| def.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    /// Serialize to JSON string
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn catalog_defs<M: OperatingMode>() -> Vec<AlgorithmDef> {
    <M::Id as Identifier>::ALL
        .iter()
        .map(|id| AlgorithmDef::from_contract(id.contract()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::audit;
    use crate::catalog::{StandardId, StreamingId};
    use crate::native::{AlgorithmInfo, InfoTable};
    use crate::testing::{FakeDecl, FakeFactory};

    #[test]
    fn test_from_catalog() {
        let manifest = Manifest::from_catalog(Mode::Standard);
        assert_eq!(manifest.version, MANIFEST_VERSION);
        assert_eq!(manifest.len(), StandardId::ALL.len());

        let leq = manifest.get("Leq").unwrap();
        assert_eq!(leq.category, "Loudness/dynamics");
        assert_eq!(leq.inputs, vec!["signal"]);
        assert_eq!(leq.outputs, vec!["leq"]);
        assert!(leq.parameters.is_empty());
        assert!(leq.keys(KeyRole::Parameter).is_empty());
    }

    #[test]
    fn test_describe() {
        let info = InfoTable::new().with(
            Mode::Streaming,
            AlgorithmInfo::new("Spectrum", "Magnitude spectrum of a frame.", "Spectral"),
        );
        let manifest = Manifest::from_catalog(Mode::Streaming).describe(&info);
        assert_eq!(
            manifest.get("Spectrum").unwrap().description.as_deref(),
            Some("Magnitude spectrum of a frame.")
        );
        assert_eq!(manifest.get("FFT").unwrap().description, None);
    }

    #[test]
    fn test_harvest_matches_catalog() {
        let factory = FakeFactory::<Streaming>::from_catalog();
        let harvest = Manifest::harvest(&factory, &InfoTable::new());
        assert!(harvest.failures.is_empty());
        assert_eq!(harvest.manifest.mode, Mode::Streaming);
        assert_eq!(harvest.manifest.len(), StreamingId::ALL.len());

        let catalog = Manifest::from_catalog(Mode::Streaming);
        for def in &catalog.algorithms {
            let native = harvest.manifest.get(&def.name).unwrap();
            assert_eq!(native.inputs, def.inputs);
            assert_eq!(native.outputs, def.outputs);
            assert_eq!(native.parameters, def.parameters);
            // Without info the native category is unknown
            assert!(native.category.is_empty());
        }
    }

    #[test]
    fn test_harvest_collects_failures() {
        let factory = FakeFactory::<Standard>::from_catalog()
            .failing("Spectrum")
            .with(FakeDecl::new("Mystery", &["signal"], &["noise"], &[]));
        let info = InfoTable::new().with(
            Mode::Standard,
            AlgorithmInfo::new("Mystery", "Not catalogued.", "Standard"),
        );

        let harvest = Manifest::harvest(&factory, &info);
        assert_eq!(
            harvest.failures,
            vec![HarvestFailure {
                name: "Spectrum".into(),
                reason: "`Spectrum` failed to configure".into(),
            }]
        );
        assert!(harvest.manifest.get("Spectrum").is_none());

        let mystery = harvest.manifest.get("Mystery").unwrap();
        assert_eq!(mystery.category, "Standard");
        assert_eq!(mystery.description.as_deref(), Some("Not catalogued."));
        assert_eq!(mystery.outputs, vec!["noise"]);
    }

    #[test]
    fn test_harvest_rejects_handle_under_another_name() {
        let factory = FakeFactory::<Standard>::from_catalog().alias("Mean", "GeometricMean");
        let harvest = Manifest::harvest(&factory, &InfoTable::new());
        assert_eq!(
            harvest.failures,
            vec![HarvestFailure {
                name: "Mean".into(),
                reason: "registered as `Mean` but reports `GeometricMean`".into(),
            }]
        );
        assert!(harvest.manifest.get("Mean").is_none());
        assert!(harvest.manifest.get("GeometricMean").is_some());

        let report = audit(&harvest.manifest);
        assert!(!report.is_clean());
        assert_eq!(report.missing, vec!["Mean"]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_round_trip() {
        let manifest = Manifest::from_catalog(Mode::Standard);
        let json = manifest.to_json().unwrap();
        assert!(json.contains("\"mode\": \"standard\""));
        assert!(json.contains("RhythmExtractor2013"));

        let parsed = Manifest::from_json(&json).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_omits_empty_key_lists() {
        let json = r#"{
            "version": 1,
            "mode": "streaming",
            "algorithms": [{ "name": "VectorInput", "category": "Input/output", "outputs": ["data"] }]
        }"#;
        let manifest = Manifest::from_json(json).unwrap();
        let def = manifest.get("VectorInput").unwrap();
        assert!(def.inputs.is_empty());
        assert_eq!(def, &AlgorithmDef::from_contract(StreamingId::VectorInput.contract()));
    }
}
