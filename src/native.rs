//! Interfaces to the native DSP engine
//!
//! The engine itself lives outside this crate. These traits describe the three
//! capabilities the catalog relies on: looking up algorithm info by name,
//! instantiating algorithms by name, and the untyped key-based accessors of a
//! live algorithm instance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mode::{Mode, OperatingMode};

/// Descriptive info the native library keeps per algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub name: String,
    pub description: String,
    /// Category label, e.g. "Loudness/dynamics"
    pub category: String,
}

impl AlgorithmInfo {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

/// Info lookup facility
///
/// Returning `None` is a normal outcome: the name may be unknown, or the
/// native library may be unable to describe that algorithm.
pub trait InfoSource {
    fn info(&self, name: &str, mode: Mode) -> Option<AlgorithmInfo>;
}

impl<F> InfoSource for F
where
    F: Fn(&str, Mode) -> Option<AlgorithmInfo>,
{
    fn info(&self, name: &str, mode: Mode) -> Option<AlgorithmInfo> {
        self(name, mode)
    }
}

/// In-memory info source, e.g. loaded from a JSON dump of the native library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoTable {
    standard: BTreeMap<String, AlgorithmInfo>,
    streaming: BTreeMap<String, AlgorithmInfo>,
}

impl InfoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the info for `info.name` in `mode`
    pub fn insert(&mut self, mode: Mode, info: AlgorithmInfo) {
        self.entries_mut(mode).insert(info.name.clone(), info);
    }

    pub fn with(mut self, mode: Mode, info: AlgorithmInfo) -> Self {
        self.insert(mode, info);
        self
    }

    pub fn len(&self) -> usize {
        self.standard.len() + self.streaming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.streaming.is_empty()
    }

    fn entries(&self, mode: Mode) -> &BTreeMap<String, AlgorithmInfo> {
        match mode {
            Mode::Standard => &self.standard,
            Mode::Streaming => &self.streaming,
        }
    }

    fn entries_mut(&mut self, mode: Mode) -> &mut BTreeMap<String, AlgorithmInfo> {
        match mode {
            Mode::Standard => &mut self.standard,
            Mode::Streaming => &mut self.streaming,
        }
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

impl InfoSource for InfoTable {
    fn info(&self, name: &str, mode: Mode) -> Option<AlgorithmInfo> {
        self.entries(mode).get(name).cloned()
    }
}

/// A live native algorithm instance with an untyped, string-keyed interface
///
/// The catalog never creates or destroys these; it reads [`NativeHandle::name`]
/// to check identity and forwards keys it has already validated.
pub trait NativeHandle {
    /// Operating mode of every instance of this handle type
    type Mode: OperatingMode;

    /// Untyped value exchanged through inputs, outputs and parameters
    type Value;

    /// Failure reported by the native side
    type Error: std::error::Error + Send + Sync + 'static;

    /// The name the algorithm was registered under
    fn name(&self) -> &str;

    /// Input names as the instance declares them
    fn input_names(&self) -> Vec<String>;

    /// Output names as the instance declares them
    fn output_names(&self) -> Vec<String>;

    /// Parameter names as the instance declares them
    fn parameter_names(&self) -> Vec<String>;

    fn set_input(&mut self, key: &str, value: Self::Value) -> Result<(), Self::Error>;

    fn output(&self, key: &str) -> Result<Self::Value, Self::Error>;

    fn set_parameter(&mut self, key: &str, value: Self::Value) -> Result<(), Self::Error>;

    fn parameter(&self, key: &str) -> Result<Self::Value, Self::Error>;
}

/// Instantiation facility for one operating mode
pub trait NativeFactory<M: OperatingMode> {
    type Handle: NativeHandle<Mode = M>;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Names of every algorithm registered with the native library
    fn registered_names(&self) -> Vec<String>;

    /// Create a new instance of the algorithm registered as `name`
    fn create(&self, name: &str) -> Result<Self::Handle, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leq_info() -> AlgorithmInfo {
        AlgorithmInfo::new(
            "Leq",
            "This algorithm computes the Equivalent sound level (Leq) of an audio signal.",
            "Loudness/dynamics",
        )
    }

    #[test]
    fn test_info_table_is_mode_scoped() {
        let table = InfoTable::new().with(Mode::Standard, leq_info());
        assert_eq!(table.len(), 1);
        assert!(table.info("Leq", Mode::Standard).is_some());
        assert!(table.info("Leq", Mode::Streaming).is_none());
        assert!(table.info("Loudness", Mode::Standard).is_none());
    }

    #[test]
    fn test_closure_info_source() {
        let source = |name: &str, _mode: Mode| (name == "Leq").then(leq_info);
        assert_eq!(source.info("Leq", Mode::Streaming), Some(leq_info()));
        assert_eq!(source.info("FFT", Mode::Streaming), None);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_info_table_json() {
        let table = InfoTable::new()
            .with(Mode::Standard, leq_info())
            .with(Mode::Streaming, leq_info());
        let json = table.to_json().unwrap();
        assert!(json.contains("Loudness/dynamics"));
        let parsed = InfoTable::from_json(&json).unwrap();
        assert_eq!(parsed, table);
    }
}
