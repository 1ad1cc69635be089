//! In-memory stand-ins for the native engine, used by the unit tests

use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;

use thiserror::Error;

use crate::contract::Contract;
use crate::keys::KeyRole;
use crate::mode::OperatingMode;
use crate::native::{NativeFactory, NativeHandle};
use crate::registry::Identifier;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FakeError {
    #[error("`{0}` has no value yet")]
    Unset(String),
    #[error("`{0}` is not declared by this algorithm")]
    UnknownKey(String),
    #[error("no algorithm registered as `{0}`")]
    NotRegistered(String),
    #[error("`{0}` failed to configure")]
    Broken(String),
}

/// Key declarations of one fake algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeDecl {
    pub name: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub parameters: Vec<String>,
}

impl FakeDecl {
    pub fn new(name: &str, inputs: &[&str], outputs: &[&str], parameters: &[&str]) -> Self {
        let owned = |keys: &[&str]| keys.iter().map(|k| k.to_string()).collect();
        Self {
            name: name.to_string(),
            inputs: owned(inputs),
            outputs: owned(outputs),
            parameters: owned(parameters),
        }
    }

    pub fn from_contract(contract: &Contract) -> Self {
        let owned = |role| contract.keys(role).names().map(String::from).collect();
        Self {
            name: contract.name().to_string(),
            inputs: owned(KeyRole::Input),
            outputs: owned(KeyRole::Output),
            parameters: owned(KeyRole::Parameter),
        }
    }

    fn declares(&self, role: KeyRole, key: &str) -> bool {
        let keys = match role {
            KeyRole::Input => &self.inputs,
            KeyRole::Output => &self.outputs,
            KeyRole::Parameter => &self.parameters,
        };
        keys.iter().any(|k| k == key)
    }
}

/// A native handle that stores every value it is given
#[derive(Debug)]
pub struct FakeHandle<M> {
    decl: FakeDecl,
    values: HashMap<(KeyRole, String), f64>,
    writes: Vec<String>,
    mode: PhantomData<fn() -> M>,
}

impl<M: OperatingMode> FakeHandle<M> {
    pub fn new(decl: FakeDecl) -> Self {
        Self {
            decl,
            values: HashMap::new(),
            writes: Vec::new(),
            mode: PhantomData,
        }
    }

    pub fn for_contract(contract: &Contract) -> Self {
        Self::new(FakeDecl::from_contract(contract))
    }

    /// A handle reporting `name` and declaring no keys
    pub fn named(name: &str) -> Self {
        Self::new(FakeDecl::new(name, &[], &[], &[]))
    }

    pub fn input(&self, key: &str) -> Option<f64> {
        self.values.get(&(KeyRole::Input, key.to_string())).copied()
    }

    /// Keys written through the handle, in order
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    fn write(&mut self, role: KeyRole, key: &str, value: f64) -> Result<(), FakeError> {
        if !self.decl.declares(role, key) {
            return Err(FakeError::UnknownKey(key.to_string()));
        }
        self.writes.push(key.to_string());
        self.values.insert((role, key.to_string()), value);
        Ok(())
    }

    fn read(&self, role: KeyRole, key: &str) -> Result<f64, FakeError> {
        if !self.decl.declares(role, key) {
            return Err(FakeError::UnknownKey(key.to_string()));
        }
        self.values
            .get(&(role, key.to_string()))
            .copied()
            .ok_or_else(|| FakeError::Unset(key.to_string()))
    }
}

impl<M: OperatingMode> NativeHandle for FakeHandle<M> {
    type Mode = M;
    type Value = f64;
    type Error = FakeError;

    fn name(&self) -> &str {
        &self.decl.name
    }

    fn input_names(&self) -> Vec<String> {
        self.decl.inputs.clone()
    }

    fn output_names(&self) -> Vec<String> {
        self.decl.outputs.clone()
    }

    fn parameter_names(&self) -> Vec<String> {
        self.decl.parameters.clone()
    }

    fn set_input(&mut self, key: &str, value: f64) -> Result<(), FakeError> {
        self.write(KeyRole::Input, key, value)
    }

    fn output(&self, key: &str) -> Result<f64, FakeError> {
        self.read(KeyRole::Output, key)
    }

    fn set_parameter(&mut self, key: &str, value: f64) -> Result<(), FakeError> {
        self.write(KeyRole::Parameter, key, value)
    }

    fn parameter(&self, key: &str) -> Result<f64, FakeError> {
        self.read(KeyRole::Parameter, key)
    }
}

/// A registry of fake algorithms for one mode
///
/// A `None` entry is registered but fails to instantiate.
#[derive(Debug)]
pub struct FakeFactory<M> {
    entries: BTreeMap<String, Option<FakeDecl>>,
    mode: PhantomData<fn() -> M>,
}

impl<M: OperatingMode> FakeFactory<M> {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            mode: PhantomData,
        }
    }

    /// Every catalogued algorithm of mode `M`, declaring exactly its contract's keys
    pub fn from_catalog() -> Self {
        let mut factory = Self::empty();
        for id in <M::Id as Identifier>::ALL {
            let contract = id.contract();
            factory = factory.with(FakeDecl::from_contract(contract));
        }
        factory
    }

    pub fn with(mut self, decl: FakeDecl) -> Self {
        self.entries.insert(decl.name.clone(), Some(decl));
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.entries.remove(name);
        self
    }

    /// Keep `name` registered but make instantiation fail
    pub fn failing(mut self, name: &str) -> Self {
        self.entries.insert(name.to_string(), None);
        self
    }

    /// Register `name` so that it instantiates `target` instead
    pub fn alias(mut self, name: &str, target: &str) -> Self {
        let decl = <M::Id as Identifier>::from_name(target)
            .map(|id| FakeDecl::from_contract(id.contract()))
            .unwrap_or_else(|| FakeDecl::new(target, &[], &[], &[]));
        self.entries.insert(name.to_string(), Some(decl));
        self
    }
}

impl<M: OperatingMode> NativeFactory<M> for FakeFactory<M> {
    type Handle = FakeHandle<M>;
    type Error = FakeError;

    fn registered_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn create(&self, name: &str) -> Result<FakeHandle<M>, FakeError> {
        match self.entries.get(name) {
            Some(Some(decl)) => Ok(FakeHandle::new(decl.clone())),
            Some(None) => Err(FakeError::Broken(name.to_string())),
            None => Err(FakeError::NotRegistered(name.to_string())),
        }
    }
}
