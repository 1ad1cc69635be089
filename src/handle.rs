//! Typed handles
//!
//! A [`TypedHandle`] owns a native handle that has passed the identity check
//! in [`Spec::bind`]. Every accessor validates its key against the contract's
//! closed key set before touching the native side, so an invalid key never
//! reaches the engine.

use crate::contract::{Contract, Spec};
use crate::error::HandleError;
use crate::keys::{Key, KeyRole};
use crate::native::NativeHandle;

/// A native handle bound to the contract it was verified against
#[derive(Debug)]
pub struct TypedHandle<H: NativeHandle> {
    spec: Spec<H::Mode>,
    handle: H,
}

impl<H: NativeHandle> TypedHandle<H> {
    /// Only [`Spec::bind`] constructs typed handles.
    pub(crate) fn new(spec: Spec<H::Mode>, handle: H) -> Self {
        Self { spec, handle }
    }

    pub fn spec(&self) -> Spec<H::Mode> {
        self.spec
    }

    pub fn contract(&self) -> &'static Contract {
        self.spec.contract()
    }

    pub fn name(&self) -> &'static str {
        self.spec.name()
    }

    /// The underlying native handle
    pub fn native(&self) -> &H {
        &self.handle
    }

    /// Mutable access to the native handle, bypassing key validation
    pub fn native_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub fn into_native(self) -> H {
        self.handle
    }

    fn key(&self, role: KeyRole, name: &str) -> Result<Key, HandleError<H::Error>> {
        Ok(self.spec.keys(role).key(name)?)
    }

    fn native_error(&self, source: H::Error) -> HandleError<H::Error> {
        HandleError::Native {
            algorithm: self.spec.name(),
            source,
        }
    }

    pub fn set_input<K: AsRef<str>>(
        &mut self,
        key: K,
        value: H::Value,
    ) -> Result<(), HandleError<H::Error>> {
        let key = self.key(KeyRole::Input, key.as_ref())?;
        self.handle
            .set_input(key.as_str(), value)
            .map_err(|e| self.native_error(e))
    }

    pub fn output<K: AsRef<str>>(&self, key: K) -> Result<H::Value, HandleError<H::Error>> {
        let key = self.key(KeyRole::Output, key.as_ref())?;
        self.handle
            .output(key.as_str())
            .map_err(|e| self.native_error(e))
    }

    pub fn set_parameter<K: AsRef<str>>(
        &mut self,
        key: K,
        value: H::Value,
    ) -> Result<(), HandleError<H::Error>> {
        let key = self.key(KeyRole::Parameter, key.as_ref())?;
        self.handle
            .set_parameter(key.as_str(), value)
            .map_err(|e| self.native_error(e))
    }

    pub fn parameter<K: AsRef<str>>(&self, key: K) -> Result<H::Value, HandleError<H::Error>> {
        let key = self.key(KeyRole::Parameter, key.as_ref())?;
        self.handle
            .parameter(key.as_str())
            .map_err(|e| self.native_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StandardId;
    use crate::error::CatalogError;
    use crate::mode::Standard;
    use crate::testing::{FakeError, FakeHandle};

    fn bound(id: StandardId) -> TypedHandle<FakeHandle<Standard>> {
        let spec = id.spec();
        spec.bind(FakeHandle::for_contract(spec.contract())).unwrap()
    }

    #[test]
    fn test_valid_keys_reach_native_handle() {
        let mut typed = bound(StandardId::RhythmExtractor2013);
        typed.set_parameter("maxTempo", 208.0).unwrap();
        assert_eq!(typed.parameter("maxTempo").unwrap(), 208.0);

        typed.set_input("signal", 0.5).unwrap();
        assert_eq!(typed.native().input("signal"), Some(0.5));
    }

    #[test]
    fn test_accessors_accept_checked_keys() {
        let mut typed = bound(StandardId::Windowing);
        let size = typed.contract().parameters().key("size").unwrap();
        typed.set_parameter(size, 1024.0).unwrap();
        assert_eq!(typed.parameter(size).unwrap(), 1024.0);
    }

    #[test]
    fn test_invalid_key_never_reaches_native_handle() {
        let mut typed = bound(StandardId::Leq);
        let err = typed.set_parameter("sampleRate", 44100.0).unwrap_err();
        assert_eq!(
            err.as_catalog(),
            Some(&CatalogError::InvalidKey {
                algorithm: "Leq",
                role: KeyRole::Parameter,
                key: "sampleRate".into(),
            })
        );
        assert!(typed.native().writes().is_empty());

        // Keys are role-scoped
        assert!(typed.output("signal").is_err());
        assert!(typed.set_input("leq", 1.0).is_err());
    }

    #[test]
    fn test_native_failure_names_algorithm() {
        let typed = bound(StandardId::Spectrum);
        // Declared output that has not been computed yet
        let err = typed.output("spectrum").unwrap_err();
        match err {
            HandleError::Native { algorithm, source } => {
                assert_eq!(algorithm, "Spectrum");
                assert_eq!(source, FakeError::Unset("spectrum".into()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_into_native() {
        let typed = bound(StandardId::MFCC);
        assert_eq!(typed.name(), "MFCC");
        let native = typed.into_native();
        assert_eq!(native.name(), "MFCC");
    }
}
