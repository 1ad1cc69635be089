//! Algorithm contracts
//!
//! A [`Contract`] is the static description of one algorithm in one mode: its
//! name, mode, category and three closed key sets. Contracts only exist as
//! `'static` catalog entries.
//!
//! A [`Spec`] is a contract whose mode is known at the type level. It is the
//! only way across the static/dynamic boundary: [`Spec::bind`] checks that a
//! native handle is the algorithm the contract describes and wraps it in a
//! [`TypedHandle`].

use core::fmt;
use core::marker::PhantomData;
use core::ops::Deref;

use crate::category::Category;
use crate::error::{CatalogError, HandleError};
use crate::handle::TypedHandle;
use crate::keys::{KeyRole, KeySet};
use crate::mode::{Mode, OperatingMode};
use crate::native::{InfoSource, NativeFactory, NativeHandle};

/// The static interface of one algorithm in one operating mode
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Contract {
    name: &'static str,
    mode: Mode,
    category: Category,
    inputs: KeySet,
    outputs: KeySet,
    parameters: KeySet,
}

impl Contract {
    pub(crate) const fn new(
        name: &'static str,
        mode: Mode,
        category: Category,
        inputs: KeySet,
        outputs: KeySet,
        parameters: KeySet,
    ) -> Self {
        Self {
            name,
            mode,
            category,
            inputs,
            outputs,
            parameters,
        }
    }

    /// The name the native library registers the algorithm under
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn inputs(&self) -> &KeySet {
        &self.inputs
    }

    pub fn outputs(&self) -> &KeySet {
        &self.outputs
    }

    pub fn parameters(&self) -> &KeySet {
        &self.parameters
    }

    pub fn keys(&self, role: KeyRole) -> &KeySet {
        match role {
            KeyRole::Input => &self.inputs,
            KeyRole::Output => &self.outputs,
            KeyRole::Parameter => &self.parameters,
        }
    }

    /// Human-readable description, fetched from the native info facility
    ///
    /// Returns an empty string when the facility has no entry for this
    /// algorithm.
    pub fn description<S: InfoSource + ?Sized>(&self, source: &S) -> String {
        match source.info(self.name, self.mode) {
            Some(info) => info.description,
            None => {
                tracing::debug!(
                    algorithm = self.name,
                    mode = %self.mode,
                    "no info entry, description left empty"
                );
                String::new()
            }
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.mode, self.category)
    }
}

/// A contract specialized to the operating mode `M`
pub struct Spec<M: OperatingMode> {
    contract: &'static Contract,
    mode: PhantomData<fn() -> M>,
}

impl<M: OperatingMode> Spec<M> {
    /// Only called with contracts from `M`'s own table.
    pub(crate) const fn new(contract: &'static Contract) -> Self {
        Self {
            contract,
            mode: PhantomData,
        }
    }

    /// Specialize a contract, checking that it belongs to mode `M`
    pub fn try_from_contract(contract: &'static Contract) -> Result<Self, CatalogError> {
        if contract.mode == M::MODE {
            Ok(Self::new(contract))
        } else {
            Err(CatalogError::ModeMismatch {
                name: contract.name,
                expected: M::MODE,
                actual: contract.mode,
            })
        }
    }

    pub fn contract(&self) -> &'static Contract {
        self.contract
    }

    /// Bind a native handle to this contract
    ///
    /// Succeeds exactly when the handle's name equals the contract's name.
    pub fn bind<H>(self, handle: H) -> Result<TypedHandle<H>, CatalogError>
    where
        H: NativeHandle<Mode = M>,
    {
        if handle.name() != self.contract.name {
            tracing::debug!(
                expected = self.contract.name,
                actual = handle.name(),
                "rejected native handle"
            );
            return Err(CatalogError::WrongAlgorithm {
                expected: self.contract.name,
                actual: handle.name().to_string(),
            });
        }
        Ok(TypedHandle::new(self, handle))
    }

    /// Create the algorithm through `factory` and bind the result
    pub fn instantiate<F>(self, factory: &F) -> Result<TypedHandle<F::Handle>, HandleError<F::Error>>
    where
        F: NativeFactory<M>,
    {
        tracing::trace!(algorithm = self.contract.name, mode = %M::MODE, "instantiating");
        let handle = factory
            .create(self.contract.name)
            .map_err(|source| HandleError::Native {
                algorithm: self.contract.name,
                source,
            })?;
        Ok(self.bind(handle)?)
    }
}

impl<M: OperatingMode> Clone for Spec<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: OperatingMode> Copy for Spec<M> {}

impl<M: OperatingMode> PartialEq for Spec<M> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.contract, other.contract)
    }
}

impl<M: OperatingMode> Eq for Spec<M> {}

impl<M: OperatingMode> fmt::Debug for Spec<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Spec").field(&self.contract.name).finish()
    }
}

impl<M: OperatingMode> Deref for Spec<M> {
    type Target = Contract;

    fn deref(&self) -> &Contract {
        self.contract
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{StandardId, StreamingId};
    use crate::mode::{Standard, Streaming};
    use crate::native::{AlgorithmInfo, InfoTable};
    use crate::testing::{FakeFactory, FakeHandle};
    use proptest::prelude::*;

    #[test]
    fn test_rhythm_extractor_2013_contract() {
        let spec = StandardId::RhythmExtractor2013.spec();
        assert_eq!(spec.name(), "RhythmExtractor2013");
        assert_eq!(spec.mode(), Mode::Standard);
        assert_eq!(spec.category(), Category::Rhythm);

        let inputs: Vec<_> = spec.inputs().names().collect();
        assert_eq!(inputs, vec!["signal"]);

        let mut outputs: Vec<_> = spec.outputs().names().collect();
        outputs.sort_unstable();
        assert_eq!(
            outputs,
            vec!["bpm", "bpmIntervals", "confidence", "estimates", "ticks"]
        );

        let mut parameters: Vec<_> = spec.parameters().names().collect();
        parameters.sort_unstable();
        assert_eq!(parameters, vec!["maxTempo", "method", "minTempo"]);
    }

    #[test]
    fn test_bind_matching_handle() {
        let spec = StandardId::RhythmExtractor2013.spec();
        let handle = FakeHandle::<Standard>::for_contract(spec.contract());
        let typed = spec.bind(handle).unwrap();
        assert_eq!(typed.name(), "RhythmExtractor2013");
    }

    #[test]
    fn test_bind_wrong_algorithm() {
        let spec = StandardId::RhythmExtractor2013.spec();
        let handle = FakeHandle::<Standard>::for_contract(StandardId::RhythmExtractor.contract());
        let err = spec.bind(handle).unwrap_err();
        assert_eq!(
            err,
            CatalogError::WrongAlgorithm {
                expected: "RhythmExtractor2013",
                actual: "RhythmExtractor".into(),
            }
        );
    }

    #[test]
    fn test_bind_every_contract_to_its_own_handle() {
        for id in StandardId::ALL {
            let spec = id.spec();
            assert!(spec.bind(FakeHandle::<Standard>::for_contract(spec.contract())).is_ok());
        }
        for id in StreamingId::ALL {
            let spec = id.spec();
            assert!(spec.bind(FakeHandle::<Streaming>::for_contract(spec.contract())).is_ok());
        }
    }

    #[test]
    fn test_try_from_contract_checks_mode() {
        let contract = StandardId::FFT.contract();
        assert!(Spec::<Standard>::try_from_contract(contract).is_ok());
        assert_eq!(
            Spec::<Streaming>::try_from_contract(contract).unwrap_err(),
            CatalogError::ModeMismatch {
                name: "FFT",
                expected: Mode::Streaming,
                actual: Mode::Standard,
            }
        );
    }

    #[test]
    fn test_description_from_info_source() {
        let info = InfoTable::new().with(
            Mode::Standard,
            AlgorithmInfo::new("Leq", "Equivalent sound level.", "Loudness/dynamics"),
        );
        assert_eq!(
            StandardId::Leq.contract().description(&info),
            "Equivalent sound level."
        );
        // Missing entries degrade to an empty description
        assert_eq!(StreamingId::Leq.contract().description(&info), "");
        assert_eq!(StandardId::FFT.contract().description(&info), "");
    }

    #[test]
    fn test_instantiate_through_factory() {
        let factory = FakeFactory::<Standard>::from_catalog();
        let typed = StandardId::Spectrum.spec().instantiate(&factory).unwrap();
        assert_eq!(typed.name(), "Spectrum");
    }

    #[test]
    fn test_instantiate_reports_factory_failure() {
        let factory = FakeFactory::<Standard>::from_catalog().without("Spectrum");
        let err = StandardId::Spectrum.spec().instantiate(&factory).unwrap_err();
        assert!(matches!(err, HandleError::Native { algorithm: "Spectrum", .. }));
    }

    #[test]
    fn test_instantiate_detects_misregistered_name() {
        // The factory hands out a different algorithm under this name
        let factory = FakeFactory::<Standard>::from_catalog().alias("Spectrum", "PowerSpectrum");
        let err = StandardId::Spectrum.spec().instantiate(&factory).unwrap_err();
        assert_eq!(
            err.as_catalog(),
            Some(&CatalogError::WrongAlgorithm {
                expected: "Spectrum",
                actual: "PowerSpectrum".into(),
            })
        );
    }

    #[test]
    fn test_spec_display_and_debug() {
        let spec = StreamingId::FrameCutter.spec();
        assert_eq!(spec.to_string(), "FrameCutter (streaming, Standard)");
        assert_eq!(format!("{:?}", spec), "Spec(\"FrameCutter\")");
    }

    proptest! {
        #[test]
        fn bind_succeeds_only_for_identical_name(name in "[A-Za-z0-9_]{0,24}") {
            let spec = StandardId::RhythmExtractor2013.spec();
            let result = spec.bind(FakeHandle::<Standard>::named(&name));
            if name == "RhythmExtractor2013" {
                prop_assert!(result.is_ok());
            } else {
                let err = result.unwrap_err();
                prop_assert_eq!(
                    err,
                    CatalogError::WrongAlgorithm {
                        expected: "RhythmExtractor2013",
                        actual: name.clone(),
                    }
                );
            }
        }
    }
}
