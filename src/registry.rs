//! Identifier registry
//!
//! [`Identifier`] abstracts over the two closed identifier enums.
//! [`AlgorithmId`] and [`AnySpec`] are the mode-erased forms used where the
//! mode is only known at run time (manifests, lookups by name). Going back
//! from an [`AnySpec`] to a typed [`Spec`] is checked: either through
//! [`AnySpec::expect_mode`] or by visiting with a [`SpecVisitor`].

use core::fmt;
use core::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::catalog::{StandardId, StreamingId};
use crate::category::Category;
use crate::contract::{Contract, Spec};
use crate::error::CatalogError;
use crate::mode::{Mode, OperatingMode, Standard, Streaming};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A closed enumeration of the algorithms catalogued for one mode
///
/// Implemented only by [`StandardId`] and [`StreamingId`]. `contract` is total
/// over `ALL`.
pub trait Identifier:
    sealed::Sealed + Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    type Mode: OperatingMode;

    /// Every identifier of this mode
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn contract(self) -> &'static Contract;

    fn from_name(name: &str) -> Option<Self>;

    fn category(self) -> Category {
        self.contract().category()
    }

    fn spec(self) -> Spec<Self::Mode> {
        Spec::new(self.contract())
    }
}

/// Identifier of any catalogued algorithm, in either mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "mode", content = "name", rename_all = "snake_case")]
pub enum AlgorithmId {
    Standard(StandardId),
    Streaming(StreamingId),
}

impl AlgorithmId {
    /// Every identifier of both modes, standard first
    pub fn all() -> impl Iterator<Item = AlgorithmId> {
        StandardId::ALL
            .iter()
            .copied()
            .map(AlgorithmId::Standard)
            .chain(StreamingId::ALL.iter().copied().map(AlgorithmId::Streaming))
    }

    pub fn mode(&self) -> Mode {
        match self {
            AlgorithmId::Standard(_) => Mode::Standard,
            AlgorithmId::Streaming(_) => Mode::Streaming,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmId::Standard(id) => id.name(),
            AlgorithmId::Streaming(id) => id.name(),
        }
    }

    /// Look up an algorithm by mode and native name
    pub fn parse(mode: Mode, name: &str) -> Result<AlgorithmId, CatalogError> {
        match mode {
            Mode::Standard => name.parse().map(AlgorithmId::Standard),
            Mode::Streaming => name.parse().map(AlgorithmId::Streaming),
        }
    }

    pub fn contract(&self) -> &'static Contract {
        match self {
            AlgorithmId::Standard(id) => id.contract(),
            AlgorithmId::Streaming(id) => id.contract(),
        }
    }

    /// The mode-specialized contract, behind a tag
    pub fn resolve(&self) -> AnySpec {
        match self {
            AlgorithmId::Standard(id) => AnySpec::Standard(id.spec()),
            AlgorithmId::Streaming(id) => AnySpec::Streaming(id.spec()),
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.mode(), self.name())
    }
}

impl From<StandardId> for AlgorithmId {
    fn from(id: StandardId) -> Self {
        AlgorithmId::Standard(id)
    }
}

impl From<StreamingId> for AlgorithmId {
    fn from(id: StreamingId) -> Self {
        AlgorithmId::Streaming(id)
    }
}

/// A mode-specialized contract whose mode is only known at run time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnySpec {
    Standard(Spec<Standard>),
    Streaming(Spec<Streaming>),
}

impl AnySpec {
    pub fn contract(&self) -> &'static Contract {
        match self {
            AnySpec::Standard(spec) => spec.contract(),
            AnySpec::Streaming(spec) => spec.contract(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.contract().mode()
    }

    /// Recover the typed spec, failing if it belongs to the other mode
    pub fn expect_mode<M: OperatingMode>(self) -> Result<Spec<M>, CatalogError> {
        Spec::try_from_contract(self.contract())
    }

    /// Dispatch to the visitor method for this spec's mode
    pub fn visit<V: SpecVisitor>(self, visitor: V) -> V::Output {
        match self {
            AnySpec::Standard(spec) => visitor.standard(spec),
            AnySpec::Streaming(spec) => visitor.streaming(spec),
        }
    }
}

impl From<Spec<Standard>> for AnySpec {
    fn from(spec: Spec<Standard>) -> Self {
        AnySpec::Standard(spec)
    }
}

impl From<Spec<Streaming>> for AnySpec {
    fn from(spec: Spec<Streaming>) -> Self {
        AnySpec::Streaming(spec)
    }
}

/// Mode-aware operation over an [`AnySpec`]
pub trait SpecVisitor {
    type Output;

    fn standard(self, spec: Spec<Standard>) -> Self::Output;

    fn streaming(self, spec: Spec<Streaming>) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHandle;
    use std::collections::HashSet;

    #[test]
    fn test_every_identifier_resolves_to_its_own_contract() {
        for id in AlgorithmId::all() {
            let contract = id.contract();
            assert_eq!(contract.name(), id.name());
            assert_eq!(contract.mode(), id.mode());
            assert!(core::ptr::eq(id.resolve().contract(), contract));
        }
    }

    #[test]
    fn test_all_covers_both_modes_exactly() {
        let all: Vec<_> = AlgorithmId::all().collect();
        assert_eq!(all.len(), StandardId::ALL.len() + StreamingId::ALL.len());
        let distinct: HashSet<_> = all.iter().collect();
        assert_eq!(distinct.len(), all.len());
        assert!(all.contains(&AlgorithmId::Standard(StandardId::PCA)));
        assert!(all.contains(&AlgorithmId::Streaming(StreamingId::VectorOutput)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            AlgorithmId::parse(Mode::Streaming, "Windowing"),
            Ok(AlgorithmId::Streaming(StreamingId::Windowing))
        );
        assert_eq!(
            AlgorithmId::parse(Mode::Streaming, "PCA"),
            Err(CatalogError::UnknownAlgorithm {
                mode: Mode::Streaming,
                name: "PCA".into(),
            })
        );
    }

    #[test]
    fn test_expect_mode() {
        let any = AlgorithmId::from(StandardId::Key).resolve();
        let spec = any.expect_mode::<Standard>().unwrap();
        assert_eq!(spec.name(), "Key");

        assert_eq!(
            any.expect_mode::<Streaming>(),
            Err(CatalogError::ModeMismatch {
                name: "Key",
                expected: Mode::Streaming,
                actual: Mode::Standard,
            })
        );
    }

    struct BindsByName<'a>(&'a str);

    impl SpecVisitor for BindsByName<'_> {
        type Output = Result<&'static str, CatalogError>;

        fn standard(self, spec: Spec<Standard>) -> Self::Output {
            spec.bind(FakeHandle::<Standard>::named(self.0))
                .map(|typed| typed.name())
        }

        fn streaming(self, spec: Spec<Streaming>) -> Self::Output {
            spec.bind(FakeHandle::<Streaming>::named(self.0))
                .map(|typed| typed.name())
        }
    }

    #[test]
    fn test_visitor_dispatches_by_mode() {
        let any = AlgorithmId::from(StreamingId::HPCP).resolve();
        assert_eq!(any.visit(BindsByName("HPCP")), Ok("HPCP"));
        assert!(matches!(
            any.visit(BindsByName("Chromagram")),
            Err(CatalogError::WrongAlgorithm { expected: "HPCP", .. })
        ));
    }

    #[test]
    fn test_serde_tags_mode() {
        let id = AlgorithmId::Streaming(StreamingId::Onsets);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#"{"mode":"streaming","name":"Onsets"}"#);
        let parsed: AlgorithmId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
        assert_eq!(id.to_string(), "streaming::Onsets");
    }
}
