//! The algorithm catalog
//!
//! Each operating mode has one declarative table. The `algorithms!` macro
//! turns a table into a closed identifier enum whose variants are exactly the
//! catalogued algorithms, a `'static` [`Contract`] per variant, and a
//! compile-time check of every key declaration.
//!
//! Table entries read as
//!
//! ```text
//! RhythmExtractor2013: Rhythm {
//!     inputs: ["signal"],
//!     outputs: ["bpm", "ticks", "confidence", "estimates", "bpmIntervals"],
//!     parameters: ["maxTempo", "method", "minTempo"],
//! },
//! ```
//!
//! The variant name doubles as the native registration name.
//!
//! [`Contract`]: crate::contract::Contract

macro_rules! algorithms {
    (
        $(#[$meta:meta])*
        pub enum $id:ident in $mode:ident {
            $(
                $(#[$variant_meta:meta])*
                $name:ident: $category:ident {
                    inputs: [$($input:literal),* $(,)?],
                    outputs: [$($output:literal),* $(,)?],
                    parameters: [$($parameter:literal),* $(,)?] $(,)?
                }
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(clippy::upper_case_acronyms)]
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $id {
            $(
                $(#[$variant_meta])*
                $name,
            )*
        }

        impl $id {
            /// Every catalogued algorithm, in table order
            pub const ALL: &'static [$id] = &[$($id::$name),*];

            /// The native registration name
            pub const fn name(self) -> &'static str {
                match self {
                    $($id::$name => stringify!($name),)*
                }
            }

            pub fn category(self) -> $crate::category::Category {
                self.contract().category()
            }

            /// The algorithm's static contract
            pub fn contract(self) -> &'static $crate::contract::Contract {
                match self {
                    $(
                        $id::$name => {
                            const _: () = assert!(
                                $crate::keys::keys_well_formed(&[$($input),*]),
                                concat!(stringify!($name), ": malformed input keys")
                            );
                            const _: () = assert!(
                                $crate::keys::keys_well_formed(&[$($output),*]),
                                concat!(stringify!($name), ": malformed output keys")
                            );
                            const _: () = assert!(
                                $crate::keys::keys_well_formed(&[$($parameter),*]),
                                concat!(stringify!($name), ": malformed parameter keys")
                            );
                            static CONTRACT: $crate::contract::Contract =
                                $crate::contract::Contract::new(
                                    stringify!($name),
                                    $crate::mode::Mode::$mode,
                                    $crate::category::Category::$category,
                                    $crate::keys::KeySet::declare(
                                        stringify!($name),
                                        $crate::keys::KeyRole::Input,
                                        &[$($input),*],
                                    ),
                                    $crate::keys::KeySet::declare(
                                        stringify!($name),
                                        $crate::keys::KeyRole::Output,
                                        &[$($output),*],
                                    ),
                                    $crate::keys::KeySet::declare(
                                        stringify!($name),
                                        $crate::keys::KeyRole::Parameter,
                                        &[$($parameter),*],
                                    ),
                                );
                            &CONTRACT
                        }
                    )*
                }
            }

            /// The contract, specialized to this identifier's mode
            pub fn spec(self) -> $crate::contract::Spec<$crate::mode::$mode> {
                $crate::contract::Spec::new(self.contract())
            }

            /// Look up an identifier by native registration name
            pub fn from_name(name: &str) -> Option<$id> {
                static INDEX: ::once_cell::sync::Lazy<
                    ::std::collections::HashMap<&'static str, $id>,
                > = ::once_cell::sync::Lazy::new(|| {
                    $id::ALL.iter().map(|id| (id.name(), *id)).collect()
                });
                INDEX.get(name).copied()
            }
        }

        impl $crate::registry::sealed::Sealed for $id {}

        impl $crate::registry::Identifier for $id {
            type Mode = $crate::mode::$mode;

            const ALL: &'static [$id] = $id::ALL;

            fn name(self) -> &'static str {
                $id::name(self)
            }

            fn contract(self) -> &'static $crate::contract::Contract {
                $id::contract(self)
            }

            fn from_name(name: &str) -> Option<$id> {
                $id::from_name(name)
            }
        }

        impl ::core::str::FromStr for $id {
            type Err = $crate::error::CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $id::from_name(s).ok_or_else(|| $crate::error::CatalogError::UnknownAlgorithm {
                    mode: $crate::mode::Mode::$mode,
                    name: s.to_string(),
                })
            }
        }

        impl ::core::fmt::Display for $id {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

mod standard;
mod streaming;

pub use standard::StandardId;
pub use streaming::StreamingId;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::error::CatalogError;
    use crate::keys::{KeyRole, PLACEHOLDER};
    use crate::mode::Mode;
    use crate::registry::Identifier;
    use std::collections::HashSet;

    fn check_table<I: Identifier>() {
        let mut names = HashSet::new();
        for id in I::ALL {
            let contract = id.contract();
            assert_eq!(contract.name(), id.name());
            assert_eq!(contract.mode(), <I::Mode as crate::mode::OperatingMode>::MODE);
            assert_eq!(I::from_name(id.name()), Some(*id));
            assert!(names.insert(id.name()), "duplicate entry {}", id.name());

            for role in KeyRole::ALL {
                let set = contract.keys(role);
                assert_eq!(set.owner(), id.name());
                assert_eq!(set.role(), role);
                if set.is_empty() {
                    assert_eq!(set.vocabulary(), &[PLACEHOLDER]);
                }
                let distinct: HashSet<_> = set.names().collect();
                assert_eq!(distinct.len(), set.len());
                for key in set {
                    assert_eq!(set.key(key.as_str()), Ok(key));
                }
            }
        }
    }

    #[test]
    fn test_standard_table() {
        check_table::<StandardId>();
        assert_eq!(StandardId::ALL.len(), 203);
    }

    #[test]
    fn test_streaming_table() {
        check_table::<StreamingId>();
        assert_eq!(StreamingId::ALL.len(), 196);
    }

    #[test]
    fn test_contract_is_static_per_identifier() {
        let a = StandardId::Leq.contract();
        let b = StandardId::Leq.contract();
        assert!(core::ptr::eq(a, b));
        assert!(!core::ptr::eq(a, StreamingId::Leq.contract()));
    }

    #[test]
    fn test_leq_has_no_parameters() {
        let leq = StandardId::Leq.contract();
        assert_eq!(leq.category(), Category::LoudnessDynamics);
        assert_eq!(leq.inputs().names().collect::<Vec<_>>(), vec!["signal"]);
        assert_eq!(leq.outputs().names().collect::<Vec<_>>(), vec!["leq"]);
        assert!(leq.parameters().is_empty());
        assert_eq!(
            leq.parameters().key("sampleRate"),
            Err(CatalogError::InvalidKey {
                algorithm: "Leq",
                role: KeyRole::Parameter,
                key: "sampleRate".into(),
            })
        );
    }

    #[test]
    fn test_extractor_takes_audio() {
        let extractor = StandardId::Extractor.contract();
        assert_eq!(extractor.inputs().names().collect::<Vec<_>>(), vec!["audio"]);
        assert_eq!(extractor.outputs().names().collect::<Vec<_>>(), vec!["pool"]);
        assert!(!extractor.inputs().contains("signal"));
    }

    #[test]
    fn test_complex_fft_pair_only_takes_size() {
        let contracts = [
            StandardId::FFTC.contract(),
            StandardId::IFFTC.contract(),
            StreamingId::FFTC.contract(),
            StreamingId::IFFTC.contract(),
        ];
        for contract in contracts {
            assert_eq!(
                contract.parameters().names().collect::<Vec<_>>(),
                vec!["size"],
                "{contract}"
            );
        }
        assert_eq!(StandardId::FFTC.contract().inputs().names().collect::<Vec<_>>(), vec!["frame"]);
        assert_eq!(StandardId::FFTC.contract().outputs().names().collect::<Vec<_>>(), vec!["fft"]);
        assert_eq!(StreamingId::IFFTC.contract().inputs().names().collect::<Vec<_>>(), vec!["fft"]);
        assert_eq!(StreamingId::IFFTC.contract().outputs().names().collect::<Vec<_>>(), vec!["frame"]);

        // The real-valued pair keeps its own parameters
        assert!(StandardId::IFFT.contract().parameters().contains("normalize"));
    }

    fn assert_declares(contract: &crate::contract::Contract, role: KeyRole, keys: &[&str]) {
        let set = contract.keys(role);
        for key in keys {
            assert!(set.contains(key), "{contract} does not declare {role:?} `{key}`");
        }
    }

    #[test]
    fn test_keys_driven_by_native_algorithms() {
        use KeyRole::{Input, Output, Parameter};

        let standard: &[(StandardId, KeyRole, &[&str])] = &[
            (StandardId::Clipper, Input, &["signal"]),
            (StandardId::Clipper, Output, &["signal"]),
            (StandardId::Clipper, Parameter, &["max", "min"]),
            (StandardId::FrequencyBands, Parameter, &["frequencyBands", "sampleRate"]),
            (StandardId::PeakDetection, Parameter, &["interpolate", "maxPeaks", "orderBy"]),
            (StandardId::PoolAggregator, Input, &["input"]),
            (StandardId::PoolAggregator, Output, &["output"]),
            (StandardId::PoolAggregator, Parameter, &["defaultStats", "exceptions"]),
            (StandardId::FrameCutter, Parameter, &["frameSize", "hopSize", "startFromZero"]),
            (StandardId::Windowing, Parameter, &["size", "type", "zeroPadding", "zeroPhase"]),
            (StandardId::FFT, Input, &["frame"]),
            (StandardId::FFT, Output, &["fft"]),
            (StandardId::HPCP, Input, &["frequencies", "magnitudes"]),
            (StandardId::HPCP, Output, &["hpcp"]),
            (
                StandardId::HPCP,
                Parameter,
                &[
                    "bandPreset", "harmonics", "maxFrequency", "minFrequency", "normalized",
                    "size", "weightType", "windowSize",
                ],
            ),
            (StandardId::SpectralPeaks, Input, &["spectrum"]),
            (StandardId::SpectralPeaks, Output, &["frequencies", "magnitudes"]),
            (
                StandardId::SpectralPeaks,
                Parameter,
                &["magnitudeThreshold", "maxFrequency", "maxPeaks", "minFrequency", "orderBy", "sampleRate"],
            ),
            (
                StandardId::Key,
                Output,
                &["firstToSecondRelativeStrength", "key", "scale", "strength"],
            ),
            (
                StandardId::Key,
                Parameter,
                &["numHarmonics", "pcpSize", "profileType", "slope", "usePolyphony", "useThreeChords"],
            ),
            (StandardId::IIR, Parameter, &["denominator", "numerator"]),
            (
                StandardId::PitchContours,
                Output,
                &["contoursBins", "contoursSaliences", "contoursStartTimes", "duration"],
            ),
            (
                StandardId::GFCC,
                Parameter,
                &[
                    "dctType", "highFrequencyBound", "inputSize", "logType", "lowFrequencyBound",
                    "numberBands", "numberCoefficients", "sampleRate", "type",
                ],
            ),
        ];
        for (id, role, keys) in standard {
            assert_declares(id.contract(), *role, keys);
        }

        let streaming: &[(StreamingId, KeyRole, &[&str])] = &[
            (StreamingId::FrameCutter, Parameter, &["frameSize", "hopSize", "silentFrames", "startFromZero"]),
            (StreamingId::FrequencyBands, Input, &["spectrum"]),
            (StreamingId::FrequencyBands, Output, &["bands"]),
            (StreamingId::FrequencyBands, Parameter, &["frequencyBands", "sampleRate"]),
            (StreamingId::DCT, Input, &["array"]),
            (StreamingId::DCT, Output, &["dct"]),
            (StreamingId::DCT, Parameter, &["dctType", "inputSize", "liftering", "outputSize"]),
            (StreamingId::HPCP, Parameter, &["bandPreset", "harmonics", "maxFrequency", "minFrequency"]),
            (StreamingId::SpectralPeaks, Output, &["frequencies", "magnitudes"]),
            (StreamingId::SpectralWhitening, Input, &["frequencies", "magnitudes", "spectrum"]),
            (StreamingId::SpectrumToCent, Output, &["bands", "frequencies"]),
            (
                StreamingId::SpectrumToCent,
                Parameter,
                &["bands", "inputSize", "log", "minimumFrequency", "sampleRate"],
            ),
            (StreamingId::TuningFrequency, Output, &["tuningCents", "tuningFrequency"]),
            (StreamingId::TuningFrequency, Parameter, &["resolution"]),
        ];
        for (id, role, keys) in streaming {
            assert_declares(id.contract(), *role, keys);
        }
    }

    #[test]
    fn test_mode_specific_entries() {
        assert!(StandardId::from_name("PCA").is_some());
        assert!(StreamingId::from_name("PCA").is_none());
        assert!(StandardId::from_name("VectorInput").is_none());
        assert_eq!(
            StreamingId::VectorInput.contract().category(),
            Category::InputOutput
        );

        let standard = StandardId::FrameCutter.contract().parameters();
        let streaming = StreamingId::FrameCutter.contract().parameters();
        assert!(standard.contains("validFrameThresholdRatio"));
        assert!(!standard.contains("silentFrames"));
        assert!(streaming.contains("silentFrames"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Spectrum".parse::<StandardId>(), Ok(StandardId::Spectrum));
        assert_eq!(
            "Spectrun".parse::<StreamingId>(),
            Err(CatalogError::UnknownAlgorithm {
                mode: Mode::Streaming,
                name: "Spectrun".into(),
            })
        );
    }

    #[test]
    fn test_serde_uses_native_name() {
        let json = serde_json::to_string(&StandardId::LoudnessEBUR128).unwrap();
        assert_eq!(json, "\"LoudnessEBUR128\"");
        let id: StreamingId = serde_json::from_str("\"SBic\"").unwrap();
        assert_eq!(id, StreamingId::SBic);
        assert_eq!(id.to_string(), "SBic");
    }
}
