//! Operating modes
//!
//! [`Mode`] is the plain runtime tag stored in every contract. The uninhabited
//! [`Standard`] and [`Streaming`] types lift the same tag to the type level so
//! that a contract only binds native handles of its own mode.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{StandardId, StreamingId};
use crate::registry::Identifier;

/// How an algorithm runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Batch: inputs are set, `compute` runs once, outputs are read
    Standard,
    /// Incremental: algorithms are connected into a network and fed tokens
    Streaming,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Standard, Mode::Streaming];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Streaming => "streaming",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-level operating mode
pub trait OperatingMode: 'static {
    /// The runtime tag for this mode
    const MODE: Mode;

    /// The closed identifier enumeration for this mode
    ///
    /// Code generic over a mode reaches that mode's catalog through it, as
    /// manifests and audits do.
    type Id: Identifier<Mode = Self>;
}

/// Type-level tag for [`Mode::Standard`]
#[derive(Debug)]
pub enum Standard {}

/// Type-level tag for [`Mode::Streaming`]
#[derive(Debug)]
pub enum Streaming {}

impl OperatingMode for Standard {
    const MODE: Mode = Mode::Standard;
    type Id = StandardId;
}

impl OperatingMode for Streaming {
    const MODE: Mode = Mode::Streaming;
    type Id = StreamingId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_tags() {
        assert_eq!(Standard::MODE, Mode::Standard);
        assert_eq!(Streaming::MODE, Mode::Streaming);
        assert_eq!(Mode::Streaming.to_string(), "streaming");
    }

    #[test]
    fn test_mode_reaches_its_catalog() {
        fn table<M: OperatingMode>() -> Vec<Mode> {
            <M::Id as Identifier>::ALL
                .iter()
                .map(|id| id.contract().mode())
                .collect()
        }
        let standard = table::<Standard>();
        assert_eq!(standard.len(), StandardId::ALL.len());
        assert!(standard.iter().all(|mode| *mode == Mode::Standard));
        let streaming = table::<Streaming>();
        assert_eq!(streaming.len(), StreamingId::ALL.len());
        assert!(streaming.iter().all(|mode| *mode == Mode::Streaming));
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&Mode::Standard).unwrap();
        assert_eq!(json, "\"standard\"");
        let mode: Mode = serde_json::from_str("\"streaming\"").unwrap();
        assert_eq!(mode, Mode::Streaming);
    }
}
