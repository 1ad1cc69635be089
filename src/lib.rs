//! # dsp-contracts: Static Contracts for Native DSP Algorithms
//!
//! `dsp-contracts` is a typed catalog over a native signal-processing library
//! whose algorithms are created by name and driven through string keys. Every
//! catalogued algorithm gets a closed set of valid input, output and parameter
//! keys, a declared operating mode, and a category, all fixed at compile time.
//!
//! ## Architecture
//!
//! The crate is organized in three layers:
//!
//! - **Layer 1: Key Sets** - Closed per-role key vocabularies with a placeholder for empty sets
//! - **Layer 2: Contracts** - One `'static` contract per (mode, algorithm), mode-specialized specs
//! - **Layer 3: Registry** - Closed identifier enums, tagged unions over modes, manifests and audits
//!
//! The only run-time check that connects the catalog to the native side is
//! name equality, performed once by [`Spec::bind`]. After that, every key a
//! [`TypedHandle`] forwards has been validated against the contract.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dsp_contracts::prelude::*;
//!
//! // Pick an algorithm and look at its contract
//! let spec = StandardId::RhythmExtractor2013.spec();
//! assert!(spec.parameters().contains("maxTempo"));
//!
//! // Create it through the native factory and bind it
//! let mut rhythm = spec.instantiate(&factory)?;
//! rhythm.set_parameter("maxTempo", 208.into())?;
//! rhythm.set_input("signal", audio.into())?;
//!
//! // Typos are caught before reaching the native library
//! assert!(rhythm.output("bpms").is_err());
//! ```
//!
//! ## Drift Detection
//!
//! ```rust,ignore
//! use dsp_contracts::prelude::*;
//!
//! let harvest = Manifest::harvest(&factory, &info);
//! let report = audit(&harvest.manifest);
//! assert!(report.is_clean(), "{report:?}");
//! ```

pub mod audit;
pub mod catalog;
pub mod category;
pub mod contract;
pub mod error;
pub mod handle;
pub mod keys;
pub mod manifest;
pub mod mode;
pub mod native;
pub mod registry;

#[cfg(test)]
mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    // Layer 1: Key Sets
    pub use crate::keys::{Key, KeyRole, KeySet, PLACEHOLDER};

    // Layer 2: Contracts
    pub use crate::category::Category;
    pub use crate::contract::{Contract, Spec};
    pub use crate::handle::TypedHandle;
    pub use crate::mode::{Mode, OperatingMode, Standard, Streaming};

    // Layer 3: Registry
    pub use crate::catalog::{StandardId, StreamingId};
    pub use crate::registry::{AlgorithmId, AnySpec, Identifier, SpecVisitor};

    // Native Collaborators
    pub use crate::native::{AlgorithmInfo, InfoSource, InfoTable, NativeFactory, NativeHandle};

    // Manifests and Audit
    pub use crate::audit::{audit, audit_with, AuditOptions, AuditReport};
    pub use crate::manifest::{AlgorithmDef, Harvest, Manifest};

    // Errors
    pub use crate::error::{CatalogError, HandleError};
}

pub use audit::{audit, AuditReport};
pub use catalog::{StandardId, StreamingId};
pub use contract::{Contract, Spec};
pub use error::{CatalogError, HandleError};
pub use handle::TypedHandle;
pub use registry::{AlgorithmId, AnySpec};
