//! Closed Key Sets
//!
//! Every algorithm declares three closed sets of string keys: its inputs, its
//! outputs and its parameters. A set that declares no keys still carries a
//! one-entry vocabulary holding [`PLACEHOLDER`], so that every algorithm is
//! described by the same shape of declaration. The placeholder is never a
//! valid key: everything that asks "which keys are valid" goes through the
//! exposed set, which filters it out.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Vocabulary entry standing in for "no keys"
pub const PLACEHOLDER: &str = "none";

const PLACEHOLDER_VOCABULARY: &[&str] = &[PLACEHOLDER];

/// The role a key plays for an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyRole {
    Input,
    Output,
    Parameter,
}

impl KeyRole {
    pub const ALL: [KeyRole; 3] = [KeyRole::Input, KeyRole::Output, KeyRole::Parameter];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyRole::Input => "input",
            KeyRole::Output => "output",
            KeyRole::Parameter => "parameter",
        }
    }
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key that has been checked against its algorithm's closed key set
///
/// Keys can only be obtained from a [`KeySet`], so holding one proves the name
/// is valid for `owner` in `role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    owner: &'static str,
    role: KeyRole,
    name: &'static str,
}

impl Key {
    /// The key's string form, as the native library spells it
    pub fn as_str(&self) -> &'static str {
        self.name
    }

    /// Name of the algorithm declaring this key
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn role(&self) -> KeyRole {
        self.role
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        self.name
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The closed set of valid keys for one algorithm in one role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySet {
    owner: &'static str,
    role: KeyRole,
    vocabulary: &'static [&'static str],
}

impl KeySet {
    /// Declare a key set. An empty declaration yields the placeholder vocabulary.
    pub const fn declare(
        owner: &'static str,
        role: KeyRole,
        keys: &'static [&'static str],
    ) -> Self {
        let vocabulary = if keys.is_empty() {
            PLACEHOLDER_VOCABULARY
        } else {
            keys
        };
        Self {
            owner,
            role,
            vocabulary,
        }
    }

    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn role(&self) -> KeyRole {
        self.role
    }

    /// The declared vocabulary, including the placeholder for empty sets
    pub fn vocabulary(&self) -> &'static [&'static str] {
        self.vocabulary
    }

    /// Names of the valid keys, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.vocabulary
            .iter()
            .copied()
            .filter(|name| *name != PLACEHOLDER)
    }

    /// The valid keys, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        self.names().map(move |name| Key {
            owner: self.owner,
            role: self.role,
            name,
        })
    }

    pub fn len(&self) -> usize {
        self.names().count()
    }

    /// Whether the exposed set is empty; a placeholder-only vocabulary counts as empty
    pub fn is_empty(&self) -> bool {
        self.names().next().is_none()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|k| k == name)
    }

    /// Look up a key by name
    pub fn get(&self, name: &str) -> Option<Key> {
        self.iter().find(|key| key.name == name)
    }

    /// Look up a key by name, reporting an invalid key as an error
    pub fn key(&self, name: &str) -> Result<Key, CatalogError> {
        self.get(name).ok_or_else(|| CatalogError::InvalidKey {
            algorithm: self.owner,
            role: self.role,
            key: name.to_string(),
        })
    }
}

impl<'a> IntoIterator for &'a KeySet {
    type Item = Key;
    type IntoIter = Box<dyn Iterator<Item = Key> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Whether a declaration is usable as a closed key set: names are non-empty,
/// pairwise distinct, and never the placeholder.
pub const fn keys_well_formed(keys: &[&str]) -> bool {
    let mut i = 0;
    while i < keys.len() {
        if keys[i].is_empty() || str_eq(keys[i], PLACEHOLDER) {
            return false;
        }
        let mut j = i + 1;
        while j < keys.len() {
            if str_eq(keys[i], keys[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
