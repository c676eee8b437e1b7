//! Environment variable sources

use std::collections::{BTreeMap, HashMap};
use std::env::VarError;
use std::hash::BuildHasher;

use crate::error::ConversionError;

/// Read-only, string-keyed lookup of environment values.
///
/// Unset and empty variables are indistinguishable: both read as `""`.
pub trait Env {
    /// Value of `key`, or the empty string when unset.
    ///
    /// Fails with [`ConversionError::NotUnicode`] when the stored value is
    /// not valid UTF-8.
    fn get(&self, key: &str) -> Result<String, ConversionError>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn get(&self, key: &str) -> Result<String, ConversionError> {
        // Such names can never be set, and the platform lookup rejects them.
        if key.is_empty() || key.contains(['=', '\0']) {
            return Ok(String::new());
        }

        match std::env::var(key) {
            Ok(value) => Ok(value),
            Err(VarError::NotPresent) => Ok(String::new()),
            Err(VarError::NotUnicode(_)) => Err(ConversionError::NotUnicode),
        }
    }
}

impl<S: BuildHasher> Env for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Result<String, ConversionError> {
        Ok(HashMap::get(self, key).cloned().unwrap_or_default())
    }
}

impl Env for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Result<String, ConversionError> {
        Ok(BTreeMap::get(self, key).cloned().unwrap_or_default())
    }
}

impl<E: Env + ?Sized> Env for &E {
    fn get(&self, key: &str) -> Result<String, ConversionError> {
        (**self).get(key)
    }
}
