//! The shared environment the loader reads options from and writes results to.
//!
//! Resolution never touches `std::env` directly: it goes through a
//! [`ProcessEnv`] passed by mutable reference. [`SystemEnv`] is the real
//! process environment; [`MemoryEnv`] is an ordered in-memory stand-in for
//! tests and for embedding the loader without global side effects.

use crate::types::EnvMap;

/// A mutable key-value environment.
pub trait ProcessEnv {
    /// Snapshot of every variable, in the environment's own order.
    fn vars(&self) -> EnvMap;

    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// The environment of the running process.
///
/// Variables whose name or value is not valid Unicode are invisible to the
/// loader.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl ProcessEnv for SystemEnv {
    fn vars(&self) -> EnvMap {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: resolution is synchronous and the loader is the environment's
        // only writer; callers must not resolve while other threads read or
        // write the process environment.
        unsafe { std::env::set_var(key, value) }
    }
}

/// An in-memory environment.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryEnv {
    vars: EnvMap,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_map(&self) -> &EnvMap {
        &self.vars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MemoryEnv {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ProcessEnv for MemoryEnv {
    fn vars(&self) -> EnvMap {
        self.vars.clone()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}
