//! Method registry: resolve a configuration string to a predictor.
//!
//! Replaces ad-hoc dynamic loading of user inference code with a strict
//! extension point: callers register a constructor closure under a name,
//! and everything resolved through [`Registry::create`] satisfies the same
//! [`Predictor`] contract as the built-ins.

use crate::models::{FullyConnected, RandomNetwork};
use crate::{Error, Predictor, Result};
use std::collections::HashMap;

/// Constructor closure producing a fresh predictor instance.
pub type PredictorConstructor = Box<dyn Fn() -> Box<dyn Predictor> + Send + Sync>;

/// Built-in method names, resolvable on every registry.
pub const BUILTIN_METHODS: &[&str] = &[
    "random100",
    "random1000",
    "random10000",
    "fully-connected",
];

/// String-keyed factory for network inference methods.
///
/// # Example
///
/// ```rust
/// use grnbench::Registry;
///
/// let registry = Registry::new();
/// let model = registry.create("random100").unwrap();
/// assert_eq!(model.name(), "random");
/// assert!(registry.create("does-not-exist").is_err());
/// ```
#[derive(Default)]
pub struct Registry {
    custom: HashMap<String, PredictorConstructor>,
}

impl Registry {
    /// Create a registry with only the built-in methods.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom inference method under `name`.
    ///
    /// Names are matched case-insensitively. Colliding with a built-in or
    /// a previously registered method is an error: silently shadowing a
    /// method would corrupt benchmark results.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        constructor: impl Fn() -> Box<dyn Predictor> + Send + Sync + 'static,
    ) -> Result<()> {
        let key = name.into().to_lowercase();
        if BUILTIN_METHODS.contains(&key.as_str()) || self.custom.contains_key(&key) {
            return Err(Error::invalid_input(format!(
                "method '{}' is already registered",
                key
            )));
        }
        self.custom.insert(key, Box::new(constructor));
        Ok(())
    }

    /// Create a predictor instance from a method name.
    ///
    /// Unknown names are an [`Error::InvalidInput`] listing what is
    /// available.
    pub fn create(&self, name: &str) -> Result<Box<dyn Predictor>> {
        let key = name.to_lowercase();
        log::info!("Resolving inference method '{}'", key);
        match key.as_str() {
            "random100" => Ok(Box::new(RandomNetwork::new(100))),
            "random1000" => Ok(Box::new(RandomNetwork::new(1000))),
            "random10000" => Ok(Box::new(RandomNetwork::new(10000))),
            "fully-connected" | "fully_connected" => Ok(Box::new(FullyConnected::new())),
            _ => match self.custom.get(&key) {
                Some(constructor) => Ok(constructor()),
                None => Err(Error::invalid_input(format!(
                    "Unknown method: '{}'. Available: {}",
                    name,
                    self.available_methods().join(", ")
                ))),
            },
        }
    }

    /// All resolvable method names, built-ins first.
    #[must_use]
    pub fn available_methods(&self) -> Vec<String> {
        let mut methods: Vec<String> = BUILTIN_METHODS.iter().map(|s| (*s).to_string()).collect();
        let mut custom: Vec<String> = self.custom.keys().cloned().collect();
        custom.sort();
        methods.extend(custom);
        methods
    }

    /// Whether `name` resolves on this registry.
    #[must_use]
    pub fn is_available(&self, name: &str) -> bool {
        let key = name.to_lowercase();
        BUILTIN_METHODS.contains(&key.as_str())
            || key == "fully_connected"
            || self.custom.contains_key(&key)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("methods", &self.available_methods())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockPredictor;

    #[test]
    fn test_builtins_resolve() {
        let registry = Registry::new();
        for name in BUILTIN_METHODS {
            assert!(registry.create(name).is_ok(), "builtin '{}' failed", name);
        }
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        let registry = Registry::new();
        assert!(registry.create("Random100").is_ok());
        assert!(registry.create("FULLY-CONNECTED").is_ok());
    }

    #[test]
    fn test_unknown_method() {
        let registry = Registry::new();
        let err = registry.create("notears-mlp").err().unwrap();
        assert!(err.to_string().contains("random100"), "got: {}", err);
    }

    #[test]
    fn test_register_and_create_custom() {
        let mut registry = Registry::new();
        registry
            .register("mock", || Box::new(MockPredictor::new("mock")))
            .unwrap();
        let model = registry.create("mock").unwrap();
        assert_eq!(model.name(), "mock");
        assert!(registry.is_available("MOCK"));
    }

    #[test]
    fn test_register_rejects_builtin_collision() {
        let mut registry = Registry::new();
        let err = registry.register("random100", || Box::new(MockPredictor::new("x")));
        assert!(err.is_err());
    }

    #[test]
    fn test_register_rejects_duplicate() {
        let mut registry = Registry::new();
        registry
            .register("mock", || Box::new(MockPredictor::new("mock")))
            .unwrap();
        let err = registry.register("Mock", || Box::new(MockPredictor::new("mock")));
        assert!(err.is_err());
    }

    #[test]
    fn test_available_methods_lists_custom() {
        let mut registry = Registry::new();
        registry
            .register("mock", || Box::new(MockPredictor::new("mock")))
            .unwrap();
        let methods = registry.available_methods();
        assert!(methods.contains(&"random100".to_string()));
        assert!(methods.contains(&"mock".to_string()));
    }
}
