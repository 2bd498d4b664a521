//! # Registry
//!
//! Named call targets. Functions are looked up by name and type-level methods
//! by `(type, method)`; instances dispatch their own methods through the
//! `Object` trait.
//!
//! Names are matched exactly. Registering a name twice replaces the earlier
//! target.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{CallResult, InvokeError, Value};

/// A shared native call target taking positional arguments.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> CallResult + Send + Sync>;

/// Wrap a closure or function item into a `NativeFn`.
pub fn native_fn<F>(f: F) -> NativeFn
where
    F: Fn(&[Value]) -> CallResult + Send + Sync + 'static,
{
    Arc::new(f)
}

/// An instance whose methods can be called by name.
///
/// Implementors keep mutable state behind interior mutability, so a method
/// called through a shared reference can still update the instance.
pub trait Object: Send + Sync {
    /// Name of the instance's type, used in error messages.
    fn type_name(&self) -> &str;

    /// Call `method` on this instance with the given arguments.
    fn call_method(&self, method: &str, args: &[Value]) -> CallResult;
}

impl fmt::Debug for dyn Object + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} instance at {:p}>", self.type_name(), self)
    }
}

/// The error an `Object` returns for a method it does not have.
pub fn undefined_method(type_name: &str, method: &str) -> InvokeError {
    InvokeError::UndefinedMethod {
        type_name: type_name.to_string(),
        method: method.to_string(),
    }
}

/// Functions and type-level methods available to name-based descriptors.
#[derive(Clone, Default)]
pub struct Registry {
    functions: FxHashMap<String, NativeFn>,
    types: FxHashMap<String, FxHashMap<String, NativeFn>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a free function under `name`.
    ///
    /// Returns self for method chaining.
    pub fn register_function<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&[Value]) -> CallResult + Send + Sync + 'static,
    {
        let name = name.into();
        if self.functions.insert(name.clone(), Arc::new(f)).is_some() {
            debug!(function = %name, "Replaced registered function");
        }
        self
    }

    /// Register a type-level (static) method `type_name::method`.
    ///
    /// Returns self for method chaining.
    pub fn register_static<F>(
        &mut self,
        type_name: impl Into<String>,
        method: impl Into<String>,
        f: F,
    ) -> &mut Self
    where
        F: Fn(&[Value]) -> CallResult + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        let method = method.into();
        let methods = self.types.entry(type_name.clone()).or_default();
        if methods.insert(method.clone(), Arc::new(f)).is_some() {
            debug!(type_name = %type_name, method = %method, "Replaced registered static method");
        }
        self
    }

    /// Look up a free function.
    pub fn function(&self, name: &str) -> Option<&NativeFn> {
        self.functions.get(name)
    }

    /// Look up a free function, failing the way a call to it would.
    pub fn lookup_function(&self, name: &str) -> Result<&NativeFn, InvokeError> {
        self.function(name)
            .ok_or_else(|| InvokeError::UndefinedFunction(name.to_string()))
    }

    /// Look up a type-level method, telling a missing type apart from a
    /// missing method.
    pub fn static_method(&self, type_name: &str, method: &str) -> Result<&NativeFn, InvokeError> {
        let methods = self
            .types
            .get(type_name)
            .ok_or_else(|| InvokeError::UndefinedType(type_name.to_string()))?;
        methods
            .get(method)
            .ok_or_else(|| undefined_method(type_name, method))
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Number of registered call targets (functions plus static methods).
    pub fn len(&self) -> usize {
        self.functions.len() + self.types.values().map(FxHashMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions: Vec<_> = self.functions.keys().collect();
        functions.sort();
        let mut types: Vec<_> = self.types.keys().collect();
        types.sort();
        f.debug_struct("Registry")
            .field("functions", &functions)
            .field("types", &types)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nth_arg;

    fn identity(args: &[Value]) -> CallResult {
        nth_arg(args, 0).cloned()
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        registry
            .register_function("functionTest", identity)
            .register_static("StaticTest", "methodTest", identity);

        assert_eq!(registry.len(), 2);
        assert!(registry.has_type("StaticTest"));
        let f = registry.function("functionTest").unwrap();
        assert_eq!(f(&[Value::Int(7)]).unwrap(), Value::Int(7));
        let m = registry.static_method("StaticTest", "methodTest").unwrap();
        assert_eq!(m(&[Value::Int(8)]).unwrap(), Value::Int(8));
    }

    #[test]
    fn test_static_lookup_distinguishes_type_and_method() {
        let mut registry = Registry::new();
        registry.register_static("StaticTest", "methodTest", identity);

        assert_eq!(
            registry.static_method("Missing", "methodTest").err(),
            Some(InvokeError::UndefinedType("Missing".to_string()))
        );
        assert_eq!(
            registry.static_method("StaticTest", "nope").err(),
            Some(undefined_method("StaticTest", "nope"))
        );
    }

    #[test]
    fn test_reregistering_replaces_target() {
        let mut registry = Registry::new();
        registry.register_function("f", identity);
        registry.register_function("f", |_: &[Value]| Ok(Value::from("replaced")));

        assert_eq!(registry.len(), 1);
        let f = registry.function("f").unwrap();
        assert_eq!(f(&[Value::Int(1)]).unwrap(), Value::from("replaced"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.function("anything").is_none());
    }
}
