//! # Closure factory
//!
//! Builds a plain one-argument closure from a descriptor instead of a wrapper
//! object. Classification follows `InvokeFactory`.

use tracing::trace;

use crate::descriptor::{TextTarget, classify_text};
use crate::wrappers::Target;
use crate::{CallResult, Callable, InvokeError, Registry, Value};

/// A boxed one-argument call.
pub type OneArgFn<'a> = Box<dyn Fn(Value) -> CallResult + 'a>;

/// Builds one-argument closures from descriptors.
#[derive(Debug, Clone, Copy)]
pub struct ClosureFactory<'r> {
    registry: &'r Registry,
}

impl<'r> ClosureFactory<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn create<'a>(&self, callable: impl Into<Callable<'a>>) -> Result<OneArgFn<'a>, InvokeError> {
        let closure: OneArgFn<'a> = match callable.into() {
            Callable::Text(text) => {
                let target = match classify_text(&text)? {
                    TextTarget::StaticMethod { type_name, method } => {
                        Target::from_lookup(self.registry.static_method(type_name, method))
                    }
                    TextTarget::Function(name) => {
                        Target::from_lookup(self.registry.lookup_function(name))
                    }
                };
                Box::new(move |param: Value| target.call(&[param]))
            }
            Callable::Pair(instance, method) => {
                Box::new(move |param: Value| instance.call_method(&method, &[param]))
            }
            Callable::Closure(closure) => Box::new(move |param: Value| closure(&[param])),
        };

        trace!("Created one-argument closure");
        Ok(closure)
    }
}
