//! # Invocation factory
//!
//! Maps a `Callable` descriptor to the wrapper for its call form:
//!
//! - text without `::` becomes an `InvokeFunction`
//! - `Type::method` text becomes an `InvokeStatic`
//! - an `(instance, method)` pair becomes an `InvokeInstance`
//! - a closure becomes an `InvokeClosure`
//!
//! Names are resolved against the factory's `Registry` while the wrapper is
//! built. Only malformed text fails here; a name that does not resolve fails
//! when the wrapper is invoked.

use tracing::trace;

use crate::descriptor::{TextTarget, classify_text};
use crate::wrappers::{InvokeClosure, InvokeFunction, InvokeInstance, InvokeStatic};
use crate::{Callable, Invoke, InvokeError, Invoker, Registry};

/// Builds wrappers from descriptors.
#[derive(Debug, Clone, Copy)]
pub struct InvokeFactory<'r> {
    registry: &'r Registry,
}

impl<'r> InvokeFactory<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Build the wrapper matching the descriptor's shape.
    pub fn create<'a>(&self, callable: impl Into<Callable<'a>>) -> Result<Invoker<'a>, InvokeError> {
        let invoker: Invoker<'a> = match callable.into() {
            Callable::Text(text) => match classify_text(&text)? {
                TextTarget::StaticMethod { type_name, method } => {
                    InvokeStatic::new(self.registry, type_name, method).into()
                }
                TextTarget::Function(name) => InvokeFunction::new(self.registry, name).into(),
            },
            Callable::Pair(instance, method) => InvokeInstance::new(instance, method).into(),
            Callable::Closure(closure) => InvokeClosure::new(closure).into(),
        };

        trace!(kind = %invoker.kind(), "Created invoker");
        Ok(invoker)
    }

    /// Same as `create`, behind a trait object.
    pub fn create_boxed<'a>(
        &self,
        callable: impl Into<Callable<'a>>,
    ) -> Result<Box<dyn Invoke + 'a>, InvokeError> {
        self.create(callable).map(Invoker::into_boxed)
    }
}
