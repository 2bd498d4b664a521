use std::fmt;

use crate::invoker::Invoke;
use crate::{CallResult, Object, Value};

/// Invokes a method on a borrowed instance.
///
/// The instance is not owned: its lifetime stays with whoever created it,
/// and any state it changes is visible to later calls.
#[derive(Clone)]
pub struct InvokeInstance<'a> {
    instance: &'a dyn Object,
    method: String,
}

impl<'a> InvokeInstance<'a> {
    pub fn new(instance: &'a dyn Object, method: impl Into<String>) -> Self {
        Self {
            instance,
            method: method.into(),
        }
    }

    pub fn instance(&self) -> &'a dyn Object {
        self.instance
    }

    pub fn method(&self) -> &str {
        &self.method
    }
}

impl fmt::Debug for InvokeInstance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvokeInstance")
            .field("instance", &self.instance)
            .field("method", &self.method)
            .finish()
    }
}

impl Invoke for InvokeInstance<'_> {
    #[inline]
    fn invoke(&self, args: &[Value]) -> CallResult {
        self.instance.call_method(&self.method, args)
    }
}
