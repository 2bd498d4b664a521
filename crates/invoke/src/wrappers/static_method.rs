use crate::invoker::Invoke;
use crate::wrappers::Target;
use crate::{CallResult, Registry, Value};

/// Invokes a type-level method, `Type::method(..)`.
#[derive(Debug, Clone)]
pub struct InvokeStatic {
    type_name: String,
    method: String,
    target: Target,
}

impl InvokeStatic {
    pub fn new(registry: &Registry, type_name: impl Into<String>, method: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let method = method.into();
        let target = Target::from_lookup(registry.static_method(&type_name, &method));
        Self {
            type_name,
            method,
            target,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn is_resolved(&self) -> bool {
        self.target.is_resolved()
    }
}

impl Invoke for InvokeStatic {
    #[inline]
    fn invoke(&self, args: &[Value]) -> CallResult {
        self.target.call(args)
    }
}
