use crate::invoker::Invoke;
use crate::wrappers::Target;
use crate::{CallResult, Registry, Value};

/// Invokes a free function registered under a name.
#[derive(Debug, Clone)]
pub struct InvokeFunction {
    name: String,
    target: Target,
}

impl InvokeFunction {
    /// Resolve `name` in `registry`. A missing function is reported when the
    /// wrapper is invoked.
    pub fn new(registry: &Registry, name: impl Into<String>) -> Self {
        let name = name.into();
        let target = Target::from_lookup(registry.lookup_function(&name));
        Self { name, target }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name was found when the wrapper was built.
    pub fn is_resolved(&self) -> bool {
        self.target.is_resolved()
    }
}

impl Invoke for InvokeFunction {
    #[inline]
    fn invoke(&self, args: &[Value]) -> CallResult {
        self.target.call(args)
    }
}
