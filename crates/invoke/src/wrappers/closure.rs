use std::fmt;

use crate::invoker::Invoke;
use crate::{CallResult, NativeFn, Value};

/// Invokes an anonymous callable value directly.
#[derive(Clone)]
pub struct InvokeClosure {
    closure: NativeFn,
}

impl InvokeClosure {
    pub fn new(closure: NativeFn) -> Self {
        Self { closure }
    }

    pub fn closure(&self) -> &NativeFn {
        &self.closure
    }
}

impl fmt::Debug for InvokeClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvokeClosure({:p})", self.closure.as_ref())
    }
}

impl Invoke for InvokeClosure {
    #[inline]
    fn invoke(&self, args: &[Value]) -> CallResult {
        (self.closure)(args)
    }
}
