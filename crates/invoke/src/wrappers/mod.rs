//! The four wrapper variants behind the `Invoke` trait.

use std::fmt;

use crate::{CallResult, InvokeError, NativeFn, Value};

mod closure;
mod function;
mod instance;
mod static_method;

pub use closure::InvokeClosure;
pub use function::InvokeFunction;
pub use instance::InvokeInstance;
pub use static_method::InvokeStatic;

/// A name looked up once at construction.
///
/// A failed lookup is kept and returned on every call, so a wrapper over a
/// missing target can still be built.
#[derive(Clone)]
pub(crate) enum Target {
    Resolved(NativeFn),
    Missing(InvokeError),
}

impl Target {
    pub(crate) fn from_lookup(lookup: Result<&NativeFn, InvokeError>) -> Self {
        match lookup {
            Ok(f) => Self::Resolved(f.clone()),
            Err(e) => Self::Missing(e),
        }
    }

    #[inline]
    pub(crate) fn call(&self, args: &[Value]) -> CallResult {
        match self {
            Self::Resolved(f) => f(args),
            Self::Missing(e) => Err(e.clone()),
        }
    }

    pub(crate) fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(target) => write!(f, "Resolved({:p})", target.as_ref()),
            Self::Missing(e) => f.debug_tuple("Missing").field(e).finish(),
        }
    }
}
