//! # Invoke
//!
//! This crate normalizes the different shapes a callable can take behind one
//! invocation interface. A plain function name, a `"Type::method"` string, an
//! instance paired with a method name, or an anonymous closure all become a
//! wrapper exposing `exec`, `exec_one_arg`, `exec_two_arg` and
//! `exec_three_arg`.
//!
//! ## Features
//!
//! - `Invoke` trait implemented by four wrapper variants and the `Invoker` sum type
//! - `InvokeFactory` mapping a `Callable` descriptor to the matching wrapper
//! - `ClosureFactory` producing a one-argument boxed closure instead
//! - `call_user_func` resolving a descriptor on every call, used as a baseline
//! - `Registry` holding named functions and type-level methods
//!
//! ## License
//!
//! MIT License
//!

use thiserror::Error;

pub mod bench;
pub mod closure_factory;
pub mod descriptor;
pub mod factory;
pub mod invoker;
pub mod reflect;
pub mod registry;
pub mod test_utils;
pub mod value;
pub mod wrappers;

/// Re-export key traits and types
pub use bench::{BenchConfig, BenchConfigBuilder};
pub use closure_factory::{ClosureFactory, OneArgFn};
pub use descriptor::Callable;
pub use factory::InvokeFactory;
pub use invoker::{Invoke, Invoker, InvokerKind};
pub use reflect::{InvokeCallUserFunc, call_user_func, call_user_func_array};
pub use registry::{NativeFn, Object, Registry, native_fn, undefined_method};
pub use value::{CallResult, Value, nth_arg};
pub use wrappers::{InvokeClosure, InvokeFunction, InvokeInstance, InvokeStatic};

/// Common error type for descriptor construction and invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Call to undefined function {0}()")]
    UndefinedFunction(String),

    #[error("Type \"{0}\" not found")]
    UndefinedType(String),

    #[error("Call to undefined method {type_name}::{method}()")]
    UndefinedMethod { type_name: String, method: String },

    #[error("Too few arguments: {expected} expected, {given} given")]
    ArgumentCount { expected: usize, given: usize },

    #[error("{kind}: {message}")]
    Raised { kind: String, message: String },
}

impl InvokeError {
    /// Build an error raised by a call target itself.
    pub fn raised(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Raised {
            kind: kind.into(),
            message: message.into(),
        }
    }
}
