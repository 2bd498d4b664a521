//! # Invocation interface
//!
//! This module defines the `Invoke` trait shared by every wrapper, and the
//! `Invoker` sum type the factory returns.
//!
//! ## Usage
//!
//! Build an `Invoker` with `InvokeFactory::create` and call one of the
//! `exec*` methods. Results and errors come back exactly as the target
//! produced them.
//!

use std::fmt;

use serde::Serialize;

use crate::wrappers::{InvokeClosure, InvokeFunction, InvokeInstance, InvokeStatic};
use crate::{CallResult, Value};

/// Zero to three argument invocation of one resolved target.
///
/// Implementors only provide `invoke`; the arity helpers forward their
/// arguments in order and return the target's result untouched.
pub trait Invoke {
    /// Invoke the target with positional arguments.
    fn invoke(&self, args: &[Value]) -> CallResult;

    /// Invoke with no argument.
    #[inline]
    fn exec(&self) -> CallResult {
        self.invoke(&[])
    }

    /// Invoke with one argument.
    #[inline]
    fn exec_one_arg(&self, param: Value) -> CallResult {
        self.invoke(&[param])
    }

    /// Invoke with two arguments.
    #[inline]
    fn exec_two_arg(&self, param1: Value, param2: Value) -> CallResult {
        self.invoke(&[param1, param2])
    }

    /// Invoke with three arguments.
    #[inline]
    fn exec_three_arg(&self, param1: Value, param2: Value, param3: Value) -> CallResult {
        self.invoke(&[param1, param2, param3])
    }
}

impl<T: Invoke + ?Sized> Invoke for Box<T> {
    #[inline]
    fn invoke(&self, args: &[Value]) -> CallResult {
        (**self).invoke(args)
    }
}

impl<T: Invoke + ?Sized> Invoke for &T {
    #[inline]
    fn invoke(&self, args: &[Value]) -> CallResult {
        (**self).invoke(args)
    }
}

/// Which call form a wrapper dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvokerKind {
    Function,
    StaticMethod,
    InstanceMethod,
    Closure,
}

impl fmt::Display for InvokerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => write!(f, "function"),
            Self::StaticMethod => write!(f, "static method"),
            Self::InstanceMethod => write!(f, "instance method"),
            Self::Closure => write!(f, "closure"),
        }
    }
}

/// A wrapper of any of the four call forms, chosen once at construction.
#[derive(Debug, Clone)]
pub enum Invoker<'a> {
    Function(InvokeFunction),
    Static(InvokeStatic),
    Instance(InvokeInstance<'a>),
    Closure(InvokeClosure),
}

impl<'a> Invoker<'a> {
    pub fn kind(&self) -> InvokerKind {
        match self {
            Self::Function(_) => InvokerKind::Function,
            Self::Static(_) => InvokerKind::StaticMethod,
            Self::Instance(_) => InvokerKind::InstanceMethod,
            Self::Closure(_) => InvokerKind::Closure,
        }
    }

    pub fn as_function(&self) -> Option<&InvokeFunction> {
        match self {
            Self::Function(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_static(&self) -> Option<&InvokeStatic> {
        match self {
            Self::Static(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&InvokeInstance<'a>> {
        match self {
            Self::Instance(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_closure(&self) -> Option<&InvokeClosure> {
        match self {
            Self::Closure(inner) => Some(inner),
            _ => None,
        }
    }

    /// Move the wrapper behind a trait object.
    pub fn into_boxed(self) -> Box<dyn Invoke + 'a> {
        match self {
            Self::Function(inner) => Box::new(inner),
            Self::Static(inner) => Box::new(inner),
            Self::Instance(inner) => Box::new(inner),
            Self::Closure(inner) => Box::new(inner),
        }
    }
}

impl Invoke for Invoker<'_> {
    #[inline]
    fn invoke(&self, args: &[Value]) -> CallResult {
        match self {
            Self::Function(inner) => inner.invoke(args),
            Self::Static(inner) => inner.invoke(args),
            Self::Instance(inner) => inner.invoke(args),
            Self::Closure(inner) => inner.invoke(args),
        }
    }
}

impl From<InvokeFunction> for Invoker<'_> {
    fn from(inner: InvokeFunction) -> Self {
        Self::Function(inner)
    }
}

impl From<InvokeStatic> for Invoker<'_> {
    fn from(inner: InvokeStatic) -> Self {
        Self::Static(inner)
    }
}

impl<'a> From<InvokeInstance<'a>> for Invoker<'a> {
    fn from(inner: InvokeInstance<'a>) -> Self {
        Self::Instance(inner)
    }
}

impl From<InvokeClosure> for Invoker<'_> {
    fn from(inner: InvokeClosure) -> Self {
        Self::Closure(inner)
    }
}
