//! Call targets the bench times.
//!
//! Every target returns its argument unchanged. They are owned by a
//! `Fixtures` value handed to the suite, so nothing is shared globally.

use clap::ValueEnum;
use invoke::test_utils::{InstanceTest, create_test_registry};
use invoke::{Callable, NativeFn, Registry, Value, native_fn, nth_arg};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The shape of callable being measured.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// A named free function
    Function,
    /// A `Type::method` static method
    Static,
    /// A method on an instance
    Instance,
    /// An anonymous function capturing nothing
    Lambda,
    /// An anonymous function capturing a value
    Closure,
}

impl TargetKind {
    pub const ALL: [TargetKind; 5] = [
        TargetKind::Function,
        TargetKind::Static,
        TargetKind::Instance,
        TargetKind::Lambda,
        TargetKind::Closure,
    ];
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Function => write!(f, "function"),
            TargetKind::Static => write!(f, "static"),
            TargetKind::Instance => write!(f, "instance"),
            TargetKind::Lambda => write!(f, "lambda"),
            TargetKind::Closure => write!(f, "closure"),
        }
    }
}

pub struct Fixtures {
    registry: Registry,
    instance: InstanceTest,
    lambda: NativeFn,
    closure: NativeFn,
}

impl Fixtures {
    pub fn new() -> Self {
        let position = 0;
        Self {
            registry: create_test_registry(),
            instance: InstanceTest,
            lambda: native_fn(|args: &[Value]| nth_arg(args, 0).cloned()),
            closure: native_fn(move |args: &[Value]| nth_arg(args, position).cloned()),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn instance(&self) -> &InstanceTest {
        &self.instance
    }

    pub fn lambda(&self) -> &NativeFn {
        &self.lambda
    }

    /// Returns the argument at a position captured when the fixtures were built.
    pub fn closure(&self) -> &NativeFn {
        &self.closure
    }

    /// The descriptor naming `kind`'s target.
    pub fn descriptor(&self, kind: TargetKind) -> Callable<'_> {
        match kind {
            TargetKind::Function => "functionTest".into(),
            TargetKind::Static => "StaticTest::methodTest".into(),
            TargetKind::Instance => (&self.instance, "methodTest").into(),
            TargetKind::Lambda => self.lambda.clone().into(),
            TargetKind::Closure => self.closure.clone().into(),
        }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoke::test_utils::{StaticTest, function_test};
    use invoke::{CallResult, Invoke, InvokeFactory};

    fn call_direct(fixtures: &Fixtures, kind: TargetKind, param: Value) -> CallResult {
        match kind {
            TargetKind::Function => function_test(&[param]),
            TargetKind::Static => StaticTest::method_test(&[param]),
            TargetKind::Instance => fixtures.instance().method_test(&[param]),
            TargetKind::Lambda => fixtures.lambda()(&[param]),
            TargetKind::Closure => fixtures.closure()(&[param]),
        }
    }

    #[test]
    fn test_every_kind_is_identity_through_both_paths() {
        let fixtures = Fixtures::new();
        let factory = InvokeFactory::new(fixtures.registry());

        for kind in TargetKind::ALL {
            let direct = call_direct(&fixtures, kind, Value::Int(42)).unwrap();
            let wrapped = factory
                .create(fixtures.descriptor(kind))
                .unwrap()
                .exec_one_arg(Value::Int(42))
                .unwrap();
            assert_eq!(direct, Value::Int(42), "{kind}");
            assert_eq!(wrapped, direct, "{kind}");
        }
    }
}
