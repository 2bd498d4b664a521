//! Call targets and helpers shared by tests and benchmarks.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::{CallResult, InvokeError, Object, Registry, Value, nth_arg, undefined_method};

/// Macro to initialize tracing for tests
///
/// Usage:
/// - `init_test_tracing!()` - uses DEBUG level (default)
/// - `init_test_tracing!(INFO)` - uses specified level
#[macro_export]
macro_rules! init_test_tracing {
    () => {
        init_test_tracing!(DEBUG);
    };
    ($level:ident) => {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::$level)
            .with_test_writer()
            .try_init();
    };
}

/// Free function returning its first argument.
pub fn function_test(args: &[Value]) -> CallResult {
    nth_arg(args, 0).cloned()
}

/// Type with a single static identity method.
pub struct StaticTest;

impl StaticTest {
    pub const TYPE_NAME: &'static str = "StaticTest";

    pub fn method_test(args: &[Value]) -> CallResult {
        nth_arg(args, 0).cloned()
    }
}

/// Type with a single identity instance method, `methodTest`.
#[derive(Debug, Default)]
pub struct InstanceTest;

impl InstanceTest {
    pub fn method_test(&self, args: &[Value]) -> CallResult {
        nth_arg(args, 0).cloned()
    }
}

impl Object for InstanceTest {
    fn type_name(&self) -> &str {
        "InstanceTest"
    }

    fn call_method(&self, method: &str, args: &[Value]) -> CallResult {
        match method {
            "methodTest" => self.method_test(args),
            _ => Err(undefined_method(self.type_name(), method)),
        }
    }
}

/// Instance with mutable state, for checking that calls reach the same object.
#[derive(Debug, Default)]
pub struct Counter {
    count: AtomicI64,
}

impl Counter {
    pub fn count(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }
}

impl Object for Counter {
    fn type_name(&self) -> &str {
        "Counter"
    }

    /// `increment([by])` adds `by` (default 1) and returns the new count,
    /// `get()` returns the count, `sum(a, b, c)` adds its integer arguments.
    fn call_method(&self, method: &str, args: &[Value]) -> CallResult {
        match method {
            "increment" => {
                let by = args.first().and_then(Value::as_int).unwrap_or(1);
                Ok(Value::Int(self.count.fetch_add(by, Ordering::SeqCst) + by))
            }
            "get" => Ok(Value::Int(self.count())),
            "sum" => Ok(Value::Int(args.iter().filter_map(Value::as_int).sum())),
            _ => Err(undefined_method(self.type_name(), method)),
        }
    }
}

/// A target that always fails with the same error.
pub fn failing_target(_args: &[Value]) -> CallResult {
    Err(failing_target_error())
}

/// The error `failing_target` raises.
pub fn failing_target_error() -> InvokeError {
    InvokeError::raised("RuntimeException", "target failed")
}

/// Echoes all of its arguments back as a list.
pub fn echo_args(args: &[Value]) -> CallResult {
    Ok(Value::List(args.to_vec()))
}

/// Registry holding `functionTest`, `echoArgs`, `failingTarget`,
/// `StaticTest::methodTest`, `StaticTest::echoArgs` and
/// `StaticTest::failingTarget`.
pub fn create_test_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register_function("functionTest", function_test)
        .register_function("echoArgs", echo_args)
        .register_function("failingTarget", failing_target)
        .register_static(StaticTest::TYPE_NAME, "methodTest", StaticTest::method_test)
        .register_static(StaticTest::TYPE_NAME, "echoArgs", echo_args)
        .register_static(StaticTest::TYPE_NAME, "failingTarget", failing_target);
    registry
}

// Re-export the macro
pub use crate::init_test_tracing;
