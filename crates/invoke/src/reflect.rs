//! # Call-time resolution
//!
//! `call_user_func` classifies and resolves a descriptor on every call, the
//! way a reflective call does. It is the baseline the benchmarks compare the
//! wrappers against.

use crate::descriptor::{TextTarget, classify_text};
use crate::{CallResult, Callable, Invoke, Registry, Value};

/// Resolve `callable` in `registry` and call it with `args`.
pub fn call_user_func(registry: &Registry, callable: &Callable<'_>, args: &[Value]) -> CallResult {
    match callable {
        Callable::Text(text) => match classify_text(text)? {
            TextTarget::StaticMethod { type_name, method } => {
                registry.static_method(type_name, method)?(args)
            }
            TextTarget::Function(name) => registry.lookup_function(name)?(args),
        },
        Callable::Pair(instance, method) => instance.call_method(method, args),
        Callable::Closure(closure) => closure(args),
    }
}

/// `call_user_func` with the arguments supplied as an owned list.
pub fn call_user_func_array(registry: &Registry, callable: &Callable<'_>, args: Vec<Value>) -> CallResult {
    call_user_func(registry, callable, &args)
}

/// An `Invoke` implementation that resolves its descriptor on every call.
///
/// Never produced by `InvokeFactory`; it exists to measure what resolving at
/// construction saves.
#[derive(Debug, Clone)]
pub struct InvokeCallUserFunc<'a> {
    registry: &'a Registry,
    callable: Callable<'a>,
}

impl<'a> InvokeCallUserFunc<'a> {
    pub fn new(registry: &'a Registry, callable: impl Into<Callable<'a>>) -> Self {
        Self {
            registry,
            callable: callable.into(),
        }
    }

    pub fn callable(&self) -> &Callable<'a> {
        &self.callable
    }
}

impl Invoke for InvokeCallUserFunc<'_> {
    #[inline]
    fn invoke(&self, args: &[Value]) -> CallResult {
        call_user_func(self.registry, &self.callable, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Counter, InstanceTest, create_test_registry, failing_target_error};
    use crate::{InvokeError, InvokeFactory};

    #[test]
    fn test_call_user_func_matches_factory_wrappers() {
        let registry = create_test_registry();
        let factory = InvokeFactory::new(&registry);
        let instance = InstanceTest;

        let descriptors: Vec<Callable<'_>> = vec![
            "functionTest".into(),
            "StaticTest::methodTest".into(),
            (&instance, "methodTest").into(),
            Callable::closure(|args: &[Value]| Ok(args[0].clone())),
            "NoSuchType::methodTest".into(),
            "failingTarget".into(),
        ];

        for descriptor in &descriptors {
            let expected = factory.create(descriptor.clone()).unwrap().exec_one_arg(Value::Int(42));
            assert_eq!(call_user_func(&registry, descriptor, &[Value::Int(42)]), expected);
            assert_eq!(
                call_user_func_array(&registry, descriptor, vec![Value::Int(42)]),
                expected
            );
        }
    }

    #[test]
    fn test_call_user_func_rejects_malformed_text_at_call_time() {
        let registry = create_test_registry();
        assert!(matches!(
            call_user_func(&registry, &"::methodTest".into(), &[]),
            Err(InvokeError::InvalidDescriptor(_))
        ));
    }

    #[test]
    fn test_invoke_call_user_func_wrapper() {
        let registry = create_test_registry();
        let counter = Counter::default();

        let increment = InvokeCallUserFunc::new(&registry, (&counter, "increment"));
        increment.exec_one_arg(Value::Int(4)).unwrap();
        assert_eq!(increment.exec().unwrap(), Value::Int(5));
        assert_eq!(counter.count(), 5);

        let failing = InvokeCallUserFunc::new(&registry, "failingTarget");
        assert_eq!(failing.exec_two_arg(Value::Null, Value::Null), Err(failing_target_error()));

        let echo = InvokeCallUserFunc::new(&registry, "StaticTest::echoArgs");
        assert_eq!(
            echo.exec_three_arg(Value::Int(1), Value::Int(2), Value::Int(3)).unwrap(),
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }
}
