//! Times each call strategy against each target kind.

use invoke::descriptor::{METHOD_SEPARATOR, NAMESPACE_SEPARATOR};
use invoke::test_utils::{StaticTest, function_test};
use invoke::{
    BenchConfig, CallResult, Callable, ClosureFactory, Invoke, InvokeCallUserFunc, InvokeFactory,
    InvokerKind, Registry, Value, call_user_func, call_user_func_array,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hint::black_box;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::Result;
use crate::fixtures::{Fixtures, TargetKind};

/// A way of getting from a descriptor to a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Calling the target by hand
    Direct,
    /// Classifying and resolving the descriptor inline on every call
    DirectImplementation,
    /// Factory wrapper behind `Box<dyn Invoke>`
    Invoke,
    /// Factory wrapper as the `Invoker` enum
    Invoker,
    /// One-argument closure from `ClosureFactory`
    ClosureFactory,
    /// `ClosureFactory` closure re-bound to a local before each call
    AssignedClosureFactory,
    /// Resolving the descriptor on every call
    CallUserFunc,
    /// `call_user_func` with an owned argument list
    CallUserFuncArray,
    /// `Invoke` wrapper over `call_user_func`
    InvokeCallUserFunc,
}

impl Strategy {
    pub const ALL: [Strategy; 9] = [
        Strategy::Direct,
        Strategy::DirectImplementation,
        Strategy::Invoke,
        Strategy::Invoker,
        Strategy::ClosureFactory,
        Strategy::AssignedClosureFactory,
        Strategy::CallUserFunc,
        Strategy::CallUserFuncArray,
        Strategy::InvokeCallUserFunc,
    ];

    /// The strategy every other one is compared against.
    pub const BASELINE: Strategy = Strategy::CallUserFunc;
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Direct => write!(f, "direct"),
            Strategy::DirectImplementation => write!(f, "direct_implementation"),
            Strategy::Invoke => write!(f, "invoke"),
            Strategy::Invoker => write!(f, "invoker"),
            Strategy::ClosureFactory => write!(f, "closure_factory"),
            Strategy::AssignedClosureFactory => write!(f, "assigned_closure_factory"),
            Strategy::CallUserFunc => write!(f, "call_user_func"),
            Strategy::CallUserFuncArray => write!(f, "call_user_func_array"),
            Strategy::InvokeCallUserFunc => write!(f, "invoke_call_user_func"),
        }
    }
}

/// Mean time of one run of `iterations` calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub kind: TargetKind,
    pub strategy: Strategy,
    pub time: Duration,
}

pub struct BenchSuite {
    config: BenchConfig,
    fixtures: Fixtures,
}

impl BenchSuite {
    pub fn new(config: BenchConfig, fixtures: Fixtures) -> Self {
        Self { config, fixtures }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// The wrapper the factory builds for `kind`'s descriptor.
    pub fn invoker_kind(&self, kind: TargetKind) -> Result<InvokerKind> {
        let invoker =
            InvokeFactory::new(self.fixtures.registry()).create(self.fixtures.descriptor(kind))?;
        Ok(invoker.kind())
    }

    /// Time every strategy for `kind`, reporting each measurement as it
    /// completes.
    pub fn run_kind<F>(&self, kind: TargetKind, mut on_measured: F) -> Result<Vec<Measurement>>
    where
        F: FnMut(&Measurement),
    {
        info!(%kind, config = %self.config, "Benchmarking target");
        let mut measurements = Vec::with_capacity(Strategy::ALL.len());
        for strategy in Strategy::ALL {
            let time = self.time_strategy(kind, strategy)?;
            let measurement = Measurement {
                kind,
                strategy,
                time,
            };
            debug!(%kind, %strategy, ?time, "Measured");
            on_measured(&measurement);
            measurements.push(measurement);
        }
        Ok(measurements)
    }

    fn time_strategy(&self, kind: TargetKind, strategy: Strategy) -> Result<Duration> {
        let fixtures = &self.fixtures;
        let registry = fixtures.registry();
        let param = Value::Int(self.config.param);

        let time = match strategy {
            Strategy::Direct => self.time_direct(kind, &param),
            Strategy::DirectImplementation => {
                let descriptor = fixtures.descriptor(kind);
                self.config.measure(|| {
                    let _ = black_box(call_inline(
                        registry,
                        black_box(&descriptor),
                        black_box(param.clone()),
                    ));
                })
            }
            Strategy::Invoke => {
                let invoker = InvokeFactory::new(registry).create_boxed(fixtures.descriptor(kind))?;
                self.config.measure(|| {
                    let _ = black_box(invoker.exec_one_arg(black_box(param.clone())));
                })
            }
            Strategy::Invoker => {
                let invoker = InvokeFactory::new(registry).create(fixtures.descriptor(kind))?;
                self.config.measure(|| {
                    let _ = black_box(invoker.exec_one_arg(black_box(param.clone())));
                })
            }
            Strategy::ClosureFactory => {
                let closure = ClosureFactory::new(registry).create(fixtures.descriptor(kind))?;
                self.config.measure(|| {
                    let _ = black_box(closure(black_box(param.clone())));
                })
            }
            Strategy::AssignedClosureFactory => {
                let closure = ClosureFactory::new(registry).create(fixtures.descriptor(kind))?;
                self.config.measure(|| {
                    let call = black_box(&closure);
                    let _ = black_box(call(black_box(param.clone())));
                })
            }
            Strategy::CallUserFunc => {
                let descriptor = fixtures.descriptor(kind);
                self.config.measure(|| {
                    let _ = black_box(call_user_func(
                        registry,
                        black_box(&descriptor),
                        &[black_box(param.clone())],
                    ));
                })
            }
            Strategy::CallUserFuncArray => {
                let descriptor = fixtures.descriptor(kind);
                self.config.measure(|| {
                    let _ = black_box(call_user_func_array(
                        registry,
                        black_box(&descriptor),
                        vec![black_box(param.clone())],
                    ));
                })
            }
            Strategy::InvokeCallUserFunc => {
                let invoker = InvokeCallUserFunc::new(registry, fixtures.descriptor(kind));
                self.config.measure(|| {
                    let _ = black_box(invoker.exec_one_arg(black_box(param.clone())));
                })
            }
        };
        Ok(time)
    }

    /// Each kind gets its own loop so the timed call site is fixed.
    fn time_direct(&self, kind: TargetKind, param: &Value) -> Duration {
        let fixtures = &self.fixtures;
        match kind {
            TargetKind::Function => self.config.measure(|| {
                let _ = black_box(function_test(&[black_box(param.clone())]));
            }),
            TargetKind::Static => self.config.measure(|| {
                let _ = black_box(StaticTest::method_test(&[black_box(param.clone())]));
            }),
            TargetKind::Instance => {
                let instance = fixtures.instance();
                self.config.measure(|| {
                    let _ = black_box(instance.method_test(&[black_box(param.clone())]));
                })
            }
            TargetKind::Lambda => {
                let lambda = fixtures.lambda();
                self.config.measure(|| {
                    let _ = black_box(lambda(&[black_box(param.clone())]));
                })
            }
            TargetKind::Closure => {
                let closure = fixtures.closure();
                self.config.measure(|| {
                    let _ = black_box(closure(&[black_box(param.clone())]));
                })
            }
        }
    }
}

/// Resolve `descriptor` by hand and call it, with no validation of the text.
#[inline]
fn call_inline(registry: &Registry, descriptor: &Callable<'_>, param: Value) -> CallResult {
    match descriptor {
        Callable::Text(text) => {
            let name = text.trim_start_matches(NAMESPACE_SEPARATOR);
            match name.split_once(METHOD_SEPARATOR) {
                Some((type_name, method)) => registry.static_method(type_name, method)?(&[param]),
                None => registry.lookup_function(name)?(&[param]),
            }
        }
        Callable::Pair(instance, method) => instance.call_method(method, &[param]),
        Callable::Closure(closure) => closure(&[param]),
    }
}
