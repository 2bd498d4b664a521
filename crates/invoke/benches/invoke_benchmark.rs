use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use invoke::test_utils::{InstanceTest, StaticTest, create_test_registry, function_test};
use invoke::{
    Callable, ClosureFactory, Invoke, InvokeCallUserFunc, InvokeFactory, Registry, Value,
    call_user_func,
};

fn descriptors(instance: &InstanceTest) -> Vec<(&'static str, Callable<'_>)> {
    vec![
        ("function", "functionTest".into()),
        ("static", "StaticTest::methodTest".into()),
        ("instance", (instance, "methodTest").into()),
        (
            "closure",
            Callable::closure(|args: &[Value]| Ok(args[0].clone())),
        ),
    ]
}

fn bench_direct(c: &mut Criterion) {
    let instance = InstanceTest;
    let mut group = c.benchmark_group("Direct");

    group.bench_function("function", |b| {
        b.iter(|| black_box(function_test(&[black_box(Value::Int(42))])))
    });
    group.bench_function("static", |b| {
        b.iter(|| black_box(StaticTest::method_test(&[black_box(Value::Int(42))])))
    });
    group.bench_function("instance", |b| {
        b.iter(|| black_box(instance.method_test(&[black_box(Value::Int(42))])))
    });

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let registry: Registry = create_test_registry();
    let instance = InstanceTest;
    let factory = InvokeFactory::new(&registry);
    let closures = ClosureFactory::new(&registry);
    let mut group = c.benchmark_group("Strategies");

    for (name, descriptor) in descriptors(&instance) {
        let invoker = factory.create(descriptor.clone()).unwrap();
        group.bench_with_input(BenchmarkId::new("invoker", name), &invoker, |b, invoker| {
            b.iter(|| black_box(invoker.exec_one_arg(black_box(Value::Int(42)))))
        });

        let boxed = factory.create_boxed(descriptor.clone()).unwrap();
        group.bench_function(BenchmarkId::new("invoke", name), |b| {
            b.iter(|| black_box(boxed.exec_one_arg(black_box(Value::Int(42)))))
        });

        let closure = closures.create(descriptor.clone()).unwrap();
        group.bench_function(BenchmarkId::new("closure_factory", name), |b| {
            b.iter(|| black_box(closure(black_box(Value::Int(42)))))
        });

        group.bench_with_input(
            BenchmarkId::new("call_user_func", name),
            &descriptor,
            |b, descriptor| {
                b.iter(|| {
                    black_box(call_user_func(&registry, descriptor, &[black_box(Value::Int(42))]))
                })
            },
        );

        let reflective = InvokeCallUserFunc::new(&registry, descriptor);
        group.bench_function(BenchmarkId::new("invoke_call_user_func", name), |b| {
            b.iter(|| black_box(reflective.exec_one_arg(black_box(Value::Int(42)))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_direct, bench_strategies);
criterion_main!(benches);
