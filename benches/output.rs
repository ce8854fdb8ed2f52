use criterion::{Criterion, criterion_group, criterion_main};
use ezlog::{Dispatcher, Level, Logger};
use std::hint::black_box;

fn noop(_: &str) {}

fn bench_logger(c: &mut Criterion) {
    let mut group = c.benchmark_group("Logger::out");

    let mut logger = Logger::new();
    logger.set_level(Level::Info).set_sink(noop);

    group.bench_function("delivered", |b| {
        b.iter(|| {
            logger
                .info()
                .name("user")
                .msg(black_box("alice"))
                .msg(black_box(42))
                .out();
        });
    });

    group.bench_function("filtered", |b| {
        b.iter(|| {
            logger
                .debug()
                .name("user")
                .msg(black_box("alice"))
                .msg(black_box(42))
                .out();
        });
    });

    group.finish();
}

fn bench_dispatcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dispatcher::emit");

    let mut dispatcher = Dispatcher::new();
    dispatcher.set_level(Level::Info);
    dispatcher.set_all(noop);

    group.bench_function("delivered", |b| {
        b.iter(|| dispatcher.warning(black_box("low disk")));
    });
    group.bench_function("filtered", |b| {
        b.iter(|| dispatcher.debug(black_box("cache hit")));
    });

    group.finish();
}

criterion_group!(benches, bench_logger, bench_dispatcher);
criterion_main!(benches);
