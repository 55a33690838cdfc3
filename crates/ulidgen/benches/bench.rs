use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ulidgen::{
    GenerationStream, OsRandom, RandSource, SystemClock, ThreadRandom, TimeSource, decode_time,
    is_valid, ulid,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration.
const TOTAL_IDS: usize = 4096;

/// Benchmarks a stream whose clock never advances, so every call after the
/// first takes the increment path.
fn bench_same_millisecond<R: RandSource>(c: &mut Criterion, group_name: &str, rng: impl Fn() -> R) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            let mut stream = GenerationStream::new(FixedMockTime { millis: 1 }, rng());
            for _ in 0..TOTAL_IDS {
                black_box(stream.next_ulid().unwrap());
            }
        });
    });
    group.finish();
}

/// Benchmarks a stream that sees a new millisecond on every call, so every
/// call draws fresh randomness.
fn bench_new_millisecond<R: RandSource>(c: &mut Criterion, group_name: &str, rng: impl Fn() -> R) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            let mut stream = GenerationStream::new(SystemClock, rng());
            for t in 0..TOTAL_IDS as u64 {
                black_box(stream.generate(Some(t)).unwrap());
            }
        });
    });
    group.finish();
}

fn bench_thread_local(c: &mut Criterion) {
    let mut group = c.benchmark_group("thread_local/now");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(ulid(None).unwrap());
            }
        });
    });
    group.finish();
}

fn bench_inspect(c: &mut Criterion) {
    let ids: Vec<String> = {
        let mut stream = GenerationStream::new(SystemClock, ThreadRandom);
        (0..TOTAL_IDS)
            .map(|_| stream.next_ulid().unwrap().to_string())
            .collect()
    };

    let mut group = c.benchmark_group("inspect");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function("is_valid", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(is_valid(black_box(id)));
            }
        });
    });
    group.bench_function("decode_time", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(decode_time(black_box(id)));
            }
        });
    });
    group.finish();
}

fn benches(c: &mut Criterion) {
    bench_same_millisecond(c, "stream/same_ms/thread_random", || ThreadRandom);
    bench_same_millisecond(c, "stream/same_ms/os_random", || OsRandom);
    bench_new_millisecond(c, "stream/new_ms/thread_random", || ThreadRandom);
    bench_new_millisecond(c, "stream/new_ms/os_random", || OsRandom);
    bench_thread_local(c);
    bench_inspect(c);
}

criterion_group!(all, benches);
criterion_main!(all);
