use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use simple_vector::SimpleVector;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in [10, 100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_empty", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = SimpleVector::new();
                for i in 0..size {
                    vec.push(black_box(i)).unwrap();
                }
                black_box(vec.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("reserved", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = SimpleVector::with_capacity(size).unwrap();
                for i in 0..size {
                    vec.push(black_box(i)).unwrap();
                }
                black_box(vec.len())
            });
        });
    }
    group.finish();
}

fn bench_insert_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_erase_front");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("shift", size), size, |b, &size| {
            let mut vec: SimpleVector<usize> = (0..size).collect();
            b.iter(|| {
                vec.insert(0, black_box(usize::MAX)).unwrap();
                black_box(vec.erase(0).unwrap().copied())
            });
        });
    }
    group.finish();
}

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");
    let size = 1000;
    let vec: SimpleVector<usize> = (0..size).collect();
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("checked_at", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for i in 0..size {
                sum = sum.wrapping_add(*vec.at(black_box(i)).unwrap());
            }
            black_box(sum)
        });
    });
    group.bench_function("index", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for i in 0..size {
                sum = sum.wrapping_add(vec[black_box(i)]);
            }
            black_box(sum)
        });
    });
    group.bench_function("iter", |b| {
        b.iter(|| black_box(vec.iter().fold(0usize, |acc, &x| acc.wrapping_add(x))));
    });
    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for size in [100, 10_000].iter() {
        let vec: SimpleVector<u64> = (0..*size as u64).collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("try_clone", size), &vec, |b, vec| {
            b.iter(|| black_box(vec.try_clone().unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push, bench_insert_erase_front, bench_access, bench_clone);
criterion_main!(benches);
