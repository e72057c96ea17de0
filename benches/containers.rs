use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use textbook_containers::collections::{CircularQueue, LinkedStack, SequenceList};

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_fill_drain");
    for n in [10usize, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut q = CircularQueue::<usize>::new();
                for x in 0..n {
                    q.enqueue(x).unwrap();
                }
                while let Some(x) = q.dequeue() {
                    black_box(x);
                }
            })
        });
    }
    group.finish();
}

fn bench_stack(c: &mut Criterion) {
    c.bench_function("stack_push_pop_1000", |b| {
        b.iter(|| {
            let mut s = LinkedStack::<u32>::new();
            for x in 0..1_000u32 {
                s.push(x).unwrap();
            }
            while let Some(x) = s.pop() {
                black_box(x);
            }
        })
    });
}

fn bench_list(c: &mut Criterion) {
    c.bench_function("list_insert_middle_1000", |b| {
        b.iter(|| {
            let mut list = SequenceList::<u32>::new();
            for x in 0..1_000u32 {
                list.insert(x, list.len() / 2).unwrap();
            }
            black_box(list.len())
        })
    });
}

criterion_group!(benches, bench_queue, bench_stack, bench_list);
criterion_main!(benches);
