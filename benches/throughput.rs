use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use pcmring::{RingBuffer, TypedRingBuffer};

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    let mut rb = RingBuffer::new(2048, 2).unwrap();
    let input = vec![0x11u8; 512 * 2];
    let mut out = vec![0u8; 512 * 2];
    group.throughput(Throughput::Elements(512));
    group.bench_function("raw_512x16bit", |b| {
        b.iter(|| {
            rb.write(&input, 512).unwrap();
            rb.read(&mut out, 512).unwrap();
        })
    });

    // Capacity 12 with batches of 5 forces a split copy most rounds.
    let mut typed = TypedRingBuffer::<f32>::new(12).unwrap();
    let frames = [0.25f32; 5];
    let mut frames_out = [0.0f32; 5];
    group.throughput(Throughput::Elements(5));
    group.bench_function("typed_wrapping_5xf32", |b| {
        b.iter(|| {
            typed.write(&frames).unwrap();
            typed.read(&mut frames_out).unwrap();
        })
    });

    let mut single = TypedRingBuffer::<i16>::new(12).unwrap();
    let mut sample = [0i16; 1];
    group.throughput(Throughput::Elements(1));
    group.bench_function("typed_one_by_one", |b| {
        b.iter(|| {
            single.write(&[7]).unwrap();
            single.read(&mut sample).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
