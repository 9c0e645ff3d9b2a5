//! Encode/decode benchmarks for the cursor buffer.

use arkbuf::{ByteOrder, RecordBuffer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_record_encode(c: &mut Criterion) {
    c.bench_function("record_encode", |b| {
        b.iter(|| {
            let mut buf = RecordBuffer::new();
            buf.write_u32(black_box(0x4B52_4141), ByteOrder::Big);
            buf.write_u8(black_box(2));
            buf.write_u16(black_box(0x0001), ByteOrder::Little);
            buf.write_u64(black_box(0x0102_0304_0506_0708u64), ByteOrder::Little)
                .unwrap();
            buf.into_inner()
        })
    });
}

fn benchmark_record_decode(c: &mut Criterion) {
    let mut enc = RecordBuffer::new();
    enc.write_u32(0x4B52_4141, ByteOrder::Big);
    enc.write_u8(2);
    enc.write_u16(0x0001, ByteOrder::Little);
    enc.write_u64(0x0102_0304_0506_0708u64, ByteOrder::Little)
        .unwrap();
    let bytes = enc.into_inner();

    c.bench_function("record_decode", |b| {
        b.iter(|| {
            let mut buf = RecordBuffer::from_vec(black_box(bytes.clone()));
            let magic = buf.read_u32(ByteOrder::Big).unwrap();
            let version = buf.read_u8().unwrap();
            let flags = buf.read_u16(ByteOrder::Little).unwrap();
            let id = buf.read_u64(ByteOrder::Little).unwrap();
            (magic, version, flags, id)
        })
    });
}

fn benchmark_growing_writes(c: &mut Criterion) {
    c.bench_function("write_u64_x16_growing", |b| {
        b.iter(|| {
            let mut buf = RecordBuffer::new();
            for i in 0..16u64 {
                buf.write_u64(black_box(i), ByteOrder::Little).unwrap();
            }
            buf.into_inner()
        })
    });
}

criterion_group!(
    benches,
    benchmark_record_encode,
    benchmark_record_decode,
    benchmark_growing_writes
);
criterion_main!(benches);
