//! Пропускная способность декодирования/кодирования заголовков.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use mrcap_core::{CmdHeaderExt, SampleFileHeaderExt, CMD_HEADER_SIZE};
use mrcap_types::{CmdHeader, SampleFileHeader};

fn file_header_bytes() -> [u8; 96] {
    SampleFileHeader::new(1).encode()
}

fn cmd_header_bytes() -> [u8; CMD_HEADER_SIZE] {
    let mut buf = [0u8; CMD_HEADER_SIZE];
    for (i, b) in buf.iter_mut().enumerate() {
        *b = (i * 31 % 256) as u8;
    }
    buf
}

fn bench_file_header_decode(c: &mut Criterion) {
    let buf = file_header_bytes();

    c.bench_function("sample_file_header_decode", |b| {
        b.iter(|| SampleFileHeader::decode(black_box(&buf)).unwrap())
    });
}

fn bench_file_header_encode(c: &mut Criterion) {
    let header = SampleFileHeader::new(1);

    c.bench_function("sample_file_header_encode", |b| {
        b.iter(|| black_box(&header).encode())
    });
}

fn bench_cmd_header_decode(c: &mut Criterion) {
    let buf = cmd_header_bytes();

    c.bench_function("cmd_header_decode", |b| {
        b.iter(|| CmdHeader::decode(black_box(&buf)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_file_header_decode,
    bench_file_header_encode,
    bench_cmd_header_decode
);
criterion_main!(benches);
