use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;
use stm32hex::{Record, merge, scan, write_hex};

#[allow(clippy::expect_used)]
fn bench_hex_codec(c: &mut Criterion) {
    // 1 MB of random firmware
    let binary: Vec<u8> = rand::rng()
        .sample_iter(rand::distr::StandardUniform)
        .take(1 << 20)
        .collect();

    let mut hex_bytes = Vec::new();
    write_hex(0x0800_0000, &binary, &mut hex_bytes).expect("Failed to encode binary");

    c.bench_function("bin2hex_1mb", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(hex_bytes.len());
            write_hex(
                std::hint::black_box(0x0800_0000),
                std::hint::black_box(&binary),
                &mut out,
            )
            .expect("Failed to encode binary");
            std::hint::black_box(out);
        });
    });

    c.bench_function("scan_decode_1mb", |b| {
        b.iter(|| {
            let valid = scan(std::hint::black_box(&hex_bytes))
                .filter_map(|text| Record::decode(text).ok())
                .filter(|d| d.checksum_valid)
                .count();
            std::hint::black_box(valid);
        });
    });

    c.bench_function("merge_2x1mb", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(2 * hex_bytes.len());
            merge(
                [hex_bytes.as_slice(), hex_bytes.as_slice()],
                std::hint::black_box(&mut out),
            )
            .expect("Failed to merge streams");
            std::hint::black_box(out);
        });
    });
}

criterion_group!(
    name = stm32hex_benches;
    config = Criterion::default().sample_size(20);
    targets = bench_hex_codec
);
criterion_main!(stm32hex_benches);
