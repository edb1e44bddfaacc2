// benches/roundtrip.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rncryptor_rs::aliases::PasswordString;
use rncryptor_rs::{convert_to_v3, decrypt, encrypt, EncryptBuilder};
use std::hint::black_box;

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    let password = PasswordString::new("benchmark-password".to_string());

    for &size in &[1024usize, 1024 * 1024] {
        let input = vec![0x5Au8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("builder_v3", size), &size, |b, _| {
            b.iter(|| {
                let container = EncryptBuilder::new()
                    .encrypt(black_box(&input), &password)
                    .unwrap();
                let plain = decrypt(&container, &password).unwrap();
                debug_assert_eq!(plain, input);
                black_box(plain)
            });
        });
    }

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let password = PasswordString::new("benchmark-password".to_string());
    let v2 = encrypt(&[0x11u8; 4096], &password, 2).unwrap();

    c.bench_function("convert_to_v3_4KiB", |b| {
        b.iter(|| black_box(convert_to_v3(black_box(&v2), &password, None).unwrap()));
    });
}

criterion_group!(benches, bench_roundtrip, bench_convert);
criterion_main!(benches);
