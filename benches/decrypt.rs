// benches/decrypt.rs
use secure_gate::RevealSecret;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rncryptor_rs::aliases::{PasswordBytes, PasswordString};
use rncryptor_rs::utils::truncate_multibyte_password;
use rncryptor_rs::{decrypt, encrypt, encrypt_bytes};
use std::hint::black_box;

fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrypt");

    let password = PasswordString::new("benchmark-password".to_string());

    for &size in &[1usize, 1024, 64 * 1024, 1024 * 1024] {
        let container = encrypt(&vec![0x41u8; size], &password, 3).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("v3", size), &size, |b, _| {
            b.iter(|| black_box(decrypt(black_box(&container), black_box(&password)).unwrap()));
        });
    }

    group.finish();
}

/// Worst case: v2 fallback costs two extra PBKDF2 passes.
fn bench_legacy_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrypt_legacy");

    let password = PasswordString::new("pässwörd-ünïcödé".to_string());
    let truncated = PasswordBytes::new(truncate_multibyte_password(
        password.expose_secret().as_bytes(),
    ));

    let direct = encrypt(b"legacy payload", &password, 2).unwrap();
    let legacy = encrypt_bytes(b"legacy payload", &truncated, 2).unwrap();

    group.bench_function("v2_direct", |b| {
        b.iter(|| black_box(decrypt(black_box(&direct), &password).unwrap()));
    });
    group.bench_function("v2_truncated_fallback", |b| {
        b.iter(|| black_box(decrypt(black_box(&legacy), &password).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_decrypt, bench_legacy_fallback);
criterion_main!(benches);
