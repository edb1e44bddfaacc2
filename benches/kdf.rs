//! benches/kdf.rs
//! PBKDF2-HMAC-SHA1 at the fixed RNCryptor cost
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rncryptor_rs::aliases::{Aes256Key32, PasswordBytes, Salt8};
use rncryptor_rs::derive_secure_pbkdf2_key;
use std::hint::black_box;
use std::time::Duration;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    let salt = Salt8::new([0x42; 8]);

    for &len in &[1usize, 16, 64, 256] {
        let pw = PasswordBytes::new(vec![b'p'; len]);
        let id = BenchmarkId::new("pbkdf2_sha1_password_len", len);
        group.bench_with_input(id, &len, |b, _| {
            b.iter(|| {
                let mut key = Aes256Key32::new([0u8; 32]);
                derive_secure_pbkdf2_key(black_box(&pw), black_box(&salt), &mut key).unwrap();
                black_box(key);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
