use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use classicrypt_algorithms::ModMatrix;
use classicrypt_api::{ClassicalCipher, Mode};
use classicrypt_ciphers::{
    default_matrix, process, Affine, AffineKey, CipherSpec, Enigma, EnigmaSettings, Hill,
    Playfair, Vigenere,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn message(len: usize) -> String {
    "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_ciphers(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt");

    let vigenere = Vigenere::new("LEMON").unwrap();
    let affine = Affine::new(&AffineKey::default()).unwrap();
    let playfair = Playfair::new("PLAYFAIR EXAMPLE").unwrap();
    let hill = Hill::new(&default_matrix(3).unwrap()).unwrap();
    let enigma = Enigma::new(&EnigmaSettings::new(
        ["IV", "II", "V"],
        ["Q", "E", "V"],
        ["B", "U", "L"],
        "C",
        "AB CD EF GH",
    ))
    .unwrap();

    for size in [16usize, 256, 4096] {
        let text = message(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vigenere", size), &text, |b, t| {
            b.iter(|| vigenere.encrypt(t))
        });
        group.bench_with_input(BenchmarkId::new("Affine", size), &text, |b, t| {
            b.iter(|| affine.encrypt(t))
        });
        group.bench_with_input(BenchmarkId::new("Playfair", size), &text, |b, t| {
            b.iter(|| playfair.encrypt(t))
        });
        group.bench_with_input(BenchmarkId::new("Hill-3x3", size), &text, |b, t| {
            b.iter(|| hill.encrypt(t))
        });
        group.bench_with_input(BenchmarkId::new("Enigma", size), &text, |b, t| {
            b.iter(|| enigma.encrypt(t))
        });
    }

    group.finish();
}

fn bench_key_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("key setup");
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    for n in 2..=5usize {
        let key = ModMatrix::random_invertible(&mut rng, n);
        group.bench_with_input(BenchmarkId::new("Gauss-Jordan inverse", n), &key, |b, k| {
            b.iter(|| k.inverse())
        });
    }

    let settings = EnigmaSettings::default();
    group.bench_function("Enigma configuration", |b| b.iter(|| Enigma::new(&settings)));
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let spec = CipherSpec::Enigma(EnigmaSettings::default());
    let text = message(256);
    c.bench_function("process enigma 256", |b| {
        b.iter(|| process(&text, &spec, Mode::Encrypt))
    });
}

criterion_group!(benches, bench_ciphers, bench_key_setup, bench_dispatch);
criterion_main!(benches);
