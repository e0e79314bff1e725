use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use polyfactor::factor::cantor_zassenhaus::cantor_zassenhaus;
use polyfactor::polynomial::polynomial::Polynomial;
use polyfactor::polynomial::term::Term;

fn bench_factorization(c: &mut Criterion) {
    // (x + 1)(x + 2)(x + 3)(x^2 + 1) over Z/1009Z
    let f = Polynomial::new(vec![Term::new(1, 1), Term::new(1, 0)])
        * Polynomial::new(vec![Term::new(1, 1), Term::new(2, 0)])
        * Polynomial::new(vec![Term::new(1, 1), Term::new(3, 0)])
        * Polynomial::new(vec![Term::new(1, 2), Term::new(1, 0)]);

    c.bench_function("cantor_zassenhaus deg 5 p=1009", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            cantor_zassenhaus(std::hint::black_box(&f), 1009, &mut rng).unwrap()
        })
    });
}

criterion_group!(benches, bench_factorization);
criterion_main!(benches);
