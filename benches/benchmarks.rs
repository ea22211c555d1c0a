use std::iter;

use bloomspell::{MembershipSet, SpellChecker};
use criterion::Criterion;

fn key(rng: &fastrand::Rng) -> String {
    iter::repeat_with(|| rng.lowercase()).take(8).collect()
}

fn vocabulary(n: usize) -> Vec<String> {
    let rng = fastrand::Rng::with_seed(0);
    iter::repeat_with(|| key(&rng)).take(n).collect()
}

fn bench_membership_add(c: &mut Criterion) {
    for n in [1000, 10000] {
        c.bench_function(&format!("add-{}", n), |b| {
            let rng = fastrand::Rng::new();
            let mut set = MembershipSet::with_rate(n, 0.01).unwrap();

            b.iter(|| {
                let item = key(&rng);
                set.add(&item);
            });
        });
    }
}

fn bench_membership_contains(c: &mut Criterion) {
    for n in [1000, 10000] {
        c.bench_function(&format!("contains-{}", n), |b| {
            let rng = fastrand::Rng::new();
            let mut set = MembershipSet::with_rate(n, 0.01).unwrap();
            for word in vocabulary(n) {
                set.add(&word);
            }

            b.iter(|| {
                let item = key(&rng);
                set.contains(&item);
            });
        });
    }
}

fn bench_spell_check(c: &mut Criterion) {
    let words = vocabulary(100_000);
    let spell = SpellChecker::from_vocabulary(&words).unwrap();
    let sentence = words[..20].join(" ") + " wrold hte teh";

    c.bench_function("spell-check-23-tokens", |b| {
        b.iter(|| spell.spell_check(&sentence));
    });
}

criterion::criterion_group!(
    benches,
    bench_membership_add,
    bench_membership_contains,
    bench_spell_check
);
criterion::criterion_main!(benches);
