use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use splay_collections::splay_tree::{SplaySet, SplayStrategy};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1_000;

fn keys() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(*key);
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let keys = keys();
    let set: BTreeSet<u32> = keys.iter().cloned().collect();
    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

macro_rules! splay_set_benches {
    ($($module_name:ident: $strategy:expr,)*) => {
        $(
            mod $module_name {
                use criterion::{black_box, Criterion};
                use splay_collections::splay_tree::{SplaySet, SplayStrategy};

                pub fn bench_insert(c: &mut Criterion) {
                    let keys = super::keys();
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), move |b| b.iter(|| {
                        let mut set = SplaySet::with_strategy($strategy);
                        for key in &keys {
                            set.insert(*key);
                        }
                    }));
                }

                pub fn bench_search(c: &mut Criterion) {
                    let keys = super::keys();
                    let mut set = SplaySet::with_strategy($strategy);
                    set.extend(keys.iter().cloned());

                    c.bench_function(&format!("bench {} search", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &keys {
                            black_box(set.search(key));
                        }
                    }));
                }

                pub fn bench_search_hot(c: &mut Criterion) {
                    let keys = super::keys();
                    let mut set = SplaySet::with_strategy($strategy);
                    set.extend(keys.iter().cloned());
                    let hot = keys[..16].to_vec();

                    c.bench_function(&format!("bench {} search hot", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &hot {
                            black_box(set.search(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_contains,
            bench_btreeset_insert,
            bench_sequential_insert,
            $(
                $module_name::bench_insert,
                $module_name::bench_search,
                $module_name::bench_search_hot,
            )*
        );
    }
}

fn bench_sequential_insert(c: &mut Criterion) {
    c.bench_function("bench top down sequential insert then search", |b| {
        b.iter(|| {
            let mut set = SplaySet::with_strategy(SplayStrategy::TopDown);
            for key in 0..NUM_OF_OPERATIONS as u32 {
                set.insert(key);
            }
            black_box(set.search(&0));
        })
    });
}

splay_set_benches!(
    recursive: SplayStrategy::Recursive,
    top_down: SplayStrategy::TopDown,
);

criterion_main!(benches);
