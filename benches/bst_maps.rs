use criterion::{criterion_group, criterion_main};

const NUM_OF_OPERATIONS: usize = 100;

fn random_pairs() -> Vec<(u32, u32)> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS)
        .map(|_| (rand::Rng::next_u32(&mut rng), rand::Rng::next_u32(&mut rng)))
        .collect()
}

macro_rules! bst_map_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_collections::$module_name::$type_name;
                use criterion::{black_box, Criterion};
                use super::random_pairs;

                fn name(operation: &str) -> String {
                    format!("{} {}", stringify!($module_name), operation)
                }

                pub fn bench_insert(c: &mut Criterion) {
                    let pairs = random_pairs();
                    c.bench_function(&name("insert"), move |b| b.iter(|| {
                        pairs.iter().cloned().collect::<$type_name<u32, u32>>()
                    }));
                }

                pub fn bench_get(c: &mut Criterion) {
                    let pairs = random_pairs();
                    let map: $type_name<u32, u32> = pairs.iter().cloned().collect();
                    c.bench_function(&name("get"), move |b| b.iter(|| {
                        for (key, _) in &pairs {
                            black_box(map.get(key));
                        }
                    }));
                }

                pub fn bench_floor(c: &mut Criterion) {
                    let pairs = random_pairs();
                    let map: $type_name<u32, u32> = pairs.iter().take(pairs.len() / 2).cloned().collect();
                    c.bench_function(&name("floor"), move |b| b.iter(|| {
                        for (_, probe) in &pairs {
                            black_box(map.floor(probe));
                        }
                    }));
                }

                pub fn bench_remove(c: &mut Criterion) {
                    let pairs = random_pairs();
                    c.bench_function(&name("insert then remove"), move |b| b.iter(|| {
                        let mut map: $type_name<u32, u32> = pairs.iter().cloned().collect();
                        for (key, _) in &pairs {
                            black_box(map.remove(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            $(
                $module_name::bench_insert,
                $module_name::bench_get,
                $module_name::bench_floor,
                $module_name::bench_remove,
            )*
        );
    }
}

bst_map_benches!(
    avl_tree: AvlMap,
    red_black_tree: RedBlackMap,
);

criterion_main!(benches);
