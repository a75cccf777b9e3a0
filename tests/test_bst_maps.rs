use simplelog::{Config, LevelFilter, SimpleLogger};

const NUM_OF_OPERATIONS: usize = 50_000;
const KEY_RANGE: u32 = 2_000;
const VALIDATE_EVERY: usize = 997;

fn init_logger() {
    let _ = SimpleLogger::init(LevelFilter::Info, Config::default());
}

macro_rules! bst_map_tests {
    ($($module_name:ident: $map_name:ident, $set_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use balanced_collections::$module_name::{$map_name, $set_name};
                use rand::Rng;
                use std::collections::{BTreeMap, BTreeSet};
                use super::{init_logger, KEY_RANGE, NUM_OF_OPERATIONS, VALIDATE_EVERY};

                #[test]
                fn int_test_map() {
                    init_logger();
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = $map_name::new();
                    let mut expected = BTreeMap::new();

                    for i in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, KEY_RANGE);
                        match rng.gen_range(0, 4) {
                            0 | 1 => {
                                let val = rng.next_u32();
                                assert_eq!(map.insert(key, val), expected.insert(key, val));
                            },
                            2 => assert_eq!(map.remove(&key), expected.remove(&key)),
                            _ => {
                                assert_eq!(map.get(&key), expected.get(&key));
                                assert_eq!(map.contains_key(&key), expected.contains_key(&key));
                            },
                        }
                        assert_eq!(map.len(), expected.len());

                        if i % VALIDATE_EVERY == 0 {
                            assert_eq!(map.validate(), Ok(()));
                        }
                    }

                    assert_eq!(map.validate(), Ok(()));
                    assert_eq!(map.min(), expected.keys().next());
                    assert_eq!(map.max(), expected.keys().next_back());
                    assert_eq!(
                        map.iter().collect::<Vec<(&u32, &u32)>>(),
                        expected.iter().collect::<Vec<(&u32, &u32)>>(),
                    );

                    for _ in 0..1_000 {
                        let key = rng.gen_range(0, KEY_RANGE + 1);
                        assert_eq!(map.floor(&key), expected.range(..=key).next_back().map(|pair| pair.0));
                        assert_eq!(map.ceil(&key), expected.range(key..).next().map(|pair| pair.0));
                    }

                    let mut keys = expected.keys().cloned().collect::<Vec<u32>>();
                    rng.shuffle(&mut keys);
                    for key in keys {
                        assert_eq!(map.remove(&key), expected.remove(&key));
                    }
                    assert!(map.is_empty());
                    assert_eq!(map.validate(), Ok(()));
                }

                #[test]
                fn int_test_map_reversed() {
                    init_logger();
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
                    let mut map = $map_name::with_comparator(|a: &u32, b: &u32| b.cmp(a));
                    let mut expected = BTreeMap::new();

                    for _ in 0..NUM_OF_OPERATIONS / 10 {
                        let key = rng.gen_range(0, KEY_RANGE);
                        if rng.gen() {
                            assert_eq!(map.insert(key, key), expected.insert(key, key));
                        } else {
                            assert_eq!(map.remove(&key), expected.remove(&key));
                        }
                    }

                    assert_eq!(map.validate(), Ok(()));
                    assert_eq!(
                        map.keys().collect::<Vec<&u32>>(),
                        expected.keys().rev().collect::<Vec<&u32>>(),
                    );
                }

                #[test]
                fn int_test_set() {
                    init_logger();
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([3, 3, 3, 3]);
                    let mut set = $set_name::new();
                    let mut expected = BTreeSet::new();

                    for _ in 0..NUM_OF_OPERATIONS / 10 {
                        let key = rng.gen_range(0, KEY_RANGE);
                        if rng.gen() {
                            assert_eq!(set.insert(key), expected.insert(key));
                        } else {
                            assert_eq!(set.remove(&key), expected.remove(&key));
                        }
                        assert_eq!(set.len(), expected.len());
                    }

                    assert_eq!(set.validate(), Ok(()));
                    assert_eq!(
                        set.into_iter().collect::<Vec<u32>>(),
                        expected.into_iter().collect::<Vec<u32>>(),
                    );
                }

                #[test]
                fn int_test_height() {
                    init_logger();
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([4, 4, 4, 4]);
                    let mut map = $map_name::new();
                    assert_eq!(map.height(), 0);

                    for i in 0..NUM_OF_OPERATIONS / 10 {
                        let key = rng.gen_range(0, KEY_RANGE);
                        if rng.gen_range(0, 3) == 0 {
                            map.remove(&key);
                        } else {
                            map.insert(key, key);
                        }

                        if i % 101 == 0 {
                            let walked = map
                                .pre_order()
                                .map(|info| info.depth + 1)
                                .max()
                                .unwrap_or(0);
                            assert_eq!(map.height(), walked);
                        }
                    }
                }

                #[test]
                fn int_test_scenario() {
                    init_logger();
                    let mut map = $map_name::new();
                    for key in &[30, 20, 40, 10, 25, 35, 50, 5, 15, 27, 26, 28] {
                        assert_eq!(map.insert(*key, format!("v{}", key)), None);
                    }
                    for key in &[10, 30, 20, 27] {
                        assert_eq!(map.remove(key), Some(format!("v{}", key)));
                    }

                    assert_eq!(map.validate(), Ok(()));
                    assert_eq!(map.len(), 8);
                    assert_eq!(map.get(&30), None);
                    assert_eq!(map.get(&26), Some(&String::from("v26")));
                    assert_eq!(
                        map.keys().cloned().collect::<Vec<u32>>(),
                        vec![5, 15, 25, 26, 28, 35, 40, 50],
                    );
                }
            }
        )*
    }
}

bst_map_tests!(
    avl_tree: AvlMap, AvlSet,
    red_black_tree: RedBlackMap, RedBlackSet,
);
