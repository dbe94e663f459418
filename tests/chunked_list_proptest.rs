use chunklist::{ChunkedList, Tuning};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Push(u16),
    Insert(usize, u16),
    Remove(usize),
    Set(usize, u16),
    Get(usize),
    Swap(usize, usize),
    RemoveIfMultiple(u16),
    Sort,
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            4 => any::<u16>().prop_map(Operation::Push),
            3 => (any::<usize>(), any::<u16>()).prop_map(|(i, v)| Operation::Insert(i, v)),
            3 => any::<usize>().prop_map(Operation::Remove),
            2 => (any::<usize>(), any::<u16>()).prop_map(|(i, v)| Operation::Set(i, v)),
            2 => any::<usize>().prop_map(Operation::Get),
            1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Operation::Swap(a, b)),
            1 => (2u16..6).prop_map(Operation::RemoveIfMultiple),
            1 => Just(Operation::Sort),
        ],
        1..250,
    )
}

/// Tiny chunks so arbitrary sequences reach the grow/split/normalize and
/// chunk-removal policies quickly.
fn tunings() -> impl Strategy<Value = Tuning> {
    (2usize..10, 0usize..3, 1usize..8).prop_map(|(base, factor, step)| Tuning {
        base_chunk: base,
        split_threshold: base * (2 + factor),
        step,
    })
}

proptest! {
    #[test]
    fn chunked_list_matches_vec_model(tuning in tunings(), ops in operations()) {
        let mut model: Vec<u16> = Vec::new();
        let mut list = ChunkedList::with_tuning(0, tuning);

        for op in ops {
            match op {
                Operation::Push(v) => {
                    model.push(v);
                    list.push(v);
                }
                Operation::Insert(seed, v) => {
                    let at = seed % (model.len() + 1);
                    model.insert(at, v);
                    list.insert(at, v).unwrap();
                }
                Operation::Remove(seed) => {
                    if !model.is_empty() {
                        let at = seed % model.len();
                        prop_assert_eq!(list.remove(at).unwrap(), model.remove(at));
                    }
                }
                Operation::Set(seed, v) => {
                    if !model.is_empty() {
                        let at = seed % model.len();
                        let replaced = core::mem::replace(&mut model[at], v);
                        prop_assert_eq!(list.set(at, v).unwrap(), replaced);
                    }
                }
                Operation::Get(seed) => {
                    let at = seed % (model.len() + 1);
                    prop_assert_eq!(list.get(at), model.get(at));
                }
                Operation::Swap(a_seed, b_seed) => {
                    if !model.is_empty() {
                        let a = a_seed % model.len();
                        let b = b_seed % model.len();
                        model.swap(a, b);
                        list.swap(a, b).unwrap();
                    }
                }
                Operation::RemoveIfMultiple(k) => {
                    let before = model.len();
                    model.retain(|v| v % k != 0);
                    let removed = list.remove_if(|v| v % k == 0).unwrap();
                    prop_assert_eq!(removed, before != model.len());
                }
                Operation::Sort => {
                    model.sort();
                    list.sort();
                }
            }
            prop_assert_eq!(list.len(), model.len());
        }

        let collected: Vec<u16> = list.iter().copied().collect();
        prop_assert_eq!(&collected, &model);
        let backward: Vec<u16> = list.iter().rev().copied().collect();
        let mut reversed = model.clone();
        reversed.reverse();
        prop_assert_eq!(&backward, &reversed);
        for (i, expected) in model.iter().enumerate() {
            prop_assert_eq!(list.get(i), Some(expected));
        }
    }

    /// Inserting then removing at the same position is an identity, from
    /// either direction.
    #[test]
    fn insert_remove_roundtrip_identity(
        values in proptest::collection::vec(any::<u16>(), 1..120),
        seed in any::<usize>(),
        probe in any::<u16>(),
    ) {
        let tuning = Tuning { base_chunk: 4, split_threshold: 8, step: 2 };
        let mut list = ChunkedList::with_tuning(0, tuning);
        for &v in &values {
            list.push(v);
        }

        let at = seed % (values.len() + 1);
        list.insert(at, probe).unwrap();
        prop_assert_eq!(list.remove(at).unwrap(), probe);
        let now: Vec<u16> = list.iter().copied().collect();
        prop_assert_eq!(&now, &values);

        let at = seed % values.len();
        let taken = list.remove(at).unwrap();
        list.insert(at, taken).unwrap();
        let now: Vec<u16> = list.iter().copied().collect();
        prop_assert_eq!(&now, &values);
    }
}
