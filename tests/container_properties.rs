//! Property tests for the hand-built containers.
//!
//! Each container is driven with random operation sequences and compared
//! against a std collection that models the same behavior.

use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};

use cachesim::collections::{HashIndex, OrderedSequence, Sequence};
use proptest::prelude::*;

// ============================================================================
// Sequence vs. VecDeque
// ============================================================================

#[derive(Debug, Clone)]
enum SeqOp {
    InsertFront(u8),
    InsertBack(u8),
    RemoveFront,
    RemoveBack,
    RemoveValue(u8),
    MoveToFront(u8),
    MoveForward(u8),
    MoveToBack(u8),
    MoveBackward(u8),
}

fn seq_op() -> impl Strategy<Value = SeqOp> {
    // Small value domain so duplicates and hits are common
    let v = 0u8..6;
    prop_oneof![
        v.clone().prop_map(SeqOp::InsertFront),
        v.clone().prop_map(SeqOp::InsertBack),
        Just(SeqOp::RemoveFront),
        Just(SeqOp::RemoveBack),
        v.clone().prop_map(SeqOp::RemoveValue),
        v.clone().prop_map(SeqOp::MoveToFront),
        v.clone().prop_map(SeqOp::MoveForward),
        v.clone().prop_map(SeqOp::MoveToBack),
        v.prop_map(SeqOp::MoveBackward),
    ]
}

/// Reference semantics for every sequence operation.
fn apply_model(model: &mut VecDeque<u8>, op: &SeqOp) -> Option<bool> {
    let pos = |m: &VecDeque<u8>, v: u8| m.iter().position(|x| *x == v);
    match *op {
        SeqOp::InsertFront(v) => model.push_front(v),
        SeqOp::InsertBack(v) => model.push_back(v),
        SeqOp::RemoveFront => {
            model.pop_front();
        }
        SeqOp::RemoveBack => {
            model.pop_back();
        }
        SeqOp::RemoveValue(v) => {
            if let Some(i) = pos(model, v) {
                model.remove(i);
            }
        }
        SeqOp::MoveToFront(v) => {
            return Some(match pos(model, v) {
                None => false,
                Some(i) => {
                    let x = model.remove(i).unwrap();
                    model.push_front(x);
                    true
                }
            });
        }
        SeqOp::MoveForward(v) => {
            return Some(match pos(model, v) {
                None => false,
                Some(0) => true,
                Some(i) => {
                    model.swap(i - 1, i);
                    true
                }
            });
        }
        SeqOp::MoveToBack(v) => {
            return Some(match pos(model, v) {
                None => false,
                Some(i) if i + 1 == model.len() => false,
                Some(i) => {
                    let x = model.remove(i).unwrap();
                    model.push_back(x);
                    true
                }
            });
        }
        SeqOp::MoveBackward(v) => {
            if model.back() == Some(&v) {
                return Some(true);
            }
            if model.len() <= 1 {
                return Some(false);
            }
            return Some(match pos(model, v) {
                None => false,
                Some(i) => {
                    model.swap(i, i + 1);
                    true
                }
            });
        }
    }
    None
}

fn apply_seq(seq: &mut Sequence<u8>, op: &SeqOp) -> Option<bool> {
    match *op {
        SeqOp::InsertFront(v) => {
            seq.insert_front(v);
        }
        SeqOp::InsertBack(v) => {
            seq.insert_back(v);
        }
        SeqOp::RemoveFront => {
            seq.remove_front();
        }
        SeqOp::RemoveBack => {
            seq.remove_back();
        }
        SeqOp::RemoveValue(v) => {
            seq.remove_value(&v);
        }
        SeqOp::MoveToFront(v) => return Some(seq.move_to_front(&v)),
        SeqOp::MoveForward(v) => return Some(seq.move_forward(&v)),
        SeqOp::MoveToBack(v) => return Some(seq.move_to_back(&v)),
        SeqOp::MoveBackward(v) => return Some(seq.move_backward(&v)),
    }
    None
}

proptest! {
    #[test]
    fn sequence_matches_model(ops in prop::collection::vec(seq_op(), 0..200)) {
        let mut seq = Sequence::new();
        let mut model = VecDeque::new();

        for op in &ops {
            let got = apply_seq(&mut seq, op);
            let want = apply_model(&mut model, op);
            prop_assert_eq!(got, want, "result of {:?}", op);

            seq.debug_validate_invariants();
            prop_assert_eq!(seq.len(), model.len());
            prop_assert_eq!(seq.is_empty(), seq.first().is_none());
            prop_assert_eq!(seq.is_empty(), seq.last().is_none());
            prop_assert_eq!(seq.first(), model.front());
            prop_assert_eq!(seq.last(), model.back());
            prop_assert!(seq.iter().eq(model.iter()));
        }
    }

    #[test]
    fn move_to_front_twice_is_noop(
        items in prop::collection::vec(0u8..10, 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut seq: Sequence<u8> = items.iter().copied().collect();
        let target = items[pick.index(items.len())];

        prop_assert!(seq.move_to_front(&target));
        let once: Vec<u8> = seq.iter().copied().collect();
        prop_assert!(seq.move_to_front(&target));
        let twice: Vec<u8> = seq.iter().copied().collect();
        prop_assert_eq!(once, twice);
    }
}

// ============================================================================
// OrderedSequence: sorted and stable
// ============================================================================

fn by_rank(a: &(u8, usize), b: &(u8, usize)) -> Ordering {
    a.0.cmp(&b.0)
}

proptest! {
    #[test]
    fn ordered_sequence_is_sorted_and_stable(ranks in prop::collection::vec(0u8..5, 0..100)) {
        let mut seq = OrderedSequence::with_comparator(by_rank);
        for (arrival, rank) in ranks.iter().enumerate() {
            seq.add((*rank, arrival));
        }
        seq.debug_validate_order();

        // A stable sort of the input is exactly the expected layout
        let mut expected: Vec<(u8, usize)> =
            ranks.iter().enumerate().map(|(i, r)| (*r, i)).collect();
        expected.sort_by(by_rank);

        let actual: Vec<(u8, usize)> = seq.iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn ordered_sequence_stays_sorted_under_rerank(
        ranks in prop::collection::vec(0u8..5, 1..40),
        bumps in prop::collection::vec(any::<prop::sample::Index>(), 0..40),
    ) {
        let mut seq = OrderedSequence::with_comparator(by_rank);
        for (id, rank) in ranks.iter().enumerate() {
            seq.add((*rank, id));
        }

        for bump in bumps {
            let id = bump.index(ranks.len());
            let mut entry = seq.remove_by(|e| e.1 == id).unwrap();
            entry.0 = entry.0.saturating_add(1);
            seq.add(entry);

            seq.debug_validate_order();
            prop_assert_eq!(seq.len(), ranks.len());
            // Re-ranked entry sits last among its rank
            let pos = seq.position_by(|e| e.1 == id).unwrap();
            let after: Vec<_> = seq.iter().skip(pos + 1).collect();
            prop_assert!(after.iter().all(|e| e.0 > entry.0));
        }
    }
}

// ============================================================================
// HashIndex vs. HashMap
// ============================================================================

#[derive(Debug, Clone)]
enum MapOp {
    Put(u8, u32),
    Get(u8),
    Delete(u8),
}

fn map_op() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        (0u8..20, any::<u32>()).prop_map(|(k, v)| MapOp::Put(k, v)),
        (0u8..20).prop_map(MapOp::Get),
        (0u8..20).prop_map(MapOp::Delete),
    ]
}

fn identity_hash(k: &u8) -> u64 {
    u64::from(*k)
}

proptest! {
    #[test]
    fn hash_index_matches_model(
        buckets in 1usize..10,
        ops in prop::collection::vec(map_op(), 0..200),
    ) {
        let mut index = HashIndex::new(buckets, identity_hash).unwrap();
        let mut model: HashMap<u8, u32> = HashMap::new();

        for op in ops {
            match op {
                MapOp::Put(k, v) => {
                    prop_assert_eq!(index.put(k, v), model.insert(k, v));
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(index.get(&k), model.get(&k));
                }
                MapOp::Delete(k) => {
                    prop_assert_eq!(index.delete(&k), model.remove(&k));
                }
            }
            prop_assert_eq!(index.len(), model.len());
            prop_assert_eq!(index.iter().count(), model.len());
        }
        prop_assert_eq!(index.bucket_count(), buckets);
    }
}

#[test]
fn test_hash_index_reference_scenario() {
    let mut map = HashIndex::with_hasher(cachesim::collections::crc32_hash::<String>);
    map.put("x".to_string(), 1);
    map.put("y".to_string(), 2);
    map.put("x".to_string(), 3);

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&"x".to_string()), Some(&3));
    assert_eq!(map.delete(&"y".to_string()), Some(2));
    assert_eq!(map.delete(&"y".to_string()), None);
}
