use chainsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
struct Record {
    group: u8,
    score: Option<i16>,
    tag: String,
    weight: f64,
    seq: usize,
}

sortable!(Record { group, score, tag, weight, seq });

const KEYS: [&str; 4] = ["group", "score", "tag", "weight"];

fn random_records(rng: &mut StdRng, count: usize) -> Vec<Record> {
    (0..count)
        .map(|seq| Record {
            group: rng.random_range(0..4),
            score: if rng.random_bool(0.2) {
                None
            } else {
                Some(rng.random_range(-5..5))
            },
            tag: (0..rng.random_range(0..3))
                .map(|_| rng.random_range(b'a'..b'd') as char)
                .collect(),
            weight: f64::from(rng.random_range(0..4u8)) / 2.0,
            seq,
        })
        .collect()
}

/// Reference comparator written out by hand for the `Record` fields.
fn reference(a: &Record, b: &Record, keys: &[&str], ascending: &[bool]) -> Ordering {
    for (key, &asc) in keys.iter().zip(ascending) {
        let flip = |o: Ordering| if asc { o } else { o.reverse() };
        let ordering = match *key {
            "group" => flip(a.group.cmp(&b.group)),
            "score" => match (a.score, b.score) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(x), Some(y)) => flip(x.cmp(&y)),
            },
            "tag" => flip(a.tag.cmp(&b.tag)),
            "weight" => flip(a.weight.total_cmp(&b.weight)),
            other => panic!("unexpected key {other}"),
        };
        if ordering.is_ne() {
            return ordering;
        }
    }
    Ordering::Equal
}

fn random_config(rng: &mut StdRng) -> (Vec<&'static str>, Vec<bool>) {
    let len = rng.random_range(1..=KEYS.len());
    let keys = (0..len)
        .map(|_| KEYS[rng.random_range(0..KEYS.len())])
        .collect();
    let ascending = (0..len).map(|_| rng.random_bool(0.5)).collect();
    (keys, ascending)
}

#[test]
fn test_fuzz_matches_reference() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let count = rng.random_range(0..60);
        let mut input = random_records(&mut rng, count);
        let (keys, ascending) = random_config(&mut rng);

        let mut expected = input.clone();
        expected.sort_by(|a, b| reference(a, b, &keys, &ascending));

        sort_by_names(&mut input, &keys, &ascending).unwrap();

        assert_eq!(input, expected, "keys: {keys:?}, ascending: {ascending:?}");
    }
}

#[test]
fn test_fuzz_adjacent_pairs_ordered_and_stable() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let count = rng.random_range(2..200);
        let mut input = random_records(&mut rng, count);
        let (keys, ascending) = random_config(&mut rng);
        let spec = SortSpec::<Record>::from_names(&keys, &ascending).unwrap();

        spec.sort(&mut input).unwrap();

        for window in input.windows(2) {
            let ordering = spec.compare(&window[0], &window[1]);
            assert!(ordering.is_le(), "{:?} > {:?}", window[0], window[1]);
            if ordering.is_eq() {
                assert!(window[0].seq < window[1].seq, "equal records reordered");
            }
        }
    }
}

#[test]
fn test_fuzz_idempotent() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..100 {
        let count = rng.random_range(0..100);
        let mut input = random_records(&mut rng, count);
        let (keys, ascending) = random_config(&mut rng);

        sort_by_names(&mut input, &keys, &ascending).unwrap();
        let once: Vec<usize> = input.iter().map(|r| r.seq).collect();

        sort_by_names(&mut input, &keys, &ascending).unwrap();
        let twice: Vec<usize> = input.iter().map(|r| r.seq).collect();

        assert_eq!(once, twice);
    }
}

#[test]
fn test_fuzz_names_and_accessors_agree() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..100 {
        let count = rng.random_range(0..80);
        let input = random_records(&mut rng, count);
        let (keys, ascending) = random_config(&mut rng);

        let accessors: Vec<Accessor<'_, Record>> = keys
            .iter()
            .map(|&key| match key {
                "group" => Accessor::new(|r: &Record| r.group.to_value()),
                "score" => Accessor::new(|r: &Record| r.score.to_value()),
                "tag" => Accessor::new(|r: &Record| r.tag.to_value()),
                _ => Accessor::new(|r: &Record| r.weight.to_value()),
            })
            .collect();

        let mut by_name = input.clone();
        let mut by_accessor = input;
        sort_by_names(&mut by_name, &keys, &ascending).unwrap();
        sort_by_accessors(&mut by_accessor, &accessors, &ascending).unwrap();

        assert_eq!(by_name, by_accessor);
    }
}

#[test]
fn test_fuzz_edge_cases() {
    let make = |score: Option<i16>, seq| Record {
        group: 0,
        score,
        tag: String::new(),
        weight: 0.0,
        seq,
    };

    // 1. All absent
    let mut input: Vec<Record> = (0..50).map(|i| make(None, i)).collect();
    let expected = input.clone();
    sort_by_names(&mut input, &["score"], &[false]).unwrap();
    assert_eq!(input, expected);

    // 2. All same
    let mut input: Vec<Record> = (0..50).map(|i| make(Some(1), i)).collect();
    let expected = input.clone();
    sort_by_names(&mut input, &["score", "group"], &[true, false]).unwrap();
    assert_eq!(input, expected);

    // 3. Reversed
    let mut input: Vec<Record> = (0..50).map(|i| make(Some(i as i16), i)).rev().collect();
    sort_by_names(&mut input, &["score"], &[true]).unwrap();
    assert!(input.iter().enumerate().all(|(i, r)| r.seq == i));

    // 4. Sorted, descending key, one absent in the middle
    let mut input: Vec<Record> = (0..50).map(|i| make(Some(i as i16), i)).collect();
    input[25].score = None;
    sort_by_names(&mut input, &["score"], &[false]).unwrap();
    assert_eq!(input[0].seq, 25);
    assert_eq!(input[1].seq, 49);
    assert_eq!(input[49].seq, 0);
}
