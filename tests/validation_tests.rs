use chainsort::prelude::*;
use chainsort::require_same_len;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    a: i32,
    b: Option<i32>,
}

sortable!(Row { a, b });

fn rows() -> Vec<Row> {
    vec![
        Row { a: 3, b: None },
        Row { a: 1, b: Some(2) },
        Row { a: 2, b: Some(1) },
    ]
}

const NO_KEYS: &[&str] = &[];
const NO_DIRECTIONS: &[bool] = &[];

#[test]
fn test_length_mismatch_reports_both_sizes() {
    let mut input = rows();

    let err = sort_by_names(&mut input, &["a", "b"], &[true]).unwrap_err();

    assert_eq!(
        err,
        SortError::LengthMismatch {
            keys: 2,
            directions: 1
        }
    );
    assert_eq!(input, rows());

    let message = err.to_string();
    assert!(message.contains("keys: 2"), "{message}");
    assert!(message.contains("directions: 1"), "{message}");
}

#[test]
fn test_more_directions_than_keys() {
    let mut input = rows();

    let err = sort_by_names(&mut input, &["a"], &[true, false, true]).unwrap_err();

    assert_eq!(
        err,
        SortError::LengthMismatch {
            keys: 1,
            directions: 3
        }
    );
    assert_eq!(input, rows());
}

#[test]
fn test_empty_criteria() {
    let mut input = rows();

    let err = sort_by_names(&mut input, NO_KEYS, NO_DIRECTIONS).unwrap_err();

    assert_eq!(
        err,
        SortError::EmptyCriteria {
            keys: 0,
            directions: 0
        }
    );
    assert_eq!(input, rows());
}

#[test]
fn test_empty_on_one_side_is_empty_criteria() {
    let mut input = rows();

    assert_eq!(
        sort_by_names(&mut input, NO_KEYS, &[true]),
        Err(SortError::EmptyCriteria {
            keys: 0,
            directions: 1
        })
    );
    assert_eq!(
        sort_by_names(&mut input, &["a"], NO_DIRECTIONS),
        Err(SortError::EmptyCriteria {
            keys: 1,
            directions: 0
        })
    );
    assert_eq!(input, rows());
}

#[test]
fn test_unknown_field() {
    let mut input = rows();

    let err = sort_by_names(&mut input, &["nonexistent"], &[true]).unwrap_err();

    assert_eq!(err, SortError::UnknownField("nonexistent".to_string()));
    assert!(err.to_string().contains("\"nonexistent\""));
    assert_eq!(input, rows());
}

#[test]
fn test_unknown_field_after_valid_keys() {
    let mut input = rows();

    let err = sort_by_names(&mut input, &["a", "c", "d"], &[true, true, true]).unwrap_err();

    // Resolution stops at the first unknown name.
    assert_eq!(err, SortError::UnknownField("c".to_string()));
    assert_eq!(input, rows());
}

#[test]
fn test_field_names_are_case_sensitive() {
    let mut input = rows();

    let err = sort_by_names(&mut input, &["A"], &[true]).unwrap_err();

    assert_eq!(err, SortError::UnknownField("A".to_string()));
}

#[test]
fn test_length_checked_before_names() {
    let mut input = rows();

    let err = sort_by_names(&mut input, &["nonexistent", "a"], &[true]).unwrap_err();

    assert!(matches!(err, SortError::LengthMismatch { .. }));
}

#[test]
fn test_accessor_form_errors() {
    let mut input = rows();
    let by_a = Accessor::new(|r: &Row| r.a.to_value());

    assert_eq!(
        sort_by_accessors(&mut input, &[by_a.clone(), by_a.clone()], &[true]),
        Err(SortError::LengthMismatch {
            keys: 2,
            directions: 1
        })
    );
    assert_eq!(
        sort_by_accessors::<Row, bool>(&mut input, &[], &[]),
        Err(SortError::EmptyCriteria {
            keys: 0,
            directions: 0
        })
    );
    assert_eq!(input, rows());

    sort_by_accessors(&mut input, &[by_a], &[true]).unwrap();
    assert_eq!(input.iter().map(|r| r.a).collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_pair_forms_errors() {
    let mut input = rows();

    assert_eq!(
        sort_by_name_pairs::<Row, &str, bool>(&mut input, &[]),
        Err(SortError::EmptyCriteria {
            keys: 0,
            directions: 0
        })
    );
    assert_eq!(
        sort_by_name_pairs(&mut input, &[("a", true), ("z", false)]),
        Err(SortError::UnknownField("z".to_string()))
    );
    assert_eq!(
        sort_by_accessor_pairs::<Row, Direction, _>(&mut input, Vec::new()),
        Err(SortError::EmptyCriteria {
            keys: 0,
            directions: 0
        })
    );
    assert_eq!(input, rows());
}

#[test]
fn test_empty_spec_is_rejected() {
    let mut input = rows();
    let spec = SortSpec::<Row>::new();

    assert!(spec.is_empty());
    assert!(matches!(
        input.sort_by_spec(&spec),
        Err(SortError::EmptyCriteria { .. })
    ));
    assert_eq!(input, rows());
}

#[test]
fn test_spec_from_names_errors() {
    assert!(matches!(
        SortSpec::<Row>::from_names(&["a"], &[true, true]),
        Err(SortError::LengthMismatch {
            keys: 1,
            directions: 2
        })
    ));
    assert!(matches!(
        SortSpec::<Row>::from_names(&["b", "x"], &[true, true]),
        Err(SortError::UnknownField(name)) if name == "x"
    ));
    assert!(matches!(
        Accessor::<Row>::by_name("x"),
        Err(SortError::UnknownField(name)) if name == "x"
    ));
}

#[test]
fn test_require_same_len() {
    assert_eq!(require_same_len(1, 1), Ok(1));
    assert_eq!(require_same_len(4, 4), Ok(4));
    assert_eq!(
        require_same_len(0, 0),
        Err(SortError::EmptyCriteria {
            keys: 0,
            directions: 0
        })
    );
    assert_eq!(
        require_same_len(0, 3),
        Err(SortError::EmptyCriteria {
            keys: 0,
            directions: 3
        })
    );
    assert_eq!(
        require_same_len(3, 2),
        Err(SortError::LengthMismatch {
            keys: 3,
            directions: 2
        })
    );
}
