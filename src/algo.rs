//! Multi-key sort entry points.
//!
//! Both forms validate their configuration first and only then sort. A
//! rejected configuration leaves the records in their original order.
//!
//! - [`sort_by_names`]: keys named by field, resolved through [`Sortable`].
//! - [`sort_by_accessors`]: keys given as [`Accessor`]s.
//! - [`sort_by_name_pairs`] / [`sort_by_accessor_pairs`]: the same, with each
//!   key paired with its direction.
//! - [`MultiSort`]: the above as methods on slices and `Vec`s.

use crate::core::{Accessor, Direction, Sortable};
use crate::error::Result;
use crate::spec::{SortKey, SortSpec};

/// Sorts `records` in place by the fields named in `key_names`.
///
/// `directions[i]` is the direction of `key_names[i]`; `true` (or
/// [`Direction::Ascending`]) is ascending. The sort is stable, and absent
/// values sort first for every key regardless of its direction.
///
/// # Errors
///
/// - [`SortError::EmptyCriteria`](crate::SortError::EmptyCriteria) if either list is empty.
/// - [`SortError::LengthMismatch`](crate::SortError::LengthMismatch) if their lengths differ.
/// - [`SortError::UnknownField`](crate::SortError::UnknownField) if a name is not a field of `T`.
///
/// # Examples
///
/// ```
/// use chainsort::{sort_by_names, sortable};
///
/// #[derive(Debug, PartialEq)]
/// struct Row {
///     a: Option<i32>,
/// }
///
/// sortable!(Row { a });
///
/// let mut rows = vec![Row { a: None }, Row { a: Some(5) }, Row { a: Some(1) }];
/// sort_by_names(&mut rows, &["a"], &[true]).unwrap();
///
/// assert_eq!(rows, vec![Row { a: None }, Row { a: Some(1) }, Row { a: Some(5) }]);
/// ```
pub fn sort_by_names<T, S, D>(records: &mut [T], key_names: &[S], directions: &[D]) -> Result<()>
where
    T: Sortable,
    S: AsRef<str>,
    D: Into<Direction> + Copy,
{
    SortSpec::from_names(key_names, directions)?.sort(records)
}

/// Sorts `records` in place by caller-supplied accessors.
///
/// Same contract as [`sort_by_names`] minus the name resolution.
///
/// # Examples
///
/// ```
/// use chainsort::{sort_by_accessors, Accessor, Direction, ToValue, Value};
///
/// let mut words = vec!["pear", "fig", "apple", "kiwi"];
/// let by_len = Accessor::new(|w: &&str| Value::from(w.len()));
/// let by_text = Accessor::new(|w: &&str| w.to_value());
///
/// sort_by_accessors(
///     &mut words,
///     &[by_len, by_text],
///     &[Direction::Descending, Direction::Ascending],
/// )
/// .unwrap();
///
/// assert_eq!(words, ["apple", "kiwi", "pear", "fig"]);
/// ```
pub fn sort_by_accessors<T, D>(
    records: &mut [T],
    accessors: &[Accessor<'_, T>],
    directions: &[D],
) -> Result<()>
where
    D: Into<Direction> + Copy,
{
    SortSpec::from_accessors(accessors, directions)?.sort(records)
}

/// [`sort_by_names`] with each name paired with its direction.
///
/// ```
/// use chainsort::{sort_by_name_pairs, sortable};
///
/// struct Row {
///     a: i32,
///     b: i32,
/// }
///
/// sortable!(Row { a, b });
///
/// let mut rows = vec![Row { a: 1, b: 1 }, Row { a: 1, b: 2 }];
/// sort_by_name_pairs(&mut rows, &[("a", true), ("b", false)]).unwrap();
///
/// assert_eq!(rows[0].b, 2);
/// ```
pub fn sort_by_name_pairs<T, S, D>(records: &mut [T], pairs: &[(S, D)]) -> Result<()>
where
    T: Sortable,
    S: AsRef<str>,
    D: Into<Direction> + Copy,
{
    let spec = pairs
        .iter()
        .map(|(name, direction)| -> Result<_> {
            let key = SortKey::<T>::named(name.as_ref())?;
            let direction: Direction = (*direction).into();
            Ok((key, direction))
        })
        .collect::<Result<SortSpec<'_, T>>>()?;

    spec.sort(records)
}

/// [`sort_by_accessors`] with each accessor paired with its direction.
pub fn sort_by_accessor_pairs<'a, T, D, I>(records: &mut [T], pairs: I) -> Result<()>
where
    I: IntoIterator<Item = (Accessor<'a, T>, D)>,
    D: Into<Direction>,
{
    pairs.into_iter().collect::<SortSpec<'a, T>>().sort(records)
}

/// Multi-key sorting as methods on slices (and, through deref, `Vec`s).
///
/// ```
/// use chainsort::prelude::*;
///
/// struct Task {
///     priority: u8,
///     title: String,
/// }
///
/// sortable!(Task { priority, title });
///
/// let mut tasks = vec![
///     Task { priority: 1, title: "b".into() },
///     Task { priority: 3, title: "c".into() },
///     Task { priority: 1, title: "a".into() },
/// ];
/// tasks.sort_by_names(&["priority", "title"], &[false, true]).unwrap();
///
/// let titles: Vec<_> = tasks.iter().map(|t| t.title.as_str()).collect();
/// assert_eq!(titles, ["c", "a", "b"]);
/// ```
pub trait MultiSort<T> {
    fn sort_by_names<S, D>(&mut self, key_names: &[S], directions: &[D]) -> Result<()>
    where
        T: Sortable,
        S: AsRef<str>,
        D: Into<Direction> + Copy;

    fn sort_by_accessors<D>(
        &mut self,
        accessors: &[Accessor<'_, T>],
        directions: &[D],
    ) -> Result<()>
    where
        D: Into<Direction> + Copy;

    fn sort_by_spec(&mut self, spec: &SortSpec<'_, T>) -> Result<()>;
}

impl<T> MultiSort<T> for [T] {
    fn sort_by_names<S, D>(&mut self, key_names: &[S], directions: &[D]) -> Result<()>
    where
        T: Sortable,
        S: AsRef<str>,
        D: Into<Direction> + Copy,
    {
        sort_by_names(self, key_names, directions)
    }

    fn sort_by_accessors<D>(
        &mut self,
        accessors: &[Accessor<'_, T>],
        directions: &[D],
    ) -> Result<()>
    where
        D: Into<Direction> + Copy,
    {
        sort_by_accessors(self, accessors, directions)
    }

    fn sort_by_spec(&mut self, spec: &SortSpec<'_, T>) -> Result<()> {
        spec.sort(self)
    }
}
