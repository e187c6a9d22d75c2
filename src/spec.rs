//! Sort keys and the composed multi-key comparator.

use crate::core::{Accessor, Direction, Field, Sortable};
use crate::error::{Result, SortError};
use crate::value::Value;
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;

/// One sort criterion: a registered field or a caller-supplied accessor.
pub enum SortKey<'a, T> {
    Field(Field<T>),
    Accessor(Accessor<'a, T>),
}

impl<'a, T> SortKey<'a, T> {
    /// Resolves `name` against the field registry of `T`.
    pub fn named(name: &str) -> Result<Self>
    where
        T: Sortable,
    {
        T::field(name)
            .map(|field| SortKey::Field(*field))
            .ok_or_else(|| SortError::UnknownField(name.to_owned()))
    }

    #[inline(always)]
    pub fn value<'r>(&self, record: &'r T) -> Value<'r> {
        match self {
            SortKey::Field(field) => field.value(record),
            SortKey::Accessor(accessor) => accessor.value(record),
        }
    }

    /// The registered field name, if this key was resolved by name.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            SortKey::Field(field) => Some(field.name),
            SortKey::Accessor(_) => None,
        }
    }
}

impl<T> Clone for SortKey<'_, T> {
    fn clone(&self) -> Self {
        match self {
            SortKey::Field(field) => SortKey::Field(*field),
            SortKey::Accessor(accessor) => SortKey::Accessor(accessor.clone()),
        }
    }
}

impl<T> fmt::Debug for SortKey<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Field(field) => f.debug_tuple("Field").field(&field.name).finish(),
            SortKey::Accessor(_) => f.write_str("Accessor(..)"),
        }
    }
}

impl<T> From<Field<T>> for SortKey<'_, T> {
    fn from(field: Field<T>) -> Self {
        SortKey::Field(field)
    }
}

impl<'a, T> From<Accessor<'a, T>> for SortKey<'a, T> {
    fn from(accessor: Accessor<'a, T>) -> Self {
        SortKey::Accessor(accessor)
    }
}

/// Checks that a key list and a direction list pair up.
///
/// Returns the shared length. Emptiness is reported before a mismatch, so
/// `(0, 2)` is [`SortError::EmptyCriteria`].
///
/// ```
/// use chainsort::{require_same_len, SortError};
///
/// assert_eq!(require_same_len(3, 3), Ok(3));
/// assert_eq!(
///     require_same_len(2, 1),
///     Err(SortError::LengthMismatch { keys: 2, directions: 1 })
/// );
/// ```
pub fn require_same_len(keys: usize, directions: usize) -> Result<usize> {
    let result = if keys == 0 || directions == 0 {
        Err(SortError::EmptyCriteria { keys, directions })
    } else if keys != directions {
        Err(SortError::LengthMismatch { keys, directions })
    } else {
        Ok(keys)
    };

    result.inspect_err(|err| debug!("rejected sort configuration: {err}"))
}

/// Compares two key values under `direction`.
///
/// An absent value is less than any present value no matter the direction;
/// only the ordering between two present values is reversed by
/// [`Direction::Descending`].
#[inline]
pub fn compare_values(a: &Value<'_>, b: &Value<'_>, direction: Direction) -> Ordering {
    match (a.is_absent(), b.is_absent()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => direction.apply(a.cmp(b)),
    }
}

/// An ordered list of `(key, direction)` pairs.
///
/// Key 0 is the primary key; key `i` is only consulted for records that
/// compare equal on keys `0..i`.
///
/// # Examples
///
/// ```
/// use chainsort::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Row {
///     a: i32,
///     b: i32,
/// }
///
/// sortable!(Row { a, b });
///
/// let spec = SortSpec::<Row>::from_names(&["a", "b"], &[true, false]).unwrap();
///
/// let mut rows = vec![Row { a: 1, b: 2 }, Row { a: 1, b: 1 }, Row { a: 0, b: 5 }];
/// spec.sort(&mut rows).unwrap();
///
/// assert_eq!(
///     rows,
///     vec![Row { a: 0, b: 5 }, Row { a: 1, b: 2 }, Row { a: 1, b: 1 }]
/// );
/// ```
pub struct SortSpec<'a, T> {
    keys: Vec<(SortKey<'a, T>, Direction)>,
}

impl<'a, T> SortSpec<'a, T> {
    /// An empty spec, to be filled with [`then`](Self::then), [`asc`](Self::asc)
    /// and [`desc`](Self::desc).
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Resolves every name against the field registry of `T`.
    ///
    /// Fails on the first unknown name, after checking the list lengths.
    pub fn from_names<S, D>(names: &[S], directions: &[D]) -> Result<Self>
    where
        T: Sortable,
        S: AsRef<str>,
        D: Into<Direction> + Copy,
    {
        require_same_len(names.len(), directions.len())?;

        let keys = names
            .iter()
            .zip(directions)
            .map(|(name, &direction)| -> Result<_> {
                let key = SortKey::<T>::named(name.as_ref())?;
                let direction: Direction = direction.into();
                trace!("resolved sort key {:?} ({direction:?})", name.as_ref());
                Ok((key, direction))
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| debug!("rejected sort configuration: {err}"))?;

        Ok(Self { keys })
    }

    /// Pairs each accessor with its direction.
    pub fn from_accessors<D>(accessors: &[Accessor<'a, T>], directions: &[D]) -> Result<Self>
    where
        D: Into<Direction> + Copy,
    {
        require_same_len(accessors.len(), directions.len())?;

        let keys: Vec<(SortKey<'a, T>, Direction)> = accessors
            .iter()
            .zip(directions)
            .map(|(accessor, &direction)| (SortKey::Accessor(accessor.clone()), direction.into()))
            .collect();

        Ok(Self { keys })
    }

    /// Appends a tie-breaking key.
    pub fn then(mut self, key: impl Into<SortKey<'a, T>>, direction: impl Into<Direction>) -> Self {
        self.push(key, direction);
        self
    }

    pub fn asc(self, key: impl Into<SortKey<'a, T>>) -> Self {
        self.then(key, Direction::Ascending)
    }

    pub fn desc(self, key: impl Into<SortKey<'a, T>>) -> Self {
        self.then(key, Direction::Descending)
    }

    pub fn push(&mut self, key: impl Into<SortKey<'a, T>>, direction: impl Into<Direction>) {
        self.keys.push((key.into(), direction.into()));
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = (&SortKey<'a, T>, Direction)> {
        self.keys.iter().map(|(key, direction)| (key, *direction))
    }

    /// Compares two records key by key, stopping at the first difference.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.keys
            .iter()
            .map(|(key, direction)| compare_values(&key.value(a), &key.value(b), *direction))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable in-place sort of `records`.
    ///
    /// An empty spec is rejected with [`SortError::EmptyCriteria`] and leaves
    /// `records` untouched.
    pub fn sort(&self, records: &mut [T]) -> Result<()> {
        if self.keys.is_empty() {
            let err = SortError::EmptyCriteria {
                keys: 0,
                directions: 0,
            };
            debug!("rejected sort configuration: {err}");
            return Err(err);
        }

        trace!(
            "sorting {} records by {} keys",
            records.len(),
            self.keys.len()
        );
        records.sort_by(|a, b| self.compare(a, b));
        trace!("sorted {} records", records.len());

        Ok(())
    }
}

impl<T> Default for SortSpec<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SortSpec<'_, T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<T> fmt::Debug for SortSpec<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys.iter()).finish()
    }
}

impl<'a, T, K: Into<SortKey<'a, T>>, D: Into<Direction>> FromIterator<(K, D)> for SortSpec<'a, T> {
    fn from_iter<I: IntoIterator<Item = (K, D)>>(iter: I) -> Self {
        Self {
            keys: iter
                .into_iter()
                .map(|(key, direction)| (key.into(), direction.into()))
                .collect(),
        }
    }
}
