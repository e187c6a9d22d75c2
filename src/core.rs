//! Core traits and types for chainsort.
//!
//! This module defines:
//! - [`Direction`]: ascending or descending order for one key.
//! - [`Sortable`]: The field registry users implement (usually through
//!   [`sortable!`](crate::sortable)) to sort their types by field name.
//! - [`Field`] and [`Accessor`]: the two ways a key reads a value from a record.

use crate::error::{Result, SortError};
use crate::value::Value;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Order of a single sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Maps the `true = ascending` flag convention onto a direction.
    #[inline]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    #[inline]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Direction::Ascending)
    }

    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Applies this direction to an ordering computed in ascending order.
    #[inline(always)]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for Direction {
    #[inline]
    fn from(ascending: bool) -> Self {
        Direction::from_ascending(ascending)
    }
}

/// Reads one field of `T` as a [`Value`] borrowing from the record.
pub type FieldFn<T> = for<'r> fn(&'r T) -> Value<'r>;

/// A named, registered field of a record type.
pub struct Field<T> {
    /// Declared member name, matched case-sensitively.
    pub name: &'static str,
    pub get: FieldFn<T>,
}

impl<T> Field<T> {
    pub const fn new(name: &'static str, get: FieldFn<T>) -> Self {
        Self { name, get }
    }

    #[inline(always)]
    pub fn value<'r>(&self, record: &'r T) -> Value<'r> {
        (self.get)(record)
    }
}

// Manual impls: derives would demand `T: Clone` / `T: Debug`.
impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// A static registry of the fields a record type can be sorted by.
///
/// This replaces runtime reflection: the table is built once per type, at
/// compile time, and name lookups scan it. The table is `'static`, so
/// implementors must be too.
///
/// # Examples
///
/// Registering fields with the macro:
///
/// ```
/// use chainsort::{sortable, Sortable};
///
/// struct Employee {
///     name: String,
///     age: u32,
///     manager: Option<String>,
/// }
///
/// sortable!(Employee { name, age, manager });
///
/// assert!(Employee::field("age").is_some());
/// assert!(Employee::field("Age").is_none());
/// ```
///
/// Implementing it by hand, e.g. to expose a computed key:
///
/// ```
/// use chainsort::{Field, Sortable, ToValue, Value};
///
/// struct Interval {
///     start: i64,
///     end: i64,
/// }
///
/// impl Sortable for Interval {
///     const FIELDS: &'static [Field<Self>] = &[
///         Field::new("start", |i: &Interval| i.start.to_value()),
///         Field::new("len", |i: &Interval| Value::Int(i.end - i.start)),
///     ];
/// }
///
/// assert_eq!(Interval::field_names().collect::<Vec<_>>(), ["start", "len"]);
/// ```
pub trait Sortable: Sized + 'static {
    /// Every field usable as a named sort key.
    const FIELDS: &'static [Field<Self>];

    /// Finds the field whose declared name is exactly `name`.
    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }

    fn field_names() -> impl Iterator<Item = &'static str> {
        Self::FIELDS.iter().map(|field| field.name)
    }
}

/// Implements [`Sortable`] for a struct from a list of its fields.
///
/// Every listed member must implement [`ToValue`](crate::ToValue). A member can
/// be exposed under a different key name with `key => member`.
///
/// ```
/// use chainsort::{sortable, Sortable};
///
/// struct Row {
///     id: u64,
///     label: Option<String>,
/// }
///
/// sortable!(Row { id, title => label });
///
/// assert!(Row::field("title").is_some());
/// assert!(Row::field("label").is_none());
/// ```
#[macro_export]
macro_rules! sortable {
    (@field $ty:ty, $name:ident => $member:ident) => {
        $crate::Field {
            name: stringify!($name),
            get: |record: &$ty| $crate::ToValue::to_value(&record.$member),
        }
    };
    (@field $ty:ty, $name:ident) => {
        $crate::Field {
            name: stringify!($name),
            get: |record: &$ty| $crate::ToValue::to_value(&record.$name),
        }
    };
    ($ty:ty { $($name:ident $(=> $member:ident)?),* $(,)? }) => {
        impl $crate::Sortable for $ty {
            const FIELDS: &'static [$crate::Field<Self>] = &[
                $( $crate::sortable!(@field $ty, $name $(=> $member)?) ),*
            ];
        }
    };
}

/// A caller-supplied projection from a record to a [`Value`].
///
/// Cloning an accessor is cheap; clones share the same function.
///
/// # Examples
///
/// ```
/// use chainsort::{Accessor, ToValue, Value};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let by_x = Accessor::new(|p: &Point| p.x.to_value());
/// let by_distance = Accessor::new(|p: &Point| (p.x.abs() + p.y.abs()).into());
///
/// let p = Point { x: -3, y: 4 };
/// assert_eq!(by_x.value(&p), Value::Int(-3));
/// assert_eq!(by_distance.value(&p), Value::Int(7));
/// ```
pub struct Accessor<'a, T> {
    get: Rc<dyn for<'r> Fn(&'r T) -> Value<'r> + 'a>,
}

impl<'a, T> Accessor<'a, T> {
    pub fn new<F>(get: F) -> Self
    where
        F: for<'r> Fn(&'r T) -> Value<'r> + 'a,
    {
        Self { get: Rc::new(get) }
    }

    /// Wraps a registered field.
    pub fn field(field: Field<T>) -> Self
    where
        T: 'a,
    {
        Self::new(field.get)
    }

    /// Resolves `name` against the field registry of `T`.
    pub fn by_name(name: &str) -> Result<Self>
    where
        T: Sortable + 'a,
    {
        T::field(name)
            .map(|field| Self::field(*field))
            .ok_or_else(|| SortError::UnknownField(name.to_owned()))
    }

    #[inline(always)]
    pub fn value<'r>(&self, record: &'r T) -> Value<'r> {
        (self.get)(record)
    }
}

impl<T> Clone for Accessor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
        }
    }
}

impl<T> fmt::Debug for Accessor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accessor(..)")
    }
}

impl<'a, T: 'a> From<Field<T>> for Accessor<'a, T> {
    fn from(field: Field<T>) -> Self {
        Self::field(field)
    }
}
