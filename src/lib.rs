//! # Chainsort
//!
//! `chainsort` sorts slices of records by several keys at once. Each key has
//! its own direction, and later keys only break ties left by earlier ones.
//!
//! ## Key Features
//!
//! - **Two ways to name a key**: by field name, resolved through a static
//!   field registry ([`Sortable`], usually generated with [`sortable!`]), or
//!   by an [`Accessor`] closure.
//! - **Stable**: records that compare equal on every key keep their input order.
//! - **Explicit absent values**: `None` fields become [`Value::Absent`], which sorts
//!   first for every key, ascending or descending.
//! - **In-Place Mutation**: the slice handed in is reordered; nothing is copied out.
//! - **Validated up front**: empty criteria, mismatched key/direction lists and
//!   unknown field names are reported as [`SortError`] before the slice is touched.
//!
//! ## Usage
//!
//! ### By field name
//!
//! ```rust
//! use chainsort::prelude::*;
//!
//! #[derive(Debug)]
//! struct Film {
//!     title: String,
//!     year: u16,
//!     rating: Option<f32>,
//! }
//!
//! sortable!(Film { title, year, rating });
//!
//! let mut films = vec![
//!     Film { title: "Heat".into(), year: 1995, rating: Some(8.3) },
//!     Film { title: "Alien".into(), year: 1979, rating: Some(8.5) },
//!     Film { title: "Ronin".into(), year: 1998, rating: None },
//!     Film { title: "Se7en".into(), year: 1995, rating: Some(8.6) },
//! ];
//!
//! // Newest first, then best rated.
//! sort_by_names(&mut films, &["year", "rating"], &[false, false]).unwrap();
//!
//! let titles: Vec<_> = films.iter().map(|f| f.title.as_str()).collect();
//! assert_eq!(titles, ["Ronin", "Se7en", "Heat", "Alien"]);
//! ```
//!
//! ### By accessor
//!
//! ```rust
//! use chainsort::prelude::*;
//!
//! let mut pairs = vec![(2, 'b'), (1, 'z'), (2, 'a')];
//! let first = Accessor::new(|p: &(i32, char)| p.0.to_value());
//! let second = Accessor::new(|p: &(i32, char)| p.1.to_value());
//!
//! pairs
//!     .sort_by_accessors(&[first, second], &[Direction::Descending, Direction::Ascending])
//!     .unwrap();
//!
//! assert_eq!(pairs, [(2, 'a'), (2, 'b'), (1, 'z')]);
//! ```
//!
//! ### Rejected configurations
//!
//! ```rust
//! use chainsort::prelude::*;
//!
//! struct Row {
//!     a: i32,
//! }
//!
//! sortable!(Row { a });
//!
//! let mut rows = vec![Row { a: 2 }, Row { a: 1 }];
//!
//! let err = sort_by_names(&mut rows, &["a", "b"], &[true]).unwrap_err();
//! assert_eq!(err, SortError::LengthMismatch { keys: 2, directions: 1 });
//!
//! let err = sort_by_names(&mut rows, &["nonexistent"], &[true]).unwrap_err();
//! assert_eq!(err, SortError::UnknownField("nonexistent".into()));
//!
//! // Untouched.
//! assert_eq!(rows[0].a, 2);
//! ```
//!
//! ## Performance Characteristics
//!
//! - `O(n log n)` comparisons, each reading at most one value per key from both records.
//! - Field-name lookup happens once per call, not per comparison.
//! - The stable sort needs a scratch buffer proportional to the input; the records
//!   themselves are never copied into a new collection.

pub mod algo;
pub mod core;
pub mod error;
pub mod spec;
pub mod value;

pub use crate::algo::{
    MultiSort, sort_by_accessor_pairs, sort_by_accessors, sort_by_name_pairs, sort_by_names,
};
pub use crate::core::{Accessor, Direction, Field, FieldFn, Sortable};
pub use crate::error::{Result, SortError};
pub use crate::spec::{SortKey, SortSpec, compare_values, require_same_len};
pub use crate::value::{ToValue, Value};

pub mod prelude {
    pub use crate::algo::{
        MultiSort, sort_by_accessor_pairs, sort_by_accessors, sort_by_name_pairs, sort_by_names,
    };
    pub use crate::core::{Accessor, Direction, Sortable};
    pub use crate::error::SortError;
    pub use crate::sortable;
    pub use crate::spec::{SortKey, SortSpec};
    pub use crate::value::{ToValue, Value};
}
