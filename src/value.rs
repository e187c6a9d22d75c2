//! Orderable values extracted from records.
//!
//! A [`Value`] is what a sort key projects a record onto. It carries an
//! explicit [`Value::Absent`] marker so that "no value" is ordered by the
//! engine instead of by whatever the field type happens to do with `None`.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::time::{Duration, SystemTime};

/// A tagged, possibly absent, orderable value.
///
/// The natural ordering is total:
/// - `Absent` is less than every present value.
/// - `Int`, `UInt` and `Float` compare exactly by numeric value, with no
///   rounding through `f64`.
/// - Floats use [`f64::total_cmp`], so `NaN` has a fixed position. An integer
///   zero equals `+0.0` and is greater than `-0.0`.
/// - Any other pair of differing variants is ordered by variant rank:
///   `Absent < Bool < numbers < Char < Str < Bytes < Duration < Time`.
#[derive(Clone, Debug)]
pub enum Value<'a> {
    Absent,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
    Duration(Duration),
    Time(SystemTime),
}

impl<'a> Value<'a> {
    /// Returns `true` for [`Value::Absent`].
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns `true` for anything but [`Value::Absent`].
    #[inline]
    pub const fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Borrows the value without cloning owned string or byte data.
    pub fn reborrow(&self) -> Value<'_> {
        match self {
            Value::Str(s) => Value::Str(Cow::Borrowed(s.as_ref())),
            Value::Bytes(b) => Value::Bytes(Cow::Borrowed(b.as_ref())),
            Value::Absent => Value::Absent,
            Value::Bool(v) => Value::Bool(*v),
            Value::Int(v) => Value::Int(*v),
            Value::UInt(v) => Value::UInt(*v),
            Value::Float(v) => Value::Float(*v),
            Value::Char(v) => Value::Char(*v),
            Value::Duration(v) => Value::Duration(*v),
            Value::Time(v) => Value::Time(*v),
        }
    }

    /// Detaches the value from the record it was read from.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Str(s) => Value::Str(Cow::Owned(s.into_owned())),
            Value::Bytes(b) => Value::Bytes(Cow::Owned(b.into_owned())),
            Value::Absent => Value::Absent,
            Value::Bool(v) => Value::Bool(v),
            Value::Int(v) => Value::Int(v),
            Value::UInt(v) => Value::UInt(v),
            Value::Float(v) => Value::Float(v),
            Value::Char(v) => Value::Char(v),
            Value::Duration(v) => Value::Duration(v),
            Value::Time(v) => Value::Time(v),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Absent => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::UInt(_) | Value::Float(_) => 2,
            Value::Char(_) => 3,
            Value::Str(_) => 4,
            Value::Bytes(_) => 5,
            Value::Duration(_) => 6,
            Value::Time(_) => 7,
        }
    }
}

impl Ord for Value<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        use Value::*;

        match (self, other) {
            (Absent, Absent) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (UInt(a), UInt(b)) => a.cmp(b),
            (Int(a), UInt(b)) => i128::from(*a).cmp(&i128::from(*b)),
            (UInt(a), Int(b)) => i128::from(*a).cmp(&i128::from(*b)),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Float(a), Int(b)) => cmp_int_float(i128::from(*b), *a).reverse(),
            (Float(a), UInt(b)) => cmp_int_float(i128::from(*b), *a).reverse(),
            (Int(a), Float(b)) => cmp_int_float(i128::from(*a), *b),
            (UInt(a), Float(b)) => cmp_int_float(i128::from(*a), *b),
            (Char(a), Char(b)) => a.cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            (Bytes(a), Bytes(b)) => a.cmp(b),
            (Duration(a), Duration(b)) => a.cmp(b),
            (Time(a), Time(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Compares an integer against a float without rounding either, placing the
/// integer where [`f64::total_cmp`] would place the equal float.
fn cmp_int_float(int: i128, float: f64) -> Ordering {
    // NaNs sit past the infinities on the side of their sign.
    if float.is_nan() || float.is_infinite() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    if float == 0.0 {
        let zero = if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Equal
        };
        return int.cmp(&0).then(zero);
    }

    let whole = float.trunc();
    let fraction = float - whole;

    // Saturating cast: anything beyond i128 is beyond every i64 and u64 too.
    int.cmp(&(whole as i128)).then(if fraction > 0.0 {
        Ordering::Less
    } else if fraction < 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    })
}

impl PartialOrd for Value<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value<'_> {}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident via $conv:expr),* $(,)?) => {
        $(
            impl From<$ty> for Value<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant($conv(value))
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool via std::convert::identity,
    i64 => Int via std::convert::identity,
    i32 => Int via i64::from,
    u64 => UInt via std::convert::identity,
    u32 => UInt via u64::from,
    f64 => Float via std::convert::identity,
    char => Char via std::convert::identity,
    String => Str via Cow::Owned,
    Duration => Duration via std::convert::identity,
    SystemTime => Time via std::convert::identity,
}

// usize/isize have no lossless `From` into the 64-bit types on every target.
// On targets wider than 64 bits, out-of-range values saturate.
fn usize_to_u64(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

fn isize_to_i64(value: isize) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

impl From<usize> for Value<'_> {
    #[inline]
    fn from(value: usize) -> Self {
        Value::UInt(usize_to_u64(value))
    }
}

impl From<isize> for Value<'_> {
    #[inline]
    fn from(value: isize) -> Self {
        Value::Int(isize_to_i64(value))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Value::Str(Cow::Borrowed(value))
    }
}

/// Projects a field onto a [`Value`].
///
/// Implemented for the primitive numbers, `bool`, `char`, strings, byte
/// buffers, [`Duration`], [`SystemTime`], and `Option<V>` (where `None`
/// becomes [`Value::Absent`]). Record types with custom field types can
/// implement it to make those fields usable as sort keys.
pub trait ToValue {
    fn to_value(&self) -> Value<'_>;
}

macro_rules! impl_to_value {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                #[inline]
                fn to_value(&self) -> Value<'_> {
                    Value::$variant(<$target>::from(*self))
                }
            }
        )*
    };
}

impl_to_value!(Int as i64: i8, i16, i32, i64);
impl_to_value!(UInt as u64: u8, u16, u32, u64);
impl_to_value!(Float as f64: f32, f64);
impl_to_value!(Bool as bool: bool);
impl_to_value!(Char as char: char);
impl_to_value!(Duration as Duration: Duration);
impl_to_value!(Time as SystemTime: SystemTime);

impl ToValue for isize {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::from(*self)
    }
}

impl ToValue for usize {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::from(*self)
    }
}

impl ToValue for str {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self))
    }
}

impl ToValue for String {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self.as_str()))
    }
}

impl ToValue for Cow<'_, str> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self.as_ref()))
    }
}

impl ToValue for [u8] {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Bytes(Cow::Borrowed(self))
    }
}

impl ToValue for Vec<u8> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Bytes(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: ToValue> ToValue for Option<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(value) => value.to_value(),
            None => Value::Absent,
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl ToValue for Value<'_> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        self.reborrow()
    }
}
