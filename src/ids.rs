//! ID types for Transfermarkt resources, and the batch ID conversion used by
//! the multi-entity endpoints.

use crate::error::{Result, TmError};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TmError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.parse()?))
            }
        }

        impl NumericId for $name {}
    };
}

resource_id!(
    /// Type-safe wrapper for player IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tmapi::PlayerId;
    ///
    /// let messi = PlayerId::new(28003);
    /// assert_eq!(messi.to_string(), "28003");
    /// assert_eq!("28003".parse::<PlayerId>().unwrap(), messi);
    /// ```
    PlayerId
);
resource_id!(
    /// Type-safe wrapper for club IDs.
    ClubId
);
resource_id!(CoachId);
resource_id!(RefereeId);
resource_id!(StadiumId);
resource_id!(GameId);

/// Numeric values accepted as elements of a batch request.
pub trait NumericId: fmt::Display {}

impl NumericId for u64 {}
impl NumericId for u32 {}
impl NumericId for i64 {}
impl NumericId for i32 {}

/// Conversion into the rendered ID list of a batch request.
///
/// Typed sequences always convert. A dynamic [`Value`] converts only when it
/// is an array of JSON numbers; anything else fails with
/// [`TmError::InvalidArgument`] naming `param`.
pub trait IntoIdList {
    fn into_id_list(self, param: &'static str) -> Result<Vec<String>>;
}

impl<T: NumericId> IntoIdList for &[T] {
    fn into_id_list(self, _param: &'static str) -> Result<Vec<String>> {
        Ok(self.iter().map(ToString::to_string).collect())
    }
}

impl<T: NumericId> IntoIdList for &Vec<T> {
    fn into_id_list(self, param: &'static str) -> Result<Vec<String>> {
        self.as_slice().into_id_list(param)
    }
}

impl<T: NumericId> IntoIdList for Vec<T> {
    fn into_id_list(self, param: &'static str) -> Result<Vec<String>> {
        self.as_slice().into_id_list(param)
    }
}

impl<T: NumericId, const N: usize> IntoIdList for [T; N] {
    fn into_id_list(self, param: &'static str) -> Result<Vec<String>> {
        self.as_slice().into_id_list(param)
    }
}

impl<T: NumericId, const N: usize> IntoIdList for &[T; N] {
    fn into_id_list(self, param: &'static str) -> Result<Vec<String>> {
        self.as_slice().into_id_list(param)
    }
}

impl IntoIdList for &Value {
    fn into_id_list(self, param: &'static str) -> Result<Vec<String>> {
        let items = match self {
            Value::Array(items) => items,
            other => {
                return Err(TmError::InvalidArgument {
                    param,
                    reason: format!("got {}", json_type(other)),
                })
            }
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Number(n) => Ok(render_number(n)),
                other => Err(TmError::InvalidArgument {
                    param,
                    reason: format!("element {index} is {}", json_type(other)),
                }),
            })
            .collect()
    }
}

impl IntoIdList for Value {
    fn into_id_list(self, param: &'static str) -> Result<Vec<String>> {
        (&self).into_id_list(param)
    }
}

/// Integral floats render without a fractional part (`1.0` becomes `1`).
fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
