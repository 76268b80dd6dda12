//! Scalar-or-list parameter values.
//!
//! Several endpoints accept either a single value or a list of values for the
//! same parameter (`namespaces`, `ids`, `titles`). On the wire both shapes are
//! sent as one comma-joined string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

/// A parameter that is either a single value or a list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Number of values carried.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(values) => values.len(),
        }
    }

    /// True only for an empty list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the carried values.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(value) => std::slice::from_ref(value).iter(),
            Self::Many(values) => values.iter(),
        }
    }

    /// Normalize into a list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

impl<T: fmt::Display> OneOrMany<T> {
    /// Comma-joined wire form, e.g. `0,14,500`.
    pub fn join(&self) -> String {
        self.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<T: fmt::Display> fmt::Display for OneOrMany<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

/// Parses `"5"` into `One(5)` and `"0, 14"` into `Many([0, 14])`.
///
/// Any element that is empty or fails to parse yields
/// [`ApiError::InvalidArgument`].
impl<T> FromStr for OneOrMany<T>
where
    T: FromStr,
{
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let mut values = Vec::with_capacity(parts.len());
        for part in &parts {
            if part.is_empty() {
                return Err(ApiError::InvalidArgument(format!(
                    "'{}' is not a value or comma-separated list of values",
                    s
                )));
            }
            let value = part.parse::<T>().map_err(|_| {
                ApiError::InvalidArgument(format!("'{}' is not a valid value in '{}'", part, s))
            })?;
            values.push(value);
        }

        if values.len() == 1 {
            Ok(Self::One(values.remove(0)))
        } else {
            Ok(Self::Many(values))
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OneOrMany<$ty> {
                fn from(value: $ty) -> Self {
                    Self::One(value)
                }
            }
        )*
    };
}

impl_from_scalar!(i32, i64, u32, u64, String);

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl<T, const N: usize> From<[T; N]> for OneOrMany<T> {
    fn from(values: [T; N]) -> Self {
        Self::Many(values.into())
    }
}

impl<T: Clone> From<&[T]> for OneOrMany<T> {
    fn from(values: &[T]) -> Self {
        Self::Many(values.to_vec())
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|s| s.to_string()).collect())
    }
}
