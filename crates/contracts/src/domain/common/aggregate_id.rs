use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types of the aggregates.
///
/// Every identifier travels as an integer on the wire and as a path segment in
/// routes, so both conversions live here.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id into its path/route representation
    fn as_string(&self) -> String;

    /// Parse an id from a path segment or a form field
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

/// Declares an `i64` newtype id with the `AggregateId` plumbing.
#[macro_export]
macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                <i64 as $crate::domain::common::AggregateId>::from_string(s).map(Self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::integer_id!(TestId);

    #[test]
    fn test_parse_trims_and_rejects_garbage() {
        assert_eq!(TestId::from_string(" 42 "), Ok(TestId(42)));
        assert!(TestId::from_string("4x2").is_err());
        assert_eq!(TestId(7).as_string(), "7");
    }

    #[test]
    fn test_serializes_transparently() {
        assert_eq!(serde_json::to_string(&TestId(501)).unwrap(), "501");
        let back: TestId = serde_json::from_str("501").unwrap();
        assert_eq!(back, TestId(501));
    }
}
