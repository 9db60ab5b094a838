use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate that can travel through text channels
/// (URL query, DOM attributes).
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id to its textual form
    fn as_string(&self) -> String;

    /// Parse an id from its textual form
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_round_trip() {
        assert_eq!(i64::from_string(&42_i64.as_string()), Ok(42));
        assert_eq!(i64::from_string(" 7 "), Ok(7));
    }

    #[test]
    fn test_i64_rejects_garbage() {
        assert!(i64::from_string("abc").is_err());
        assert!(i64::from_string("").is_err());
    }
}
