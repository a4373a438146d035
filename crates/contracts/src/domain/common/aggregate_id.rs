use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for identifier types that round-trip through a string form
/// (route segments, DOM ids, storage keys).
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id as a string
    fn as_string(&self) -> String;

    /// Parse the id from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>().map_err(|e| format!("Invalid u32: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_round_trip() {
        assert_eq!(u32::from_string(&42u32.as_string()), Ok(42));
        assert!(u32::from_string("-1").is_err());
    }
}
