// Thin wrappers so callers deal in the crate Result regardless of format
use crate::error::{ConfigError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize data to pretty-printed TOML
pub fn to_toml_string<T: Serialize>(data: &T) -> Result<String> {
    toml::to_string_pretty(data)
        .map_err(|e| ConfigError::Serialization(format!("TOML serialization failed: {e}")))
}

/// Deserialize data from a TOML document
pub fn from_toml_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    toml::from_str(text)
        .map_err(|e| ConfigError::Serialization(format!("TOML deserialization failed: {e}")))
}

/// Serialize data to pretty-printed JSON
pub fn to_json_string<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| ConfigError::Serialization(format!("JSON serialization failed: {e}")))
}

/// Deserialize data from a JSON document
pub fn from_json_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text)
        .map_err(|e| ConfigError::Serialization(format!("JSON deserialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestData {
        id: u64,
        name: String,
        values: Vec<i32>,
    }

    fn sample() -> TestData {
        TestData {
            id: 42,
            name: "test".to_string(),
            values: vec![1, 2, 3, 4, 5],
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let original = sample();
        let text = to_toml_string(&original).expect("Serialization should work");
        let parsed: TestData = from_toml_str(&text).expect("Deserialization should work");
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_json_round_trip() {
        let original = sample();
        let text = to_json_string(&original).expect("Serialization should work");
        let parsed: TestData = from_json_str(&text).expect("Deserialization should work");
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_deserialize_invalid_text() {
        let result: Result<TestData> = from_toml_str("id = \"not a number\"");
        assert!(result.is_err());
        let result: Result<TestData> = from_json_str("{not json}");
        assert!(result.is_err());
    }
}
