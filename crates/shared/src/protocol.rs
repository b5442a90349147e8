use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /weather`. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherPayload {
    pub city: Option<Value>,
    pub temperature: Option<Value>,
    pub description: Option<Value>,
    pub humidity: Option<Value>,
    pub message: Option<Value>,
}

/// Body of `GET /quote`. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotePayload {
    pub content: Option<Value>,
    pub author: Option<Value>,
    pub message: Option<Value>,
}

impl WeatherPayload {
    /// Reads the known fields out of an arbitrary JSON value. Non-object
    /// payloads yield an empty record.
    pub fn from_value(value: &Value) -> Self {
        lenient(value)
    }
}

impl QuotePayload {
    pub fn from_value(value: &Value) -> Self {
        lenient(value)
    }
}

fn lenient<T: Default + for<'de> Deserialize<'de>>(value: &Value) -> T {
    match value {
        Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_default(),
        _ => T::default(),
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
