//! Tool call payloads as handed over by an agent runtime.

use serde::{Deserialize, Serialize};

/// Raw, untyped tool parameters.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// A request to run the named operation with the given parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub input: Params,
}

impl ToolCall {
    /// Create a call from any JSON value.
    /// Anything other than a JSON object is treated as an empty parameter map.
    pub fn new(name: impl Into<String>, input: serde_json::Value) -> Self {
        let input = match input {
            serde_json::Value::Object(map) => map,
            _ => Params::new(),
        };
        Self {
            name: name.into(),
            input,
        }
    }

    pub fn without_input(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: Params::new(),
        }
    }
}
