use std::collections::HashMap;

use serde_json::Value;

use crate::error::BridgeError;

/// A single value in a method call's argument bag or an outbound payload.
///
/// Mirrors the scalar subset of the standard message codec used by the host app's
/// messaging channel.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum ArgValue {
    /// An explicit null, or a value the host could not represent.
    Null,
    /// A boolean.
    Bool {
        /// The wrapped value.
        value: bool,
    },
    /// A signed integer.
    Int {
        /// The wrapped value.
        value: i64,
    },
    /// A floating point number.
    Double {
        /// The wrapped value.
        value: f64,
    },
    /// A UTF-8 string.
    Text {
        /// The wrapped value.
        value: String,
    },
}

impl ArgValue {
    /// Returns the string if this is a `Text` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text { value } => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool` value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool { value } => Some(*value),
            _ => None,
        }
    }

    /// Converts a JSON scalar. Arrays and objects have no representation in the argument bag.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` for arrays, objects and numbers that fit neither `i64` nor `f64`.
    pub fn from_json(value: Value) -> Result<Self, BridgeError> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(value) => Ok(Self::Bool { value }),
            Value::String(value) => Ok(Self::Text { value }),
            Value::Number(number) => number
                .as_i64()
                .map(|value| Self::Int { value })
                .or_else(|| number.as_f64().map(|value| Self::Double { value }))
                .ok_or_else(|| BridgeError::invalid_arguments(format!("unsupported number {number}"))),
            Value::Array(_) | Value::Object(_) => Err(BridgeError::invalid_arguments(
                "nested arrays and objects are not supported as arguments",
            )),
        }
    }

    /// Converts back into a JSON value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool { value } => Value::Bool(*value),
            Self::Int { value } => Value::from(*value),
            // Non-finite doubles have no JSON form and become null.
            Self::Double { value } => {
                serde_json::Number::from_f64(*value).map_or(Value::Null, Value::Number)
            }
            Self::Text { value } => Value::String(value.clone()),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool { value }
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text { value }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text {
            value: value.to_string(),
        }
    }
}

/// The untyped key-value argument bag of an inbound method call, with typed accessors.
///
/// A value of the wrong type is treated the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodArgs(HashMap<String, ArgValue>);

impl MethodArgs {
    /// Wraps an argument map.
    #[must_use]
    pub const fn new(args: HashMap<String, ArgValue>) -> Self {
        Self(args)
    }

    /// Parses a JSON-encoded argument object.
    ///
    /// An absent payload, an empty string or a JSON `null` all produce an empty bag.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` if the payload is not valid JSON, is not an object, or
    /// contains values with no scalar representation.
    pub fn from_json(payload: Option<&str>) -> Result<Self, BridgeError> {
        let payload = match payload.map(str::trim) {
            None | Some("") => return Ok(Self::default()),
            Some(payload) => payload,
        };

        let value: Value = serde_json::from_str(payload)
            .map_err(|e| BridgeError::invalid_arguments(format!("malformed arguments: {e}")))?;

        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| ArgValue::from_json(value).map(|value| (key, value)))
                .collect::<Result<HashMap<_, _>, _>>()
                .map(Self),
            _ => Err(BridgeError::invalid_arguments(
                "arguments must be a JSON object",
            )),
        }
    }

    /// Returns the string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` naming the key if it is missing or not a string.
    pub fn required_str(&self, key: &str) -> Result<&str, BridgeError> {
        self.0
            .get(key)
            .and_then(ArgValue::as_str)
            .ok_or_else(|| BridgeError::invalid_arguments(format!("Missing {key}")))
    }

    /// Returns the string stored under `key`, if present.
    #[must_use]
    pub fn optional_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(ArgValue::as_str)
    }

    /// Returns the boolean stored under `key`, or `default` if it is missing or not a boolean.
    #[must_use]
    pub fn optional_bool(&self, key: &str, default: bool) -> bool {
        self.0.get(key).and_then(ArgValue::as_bool).unwrap_or(default)
    }
}

impl From<HashMap<String, ArgValue>> for MethodArgs {
    fn from(args: HashMap<String, ArgValue>) -> Self {
        Self(args)
    }
}
