//! Parsing and validation of the user-supplied `--params` JSON.

use crate::actions::Operation;
use crate::error::{FlightXmlError, Result};
use serde_json::{Map, Value};

/// Action-specific arguments, as supplied on the command line.
pub type ParameterSet = Map<String, Value>;

/// The single key/value pair forwarded to the remote call.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedParams {
    pub key: &'static str,
    pub value: Value,
}

impl ValidatedParams {
    pub fn into_map(self) -> ParameterSet {
        let mut map = Map::new();
        map.insert(self.key.to_string(), self.value);
        map
    }
}

/// Parse the raw `--params` string. A missing or empty string is an empty set.
pub fn parse_params(raw: Option<&str>) -> Result<ParameterSet> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(ParameterSet::new()),
    };

    let value: Value =
        serde_json::from_str(raw).map_err(|e| FlightXmlError::InvalidParams(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(ParameterSet::new()),
        other => Err(FlightXmlError::InvalidParams(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Check that `params` carries the operation's required key.
pub fn validate(op: Operation, params: &ParameterSet) -> Result<ValidatedParams> {
    let key = op.required_param();

    match params.get(key) {
        None | Some(Value::Null) => Err(FlightXmlError::MissingParam(key.to_string())),
        Some(Value::String(s)) if s.is_empty() => {
            Err(FlightXmlError::MissingParam(key.to_string()))
        }
        Some(value) => Ok(ValidatedParams {
            key,
            value: value.clone(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
