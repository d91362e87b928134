//! # Actions
//!
//! Users name remote operations with hyphenated lowercase *actions*
//! (`aircraft-type`, `tail-owner`, `airline-flight-info`). Each action maps to
//! exactly one [`Operation`], a variant of a closed enum backed by a static
//! table of method name, required parameter, description and documentation
//! URL. Help output and dispatch both read from that table.
//!
//! ## Name Normalization
//!
//! ```text
//! AirlineFlightInfo  --method_to_action-->  airline-flight-info
//! airline-flight-info  --action_to_method-->  AirlineFlightInfo
//! ```
//!
//! When splitting a method name, a run of capitals not followed by a
//! lowercase letter stays together, so `FAFlightID` becomes `fa-flight-id`.

use crate::error::{FlightXmlError, Result};

const DOC_BASE_URL: &str = "https://flightxml.flightaware.com/soap/FlightXML2/doc";

/// A remote operation this client knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AircraftType,
    TailOwner,
    AirlineFlightInfo,
}

impl Operation {
    /// All operations, in help display order.
    pub const ALL: [Operation; 3] = [
        Operation::AircraftType,
        Operation::TailOwner,
        Operation::AirlineFlightInfo,
    ];

    /// The remote method name, as declared by the service.
    pub fn method_name(&self) -> &'static str {
        match self {
            Operation::AircraftType => "AircraftType",
            Operation::TailOwner => "TailOwner",
            Operation::AirlineFlightInfo => "AirlineFlightInfo",
        }
    }

    /// The parameter key that must be present and non-empty.
    pub fn required_param(&self) -> &'static str {
        match self {
            Operation::AircraftType => "type",
            Operation::TailOwner => "ident",
            Operation::AirlineFlightInfo => "faFlightID",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::AircraftType => {
                "Look up the manufacturer and description of an aircraft type code"
            }
            Operation::TailOwner => "Look up the registered owner of a tail number",
            Operation::AirlineFlightInfo => {
                "Gate, terminal, baggage claim and seat details for a flight ID"
            }
        }
    }

    /// The response envelope field holding the payload.
    pub fn result_field(&self) -> String {
        format!("{}Result", self.method_name())
    }

    pub fn doc_url(&self) -> String {
        format!("{}#op_{}", DOC_BASE_URL, self.method_name())
    }

    pub fn action_name(&self) -> String {
        method_to_action(self.method_name())
    }
}

/// Help entry for a single action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInfo {
    pub name: String,
    pub description: &'static str,
    pub doc_url: String,
}

/// Resolve a user-supplied action name to its operation.
pub fn resolve(action: &str) -> Result<Operation> {
    let method = action_to_method(action);

    Operation::ALL
        .into_iter()
        .find(|op| op.method_name().eq_ignore_ascii_case(&method))
        .ok_or_else(|| FlightXmlError::UnknownAction(action.to_string()))
}

pub fn list_actions() -> Vec<ActionInfo> {
    Operation::ALL
        .iter()
        .map(|op| ActionInfo {
            name: op.action_name(),
            description: op.description(),
            doc_url: op.doc_url(),
        })
        .collect()
}

/// `airline-flight-info` -> `AirlineFlightInfo`
pub fn action_to_method(action: &str) -> String {
    action
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// `AirlineFlightInfo` -> `airline-flight-info`
pub fn method_to_action(method: &str) -> String {
    let chars: Vec<char> = method.chars().collect();
    let mut out = String::with_capacity(method.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if !c.is_ascii_uppercase() {
            out.push(c);
            continue;
        }

        out.push('-');
        out.push(c);
        // Swallow an acronym, but leave its last capital if a lowercase
        // letter follows (that capital starts the next word).
        while i < chars.len()
            && chars[i].is_ascii_uppercase()
            && !chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase())
        {
            out.push(chars[i]);
            i += 1;
        }
    }

    out.trim_start_matches('-').to_lowercase()
}
