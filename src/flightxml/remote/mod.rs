//! # Remote Layer
//!
//! This module defines the abstraction over the FlightXML2 service. The
//! [`RemoteService`] trait lets the API facade issue calls without knowing
//! how they reach the wire.
//!
//! ## Implementations
//!
//! - [`soap::SoapClient`]: Production client
//!   - Fetches and parses the WSDL once at construction
//!   - Sends SOAP 1.1 document-literal requests over HTTP basic auth
//!   - Unwraps the `<Method>Result` field of each response
//!
//! - [`memory::InMemoryService`]: Canned responses for testing
//!   - No network
//!   - Records every call so tests can assert on invocations
//!
//! ## Failure Model
//!
//! Every transport or service failure becomes a [`RemoteError`]. Nothing is
//! retried; the caller decides how to report it.

use crate::actions::Operation;
use crate::params::ValidatedParams;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

pub mod memory;
pub mod soap;
pub mod wsdl;
pub mod xml;

/// The unwrapped payload of a successful call.
pub type ResultMap = Map<String, Value>;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Network error talking to {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP {status} from {url}: {body}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{message}")]
    Fault { code: String, message: String },

    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid service description: {0}")]
    InvalidWsdl(String),

    #[error("Function (\"{0}\") is not a valid method for this service")]
    UnknownOperation(String),

    #[error("Response is missing the {0} field")]
    MissingResult(String),

    #[error("Expected {field} to hold a structure, got {found}")]
    UnexpectedResult { field: String, found: String },

    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl From<quick_xml::events::attributes::AttrError> for RemoteError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        RemoteError::Xml(err.into())
    }
}

/// Login and API key for the remote service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub key: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            key: key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// A connection to the aviation-data service.
pub trait RemoteService {
    /// Invoke `op` with the validated parameter and return its unwrapped result.
    fn call(&self, op: Operation, params: &ValidatedParams) -> Result<ResultMap, RemoteError>;
}

impl<S: RemoteService + ?Sized> RemoteService for &S {
    fn call(&self, op: Operation, params: &ValidatedParams) -> Result<ResultMap, RemoteError> {
        (**self).call(op, params)
    }
}

/// Turn the JSON form of a `<Method>Result` element into a result map.
pub fn into_result_map(field: &str, value: Value) -> Result<ResultMap, RemoteError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(ResultMap::new()),
        other => Err(RemoteError::UnexpectedResult {
            field: field.to_string(),
            found: other.to_string(),
        }),
    }
}
