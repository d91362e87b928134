//! # API Facade
//!
//! The API layer is the single entry point for running an action, whatever
//! the UI.
//!
//! ## Role and Responsibilities
//!
//! [`FlightXmlApi::invoke`] takes an action name and a parameter set and:
//! - **Resolves** the action to an [`Operation`]
//! - **Validates** the operation's required parameter
//! - **Calls** the remote service and returns its unwrapped result
//!
//! [`execute`] is the whole single-shot request: parse the raw params,
//! connect, then `invoke`. Each stage returns its own error kind; nothing is
//! reported or retried here.
//!
//! ## Generic Over RemoteService
//!
//! `FlightXmlApi<S: RemoteService>` is generic over the transport:
//! - Production: `FlightXmlApi<SoapClient>`
//! - Testing: `FlightXmlApi<InMemoryService>`
//!
//! `execute` takes the connection step as a closure so tests can observe
//! whether (and when) a connection would have been made.

use crate::actions::{self, Operation};
use crate::error::Result;
use crate::params::{self, ParameterSet};
use crate::remote::{Credentials, RemoteError, RemoteService, ResultMap};
use tracing::debug;

/// One invocation of the client, as given on the command line.
#[derive(Debug, Clone)]
pub struct Request {
    pub credentials: Credentials,
    pub action: String,
    /// Raw `--params` JSON, if supplied.
    pub params: Option<String>,
}

pub struct FlightXmlApi<S: RemoteService> {
    service: S,
}

impl<S: RemoteService> FlightXmlApi<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn invoke(&self, action: &str, params: &ParameterSet) -> Result<ResultMap> {
        let op = actions::resolve(action)?;
        self.invoke_operation(op, params)
    }

    pub fn invoke_operation(&self, op: Operation, params: &ParameterSet) -> Result<ResultMap> {
        let validated = params::validate(op, params)?;
        debug!(method = op.method_name(), key = validated.key, "calling remote");
        Ok(self.service.call(op, &validated)?)
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

/// Run a single request end to end.
///
/// Params are parsed before `connect` is called, so malformed JSON never
/// reaches the network.
pub fn execute<S, F>(request: &Request, connect: F) -> Result<ResultMap>
where
    S: RemoteService,
    F: FnOnce(&Credentials) -> std::result::Result<S, RemoteError>,
{
    let params = params::parse_params(request.params.as_deref())?;
    let service = connect(&request.credentials)?;
    FlightXmlApi::new(service).invoke(&request.action, &params)
}
