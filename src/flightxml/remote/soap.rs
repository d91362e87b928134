use super::wsdl::ServiceDescription;
use super::xml::{find_fault, write_envelope, Element};
use super::{into_result_map, Credentials, RemoteError, RemoteService, ResultMap};
use crate::actions::Operation;
use crate::params::ValidatedParams;
use reqwest::blocking::{Client as HttpClient, RequestBuilder};
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use tracing::{debug, warn};

const CLIENT_USER_AGENT: &str = concat!("flightxml/", env!("CARGO_PKG_VERSION"));

/// SOAP client for FlightXML2, bound to one set of credentials.
#[derive(Debug)]
pub struct SoapClient {
    http: HttpClient,
    credentials: Credentials,
    service: ServiceDescription,
}

impl SoapClient {
    /// Fetch and parse the service description at `wsdl_url`.
    ///
    /// Fails if the document cannot be downloaded or does not describe a
    /// SOAP service; no call can be made without it.
    pub fn connect(
        wsdl_url: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(RemoteError::Client)?;

        debug!(url = wsdl_url, "fetching service description");
        let request = authenticated(http.get(wsdl_url), &credentials)
            .header(ACCEPT, HeaderValue::from_static("text/xml, application/xml"));
        let (status, body) = send(request, wsdl_url)?;

        if !status.is_success() {
            return Err(RemoteError::Http {
                url: wsdl_url.to_string(),
                status,
                body,
            });
        }

        let service = ServiceDescription::parse(&body)?;
        debug!(
            endpoint = %service.endpoint,
            operations = service.operations.len(),
            "service description loaded"
        );

        Ok(Self {
            http,
            credentials,
            service,
        })
    }

    pub fn service(&self) -> &ServiceDescription {
        &self.service
    }
}

impl RemoteService for SoapClient {
    fn call(&self, op: Operation, params: &ValidatedParams) -> Result<ResultMap, RemoteError> {
        let method = op.method_name();
        let binding = self
            .service
            .operation(method)
            .ok_or_else(|| RemoteError::UnknownOperation(method.to_string()))?;

        let envelope = write_envelope(
            &self.service.target_namespace,
            &binding.request_element,
            self.service.qualified,
            &params.clone().into_map(),
        )?;

        let url = self.service.endpoint.as_str();
        debug!(url, method, soap_action = %binding.soap_action, "sending request");

        let request = authenticated(self.http.post(url), &self.credentials)
            .header(
                CONTENT_TYPE,
                HeaderValue::from_static("text/xml; charset=utf-8"),
            )
            .header("SOAPAction", format!("\"{}\"", binding.soap_action))
            .body(envelope);
        let (status, body) = send(request, url)?;
        debug!(url, %status, bytes = body.len(), "response received");

        // Faults usually arrive with a 500, so look for one before the status.
        let document = match Element::parse(&body) {
            Ok(document) => document,
            Err(_) if !status.is_success() => {
                return Err(RemoteError::Http {
                    url: url.to_string(),
                    status,
                    body,
                });
            }
            Err(e) => return Err(e),
        };

        if let Some(fault) = find_fault(&document) {
            warn!(method, error = %fault, "remote fault");
            return Err(fault);
        }
        if !status.is_success() {
            return Err(RemoteError::Http {
                url: url.to_string(),
                status,
                body,
            });
        }

        let field = op.result_field();
        let result = document
            .find(&field)
            .ok_or_else(|| RemoteError::MissingResult(field.clone()))?;
        into_result_map(&field, result.to_json(&self.service.leaf_types))
    }
}

fn authenticated(request: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
    request
        .basic_auth(&credentials.login, Some(&credentials.key))
        .header(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT))
}

fn send(request: RequestBuilder, url: &str) -> Result<(reqwest::StatusCode, String), RemoteError> {
    let response = request.send().map_err(|e| RemoteError::Network {
        url: url.to_string(),
        source: e,
    })?;
    let status = response.status();
    let body = response.text().map_err(|e| RemoteError::Network {
        url: url.to_string(),
        source: e,
    })?;
    Ok((status, body))
}
