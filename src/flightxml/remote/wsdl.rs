//! Just enough WSDL 1.1 to call document-literal operations: where to send
//! requests, which namespace to use, and how each operation's request element
//! and SOAPAction are named. Scalar element types declared in the schema are
//! kept so responses can be decoded to JSON numbers and booleans.

use super::xml::{LeafType, LeafTypes};
use super::RemoteError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationBinding {
    /// Name of the body element wrapping the request parameters.
    pub request_element: String,
    pub soap_action: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescription {
    pub target_namespace: String,
    /// SOAP endpoint from `<soap:address location=...>`.
    pub endpoint: String,
    /// Whether schema elements are namespace-qualified.
    pub qualified: bool,
    pub operations: HashMap<String, OperationBinding>,
    /// Numeric and boolean schema elements, by element name.
    pub leaf_types: LeafTypes,
}

impl ServiceDescription {
    pub fn operation(&self, name: &str) -> Option<&OperationBinding> {
        self.operations.get(name)
    }

    pub fn parse(xml: &str) -> Result<Self, RemoteError> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut scan = Scan::default();
        let mut stack: Vec<String> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    scan.visit(&e, &stack)?;
                    stack.push(local_name(&e));
                }
                Event::Empty(e) => scan.visit(&e, &stack)?,
                Event::End(_) => {
                    stack.pop();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        scan.finish()
    }
}

/// Facts collected while walking the document.
#[derive(Default)]
struct Scan {
    target_namespace: Option<String>,
    endpoint: Option<String>,
    element_form: Option<String>,
    // message name -> element of its part
    messages: HashMap<String, String>,
    // portType operation -> input message
    inputs: HashMap<String, String>,
    // binding operation -> soapAction
    actions: HashMap<String, String>,
    leaf_types: LeafTypes,
    current_message: Option<String>,
    current_port_op: Option<String>,
    current_binding_op: Option<String>,
}

impl Scan {
    fn visit(&mut self, e: &BytesStart, parents: &[String]) -> Result<(), RemoteError> {
        let name = local_name(e);
        let parent = parents.last().map(String::as_str);
        let grandparent = parents.len().checked_sub(2).map(|i| parents[i].as_str());

        match (name.as_str(), parent, grandparent) {
            ("definitions", None, _) => {
                self.target_namespace = attr(e, "targetNamespace")?;
            }
            ("schema", _, _) if self.element_form.is_none() => {
                self.element_form = attr(e, "elementFormDefault")?;
            }
            ("element", _, _) => {
                if let (Some(field), Some(ty)) = (attr(e, "name")?, attr(e, "type")?) {
                    if let Some(leaf) = LeafType::from_xsd(&strip_prefix(&ty)) {
                        // First declaration wins when structs reuse a name.
                        self.leaf_types.entry(field).or_insert(leaf);
                    }
                }
            }
            ("message", Some("definitions"), _) => {
                self.current_message = attr(e, "name")?;
            }
            ("part", Some("message"), _) => {
                let part = match attr(e, "element")? {
                    Some(el) => Some(el),
                    None => attr(e, "name")?,
                };
                if let (Some(msg), Some(part)) = (&self.current_message, part) {
                    self.messages
                        .entry(msg.clone())
                        .or_insert_with(|| strip_prefix(&part));
                }
            }
            ("operation", Some("portType"), _) => {
                self.current_port_op = attr(e, "name")?;
            }
            ("input", Some("operation"), Some("portType")) => {
                if let (Some(op), Some(msg)) = (&self.current_port_op, attr(e, "message")?) {
                    self.inputs.insert(op.clone(), strip_prefix(&msg));
                }
            }
            ("operation", Some("binding"), _) => {
                self.current_binding_op = attr(e, "name")?;
            }
            ("operation", Some("operation"), Some("binding")) => {
                if let (Some(op), Some(action)) = (&self.current_binding_op, attr(e, "soapAction")?)
                {
                    self.actions.insert(op.clone(), action);
                }
            }
            ("address", Some("port"), _) => {
                self.endpoint = attr(e, "location")?;
            }
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Result<ServiceDescription, RemoteError> {
        let target_namespace = self
            .target_namespace
            .ok_or_else(|| RemoteError::InvalidWsdl("missing targetNamespace".into()))?;
        let endpoint = self
            .endpoint
            .ok_or_else(|| RemoteError::InvalidWsdl("missing service address".into()))?;

        if self.inputs.is_empty() {
            return Err(RemoteError::InvalidWsdl("no operations declared".into()));
        }

        let operations = self
            .inputs
            .iter()
            .map(|(op, message)| {
                let request_element = self
                    .messages
                    .get(message)
                    .cloned()
                    .unwrap_or_else(|| op.clone());
                let soap_action = self.actions.get(op).cloned().unwrap_or_default();
                (
                    op.clone(),
                    OperationBinding {
                        request_element,
                        soap_action,
                    },
                )
            })
            .collect();

        Ok(ServiceDescription {
            target_namespace,
            endpoint,
            qualified: self.element_form.as_deref() == Some("qualified"),
            operations,
            leaf_types: self.leaf_types,
        })
    }
}

fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn attr(e: &BytesStart, name: &str) -> Result<Option<String>, RemoteError> {
    for a in e.attributes() {
        let a = a?;
        // Skip namespace declarations, whose local part could shadow a name.
        if a.key.as_namespace_binding().is_some() {
            continue;
        }
        if a.key.local_name().as_ref() == name.as_bytes() {
            return Ok(Some(a.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// `tns:AircraftTypeRequest` -> `AircraftTypeRequest`
fn strip_prefix(qname: &str) -> String {
    qname.rsplit(':').next().unwrap_or(qname).to_string()
}
