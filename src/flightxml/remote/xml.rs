//! Minimal XML plumbing for SOAP: a small element tree for responses, a JSON
//! view of that tree, and the request envelope writer.

use super::RemoteError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Scalar schema types that decode to JSON numbers or booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafType {
    Integer,
    Float,
    Boolean,
}

/// Element name -> declared scalar type, taken from the service schema.
pub type LeafTypes = HashMap<String, LeafType>;

impl LeafType {
    /// Map an XML Schema type name (without prefix) to a leaf type.
    /// Strings, dates and complex types have none.
    pub fn from_xsd(name: &str) -> Option<Self> {
        match name {
            "int" | "integer" | "long" | "short" | "byte" | "unsignedInt" | "unsignedLong"
            | "unsignedShort" | "unsignedByte" | "nonNegativeInteger" | "positiveInteger"
            | "nonPositiveInteger" | "negativeInteger" => Some(LeafType::Integer),
            "float" | "double" | "decimal" => Some(LeafType::Float),
            "boolean" => Some(LeafType::Boolean),
            _ => None,
        }
    }

    /// Decode `text` as this type, or `None` if it does not parse.
    pub fn decode(self, text: &str) -> Option<Value> {
        let text = text.trim();
        match self {
            LeafType::Integer => text
                .parse::<i64>()
                .map(Value::from)
                .or_else(|_| text.parse::<u64>().map(Value::from))
                .ok(),
            LeafType::Float => text
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number),
            LeafType::Boolean => match text {
                "true" | "1" => Some(Value::Bool(true)),
                "false" | "0" => Some(Value::Bool(false)),
                _ => None,
            },
        }
    }
}

/// An element reduced to its local name, children and text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    fn from_start(start: &BytesStart) -> Self {
        Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Self::default()
        }
    }

    /// Parse a document and return its root element.
    pub fn parse(xml: &str) -> Result<Element, RemoteError> {
        let mut reader = Reader::from_str(xml);

        let mut stack: Vec<Element> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => stack.push(Element::from_start(&e)),
                Event::Empty(e) => attach(&mut stack, &mut root, Element::from_start(&e)),
                Event::Text(t) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&t.unescape()?);
                    }
                }
                Event::CData(c) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                    }
                }
                Event::End(_) => {
                    let done = stack.pop().ok_or_else(|| {
                        RemoteError::MalformedResponse("unbalanced closing tag".into())
                    })?;
                    attach(&mut stack, &mut root, done);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(RemoteError::MalformedResponse("unclosed element".into()));
        }
        root.ok_or_else(|| RemoteError::MalformedResponse("empty document".into()))
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Depth-first search of the descendants (not `self`) by local name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find_map(|c| if c.name == name { Some(c) } else { c.find(name) })
    }

    /// Elements with children become objects and repeated siblings become
    /// arrays. Leaf text is kept verbatim as a string unless `types` declares
    /// the element numeric or boolean; empty leaves become null.
    pub fn to_json(&self, types: &LeafTypes) -> Value {
        if self.children.is_empty() {
            if self.text.is_empty() {
                return Value::Null;
            }
            return types
                .get(&self.name)
                .and_then(|t| t.decode(&self.text))
                .unwrap_or_else(|| Value::String(self.text.clone()));
        }

        let mut map = Map::new();
        for child in &self.children {
            let value = child.to_json(types);
            let merged = match map.remove(&child.name) {
                None => value,
                Some(Value::Array(mut items)) => {
                    items.push(value);
                    Value::Array(items)
                }
                Some(existing) => Value::Array(vec![existing, value]),
            };
            map.insert(child.name.clone(), merged);
        }
        Value::Object(map)
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

/// Extract a SOAP 1.1 or 1.2 fault from a parsed envelope, if present.
pub fn find_fault(envelope: &Element) -> Option<RemoteError> {
    let fault = envelope.find("Fault")?;

    let code = fault
        .child("faultcode")
        .or_else(|| fault.child("Code").and_then(|c| c.find("Value")))
        .map(|e| e.text.trim().to_string())
        .unwrap_or_default();
    let message = fault
        .child("faultstring")
        .or_else(|| fault.child("Reason").and_then(|r| r.find("Text")))
        .map(|e| e.text.trim().to_string())
        .unwrap_or_else(|| "Unknown SOAP fault".to_string());

    Some(RemoteError::Fault { code, message })
}

/// Build a document-literal SOAP 1.1 request.
///
/// The body holds a single `request_element` in `namespace`; each parameter
/// becomes a child element, namespace-qualified when `qualified` is set.
pub fn write_envelope(
    namespace: &str,
    request_element: &str,
    qualified: bool,
    params: &Map<String, Value>,
) -> Result<String, RemoteError> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("SOAP-ENV:Envelope").with_attributes([
        ("xmlns:SOAP-ENV", SOAP_ENV_NS),
        ("xmlns:ns1", namespace),
    ])))?;
    writer.write_event(Event::Start(BytesStart::new("SOAP-ENV:Body")))?;

    let wrapper = format!("ns1:{}", request_element);
    writer.write_event(Event::Start(BytesStart::new(wrapper.as_str())))?;
    for (key, value) in params {
        write_value(&mut writer, &element_name(key, qualified), value, qualified)?;
    }
    writer.write_event(Event::End(BytesEnd::new(wrapper.as_str())))?;

    writer.write_event(Event::End(BytesEnd::new("SOAP-ENV:Body")))?;
    writer.write_event(Event::End(BytesEnd::new("SOAP-ENV:Envelope")))?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn element_name(key: &str, qualified: bool) -> String {
    if qualified {
        format!("ns1:{}", key)
    } else {
        key.to_string()
    }
}

fn write_value(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    value: &Value,
    qualified: bool,
) -> Result<(), RemoteError> {
    match value {
        Value::Null => {
            writer.write_event(Event::Empty(BytesStart::new(name)))?;
        }
        Value::Array(items) => {
            for item in items {
                write_value(writer, name, item, qualified)?;
            }
        }
        Value::Object(fields) => {
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            for (key, inner) in fields {
                write_value(writer, &element_name(key, qualified), inner, qualified)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        Value::String(s) => write_text(writer, name, s)?,
        Value::Bool(b) => write_text(writer, name, &b.to_string())?,
        Value::Number(n) => write_text(writer, name, &n.to_string())?,
    }
    Ok(())
}

fn write_text(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), RemoteError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
