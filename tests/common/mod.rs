#![allow(dead_code)]

use mockito::{Mock, ServerGuard};

/// `Basic base64("demo:secret")`
pub const AUTH_HEADER: &str = "Basic ZGVtbzpzZWNyZXQ=";
pub const LOGIN: &str = "demo";
pub const KEY: &str = "secret";

const NS: &str = "http://flightxml.flightaware.com/soap/FlightXML2";
const METHODS: [&str; 3] = ["AircraftType", "TailOwner", "AirlineFlightInfo"];

/// A FlightXML2-shaped WSDL declaring the three operations, served from `endpoint`.
pub fn wsdl(endpoint: &str) -> String {
    let mut messages = String::new();
    let mut port_ops = String::new();
    let mut binding_ops = String::new();

    for m in METHODS {
        messages.push_str(&format!(
            r#"<wsdl:message name="{m}Request"><wsdl:part name="parameters" element="tns:{m}Request"/></wsdl:message>
<wsdl:message name="{m}Results"><wsdl:part name="parameters" element="tns:{m}Results"/></wsdl:message>
"#
        ));
        port_ops.push_str(&format!(
            r#"<wsdl:operation name="{m}"><wsdl:input message="tns:{m}Request"/><wsdl:output message="tns:{m}Results"/></wsdl:operation>
"#
        ));
        binding_ops.push_str(&format!(
            r#"<wsdl:operation name="{m}"><soap:operation soapAction="FlightXML2:{m}" style="document"/><wsdl:input><soap:body use="literal"/></wsdl:input></wsdl:operation>
"#
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<wsdl:definitions xmlns:wsdl="http://schemas.xmlsoap.org/wsdl/"
    xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
    xmlns:s="http://www.w3.org/2001/XMLSchema"
    xmlns:tns="{NS}"
    targetNamespace="{NS}">
<wsdl:types><s:schema elementFormDefault="unqualified" targetNamespace="{NS}">
<s:complexType name="AirlineFlightInfoStruct"><s:sequence>
<s:element name="faFlightID" type="s:string"/>
<s:element name="terminal_orig" type="s:string"/>
<s:element name="seats_cabin_first" type="s:int"/>
<s:element name="seats_cabin_coach" type="s:int"/>
<s:element name="bag_claim_weight" type="s:float"/>
<s:element name="wifi" type="s:boolean"/>
</s:sequence></s:complexType>
</s:schema></wsdl:types>
{messages}<wsdl:portType name="FlightXML2Soap">
{port_ops}</wsdl:portType>
<wsdl:binding name="FlightXML2Soap" type="tns:FlightXML2Soap">
<soap:binding style="document" transport="http://schemas.xmlsoap.org/soap/http"/>
{binding_ops}</wsdl:binding>
<wsdl:service name="FlightXML2"><wsdl:port name="FlightXML2Soap" binding="tns:FlightXML2Soap"><soap:address location="{endpoint}"/></wsdl:port></wsdl:service>
</wsdl:definitions>"#
    )
}

/// A successful response whose `<method>Result` holds `inner`.
pub fn soap_result(method: &str, inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns1="{NS}">
<SOAP-ENV:Body><ns1:{method}Results><{method}Result>{inner}</{method}Result></ns1:{method}Results></SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#
    )
}

pub fn soap_fault(message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
<SOAP-ENV:Body><SOAP-ENV:Fault><faultcode>SOAP-ENV:Client</faultcode><faultstring>{message}</faultstring></SOAP-ENV:Fault></SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#
    )
}

pub fn wsdl_url(server: &ServerGuard) -> String {
    format!("{}/wsdl", server.url())
}

/// Serve the WSDL at `/wsdl`, pointing operations at `/op`.
pub fn mock_wsdl(server: &mut ServerGuard) -> Mock {
    let body = wsdl(&format!("{}/op", server.url()));
    server
        .mock("GET", "/wsdl")
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_header("content-type", "text/xml; charset=utf-8")
        .with_body(body)
        .create()
}

/// Answer a SOAP call to `method` with `status` and `body`.
pub fn mock_operation(server: &mut ServerGuard, method: &str, status: usize, body: &str) -> Mock {
    server
        .mock("POST", "/op")
        .match_header("soapaction", format!("\"FlightXML2:{method}\"").as_str())
        .with_status(status)
        .with_header("content-type", "text/xml; charset=utf-8")
        .with_body(body)
        .create()
}
