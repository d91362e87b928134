//! # FlightXML Architecture
//!
//! flightxml is a small library for calling the FlightAware FlightXML2 service,
//! with a CLI client on top. Users pick an *action* by name and pass its
//! parameters as JSON; the library turns that into one remote call and hands
//! back the unwrapped result.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders help and JSON, sets up logging │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Single-shot run: params → connect → resolve → validate   │
//! │    → call                                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                       │
//!                    ▼                       ▼
//! ┌───────────────────────────┐ ┌───────────────────────────────┐
//! │  actions.rs / params.rs   │ │  Remote Layer (remote/)       │
//! │  - Static operation table │ │  - RemoteService trait        │
//! │  - Name normalization     │ │  - SoapClient (production)    │
//! │  - Required-key checks    │ │  - InMemoryService (testing)  │
//! └───────────────────────────┘ └───────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns `Result` values and never prints or
//! exits. Each stage has its own error kind (see [`error::FlightXmlError`]) and
//! the CLI decides how to report it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and the single-request run loop
//! - [`actions`]: Supported operations and action-name normalization
//! - [`params`]: `--params` parsing and required-key validation
//! - [`remote`]: Transport abstraction and the SOAP implementation
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, help and output rendering for the binary (not part of the lib API)

pub mod actions;
pub mod api;
pub mod config;
pub mod error;
pub mod params;
pub mod remote;
