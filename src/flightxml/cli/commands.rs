//! # CLI Layer
//!
//! This module is the terminal client for the flightxml library. It is the
//! **only** place that:
//! - Parses arguments
//! - Writes to stdout/stderr
//! - Chooses exit codes (via `main.rs`)
//!
//! ## Flow
//!
//! 1. Parse flags with clap (missing flags are clap usage errors, exit 2)
//! 2. `--help`: print usage and the action table, exit 0
//! 3. Load [`FlightXmlConfig`] and build an [`api::Request`]
//! 4. Hand the request to [`api::execute`] with a [`SoapClient`] connector
//! 5. Print the result JSON to stdout
//!
//! Errors bubble back to `main`, which reports them through
//! [`super::render::report_error`].

use super::render::{render_action_help, render_result};
use super::setup::{init_tracing, usage, Cli};
use clap::Parser;
use flightxml::actions::list_actions;
use flightxml::api::{self, Request};
use flightxml::config::FlightXmlConfig;
use flightxml::error::Result;
use flightxml::remote::soap::SoapClient;
use flightxml::remote::Credentials;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.help {
        handle_help();
        return Ok(());
    }

    let config_dir = FlightXmlConfig::default_dir()?;
    let config = FlightXmlConfig::load(&config_dir)?;
    debug!(dir = %config_dir.display(), wsdl = %config.wsdl_url, "config loaded");

    let pretty = config.pretty && !cli.compact;
    // clap requires login, key and action unless --help was given.
    let request = Request {
        credentials: Credentials::new(
            cli.login.unwrap_or_default(),
            cli.key.unwrap_or_default(),
        ),
        action: cli.action.unwrap_or_default(),
        params: cli.params,
    };

    handle_action(&request, &config, pretty)
}

fn handle_help() {
    print!("{}", usage());
    println!();
    print!("{}", render_action_help(&list_actions()));
}

fn handle_action(request: &Request, config: &FlightXmlConfig, pretty: bool) -> Result<()> {
    let result = api::execute(request, |credentials| {
        SoapClient::connect(&config.wsdl_url, credentials.clone(), config.timeout())
    })?;

    println!("{}", render_result(&result, pretty)?);
    Ok(())
}
