//! fhir-resolve: command-line access to the version-indexed FHIR resolver.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fhir_models::{Config, FhirError, FhirResource, FhirVersion, r4, r4b, r5};

#[derive(Debug, Parser)]
#[command(name = "fhir-resolve")]
#[command(about = "Resolve FHIR resource types against R4, R4B and R5")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// FHIR release (R4, R4B, R5 or a release number such as 4.0.1).
    /// Defaults to $FHIR_VERSION, then R4.
    #[arg(long, global = true, value_parser = parse_version)]
    fhir_version: Option<FhirVersion>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the resource types defined by the release
    Types,
    /// Resolve a resource name and print its descriptor
    Resolve {
        name: String,

        /// Resolve the bundle of NAME instead of NAME itself
        #[arg(long)]
        bundle: bool,
    },
    /// Decode a JSON resource file into the release's resource union
    Check { file: PathBuf },
}

fn parse_version(s: &str) -> Result<FhirVersion, String> {
    s.parse().map_err(|err: FhirError| err.to_string())
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let version = match cli.fhir_version {
        Some(version) => version,
        None => Config::from_env().context("invalid FHIR_VERSION")?.default_version,
    };
    tracing::debug!(%version, command = ?cli.command, "running");

    let (output, success) = run(&cli.command, version)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Execute `command`; the flag is false when the output is a failure outcome.
fn run(command: &Command, version: FhirVersion) -> anyhow::Result<(Value, bool)> {
    let result = match command {
        Command::Types => Ok(json!({
            "version": version,
            "resourceTypes": fhir_models::resource_types(version),
        })),
        Command::Resolve { name, bundle: true } => {
            fhir_models::resolve_bundle(version, name).map(|d| json!(d))
        }
        Command::Resolve { name, bundle: false } => {
            fhir_models::resolve_resource(version, name).map(|d| json!(d))
        }
        Command::Check { file } => {
            let contents = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            FhirResource::from_json(version, &contents).map(|resource| summary(&resource))
        }
    };

    match result {
        Ok(output) => Ok((output, true)),
        Err(err) => {
            tracing::warn!(%version, error = %err, "request rejected");
            Ok((outcome(version, &err)?, false))
        }
    }
}

fn summary(resource: &FhirResource) -> Value {
    json!({
        "version": resource.version(),
        "resourceType": resource.resource_type(),
        "id": resource.id(),
    })
}

/// The failure as an OperationOutcome of the requested release
fn outcome(version: FhirVersion, err: &FhirError) -> serde_json::Result<Value> {
    match version {
        FhirVersion::R4 => serde_json::to_value(r4::OperationOutcome::from_error(err)),
        FhirVersion::R4B => serde_json::to_value(r4b::OperationOutcome::from_error(err)),
        FhirVersion::R5 => serde_json::to_value(r5::OperationOutcome::from_error(err)),
    }
}
