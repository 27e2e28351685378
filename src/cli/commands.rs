//! CLI command implementations
//!
//! `serve` owns the tokio runtime; everything else is synchronous. `compile`
//! and `check` run the same compiler the server uses, so a descriptor file
//! can be vetted offline before wiring a frontend to it.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::descriptor::parse_field_list;
use crate::generator::{FormSource, GeneratorConfig, GeneratorError, LlmClient};
use crate::http_server::{FormState, HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::schema::FormSchema;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_file, read_json_object, write_json};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Form generation settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Config {
    /// Load configuration from file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("failed to read config: {}", e)))?;
        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("invalid config: {}", e)))
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Logger::info(
                "config_defaults",
                &[("path", &path.display().to_string())],
            );
            Ok(Self::default())
        }
    }
}

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch one parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
        Command::Compile { fields } => compile(&fields),
        Command::Check { fields, values } => check(&fields, &values),
    }
}

/// Write a default configuration file.
pub fn init(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::already_initialized(format!(
            "{} already exists",
            path.display()
        )));
    }
    let content = serde_json::to_string_pretty(&Config::default())
        .map_err(|e| CliError::config_error(e.to_string()))?;
    fs::write(path, content)
        .map_err(|e| CliError::io_error(format!("failed to write {}: {}", path.display(), e)))?;
    println!("wrote {}", path.display());
    Ok(())
}

/// Boot the HTTP server and serve until the process exits.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;

    // No API key just disables /forms/generate; explicit descriptor lists
    // and validation keep working.
    let source = match LlmClient::new(config.generator.clone()) {
        Ok(client) => Some(FormSource::Llm(client)),
        Err(GeneratorError::MissingApiKey(env)) => {
            Logger::warn("generator_disabled", &[("missing_key", env)]);
            None
        }
        Err(e) => return Err(CliError::boot_failed(e.to_string())),
    };

    let state = Arc::new(FormState::new(source));
    let server = HttpServer::new(config.http, state);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to start runtime: {}", e)))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}

/// Compile a descriptor file and print the schema report.
pub fn compile(fields_path: &Path) -> CliResult<()> {
    let schema = load_schema(fields_path)?;

    let fields: Vec<_> = schema
        .fields()
        .iter()
        .map(|field| {
            json!({
                "name": field.name,
                "label": field.label,
                "variant": field.variant.tag(),
                "kind": field.rule.kind.type_name(),
                "required": field.required,
                "constraints": field.rule.constraints.len(),
            })
        })
        .collect();

    write_json(&json!({
        "fields": fields,
        "defaults": schema.default_values(),
    }))
}

/// Validate a submission record against a descriptor file.
pub fn check(fields_path: &Path, values_path: &Path) -> CliResult<()> {
    let schema = load_schema(fields_path)?;
    let record = read_json_object(values_path)?;

    match schema.validate(&record) {
        Ok(values) => write_json(&json!({ "ok": true, "values": values })),
        Err(errors) => {
            let failed = errors.len();
            write_json(&json!({ "ok": false, "errors": errors }))?;
            Err(CliError::validation_failed(failed))
        }
    }
}

fn load_schema(fields_path: &Path) -> CliResult<FormSchema> {
    let content = read_file(fields_path)?;
    let descriptors = parse_field_list(&content)
        .map_err(|e| CliError::invalid_input(format!("{}: {}", fields_path.display(), e)))?;
    Ok(FormSchema::compile(&descriptors))
}
