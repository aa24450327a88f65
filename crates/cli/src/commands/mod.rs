pub mod analyze;
pub mod classify;
pub mod config;
pub mod doctor;
pub mod score;

use std::future::Future;

use flavorforge_core::config::{AppConfig, LoadOptions};
use flavorforge_data::CsvDataProvider;
use serde::Serialize;

pub const EXIT_CONFIG_FAILURE: u8 = 2;
pub const EXIT_DATA_FAILURE: u8 = 3;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

#[derive(Debug, Serialize)]
struct CommandReport<'a, T> {
    command: &'a str,
    status: &'static str,
    #[serde(flatten)]
    data: T,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: 0, output: serialize_payload(&payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(&payload) }
    }

    /// Successful result whose JSON carries `data`'s fields next to
    /// `command` and `status`.
    pub fn report<T: Serialize>(command: &str, data: T) -> Self {
        let payload = CommandReport { command, status: "ok", data };
        Self { exit_code: 0, output: serialize_payload(&payload) }
    }
}

fn serialize_payload<T: Serialize>(payload: &T) -> String {
    serde_json::to_string(payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

pub(crate) fn load_config(command: &str, options: LoadOptions) -> Result<AppConfig, CommandResult> {
    AppConfig::load(options).map_err(|error| {
        CommandResult::failure(command, "config_validation", error.to_string(), EXIT_CONFIG_FAILURE)
    })
}

/// Opens the CSV provider for the configured data directory, failing when the
/// directory itself is missing.
pub(crate) fn open_provider(
    command: &str,
    config: &AppConfig,
) -> Result<CsvDataProvider, CommandResult> {
    let dir = &config.data.dir;
    if !dir.is_dir() {
        return Err(CommandResult::failure(
            command,
            "data_source",
            format!("data directory `{}` does not exist", dir.display()),
            EXIT_DATA_FAILURE,
        ));
    }
    Ok(CsvDataProvider::new(dir.clone()))
}

pub(crate) fn block_on<F: Future>(command: &str, future: F) -> Result<F::Output, CommandResult> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().map_err(
        |error| {
            CommandResult::failure(
                command,
                "runtime",
                format!("failed to initialize async runtime: {error}"),
                1,
            )
        },
    )?;
    Ok(runtime.block_on(future))
}
