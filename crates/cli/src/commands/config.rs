use std::env;
use std::fs;
use std::path::Path;

use flavorforge_core::config::{resolve_config_path, AppConfig, ConfigOverrides, LoadOptions};
use serde::Serialize;
use toml::Value;

use crate::commands::{CommandResult, EXIT_CONFIG_FAILURE};

#[derive(Debug, Serialize)]
struct ConfigField {
    key: &'static str,
    value: String,
    source: String,
}

#[derive(Debug, Serialize)]
struct ConfigReport {
    precedence: &'static str,
    config_file: Option<String>,
    fields: Vec<ConfigField>,
}

struct FieldSpec {
    key: &'static str,
    env_keys: &'static [&'static str],
    overridden: bool,
    value: String,
}

pub fn run(options: LoadOptions) -> CommandResult {
    let config_file_path = resolve_config_path(options.config_path.as_deref());
    let overrides = options.overrides.clone();

    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                format!("config validation failed: {error}"),
                EXIT_CONFIG_FAILURE,
            )
        }
    };

    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let fields = field_specs(&config, &overrides)
        .into_iter()
        .map(|spec| ConfigField {
            key: spec.key,
            source: field_source(
                &spec,
                config_file_doc.as_ref(),
                config_file_path.as_deref(),
            ),
            value: spec.value,
        })
        .collect();

    CommandResult::report(
        "config",
        ConfigReport {
            precedence: "override > env > file > default",
            config_file: config_file_path.map(|path| path.display().to_string()),
            fields,
        },
    )
}

fn field_specs(config: &AppConfig, overrides: &ConfigOverrides) -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            key: "data.dir",
            env_keys: &["FLAVORFORGE_DATA_DIR"],
            overridden: overrides.data_dir.is_some(),
            value: config.data.dir.display().to_string(),
        },
        FieldSpec {
            key: "server.bind_address",
            env_keys: &["FLAVORFORGE_SERVER_BIND_ADDRESS"],
            overridden: overrides.bind_address.is_some(),
            value: config.server.bind_address.clone(),
        },
        FieldSpec {
            key: "server.port",
            env_keys: &["FLAVORFORGE_SERVER_PORT"],
            overridden: overrides.port.is_some(),
            value: config.server.port.to_string(),
        },
        FieldSpec {
            key: "server.graceful_shutdown_secs",
            env_keys: &["FLAVORFORGE_SERVER_GRACEFUL_SHUTDOWN_SECS"],
            overridden: false,
            value: config.server.graceful_shutdown_secs.to_string(),
        },
        FieldSpec {
            key: "cors.allowed_origins",
            env_keys: &["FLAVORFORGE_CORS_ALLOWED_ORIGINS"],
            overridden: false,
            value: config.cors.allowed_origins.join(","),
        },
        FieldSpec {
            key: "logging.level",
            env_keys: &["FLAVORFORGE_LOGGING_LEVEL", "FLAVORFORGE_LOG_LEVEL"],
            overridden: overrides.log_level.is_some(),
            value: config.logging.level.clone(),
        },
        FieldSpec {
            key: "logging.format",
            env_keys: &["FLAVORFORGE_LOGGING_FORMAT", "FLAVORFORGE_LOG_FORMAT"],
            overridden: overrides.log_format.is_some(),
            value: format!("{:?}", config.logging.format).to_lowercase(),
        },
    ]
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    spec: &FieldSpec,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if spec.overridden {
        return "override".to_string();
    }

    for env_key in spec.env_keys {
        let set = env::var(env_key).map(|value| !value.trim().is_empty()).unwrap_or(false);
        if set {
            return format!("env ({env_key})");
        }
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, spec.key) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}
