use flavorforge_core::config::{AppConfig, LoadOptions};
use flavorforge_data::{CsvDataProvider, Table};
use serde::Serialize;

use crate::commands::{CommandResult, EXIT_CONFIG_FAILURE, EXIT_DATA_FAILURE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool, options: LoadOptions) -> CommandResult {
    let (report, exit_code) = build_report(options);

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

fn build_report(options: LoadOptions) -> (DoctorReport, u8) {
    let mut checks = Vec::new();
    let mut exit_code = 0;

    match AppConfig::load(options) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation".to_string(),
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            let data_checks = check_data_tables(&config);
            if data_checks.iter().any(|check| check.status == CheckStatus::Fail) {
                exit_code = EXIT_DATA_FAILURE;
            }
            checks.extend(data_checks);
        }
        Err(error) => {
            exit_code = EXIT_CONFIG_FAILURE;
            checks.push(DoctorCheck {
                name: "config_validation".to_string(),
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "data_directory".to_string(),
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    (DoctorReport { overall_status, summary, checks }, exit_code)
}

fn check_data_tables(config: &AppConfig) -> Vec<DoctorCheck> {
    let dir = &config.data.dir;
    if !dir.is_dir() {
        let mut checks = vec![DoctorCheck {
            name: "data_directory".to_string(),
            status: CheckStatus::Fail,
            details: format!("`{}` is not a directory", dir.display()),
        }];
        checks.extend(Table::ALL.iter().map(|table| DoctorCheck {
            name: format!("table:{}", table.file_name()),
            status: CheckStatus::Skipped,
            details: "skipped because the data directory is missing".to_string(),
        }));
        return checks;
    }

    let provider = CsvDataProvider::new(dir.clone());
    let mut checks = vec![DoctorCheck {
        name: "data_directory".to_string(),
        status: CheckStatus::Pass,
        details: format!("using `{}`", dir.display()),
    }];
    checks.extend(Table::ALL.iter().map(|table| {
        let path = provider.table_path(*table);
        if path.is_file() {
            DoctorCheck {
                name: format!("table:{}", table.file_name()),
                status: CheckStatus::Pass,
                details: format!("found `{}`", path.display()),
            }
        } else {
            DoctorCheck {
                name: format!("table:{}", table.file_name()),
                status: CheckStatus::Fail,
                details: format!("missing `{}`", path.display()),
            }
        }
    }));
    checks
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
