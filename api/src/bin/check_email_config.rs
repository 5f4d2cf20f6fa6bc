//! Checks that the backend and the selected email provider are configured.
//!
//! Reads the process environment (plus `.env` when present), prints one
//! line per checked variable and a verdict, and exits non-zero on failure.

use std::process::ExitCode;

use mp_api::telemetry;
use mp_core::services::validate_email_config;
use mp_infra::config::{load_env_file, log_env_file};
use mp_shared::ProcessEnv;

fn main() -> ExitCode {
    let env_file = load_env_file();
    telemetry::init_tracing();
    log_env_file(&env_file);

    let report = validate_email_config(&ProcessEnv);
    for line in report.lines() {
        println!("{}", line);
    }

    if report.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
