// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::{Context, Result};
use pair_sum::config::HarnessConfig;
use pair_sum::options::Options;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    if std::env::var("PAIRSUM_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("PAIRSUM_LOG")
            .write_style("PAIRSUM_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse_from_args(&args) {
        Ok(options) => options,
        Err(err) => match err.downcast_ref::<clap::Error>() {
            // Help and version requests land here too; clap knows how to print them.
            Some(clap_err) => clap_err.exit(),
            None => return Err(err),
        },
    };
    log::debug!("options: {:?}", options);

    let config = match &options.config {
        Some(path) => HarnessConfig::load_from_file(path)
            .with_context(|| format!("Loading configuration from {}", path.display()))?,
        None => HarnessConfig::default(),
    };

    let mut stdout = std::io::stdout().lock();
    if pair_sum::run::run(options, &config, &mut stdout)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
