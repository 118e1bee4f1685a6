use anyhow::Result;
use clap::Parser;
use query_lookup::cli::{run, Cli};
use query_lookup::config::CliConfig;
use query_lookup::utils::logger::init_logger;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let config = CliConfig::from(Cli::parse());

    let log_dir = config.log_dir.as_deref().and_then(|dir| dir.to_str());
    init_logger(log_dir)?;

    let report = run(&config)?;
    println!("{}", report.render(config.json)?);

    Ok(if report.is_found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
