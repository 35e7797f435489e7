//! Catalog CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use catalog_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use catalog_cli::commands::{
    run_attach_owner, run_normalize, run_plan, run_sync, run_validate, write_output,
};
use catalog_cli::config::CatalogConfig;
use catalog_cli::logging::{LogConfig, LogFormat, init_logging};
use catalog_cli::summary::print_report;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let config = CatalogConfig::load_or_default(cli.config.as_deref())?;
    let output = cli.output.as_deref();
    let pretty = config.output.pretty;
    match &cli.command {
        Command::Normalize(args) => write_output(&run_normalize(args)?, output, pretty)?,
        Command::Sync(args) => write_output(&run_sync(args)?, output, pretty)?,
        Command::AttachOwner(args) => write_output(&run_attach_owner(args)?, output, pretty)?,
        Command::Plan(args) => write_output(&run_plan(args)?, output, pretty)?,
        Command::Validate(args) => {
            let report = run_validate(args, &config)?;
            if output.is_some() {
                write_output(&report, output, pretty)?;
            } else {
                print_report(&report);
            }
            return Ok(i32::from(report.has_errors()));
        }
    }
    Ok(0)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level_filter(cli.verbosity.tracing_level_filter())
        .with_format(format)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config = config.with_level_filter(match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        });
    }
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
