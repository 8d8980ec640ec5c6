//! hlakit CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use hlakit_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use hlakit_cli::commands::{run_collect, run_coverage, run_filter, run_prune, run_reconcile};
use hlakit_cli::logging::{LogConfig, LogFormat, init_logging};
use hlakit_cli::summary::{
    print_collect_summary, print_coverage_summary, print_filter_summary, print_prune_summary,
    print_reconcile_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::Collect(args) => run_collect(args).map(|result| {
            print_collect_summary(&result);
            0
        }),
        Command::Filter(args) => run_filter(args).map(|result| {
            print_filter_summary(&result);
            0
        }),
        Command::Reconcile(args) => run_reconcile(args).map(|result| {
            print_reconcile_summary(&result, args.details);
            0
        }),
        Command::Prune(args) => run_prune(args).map(|result| {
            print_prune_summary(&result);
            0
        }),
        Command::Coverage(args) => run_coverage(args).map(|result| {
            print_coverage_summary(&result);
            if result.report.is_complete() { 0 } else { 1 }
        }),
    };
    let exit_code = match outcome {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
