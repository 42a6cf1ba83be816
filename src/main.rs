mod args;
mod cli;

use args::Args;
#[cfg(test)]
use args::ArgsError;
use cli::CLI;
use cli::error::CLIError;
use relation_fixture::config::Config;
use relation_fixture::config::env::EnvConfig;
use relation_fixture::config::fixture::FixtureConfig;
use relation_fixture::relation::error::FixtureError;
#[cfg(feature = "mock")]
use relation_fixture::relation::mock::EmptySource;
#[cfg(not(feature = "mock"))]
use relation_fixture::relation::snapshot::RelationSnapshot;
use relation_fixture::relation::RelationSource;

use flexi_logger::{FileSpec, Logger, WriteMode};
use log::{debug, error};
use std::error::Error;
use std::io::{self, Write};

fn setup_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .unwrap_or(&"couldn't get panic payload");
        let location = panic_info.location().map_or_else(
            || "unknown location".to_string(),
            |loc| format!("{}:{}", loc.file(), loc.line()),
        );
        error!("panic at {}, payload: {:?}", location, payload);
        default_hook(panic_info);
    }));
}

fn exit_with_error(msg: &str, e: Box<dyn Error>) -> ! {
    error!("{}: {}", msg, e);
    eprintln!("relation-tool: {}", e);
    std::process::exit(1);
}

fn construct_config() -> FixtureConfig {
    let config: Box<dyn Config> = Box::new(EnvConfig::new());
    FixtureConfig::new(config)
}

#[cfg(not(feature = "mock"))]
fn construct_source(config: &FixtureConfig) -> Result<Box<dyn RelationSource>, FixtureError> {
    debug!("using fixture relation source");
    Ok(Box::new(RelationSnapshot::from_config(config)?))
}

#[cfg(feature = "mock")]
fn construct_source(_: &FixtureConfig) -> Result<Box<dyn RelationSource>, FixtureError> {
    log::warn!("using empty relation source");
    Ok(Box::new(EmptySource::new()))
}

fn run(
    cmd_args: &[String],
    config: &FixtureConfig,
    stdout: &mut dyn Write,
) -> Result<(), CLIError> {
    let args = Args::parse(cmd_args)?;
    debug!("running with {:?}", args);

    let source = construct_source(config)?;
    let mut cli = CLI::new(source, stdout, args.format());
    cli.run(args.command())
}

fn main() {
    let config = construct_config();
    let log_spec = config
        .get_log_spec()
        .unwrap_or_else(|e| exit_with_error("failed to read log spec", e.into()));

    // stdout carries tool output, so logs go to a file
    let _logger = Logger::try_with_str(&log_spec)
        .unwrap_or_else(|e| exit_with_error("failed to create logger", e.into()))
        .log_to_file(FileSpec::default())
        .write_mode(WriteMode::Direct)
        .start()
        .unwrap_or_else(|e| exit_with_error("failed to start logger", e.into()));

    setup_panic_hook();

    let cmd_args = std::env::args().collect::<Vec<String>>();
    let mut stdout = io::stdout();
    run(&cmd_args, &config, &mut stdout)
        .unwrap_or_else(|e| exit_with_error("failed to run cli", e.into()));
}

#[test]
fn test_run_rejects_arguments_before_loading() {
    // no fixture is read when the arguments are bad
    let cmd_args = vec!["relation-tool".to_string(), "relation-set".to_string()];
    let mut stdout = Vec::new();
    let err = run(&cmd_args, &construct_config(), &mut stdout).expect_err("expected error");
    assert!(matches!(err, CLIError::Args(ArgsError::UnknownTool(tool)) if tool == "relation-set"));
    assert_eq!(stdout, b"");
}
