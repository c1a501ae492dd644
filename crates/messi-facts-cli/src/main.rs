// crates/messi-facts-cli/src/main.rs
// ============================================================================
// Module: Messi Facts CLI
// Description: Command-line entry point for invoking and checking the skill.
// Purpose: Run request envelopes through the skill and validate its inputs.
// Dependencies: clap, messi-facts-{config,core,skill}, serde_json
// ============================================================================

//! ## Overview
//! `messi-facts invoke` reads a platform request envelope from a file or
//! stdin and prints the response envelope. `messi-facts catalog check`
//! reports locale key coverage, and `messi-facts config validate` checks a
//! config file. All output goes through the localized [`t!`] catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use messi_facts_cli::i18n::Locale;
use messi_facts_cli::i18n::set_locale;
use messi_facts_cli::t;
use messi_facts_config::LogSinkKind;
use messi_facts_config::LoggingConfig;
use messi_facts_config::SkillConfig;
use messi_facts_config::load_locale_table;
use messi_facts_core::JsonLinesLogSink;
use messi_facts_core::LocaleTable;
use messi_facts_core::MessageKey;
use messi_facts_core::NoopLogSink;
use messi_facts_core::SkillLogSink;
use messi_facts_skill::SkillBuilder;
use messi_facts_skill::builtin_table;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum size of a request envelope.
const MAX_REQUEST_BYTES: usize = 1024 * 1024;
/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "MESSI_FACTS_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "messi-facts", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `MESSI_FACTS_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Dispatch one request envelope and print the response envelope.
    Invoke(InvokeCommand),
    /// Locale catalog utilities.
    Catalog {
        /// Selected catalog subcommand.
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for `invoke`.
#[derive(Args, Debug)]
struct InvokeCommand {
    /// Request envelope path, or `-` for stdin.
    #[arg(long, value_name = "PATH", default_value = "-")]
    request: String,
    /// Config file path (overrides `MESSI_FACTS_CONFIG`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Pretty-print the response envelope.
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Catalog subcommands.
#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Report locale key coverage and fail when any locale is incomplete.
    Check(ConfigPathArgs),
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a config file.
    Validate(ConfigPathArgs),
}

/// Shared `--config` argument.
#[derive(Args, Debug)]
struct ConfigPathArgs {
    /// Config file path (overrides `MESSI_FACTS_CONFIG`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Output languages accepted by `--lang`.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum LangArg {
    /// English.
    En,
    /// Spanish.
    Es,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Es => Self::Es,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);

    if cli.show_version {
        write_stdout_line(&t!("main.version", env!("CARGO_PKG_VERSION")))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        let help = Cli::command().render_help().to_string();
        write_stdout_line(&help).map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Invoke(command) => command_invoke(&command),
        Commands::Catalog {
            command: CatalogCommand::Check(args),
        } => command_catalog_check(&args),
        Commands::Config {
            command: ConfigCommand::Validate(args),
        } => command_config_validate(&args),
    }
}

// ============================================================================
// SECTION: Invoke Command
// ============================================================================

/// Dispatches one envelope and prints the response envelope.
fn command_invoke(command: &InvokeCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let sink = build_log_sink(&config.logging)?;
    let skill = SkillBuilder::from_config(&config)
        .and_then(|builder| builder.log_sink(sink).build())
        .map_err(|err| CliError::new(t!("skill.build_failed", err)))?;
    let bytes = read_request(&command.request)?;
    let envelope =
        skill.invoke_slice(&bytes).map_err(|err| CliError::new(t!("invoke.failed", err)))?;
    let rendered = if command.pretty {
        serde_json::to_string_pretty(&envelope)
    } else {
        serde_json::to_string(&envelope)
    }
    .map_err(|err| CliError::new(t!("invoke.serialize_failed", err)))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Reads the request envelope from `source` (`-` for stdin) under the size limit.
fn read_request(source: &str) -> CliResult<Vec<u8>> {
    let label = if source == "-" { t!("invoke.stdin") } else { source.to_string() };
    let mut bytes = Vec::new();
    let limit = u64::try_from(MAX_REQUEST_BYTES).unwrap_or(u64::MAX).saturating_add(1);
    let result = if source == "-" {
        std::io::stdin().lock().take(limit).read_to_end(&mut bytes)
    } else {
        std::fs::File::open(source).and_then(|file| file.take(limit).read_to_end(&mut bytes))
    };
    result.map_err(|err| CliError::new(t!("invoke.read_failed", label, err)))?;
    if bytes.len() > MAX_REQUEST_BYTES {
        return Err(CliError::new(t!("invoke.too_large", label, MAX_REQUEST_BYTES)));
    }
    Ok(bytes)
}

/// Builds the configured log sink.
fn build_log_sink(logging: &LoggingConfig) -> CliResult<Arc<dyn SkillLogSink>> {
    if !logging.enabled {
        return Ok(Arc::new(NoopLogSink));
    }
    match (logging.sink, logging.path.as_deref()) {
        (LogSinkKind::File, Some(path)) => {
            let path = path.trim();
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| CliError::new(t!("log.open_failed", path, err)))?;
            Ok(Arc::new(JsonLinesLogSink::new(file)))
        }
        (LogSinkKind::Stderr | LogSinkKind::File, _) => {
            Ok(Arc::new(JsonLinesLogSink::new(std::io::stderr())))
        }
    }
}

// ============================================================================
// SECTION: Catalog Command
// ============================================================================

/// Prints locale coverage and fails on gaps.
fn command_catalog_check(args: &ConfigPathArgs) -> CliResult<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let table = match config.resources_path() {
        Some(path) => load_locale_table(&path)
            .map_err(|err| CliError::new(t!("config.load_failed", err)))?,
        None => builtin_table(),
    };
    let mut problems = catalog_report_lines(&table)?;
    problems.extend(fallback_problems(&table, &config.locale.fallback));
    for problem in &problems {
        write_stderr_line(problem).map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    let report = table.completeness_report();
    if problems.is_empty() && report.is_complete() {
        write_stdout_line(&t!("catalog.complete"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::new(t!("catalog.incomplete")))
    }
}

/// Prints one coverage line per locale and returns missing-key lines.
fn catalog_report_lines(table: &LocaleTable) -> CliResult<Vec<String>> {
    let report = table.completeness_report();
    let mut missing = Vec::new();
    for locale in &report.locales {
        write_stdout_line(&t!(
            "catalog.locale_line",
            locale.locale,
            locale.defined,
            report.total_keys
        ))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        missing.extend(locale.missing.iter().map(|key| t!("catalog.missing_key", key)));
    }
    Ok(missing)
}

/// Checks that the fallback locale defines every known message key.
fn fallback_problems(table: &LocaleTable, fallback: &str) -> Vec<String> {
    let Some(strings) = table.locale(fallback) else {
        return vec![t!("catalog.unknown_fallback", fallback)];
    };
    MessageKey::ALL
        .iter()
        .filter(|key| strings.get(key.as_str()).is_none())
        .map(|key| t!("catalog.fallback_missing_key", fallback, key))
        .collect()
}

// ============================================================================
// SECTION: Config Command
// ============================================================================

/// Executes the config validation command.
fn command_config_validate(args: &ConfigPathArgs) -> CliResult<ExitCode> {
    let _config = load_config(args.config.as_deref())?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Loads configuration with the standard resolution rules.
fn load_config(path: Option<&Path>) -> CliResult<SkillConfig> {
    SkillConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", err)))
}

/// Resolves the CLI locale from the flag, then the environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value)
            .ok_or_else(|| CliError::new(t!("i18n.lang.invalid_env", LANG_ENV, value)));
    }
    Ok(Locale::En)
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    t!("output.write_failed", stream, error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
