// crates/native-shell-cli/src/main.rs
// ============================================================================
// Module: Native Shell CLI Entry Point
// Description: Command dispatcher for native shell build configuration workflows.
// Purpose: Validate, document, export, and preflight the shell build config.
// Dependencies: clap, native-shell-config, serde_json, thiserror.
// ============================================================================

//! ## Overview
//! The native shell CLI loads the build configuration record and exposes the
//! library operations as subcommands: validation with release warnings,
//! export to the build tool's JSON shape, schema/example/docs artifacts, the
//! package-time web asset preflight, and the startup bootstrap script. All
//! user-facing strings are routed through the message catalog. The CLI never
//! builds or packages an application.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use native_shell_cli::t;
use native_shell_config::DOCS_PATH;
use native_shell_config::ShellConfig;
use native_shell_config::bootstrap_script;
use native_shell_config::config_schema;
use native_shell_config::config_toml_example;
use native_shell_config::preflight_web_assets;
use native_shell_config::verify_config_docs;
use native_shell_config::write_config_docs;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "native-shell", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Web asset utilities.
    Assets {
        /// Selected assets subcommand.
        #[command(subcommand)]
        command: AssetsCommand,
    },
    /// Startup bootstrap utilities.
    Bootstrap {
        /// Selected bootstrap subcommand.
        #[command(subcommand)]
        command: BootstrapCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a native shell configuration file.
    Validate(ConfigPathArgs),
    /// Export the configuration in the build tool's JSON shape.
    Export(ConfigExportCommand),
    /// Print the configuration JSON schema.
    Schema,
    /// Print a canonical example configuration.
    Example,
    /// Generate or verify the configuration reference docs.
    Docs(ConfigDocsCommand),
}

/// Assets subcommands.
#[derive(Subcommand, Debug)]
enum AssetsCommand {
    /// Check the web asset directory is ready to package.
    Check(AssetsCheckCommand),
}

/// Bootstrap subcommands.
#[derive(Subcommand, Debug)]
enum BootstrapCommand {
    /// Print the script the shell evaluates when its web view starts.
    Script(ConfigPathArgs),
}

/// Shared config path argument.
#[derive(Args, Debug)]
struct ConfigPathArgs {
    /// Config file path (defaults to `NATIVE_SHELL_CONFIG` or `native-shell.toml`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `config export`.
#[derive(Args, Debug)]
struct ConfigExportCommand {
    /// Config file path.
    #[command(flatten)]
    source: ConfigPathArgs,
    /// Write the JSON to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Arguments for `config docs`.
#[derive(Args, Debug)]
struct ConfigDocsCommand {
    /// Docs file path (defaults to `docs/configuration/native-shell.toml.md`).
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Verify the file matches the generated docs instead of writing it.
    #[arg(long, action = ArgAction::SetTrue)]
    verify: bool,
}

/// Arguments for `assets check`.
#[derive(Args, Debug)]
struct AssetsCheckCommand {
    /// Config file path.
    #[command(flatten)]
    source: ConfigPathArgs,
    /// Project root that `webDir` is relative to (defaults to the config file's directory).
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for catalog error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a catalog message.
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

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Config {
            command,
        } => command_config(&command),
        Commands::Assets {
            command,
        } => command_assets(&command),
        Commands::Bootstrap {
            command,
        } => command_bootstrap(&command),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(command),
        ConfigCommand::Export(command) => command_config_export(command),
        ConfigCommand::Schema => command_config_schema(),
        ConfigCommand::Example => command_config_example(),
        ConfigCommand::Docs(command) => command_config_docs(command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigPathArgs) -> CliResult<ExitCode> {
    let config = load_config(command)?;
    emit_warnings(&config)?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line(&t!(
        "config.validate.summary",
        app_id = config.app_id,
        app_name = config.app_name,
        web_dir = config.web_dir
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the build tool export command.
fn command_config_export(command: &ConfigExportCommand) -> CliResult<ExitCode> {
    let config = load_config(&command.source)?;
    emit_warnings(&config)?;
    let mut json = serde_json::to_string_pretty(&config.to_build_tool_json())
        .map_err(|err| CliError::new(t!("config.export.serialize_failed", error = err)))?;
    json.push('\n');
    match &command.output {
        Some(path) => {
            fs::write(path, json.as_bytes()).map_err(|err| {
                CliError::new(t!("config.export.write_failed", path = path.display(), error = err))
            })?;
            write_stderr_line(&t!("config.export.written", path = path.display()))
                .map_err(|err| CliError::new(output_error("stderr", &err)))?;
        }
        None => write_stdout_bytes(json.as_bytes())
            .map_err(|err| CliError::new(output_error("stdout", &err)))?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints the configuration JSON schema.
fn command_config_schema() -> CliResult<ExitCode> {
    let json = serde_json::to_string_pretty(&config_schema())
        .map_err(|err| CliError::new(t!("config.schema.serialize_failed", error = err)))?;
    write_stdout_line(&json).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the canonical example configuration.
fn command_config_example() -> CliResult<ExitCode> {
    write_stdout_bytes(config_toml_example().as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Writes or verifies the configuration reference docs.
fn command_config_docs(command: &ConfigDocsCommand) -> CliResult<ExitCode> {
    let path = command.output.as_deref();
    if command.verify {
        verify_config_docs(path)
            .map_err(|err| CliError::new(t!("config.docs.failed", error = err)))?;
        write_stdout_line(&t!("config.docs.verified"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    } else {
        write_config_docs(path)
            .map_err(|err| CliError::new(t!("config.docs.failed", error = err)))?;
        let shown = path.unwrap_or_else(|| Path::new(DOCS_PATH)).display();
        write_stdout_line(&t!("config.docs.written", path = shown))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Assets Commands
// ============================================================================

/// Dispatches assets subcommands.
fn command_assets(command: &AssetsCommand) -> CliResult<ExitCode> {
    match command {
        AssetsCommand::Check(command) => command_assets_check(command),
    }
}

/// Runs the package-time web asset preflight.
fn command_assets_check(command: &AssetsCheckCommand) -> CliResult<ExitCode> {
    let config = load_config(&command.source)?;
    let root = command.root.clone().unwrap_or_else(|| project_root_for(&config));
    let report = preflight_web_assets(&config, &root)
        .map_err(|err| CliError::new(t!("assets.check.failed", error = err)))?;
    write_stdout_line(&t!(
        "assets.check.ok",
        web_dir = report.web_dir.display(),
        count = report.file_count
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Returns the directory containing the loaded config file.
fn project_root_for(config: &ShellConfig) -> PathBuf {
    config
        .source_path
        .as_deref()
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

// ============================================================================
// SECTION: Bootstrap Commands
// ============================================================================

/// Dispatches bootstrap subcommands.
fn command_bootstrap(command: &BootstrapCommand) -> CliResult<ExitCode> {
    match command {
        BootstrapCommand::Script(command) => command_bootstrap_script(command),
    }
}

/// Prints the startup bootstrap script.
fn command_bootstrap_script(command: &ConfigPathArgs) -> CliResult<ExitCode> {
    let config = load_config(command)?;
    let script = bootstrap_script(&config);
    if script.is_empty() {
        write_stdout_line(&t!("bootstrap.script.empty"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    } else {
        write_stdout_bytes(script.as_bytes())
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Loads and validates the config selected by the command arguments.
fn load_config(args: &ConfigPathArgs) -> CliResult<ShellConfig> {
    ShellConfig::load(args.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Writes configuration warnings to stderr.
fn emit_warnings(config: &ShellConfig) -> CliResult<()> {
    for warning in config.warnings() {
        write_stderr_line(&t!("config.warning", code = warning.code(), message = warning))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    Ok(())
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
