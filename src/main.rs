//! Command-line entry point.
//!
//! Initializes logging, loads configuration and runs one of the `check`,
//! `list` or `lint` subcommands. Exits with status 1 when any path is
//! flagged.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt};

use bad_path::domains::analysis::validator;
use bad_path::domains::platform;
use bad_path::{CheckPolicy, Config, Mode, PathChecker, PathVerdict, Platform, UserPathRegistry};

#[derive(Parser, Debug)]
#[command(name = "bad-path", version, about = "Classify filesystem paths as dangerous or safe")]
struct Cli {
    /// Log level (overrides BAD_PATH_LOG_LEVEL)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify paths on this host
    Check(CheckArgs),

    /// Print the dangerous path prefixes of a platform
    List {
        /// posix, darwin or windows (defaults to the host)
        #[arg(long)]
        platform: Option<Platform>,

        /// Print the read-protected subset instead
        #[arg(long)]
        read_protected: bool,
    },

    /// Check path text for characters or names invalid on a platform
    Lint {
        /// posix, darwin or windows (defaults to the host)
        #[arg(long)]
        platform: Option<Platform>,

        #[arg(required = true)]
        paths: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// read or write (overrides BAD_PATH_MODE)
    #[arg(long)]
    mode: Option<Mode>,

    /// Flag paths outside the current working directory
    #[arg(long)]
    cwd_only: bool,

    /// Abort on the first dangerous path
    #[arg(long)]
    strict: bool,

    /// Also report readable / writable / creatable
    #[arg(long)]
    access: bool,

    /// Print verdicts as JSON
    #[arg(long)]
    json: bool,

    /// Additional sensitive path (repeatable)
    #[arg(long = "user-path", value_name = "PATH")]
    user_paths: Vec<PathBuf>,

    /// Do not flag system locations
    #[arg(long)]
    system_ok: bool,

    /// Do not flag user-defined sensitive locations
    #[arg(long)]
    user_paths_ok: bool,

    /// Flag existing paths that are not writable
    #[arg(long)]
    require_writable: bool,

    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(cli.log_level.as_deref().unwrap_or(&config.logging.level));
    debug!("Loaded configuration: {:?}", config);

    let flagged = match cli.command {
        Command::Check(args) => run_check(args, &config)?,
        Command::List {
            platform,
            read_protected,
        } => {
            let platform = platform.unwrap_or(Platform::current());
            let prefixes = if read_protected {
                platform::read_protected_prefixes(platform)
            } else {
                platform::dangerous_prefixes(platform)
            };
            for prefix in prefixes {
                println!("{}", prefix);
            }
            false
        }
        Command::Lint { platform, paths } => {
            run_lint(platform.unwrap_or(Platform::current()), &paths)
        }
    };

    Ok(if flagged {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Classify every path; returns true if any was dangerous.
fn run_check(args: CheckArgs, config: &Config) -> Result<bool> {
    let registry = Arc::new(UserPathRegistry::from_config(&config.registry));
    for path in &args.user_paths {
        registry.add(path);
    }

    let mut checker_config = config.checker.clone();
    if let Some(mode) = args.mode {
        checker_config.mode = mode;
    }
    checker_config.cwd_only |= args.cwd_only;
    checker_config.raise_error |= args.strict;

    let policy = CheckPolicy {
        system_ok: args.system_ok,
        user_paths_ok: args.user_paths_ok,
        require_writable: args.require_writable,
    };

    let mut verdicts = Vec::with_capacity(args.paths.len());
    for path in &args.paths {
        let checker = PathChecker::builder(path)
            .with_config(&checker_config)
            .policy(policy)
            .registry(Arc::clone(&registry))
            .check()
            .with_context(|| format!("Refusing '{}'", path.display()))?;

        let verdict = if args.access {
            checker.verdict_with_access()
        } else {
            checker.verdict()
        };
        if !args.json {
            println!("{}", format_verdict(&verdict));
        }
        verdicts.push(verdict);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdicts)?);
    }

    Ok(verdicts.iter().any(|v| !v.is_safe))
}

/// Text-only character check; returns true if any text was invalid.
fn run_lint(platform: Platform, paths: &[String]) -> bool {
    let mut flagged = false;
    for path in paths {
        match validator::find_invalid(path, platform) {
            Some(reason) => {
                flagged = true;
                println!("invalid\t{}\t{}", path.escape_debug(), reason);
            }
            None => println!("ok\t{}", path),
        }
    }
    flagged
}

fn format_verdict(verdict: &PathVerdict) -> String {
    let mut line = if verdict.is_safe {
        format!("safe\t{}", verdict.normalized_path)
    } else {
        format!(
            "dangerous\t{}\t{}",
            verdict.normalized_path.escape_debug(),
            verdict.reasons
        )
    };

    if let (Some(r), Some(w), Some(c)) =
        (verdict.is_readable, verdict.is_writable, verdict.is_creatable)
    {
        line.push_str(&format!("\treadable={} writable={} creatable={}", r, w, c));
    }
    line
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level, writing to stderr so
/// verdicts on stdout stay machine-readable.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
