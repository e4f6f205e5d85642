//! `stack-params` — resolve deployment parameters and print them as JSON.
//!
//! Reads the deployment context from a `cdk.json`-style file plus
//! `-c key=value` pairs, applies the built-in environment overrides and
//! prints the processed stack input on stdout. Logs go to stderr.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;

use stack_params::config::Config;
use stack_params::{ContextMap, FileBrandingLoader, OverrideTable, StackParamsError, resolve};

// ── CLI ─────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "stack-params", version, about = "resolve stack deployment parameters")]
struct Args {
    /// path to stack-params.toml
    #[arg(long, env = "STACK_PARAMS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// resolve the context and print the processed parameters
    Resolve {
        /// cdk.json-style file holding a "context" object
        #[arg(long)]
        context_file: Option<PathBuf>,
        /// context value, repeatable (e.g. -c env=dev -c 'modelIds=["a"]')
        #[arg(short = 'c', long = "context", value_name = "KEY=VALUE")]
        pairs: Vec<String>,
        /// branding JSON file
        #[arg(long)]
        branding: Option<PathBuf>,
        /// print single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// list environments with a built-in override entry
    Envs,
}

// ── commands ────────────────────────────────────────────────────────

fn cmd_resolve(
    config: &Config,
    context_file: Option<PathBuf>,
    pairs: &[String],
    branding: Option<PathBuf>,
    compact: bool,
) -> stack_params::Result<()> {
    // An explicit context file must exist; the configured default may be absent.
    let mut context = match context_file {
        Some(path) => ContextMap::from_cdk_json(&path)?,
        None if config.context.file.exists() => ContextMap::from_cdk_json(&config.context.file)?,
        None => {
            debug!(path = ?config.context.file, "context file not found, starting empty");
            ContextMap::new()
        }
    };
    context.apply_pairs(pairs)?;

    let loader = FileBrandingLoader::new(branding.unwrap_or_else(|| config.branding.file.clone()));
    let params = resolve(&context, &OverrideTable::builtin()?, &loader)?;

    let json = if compact || !config.output.pretty {
        serde_json::to_string(&params)?
    } else {
        serde_json::to_string_pretty(&params)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_envs() -> stack_params::Result<()> {
    let table = OverrideTable::builtin()?;
    for env in table.env_names() {
        let label = if env.is_empty() { "(anonymous)" } else { env };
        println!("{label}");
    }
    Ok(())
}

fn report(err: &StackParamsError) {
    match err.validation_issues() {
        Some(issues) => {
            eprintln!("error: invalid stack parameters");
            for issue in issues {
                eprintln!("  - {issue}");
            }
        }
        None => eprintln!("error: {err}"),
    }
}

fn main() {
    // Initialise tracing (default: warn; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let result = Config::load(args.config.as_deref()).and_then(|config| match args.command {
        Command::Resolve {
            context_file,
            pairs,
            branding,
            compact,
        } => cmd_resolve(&config, context_file, &pairs, branding, compact),
        Command::Envs => cmd_envs(),
    });

    if let Err(e) = result {
        report(&e);
        process::exit(if e.is_validation() { 2 } else { 1 });
    }
}
