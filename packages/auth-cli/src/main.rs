//! Command-line driver for the authentication flow demo

use anyhow::Result;
use auth_flow::{AuthMethod, AuthStep};
use clap::{Parser, Subcommand};
use console::style;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod report;

use config::{parse_repeat, Config};

#[derive(Parser, Debug)]
#[command(name = "auth-demo")]
#[command(about = "Run mock authentication flows")]
#[command(version)]
struct Cli {
    /// Only print steps, no headings
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Authenticate with one or more methods
    Run {
        /// Method to use (pin, touch-id, face-id). Repeatable; defaults to AUTH_METHODS
        #[arg(short, long = "method", value_parser = parse_method)]
        methods: Vec<AuthMethod>,

        /// Times to authenticate with each method; defaults to AUTH_REPEAT
        #[arg(short = 'n', long, value_parser = parse_repeat_arg)]
        repeat: Option<u32>,

        /// Print attempts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the fixed step order
    Steps,

    /// List built-in methods
    Methods,
}

fn parse_method(value: &str) -> Result<AuthMethod, auth_flow::AuthFlowError> {
    value.parse()
}

fn parse_repeat_arg(value: &str) -> Result<u32, String> {
    parse_repeat(value).map_err(|e| format!("{e:#}"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Run {
            methods,
            repeat,
            json,
        }) => cmd_run(methods, repeat, json, cli.quiet),
        Some(Commands::Steps) => cmd_steps(cli.quiet),
        Some(Commands::Methods) => cmd_methods(),
        None => cmd_run(Vec::new(), None, false, cli.quiet),
    }
}

fn cmd_run(methods: Vec<AuthMethod>, repeat: Option<u32>, json: bool, quiet: bool) -> Result<()> {
    let config = Config::from_env()?;

    let methods = if methods.is_empty() {
        config.methods
    } else {
        methods
    };
    let repeat = repeat.unwrap_or(config.repeat);

    tracing::info!(?methods, repeat, "starting authentication demo");
    let attempts = report::run_attempts(&methods, repeat);

    if json {
        println!("{}", report::render_json(&attempts)?);
    } else {
        print!("{}", report::render_text(&attempts, quiet));
    }

    Ok(())
}

fn cmd_steps(quiet: bool) -> Result<()> {
    if !quiet {
        println!("{}", style("Authentication steps").bold());
    }
    for step in AuthStep::ORDER {
        let kind = if step.is_hook() { "hook" } else { "" };
        println!("  {}. {} {}", step.position(), step, style(kind).dim());
    }
    Ok(())
}

fn cmd_methods() -> Result<()> {
    for method in AuthMethod::ALL {
        println!("{method}");
    }
    Ok(())
}
