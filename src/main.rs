use std::{env, fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use monkey::{evaluate, interpreter::environment::Environment, repl};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// monkey is an interpreter for the Monkey programming language. Without
/// arguments it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs a script file instead of starting the interactive session.
    file: Option<PathBuf>,

    /// Evaluates the given source text instead of starting the interactive
    /// session.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Skips the greeting printed when the interactive session starts.
    #[arg(short, long)]
    quiet: bool,
}

/// Installs a stderr subscriber, but only when `RUST_LOG` asks for output.
fn init_tracing() {
    if env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

/// Evaluates a whole script and reports its outcome.
///
/// Parse errors and runtime errors go to stderr and fail the process; any
/// other value is printed to stdout.
fn run_script(source: &str) -> ExitCode {
    let mut env = Environment::new();

    match evaluate(source, &mut env) {
        Ok(Some(value)) if value.is_error() => {
            eprintln!("{value}");
            ExitCode::FAILURE
        },
        Ok(Some(value)) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(errors) => {
            eprint!("{errors}");
            ExitCode::FAILURE
        },
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    debug!(?args, "starting");

    if let Some(source) = args.eval {
        return run_script(&source);
    }

    if let Some(path) = args.file {
        return match fs::read_to_string(&path) {
            Ok(source) => run_script(&source),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                ExitCode::FAILURE
            },
        };
    }

    if !args.quiet {
        let user = env::var("USER").or_else(|_| env::var("USERNAME"))
                                   .unwrap_or_else(|_| "friend".to_string());
        println!("Hello {user}! This is the Monkey programming language!");
        println!("Feel free to type in commands");
    }

    let stdin = io::stdin();
    if let Err(e) = repl::start(stdin.lock(), &mut io::stdout()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
