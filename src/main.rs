use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use mscript::{Options, error::Error, interpreter::environment::ScopePolicy, parse, run, tokenize};
use tracing_subscriber::EnvFilter;

/// mscript runs scripts written in a small imperative language with
/// integers, floats, chars, strings, loops and block scoping.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script to run.
    path: PathBuf,

    /// How an assignment treats a name already bound in an outer scope.
    #[arg(long, value_enum, default_value_t = Scoping::Nearest)]
    scoping: Scoping,

    /// Print the token stream instead of running the script.
    #[arg(long)]
    dump_tokens: bool,

    /// Print the parsed statements instead of running the script.
    #[arg(long)]
    dump_ast: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scoping {
    /// Overwrite the nearest existing binding.
    Nearest,
    /// Bind in the innermost scope, shadowing outer bindings.
    Shadow,
}

impl From<Scoping> for ScopePolicy {
    fn from(scoping: Scoping) -> Self {
        match scoping {
            Scoping::Nearest => Self::AssignToNearest,
            Scoping::Shadow => Self::DefineOrShadow,
        }
    }
}

fn init_tracing() {
    // RUST_LOG controls the level; only warnings and errors by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let source = match fs::read_to_string(&args.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Could not open file '{}': {e}", args.path.display());
            return ExitCode::FAILURE;
        },
    };

    if args.dump_tokens {
        let mut stdout = io::stdout().lock();
        for token in tokenize(&source) {
            if writeln!(stdout, "{token}").is_err() {
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    if args.dump_ast {
        return match parse(&source) {
            Ok(statements) => {
                println!("{statements:#?}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Parse error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    let options = Options { scope_policy: args.scoping.into() };

    match run(&source, &options, io::stdout().lock(), io::stderr()) {
        Err(Error::Parse(_)) => ExitCode::FAILURE,
        Ok(()) | Err(Error::Runtime(_)) => ExitCode::SUCCESS,
    }
}
