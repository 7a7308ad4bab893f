use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use reckon::{
    evaluate,
    repl::{Repl, ReplOptions},
    util::num::{DEFAULT_PRECISION, MAX_PRECISION, format_general},
};
use tracing_subscriber::EnvFilter;

/// reckon evaluates arithmetic expressions: integers, `+ - * /`, unary minus
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of this file instead of reading from the terminal.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Significant digits printed for each result (1 to 17).
    #[arg(short, long, default_value_t = DEFAULT_PRECISION, value_parser = parse_precision)]
    precision: usize,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Evaluates this single expression, prints its value and exits.
    expression: Option<String>,
}

fn parse_precision(arg: &str) -> Result<usize, String> {
    let precision: usize = arg.parse().map_err(|e| format!("{e}"))?;
    if (1..=MAX_PRECISION).contains(&precision) {
        Ok(precision)
    } else {
        Err(format!("must be between 1 and {MAX_PRECISION}"))
    }
}

fn init_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    if let Some(expression) = &args.expression {
        return match evaluate(expression) {
            Ok(value) => {
                println!("{}", format_general(value, args.precision));
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    let outcome = if let Some(path) = &args.file {
        let Ok(file) = File::open(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        let options = ReplOptions::script().with_precision(args.precision);
        let mut repl = Repl::new(BufReader::new(file),
                                 io::stdout().lock(),
                                 io::stderr().lock(),
                                 options);
        repl.run().map(|summary| summary.failed == 0)
    } else {
        let options = ReplOptions::default().with_precision(args.precision);
        let mut repl = Repl::new(io::stdin().lock(),
                                 io::stdout().lock(),
                                 io::stderr().lock(),
                                 options);
        repl.run().map(|_| true)
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
