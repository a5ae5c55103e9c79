use std::{fs, process::ExitCode};

use clap::Parser;
use quickcalc::{error::CalcResult, evaluate, evaluate_as, format_number};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// quickcalc evaluates arithmetic expressions with `+ - * / ^`, parentheses
/// and unary minus.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quickcalc to read expressions from files, one per line, instead
    /// of evaluating the arguments themselves.
    #[arg(short, long)]
    file: bool,

    /// Evaluates in 64-bit integers instead of floating point. Division
    /// truncates and division by zero is an error.
    #[arg(short, long)]
    integer: bool,

    /// Expressions to evaluate, or file paths with `--file`.
    #[arg(required = true, allow_hyphen_values = true)]
    contents: Vec<String>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let mut sources = Vec::with_capacity(args.contents.len());
    for content in args.contents {
        if args.file {
            match fs::read_to_string(&content) {
                Ok(source) => sources.push(source),
                Err(e) => {
                    eprintln!("Failed to read the input file '{content}': {e}");
                    return ExitCode::FAILURE;
                },
            }
        } else {
            sources.push(content);
        }
    }

    let expressions: Vec<&str> = if args.file {
        sources.iter()
               .flat_map(|source| source.lines())
               .filter(|line| !line.trim().is_empty())
               .collect()
    } else {
        sources.iter().map(String::as_str).collect()
    };

    let mut failed = false;
    for line in expressions {
        debug!(expression = line, integer = args.integer, "evaluating");
        match run(line, args.integer) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                warn!(expression = line, error = %e, "evaluation failed");
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn run(expression: &str, integer: bool) -> CalcResult<String> {
    if integer {
        evaluate_as::<i64>(expression).map(format_number)
    } else {
        evaluate(expression).map(format_number)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn accepts_several_expressions() {
        let args = Args::try_parse_from(["quickcalc", "-5 + 1", "2 * 3"]).unwrap();
        assert_eq!(args.contents, ["-5 + 1", "2 * 3"]);
        assert!(!args.file);
    }

    #[test]
    fn requires_an_expression() {
        assert!(Args::try_parse_from(["quickcalc", "--integer"]).is_err());
    }

    #[test]
    fn integer_mode_truncates() {
        assert_eq!(run("7 / 2", true).unwrap(), "3");
        assert_eq!(run("7 / 2", false).unwrap(), "3.5");
    }
}
