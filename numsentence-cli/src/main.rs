//! numsentence
//!
//! Reads one number sentence from a file, evaluates it and prints the result.
//!
//! Usage: `numsentence <filename>`

use anyhow::{bail, Context, Result};
use numsentence_core::expr::{format_value, sanitize, Evaluator, Parser};
use numsentence_core::Config;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, Level};

fn main() -> Result<()> {
    // stdout carries the result only
    let level = if std::env::var("NUMSENTENCE_DEBUG").is_ok() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("numsentence");
        bail!("usage: {} <filename>", program);
    }

    let config = Config::load().context("Failed to load configuration")?;
    println!("{}", run(Path::new(&args[1]), &config)?);
    Ok(())
}

/// Evaluate the file at `path` and render the result
fn run(path: &Path, config: &Config) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let expression = sanitize(&raw)?;
    debug!("Expression: {}", expression);

    let tree = Parser::from_config(config).parse(&expression)?;
    debug!("Tree: {}", tree);

    let value = Evaluator::new().eval(&tree)?;
    Ok(format_value(value, config.precision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use numsentence_core::ExprError;
    use std::io::Write;

    fn write_source(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_run_file() {
        let file = write_source("( 1 + 2 ) * 3\n");
        assert_eq!(run(file.path(), &Config::default()).unwrap(), "9.000000");
    }

    #[test]
    fn test_run_negation() {
        let file = write_source("-(3 * 4)");
        assert_eq!(run(file.path(), &Config::default()).unwrap(), "-12.000000");
    }

    #[test]
    fn test_run_unrecognized_symbol() {
        let file = write_source("1 + two");
        let err = run(file.path(), &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExprError>(),
            Some(ExprError::Lexical { symbol: 't', .. })
        ));
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&dir.path().join("missing.txt"), &Config::default()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
