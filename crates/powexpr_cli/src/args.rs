//! the args for running powexpr

use num_bigint::BigUint;
use powexpr::DEFAULT_MAX_EXPONENT;
use powexpr_cli_common::LoggingArgs;
use std::path::PathBuf;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Evaluates powexpr expressions")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// Files containing one expression each. Reads standard input when none are given
    #[clap(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
    /// The largest exponent a `pow` call may use
    #[clap(long, env = "POWEXPR_MAX_EXPONENT", default_value_t = BigUint::from(DEFAULT_MAX_EXPONENT))]
    pub max_exponent: BigUint,
    /// Prints the tokens of each expression
    #[clap(long)]
    pub tokens: bool,
    /// Prints the syntax tree of each expression
    #[clap(long)]
    pub ast: bool,
    /// Runs the built-in scenarios instead of reading expressions
    #[clap(long, conflicts_with = "files")]
    pub self_test: bool,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_args_parsing() {
        let test = "powexpr a.expr b.expr --tokens";
        let args = Args::try_parse_from(test.split(" ")).expect("could not parse test string");
        assert_eq!(args.files[0], Path::new("a.expr"));
        assert_eq!(args.files[1], Path::new("b.expr"));
        assert!(args.tokens);
        assert!(!args.ast);
    }

    #[test]
    fn test_no_files_reads_stdin() {
        let args = Args::try_parse_from(["powexpr", "--ast"]).expect("could not parse test string");
        assert!(args.files.is_empty());
        assert!(args.ast);
    }

    #[test]
    fn test_max_exponent() {
        let test = "powexpr --max-exponent 123456789012345678901234567890";
        let args = Args::try_parse_from(test.split(" ")).expect("could not parse test string");
        assert_eq!(args.max_exponent.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn test_max_exponent_must_be_an_integer() {
        assert!(Args::try_parse_from(["powexpr", "--max-exponent", "-3"]).is_err());
        assert!(Args::try_parse_from(["powexpr", "--max-exponent", "ten"]).is_err());
    }

    #[test]
    fn test_self_test_conflicts_with_files() {
        assert!(Args::try_parse_from(["powexpr", "--self-test"]).is_ok());
        assert!(Args::try_parse_from(["powexpr", "--self-test", "a.expr"]).is_err());
    }
}
