use crate::utils::error::{AppError, USAGE};
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "topsis")]
#[command(about = "Rank alternatives with the TOPSIS multi-criteria decision method")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", help = "Config file (overrides TOPSIS_CONFIG)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Verbose diagnostics on stderr")]
    pub debug: bool,

    #[arg(short, long, help = "Print the ranked alternatives after writing the result")]
    pub summary: bool,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    #[arg(value_name = "InputDataFile", help = "CSV file: identifier column, then numeric criteria")]
    pub input: PathBuf,

    #[arg(
        value_name = "Weights",
        allow_hyphen_values = true,
        help = "Comma-separated weights, one per criterion"
    )]
    pub weights: String,

    #[arg(
        value_name = "Impacts",
        allow_hyphen_values = true,
        help = "Comma-separated '+' or '-', one per criterion"
    )]
    pub impacts: String,

    #[arg(value_name = "OutputResultFileName", help = "Where to write the ranked table")]
    pub output: PathBuf,
}

/// What to do after parsing the command line
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// `--help` / `--version`: print the text and exit successfully
    Info(String),
}

impl Cli {
    /// Parse arguments, reporting any mistake as a usage error instead of
    /// clap's own message and exit status.
    pub fn parse_args<I, T>(args: I) -> Result<Invocation, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(Invocation::Run(cli)),
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Ok(Invocation::Info(err.to_string()))
                }
                _ => Err(AppError::Usage(USAGE.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Cli {
        match Cli::parse_args(args).unwrap() {
            Invocation::Run(cli) => cli,
            Invocation::Info(text) => panic!("unexpected info output: {text}"),
        }
    }

    #[test]
    fn test_four_positionals() {
        let cli = run(&["topsis", "data.csv", "1,1,1", "+,-,+", "out.csv"]);
        assert_eq!(cli.run.input, PathBuf::from("data.csv"));
        assert_eq!(cli.run.weights, "1,1,1");
        assert_eq!(cli.run.impacts, "+,-,+");
        assert_eq!(cli.run.output, PathBuf::from("out.csv"));
        assert!(!cli.debug);
        assert!(!cli.summary);
    }

    #[test]
    fn test_impacts_may_start_with_hyphen() {
        let cli = run(&["topsis", "data.csv", "1,1", "-,+", "out.csv"]);
        assert_eq!(cli.run.impacts, "-,+");

        let cli = run(&["topsis", "data.csv", "1", "-", "out.csv"]);
        assert_eq!(cli.run.impacts, "-");
    }

    #[test]
    fn test_flags() {
        let cli = run(&[
            "topsis", "--debug", "--summary", "-c", "cfg.toml", "in.csv", "1,1", "+,+", "out.csv",
        ]);
        assert!(cli.debug);
        assert!(cli.summary);
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        for args in [
            vec!["topsis"],
            vec!["topsis", "data.csv", "1,1", "+,+"],
            vec!["topsis", "data.csv", "1,1", "+,+", "out.csv", "extra"],
        ] {
            let err = Cli::parse_args(&args).unwrap_err();
            assert_eq!(err, AppError::Usage(USAGE.to_string()));
        }
    }

    #[test]
    fn test_help_is_not_an_error() {
        assert!(matches!(
            Cli::parse_args(["topsis", "--help"]),
            Ok(Invocation::Info(_))
        ));
    }
}
