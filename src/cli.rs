//! Command line arguments parsing.

use clap::Parser;
use std::path::PathBuf;

/// Print router, address-pair and subnet membership reports for a JSON router table.
#[derive(Parser, Debug, Default)]
#[command(name = "netfuncs", version)]
pub struct Args {
    /// JSON file with `routers` and `src-dest` fields
    pub infile: Option<PathBuf>,
    /// Further arguments are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
    /// Run the built-in sample calculations instead of the reports
    #[arg(long)]
    pub self_test: bool,
    /// Verbose mode: debug logging to stderr, overriding the log4rs config file
    #[arg(short = 'v', long)]
    pub verbose: bool,
    /// log4rs YAML configuration, used when the file exists
    #[arg(long, default_value = "log4rs.yml")]
    pub log_config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_infile() {
        let args = Args::try_parse_from(["netfuncs", "example1.json"]).unwrap();
        assert_eq!(args.infile, Some(PathBuf::from("example1.json")));
        assert!(!args.self_test);
        assert!(!args.verbose);
        assert_eq!(args.log_config, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_parse_missing_infile() {
        let args = Args::try_parse_from(["netfuncs"]).unwrap();
        assert_eq!(args.infile, None);
    }

    #[test]
    fn test_parse_extra_arguments_ignored() {
        let args = Args::try_parse_from(["netfuncs", "example1.json", "extra", "more"]).unwrap();
        assert_eq!(args.infile, Some(PathBuf::from("example1.json")));
        assert_eq!(args.ignored, vec!["extra", "more"]);
    }

    #[test]
    fn test_parse_flags() {
        let args =
            Args::try_parse_from(["netfuncs", "--self-test", "-v", "--log-config", "log.yml"])
                .unwrap();
        assert!(args.self_test);
        assert!(args.verbose);
        assert_eq!(args.log_config, PathBuf::from("log.yml"));
    }
}
