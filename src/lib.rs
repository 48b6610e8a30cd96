//! IPv4 subnet reports for a static router table.
//!
//! The library loads a JSON document of routers and address pairs and renders
//! three reports: the routers with their networks, whether each pair shares a
//! /24 network, and which router serves each address.

pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{NetError, Result};
pub use input::read_routers;
pub use output::render_reports;
pub use self_test::render_self_test;

/// Produce the text the binary prints for `args`.
///
/// Either the self-test output, or all three reports for `args.infile`.
/// Fails with [`NetError::Usage`] when neither is requested.
pub fn run(args: &cli::Args) -> Result<String> {
    if args.self_test {
        log::info!("Running self-test");
        return render_self_test();
    }
    let infile = args.infile.as_ref().ok_or(NetError::Usage)?;
    if !args.ignored.is_empty() {
        log::debug!("Ignoring extra arguments {:?}", args.ignored);
    }
    let data = read_routers(infile)?;
    render_reports(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_run_without_infile() {
        let args = cli::Args::default();
        assert!(matches!(run(&args), Err(NetError::Usage)));
    }

    #[test]
    fn test_run_self_test_ignores_infile() {
        let args = cli::Args {
            infile: Some(PathBuf::from("tests/test_data/no_such_file.json")),
            self_test: true,
            ..Default::default()
        };
        let out = run(&args).unwrap();
        assert!(out.contains("16909060"));
    }

    #[test]
    fn test_run_reports() {
        let args = cli::Args {
            infile: Some(PathBuf::from("tests/test_data/minimal.json")),
            ..Default::default()
        };
        let out = run(&args).unwrap();
        assert!(out.starts_with("Routers:\n"));
    }
}
