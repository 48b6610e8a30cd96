use clap::Parser;
use netfuncs::cli::Args;
use netfuncs::NetError;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    netfuncs::logging::init(&args.log_config, args.verbose)?;
    log::info!("#Start main()");

    match netfuncs::run(&args) {
        Ok(report) => {
            print!("{report}");
            Ok(())
        }
        Err(NetError::Usage) => {
            eprintln!("{}", NetError::Usage);
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("{e}");
            Err(e.into())
        }
    }
}
