use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the output directory for the daily record files
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing ABQ data entry…");

    let cfg = Config::init_all(cli.dir.clone(), cli.test)?;

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Output dir  : {}", cfg.output_path().display()));

    success("Initialization completed!");
    Ok(())
}
