use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the default city registry
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });

    Config::init_all(force, cli.test)?;

    if !cli.test {
        println!("🎉 bikestats initialization completed!");
    }
    Ok(())
}
