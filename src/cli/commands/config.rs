use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::path::expand_tilde;
use ansi_term::Colour;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
            println!("{yaml}");
        }

        // ---- CHECK DATA FILES ----
        if *check {
            let data_dir = expand_tilde(&cfg.data_dir);
            let mut missing = 0;

            for (city, file) in &cfg.cities {
                let path = data_dir.join(file);
                let status = if path.exists() {
                    Colour::Green.paint("ok")
                } else {
                    missing += 1;
                    Colour::Red.paint("MISSING")
                };
                println!("{:<16} {} [{}]", city, path.display(), status);
            }

            if missing == 0 {
                messages::success("All registered city data files are present.");
            } else {
                messages::warning(format!("{missing} city data file(s) missing."));
            }
        }

        if !*print_config && !*check {
            messages::info("Nothing to do. Try --print or --check.");
        }
    }

    Ok(())
}
