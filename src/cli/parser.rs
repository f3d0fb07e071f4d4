use clap::{Parser, Subcommand};

/// Command-line interface definition for bikestats
/// CLI application to explore US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "bikestats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare trip data: travel times, popular stations, trip durations and user stats",
    long_about = None
)]
pub struct Cli {
    /// Override the directory containing the city CSV files (useful for tests)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an interactive exploration session
    Explore,

    /// Create the configuration directory and default config file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check that every registered city data file exists"
        )]
        check: bool,
    },
}
