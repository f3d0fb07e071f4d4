//! Interactive exploration session: collect filters, load the city file,
//! run the four stat reports, offer raw data, offer a restart.

use crate::cli::pager;
use crate::cli::prompt::{self, Prompter};
use crate::config::Config;
use crate::data;
use crate::errors::AppResult;
use crate::stats;
use crate::ui::messages;
use std::io;

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.";

/// Handle the `explore` subcommand
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock());
    run_session(&mut prompter, cfg)
}

/// Session driver, generic over the input stream so tests can feed
/// scripted answers.
pub fn run_session<R: io::BufRead>(p: &mut Prompter<R>, cfg: &Config) -> AppResult<()> {
    loop {
        let filters = prompt::collect_filters(p)?;
        messages::separator();

        let table = data::load_city_data(cfg, &filters)?;

        stats::time::report(&table)?;
        stats::stations::report(&table)?;
        stats::duration::report(&table)?;
        stats::users::report(&table)?;

        pager::run(p, &table)?;

        if !p.ask_yes(RESTART_PROMPT)? {
            break;
        }
    }

    Ok(())
}
