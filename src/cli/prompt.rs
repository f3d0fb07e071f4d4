//! Interactive console prompts for the exploration session.
//!
//! Invalid answers re-prompt; a closed input stream surfaces as an explicit
//! outcome instead of looping.

use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::filters::{DayFilter, Filters, MonthFilter};
use std::io::BufRead;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const CITY_PROMPT: &str =
    "\nWhich city data would you like to see: Chicago, New York City or Washington?";
pub const MONTH_PROMPT: &str =
    "\nWhich months data would you like to see: January, February, March, April, May, June or All?";
pub const DAY_PROMPT: &str = "\nWhich days data would you like to see: Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday or All?";

pub struct Prompter<R> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Print the prompt and read one answer line.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        println!("{prompt}");
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Yes/no prompt: anything but a case-insensitive "yes" is a no.
    /// A closed input stream counts as "no".
    pub fn ask_yes(&mut self, prompt: &str) -> AppResult<bool> {
        match self.ask(prompt) {
            Ok(answer) => Ok(answer.eq_ignore_ascii_case("yes")),
            Err(AppError::InputClosed) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Re-prompt until the answer parses against the closed vocabulary.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<T> {
        loop {
            let answer = self.ask(prompt)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
        }
    }
}

/// Collect the validated (city, month, day) triple for one session.
pub fn collect_filters<R: BufRead>(p: &mut Prompter<R>) -> AppResult<Filters> {
    println!("{GREETING}");

    let city = p.ask_until(CITY_PROMPT, City::from_input)?;
    let month = p.ask_until(MONTH_PROMPT, MonthFilter::from_input)?;
    let day = p.ask_until(DAY_PROMPT, DayFilter::from_input)?;

    Ok(Filters { city, month, day })
}
